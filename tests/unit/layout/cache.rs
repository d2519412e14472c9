use super::*;

fn syllables() -> Vec<Syllable> {
    vec![Syllable::new("Hel", 0, 200), Syllable::new("lo ", 200, 500)]
}

fn key<'a>(syllables: &'a [Syllable], style: &'a TextStyle, width: f64) -> LayoutKey<'a> {
    LayoutKey {
        syllables,
        style,
        available_width: width,
        align: LineAlign::Start,
        is_rtl: false,
        is_accompaniment: false,
    }
}

fn empty_layout() -> StaticLayout {
    StaticLayout {
        rows: Vec::new(),
        line_height: 0.0,
        canvas_width: 0.0,
        is_rtl: false,
        align: LineAlign::Start,
    }
}

#[test]
fn fingerprint_is_stable_and_sensitive() {
    let s = syllables();
    let style = TextStyle::default();
    let base = key(&s, &style, 300.0).fingerprint();
    assert_eq!(base, key(&s, &style, 300.0).fingerprint());

    assert_ne!(base, key(&s, &style, 301.0).fingerprint());

    let bigger = TextStyle { font_size_px: 33.0 };
    assert_ne!(base, key(&s, &bigger, 300.0).fingerprint());

    let mut k = key(&s, &style, 300.0);
    k.align = LineAlign::End;
    assert_ne!(base, k.fingerprint());

    let mut k = key(&s, &style, 300.0);
    k.is_rtl = true;
    assert_ne!(base, k.fingerprint());

    let mut k = key(&s, &style, 300.0);
    k.is_accompaniment = true;
    assert_ne!(base, k.fingerprint());

    let mut retimed = syllables();
    retimed[1].end_ms = 501;
    assert_ne!(base, key(&retimed, &style, 300.0).fingerprint());
}

#[test]
fn content_boundaries_matter() {
    let style = TextStyle::default();
    let a = [Syllable::new("ab", 0, 1), Syllable::new("c", 0, 1)];
    let b = [Syllable::new("a", 0, 1), Syllable::new("bc", 0, 1)];
    assert_ne!(
        key(&a, &style, 100.0).fingerprint(),
        key(&b, &style, 100.0).fingerprint()
    );
}

#[test]
fn cache_counts_hits_and_misses() {
    let s = syllables();
    let style = TextStyle::default();
    let mut cache = LayoutCache::new();
    let mut builds = 0;

    let first = cache.get_or_build(&key(&s, &style, 300.0), || {
        builds += 1;
        empty_layout()
    });
    let second = cache.get_or_build(&key(&s, &style, 300.0), || {
        builds += 1;
        empty_layout()
    });
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(builds, 1);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });

    cache.get_or_build(&key(&s, &style, 200.0), || {
        builds += 1;
        empty_layout()
    });
    assert_eq!(builds, 2);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2 });
}
