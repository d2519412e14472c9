use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

use crate::model::layout::{LineAlign, StaticLayout};
use crate::model::syllable::Syllable;
use crate::text::measure::TextStyle;

const XXH3_SEED: u64 = 0x4b61_7261_6f6b_6531;

/// 128-bit fingerprint of everything the static pipeline reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Inputs of one static pipeline run.
#[derive(Clone, Copy, Debug)]
pub struct LayoutKey<'a> {
    /// Syllables after display filtering.
    pub syllables: &'a [Syllable],
    /// Style the syllables are measured with.
    pub style: &'a TextStyle,
    /// Width budget in pixels.
    pub available_width: f64,
    /// Row alignment.
    pub align: LineAlign,
    /// Layout direction.
    pub is_rtl: bool,
    /// Accompaniment lines never animate per character.
    pub is_accompaniment: bool,
}

impl LayoutKey<'_> {
    /// Hash the key. Strings are length-prefixed.
    pub fn fingerprint(&self) -> LayoutFingerprint {
        let mut h = StableHasher::new();
        h.write_u32(self.syllables.len() as u32);
        for s in self.syllables {
            h.write_str(&s.content);
            h.write_i64(s.start_ms);
            h.write_i64(s.end_ms);
        }
        h.write_f32(self.style.font_size_px);
        h.write_f64(self.available_width);
        h.write_u8(match self.align {
            LineAlign::Start => 0,
            LineAlign::Center => 1,
            LineAlign::End => 2,
        });
        h.write_bool(self.is_rtl);
        h.write_bool(self.is_accompaniment);
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i64(&mut self, v: i64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> LayoutFingerprint {
        let v = self.inner.digest128();
        LayoutFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

/// Hit/miss counters of a [`LayoutCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the static pipeline.
    pub misses: u64,
}

/// Single-entry memo of the static pipeline. Only the most recent layout is kept.
#[derive(Debug, Default)]
pub struct LayoutCache {
    last: Option<(LayoutFingerprint, Arc<StaticLayout>)>,
    stats: CacheStats,
}

impl LayoutCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached layout for `key`, or run `build` and remember its result.
    pub fn get_or_build(
        &mut self,
        key: &LayoutKey<'_>,
        build: impl FnOnce() -> StaticLayout,
    ) -> Arc<StaticLayout> {
        let fp = key.fingerprint();
        if let Some((cached_fp, layout)) = &self.last
            && *cached_fp == fp
        {
            self.stats.hits += 1;
            tracing::trace!(hi = fp.hi, lo = fp.lo, "static layout cache hit");
            return Arc::clone(layout);
        }

        self.stats.misses += 1;
        tracing::debug!(
            hi = fp.hi,
            lo = fp.lo,
            syllables = key.syllables.len(),
            available_width = key.available_width,
            "static layout cache miss"
        );
        let layout = Arc::new(build());
        self.last = Some((fp, Arc::clone(&layout)));
        layout
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
