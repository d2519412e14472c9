//! Unicode script and punctuation classification used by word classification, direction
//! detection and the punctuation animation fallback.

/// Hebrew, Arabic and the Arabic supplement/extended blocks.
pub fn is_rtl_char(ch: char) -> bool {
    matches!(ch as u32,
        // Hebrew
        0x0590..=0x05FF |
        // Hebrew presentation forms
        0xFB1D..=0xFB4F
    ) || is_arabic_char(ch)
}

/// Arabic script, including supplements and presentation forms.
pub fn is_arabic_char(ch: char) -> bool {
    matches!(ch as u32,
        // Arabic
        0x0600..=0x06FF |
        // Arabic Supplement
        0x0750..=0x077F |
        // Arabic Extended-A
        0x08A0..=0x08FF |
        // Arabic Presentation Forms-A
        0xFB50..=0xFDFF |
        // Arabic Presentation Forms-B
        0xFE70..=0xFEFF
    )
}

/// Devanagari and Devanagari Extended.
pub fn is_devanagari_char(ch: char) -> bool {
    matches!(ch as u32, 0x0900..=0x097F | 0xA8E0..=0xA8FF)
}

/// Han ideographs, kana and hangul.
pub fn is_cjk_char(ch: char) -> bool {
    matches!(ch as u32,
        // CJK Unified Ideographs + Extension A
        0x4E00..=0x9FFF | 0x3400..=0x4DBF |
        // Extensions B-F
        0x20000..=0x2EBEF |
        // Compatibility ideographs
        0xF900..=0xFAFF |
        // Hiragana, Katakana, Katakana phonetic extensions
        0x3040..=0x309F | 0x30A0..=0x30FF | 0x31F0..=0x31FF |
        // Halfwidth katakana
        0xFF66..=0xFF9F |
        // Hangul syllables, jamo, compatibility jamo
        0xAC00..=0xD7AF | 0x1100..=0x11FF | 0x3130..=0x318F
    )
}

/// Punctuation across ASCII, Latin-1, general punctuation and the common CJK/Arabic/Hebrew
/// punctuation code points.
pub fn is_punctuation_char(ch: char) -> bool {
    if ch.is_ascii_punctuation() {
        return true;
    }
    matches!(ch as u32,
        // Latin-1: ¡ § « ¶ · » ¿
        0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF |
        // General Punctuation (dashes, quotes, ellipsis, ...)
        0x2010..=0x2027 | 0x2030..=0x205E |
        // Supplemental Punctuation
        0x2E00..=0x2E7F |
        // CJK Symbols and Punctuation
        0x3001..=0x3003 | 0x3008..=0x3011 | 0x3014..=0x301F | 0x30FB |
        // Fullwidth ASCII punctuation
        0xFF01..=0xFF0F | 0xFF1A..=0xFF20 | 0xFF3B..=0xFF40 | 0xFF5B..=0xFF65 |
        // Arabic comma, semicolon, question mark, full stop
        0x060C | 0x061B | 0x061F | 0x06D4 |
        // Hebrew maqaf, paseq, sof pasuq, geresh, gershayim
        0x05BE | 0x05C0 | 0x05C3 | 0x05F3 | 0x05F4 |
        // Devanagari danda, double danda
        0x0964 | 0x0965
    )
}

/// `true` when `text` is non-empty and made only of punctuation.
pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punctuation_char)
}

/// `true` when any character of `text` belongs to a right-to-left script.
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

/// Scripts excluded from per-character animation: pure CJK runs, or anything containing
/// Arabic or Devanagari.
///
/// Whitespace and punctuation are ignored; text with nothing left after that is not simple
/// script.
pub fn is_simple_script(text: &str) -> bool {
    let mut letters = text
        .chars()
        .filter(|c| !c.is_whitespace() && !is_punctuation_char(*c))
        .peekable();
    if letters.peek().is_none() {
        return false;
    }

    let mut all_cjk = true;
    for ch in letters {
        if is_arabic_char(ch) || is_devanagari_char(ch) {
            return true;
        }
        all_cjk &= is_cjk_char(ch);
    }
    all_cjk
}

/// `true` when `text` has at least one character that is neither whitespace nor punctuation.
pub fn has_letters(text: &str) -> bool {
    text.chars()
        .any(|c| !c.is_whitespace() && !is_punctuation_char(c))
}

#[cfg(test)]
#[path = "../../tests/unit/text/script.rs"]
mod tests;
