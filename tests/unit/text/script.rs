use super::*;

#[test]
fn rtl_detection_covers_hebrew_and_arabic() {
    assert!(contains_rtl("שלום"));
    assert!(contains_rtl("hello مرحبا"));
    assert!(!contains_rtl("hello"));
    assert!(!contains_rtl("你好"));
}

#[test]
fn punctuation_requires_every_char() {
    assert!(is_punctuation(","));
    assert!(is_punctuation("...!"));
    assert!(is_punctuation("，"));
    assert!(is_punctuation("、。"));
    assert!(is_punctuation("؟"));
    assert!(!is_punctuation(""));
    assert!(!is_punctuation("a,"));
    assert!(!is_punctuation(" "));
}

#[test]
fn simple_script_rules() {
    assert!(is_simple_script("你好"));
    assert!(is_simple_script("こんにちは、"));
    assert!(is_simple_script("사랑해 "));
    assert!(is_simple_script("مرحبا"));
    assert!(is_simple_script("नमस्ते"));
    assert!(is_simple_script("a مرحبا"));

    assert!(!is_simple_script("Hello"));
    assert!(!is_simple_script("你好abc"));
    assert!(!is_simple_script("שלום"));
    assert!(!is_simple_script(" ... "));
    assert!(!is_simple_script(""));
}

#[test]
fn letters_ignore_whitespace_and_punctuation() {
    assert!(has_letters("a"));
    assert!(has_letters(" x, "));
    assert!(!has_letters(" , "));
    assert!(!has_letters(""));
}
