// 切分算法单元测试

#[path = "../common/mod.rs"]
mod common;

use common::{owned_text, text};
use proptest::prelude::*;
use zsplit::{
    split, split_by, split_char, split_char_copy, split_lines, split_lines_copy, split_substr,
    split_whitespace, split_whitespace_copy, DelimiterSpec, EmptyPolicy, LineIter, Splitter,
    DEFAULT_DELIMITER, LINE_TERMINATORS,
};

fn check_splits(input: &str, truth_preserve: &[&str], truth_drop: &[&str]) {
    let preserved = split_char_copy(input.as_bytes(), DEFAULT_DELIMITER, EmptyPolicy::Preserve);
    let dropped = split_char_copy(input.as_bytes(), DEFAULT_DELIMITER, EmptyPolicy::Drop);

    assert_eq!(owned_text(preserved), truth_preserve, "preserve: {input:?}");
    assert_eq!(owned_text(dropped), truth_drop, "drop: {input:?}");
}

#[test]
fn test_no_empty_segments() {
    check_splits("a\nb\nc", &["a", "b", "c"], &["a", "b", "c"]);
}

#[test]
fn test_inner_empty_segment() {
    check_splits("a\n\nb", &["a", "", "b"], &["a", "b"]);
}

#[test]
fn test_leading_and_trailing_delimiters() {
    check_splits("\na\n", &["", "a", ""], &["a"]);
}

#[test]
fn test_only_delimiters() {
    check_splits("\n\n\n", &["", "", "", ""], &[]);
    check_splits("\n", &["", ""], &[]);
}

#[test]
fn test_runs_around_word() {
    check_splits("\n\n\nx\n\n\n", &["", "", "", "x", "", "", ""], &["x"]);
}

#[test]
fn test_empty_input() {
    check_splits("", &[""], &[]);
}

#[test]
fn test_no_delimiter() {
    check_splits("abcd", &["abcd"], &["abcd"]);
}

#[test]
fn test_empty_delimiter_set_is_identity_decomposition() {
    assert_eq!(text(split(b"xyz", b"", EmptyPolicy::Preserve)), ["x", "y", "z"]);
    assert_eq!(text(split(b"xyz", b"", EmptyPolicy::Drop)), ["x", "y", "z"]);
    assert_eq!(text(split(b"", b"", EmptyPolicy::Preserve)), [""]);
}

#[test]
fn test_large_delimiter_set() {
    assert_eq!(
        text(split(b"a-b_c.d e", b"-_. ", EmptyPolicy::Drop)),
        ["a", "b", "c", "d", "e"]
    );
}

#[test]
fn test_non_ascii_bytes() {
    let input = "甲,乙".as_bytes();
    assert_eq!(text(split_char(input, b',', EmptyPolicy::Drop)), ["甲", "乙"]);
}

#[test]
fn test_substr_matrix() {
    let cases: &[(&str, &[&str], &[&str])] = &[
        ("a, b, c", &["a", "b", "c"], &["a", "b", "c"]),
        (", a, ", &["", "a", ""], &["a"]),
        ("a, , b", &["a", "", "b"], &["a", "b"]),
        (", ", &["", ""], &[]),
        ("", &[""], &[]),
        ("abc", &["abc"], &["abc"]),
        ("a,b", &["a,b"], &["a,b"]),
    ];

    for &(input, truth_preserve, truth_drop) in cases {
        let preserved = split_substr(input.as_bytes(), b", ", EmptyPolicy::Preserve);
        let dropped = split_substr(input.as_bytes(), b", ", EmptyPolicy::Drop);
        assert_eq!(text(preserved), truth_preserve, "preserve: {input:?}");
        assert_eq!(text(dropped), truth_drop, "drop: {input:?}");
    }
}

#[test]
fn test_whitespace() {
    let source = b" hello\tthere\n everyone\r";

    assert_eq!(
        text(split_whitespace(source, EmptyPolicy::Preserve)),
        ["", "hello", "there", "", "everyone", ""]
    );
    assert_eq!(
        owned_text(split_whitespace_copy(source, EmptyPolicy::default())),
        ["hello", "there", "everyone"]
    );
}

#[test]
fn test_lines() {
    let truth = ["", "hello", "world"];
    assert_eq!(owned_text(split_lines_copy(b"\nhello\nworld\n")), truth);
    assert_eq!(owned_text(split_lines_copy(b"\r\nhello\r\nworld\r\n")), truth);
}

#[test]
fn test_lines_without_final_terminator() {
    let truth = ["hello", "world"];
    assert_eq!(owned_text(split_lines_copy(b"hello\nworld")), truth);
    assert_eq!(owned_text(split_lines_copy(b"hello\r\nworld")), truth);
}

#[test]
fn test_lines_blank_line() {
    let truth = ["hello", "", "world"];
    assert_eq!(owned_text(split_lines_copy(b"hello\n\nworld")), truth);
    assert_eq!(owned_text(split_lines_copy(b"hello\r\n\r\nworld")), truth);
}

#[test]
fn test_lines_edge_cases() {
    assert!(split_lines(b"").is_empty());
    assert_eq!(text(split_lines(b"a\n")), ["a"]);
    assert_eq!(text(split_lines(b"a\n\n")), ["a", ""]);
    assert_eq!(text(split_lines(b"\n")), [""]);
    assert_eq!(text(split_lines(b"\n\n\n")), ["", "", ""]);
    assert_eq!(text(split_lines(b"\na\n")), ["", "a"]);
    assert_eq!(split_lines(b"a\r\nb\r\n"), split_lines(b"a\nb\n"));
}

#[test]
fn test_line_iter_is_lazy() {
    let mut iter = LineIter::new(b"first\nsecond\nthird");
    assert_eq!(iter.next(), Some(b"first".as_slice()));
    assert_eq!(iter.remainder(), b"second\nthird");
}

#[test]
fn test_splitter_config() {
    let csv = Splitter::new(DelimiterSpec::Char(b','), EmptyPolicy::Preserve);
    assert_eq!(text(csv.split(b"a,,b")), ["a", "", "b"]);
    assert_eq!(owned_text(csv.split_copy(b"a,,b")), ["a", "", "b"]);

    let lines = Splitter::lines();
    assert_eq!(text(lines.split(b"x\r\ny\n")), ["x", "y"]);
    assert_eq!(
        split_by(b"x\ry", &DelimiterSpec::AnyOf(LINE_TERMINATORS), EmptyPolicy::Drop),
        lines.split(b"x\ry")
    );
}

proptest! {
    #[test]
    fn prop_drop_is_preserve_without_empties(input in "[ab,;]{0,32}", delimiters in "[,;]{0,2}") {
        let preserved = split(input.as_bytes(), delimiters.as_bytes(), EmptyPolicy::Preserve);
        let dropped = split(input.as_bytes(), delimiters.as_bytes(), EmptyPolicy::Drop);

        prop_assert!(preserved.len() >= dropped.len());
        let filtered: Vec<&[u8]> = preserved.into_iter().filter(|s| !s.is_empty()).collect();
        prop_assert_eq!(filtered, dropped);
    }

    #[test]
    fn prop_char_round_trip(input in "[ab,]{0,32}") {
        let preserved = split_char(input.as_bytes(), b',', EmptyPolicy::Preserve);
        prop_assert_eq!(preserved.join(&b','), input.as_bytes());
    }

    #[test]
    fn prop_substr_round_trip(input in "[ab:]{0,32}") {
        let preserved = split_substr(input.as_bytes(), b"::", EmptyPolicy::Preserve);
        prop_assert_eq!(preserved.join(b"::".as_slice()), input.as_bytes());
    }

    #[test]
    fn prop_preserved_count_is_delimiters_plus_one(input in "[ab,]{0,32}") {
        let delimiters = input.bytes().filter(|&b| b == b',').count();
        let preserved = split_char(input.as_bytes(), b',', EmptyPolicy::Preserve);
        prop_assert_eq!(preserved.len(), delimiters + 1);
    }

    #[test]
    fn prop_lines_never_contain_terminators(input in "[ab\r\n]{0,32}") {
        for line in split_lines(input.as_bytes()) {
            prop_assert!(!line.contains(&b'\n') && !line.contains(&b'\r'));
        }
    }

    #[test]
    fn prop_terminator_style_does_not_matter(input in "[ab\n]{0,32}") {
        let dos = input.replace('\n', "\r\n");
        let mac = input.replace('\n', "\r");
        prop_assert_eq!(split_lines(input.as_bytes()), split_lines(dos.as_bytes()));
        prop_assert_eq!(split_lines(input.as_bytes()), split_lines(mac.as_bytes()));
    }
}
