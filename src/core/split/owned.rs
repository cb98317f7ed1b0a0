// 复制版本
//
// 职责：把零拷贝段复制为独立拥有的字节序列，使结果可以脱离源缓冲区存活

use crate::core::split::{
    split, split_char, split_lines, split_substr, split_whitespace, EmptyPolicy,
};

pub(crate) fn to_owned_segments(segments: Vec<&[u8]>) -> Vec<Vec<u8>> {
    segments.into_iter().map(<[u8]>::to_vec).collect()
}

/// [`split`] 的复制版本
pub fn split_copy(input: &[u8], delimiters: &[u8], policy: EmptyPolicy) -> Vec<Vec<u8>> {
    to_owned_segments(split(input, delimiters, policy))
}

/// [`split_char`] 的复制版本
pub fn split_char_copy(input: &[u8], delimiter: u8, policy: EmptyPolicy) -> Vec<Vec<u8>> {
    to_owned_segments(split_char(input, delimiter, policy))
}

/// [`split_substr`] 的复制版本
pub fn split_substr_copy(input: &[u8], delimiter: &[u8], policy: EmptyPolicy) -> Vec<Vec<u8>> {
    to_owned_segments(split_substr(input, delimiter, policy))
}

/// [`split_whitespace`] 的复制版本
pub fn split_whitespace_copy(input: &[u8], policy: EmptyPolicy) -> Vec<Vec<u8>> {
    to_owned_segments(split_whitespace(input, policy))
}

/// [`split_lines`] 的复制版本
pub fn split_lines_copy(data: &[u8]) -> Vec<Vec<u8>> {
    to_owned_segments(split_lines(data))
}
