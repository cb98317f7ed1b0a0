// 字符 / 字符集合切分
//
// 职责：按任一分隔字节切分输入，空输入与空分隔符集合在扫描前单独处理

use crate::core::split::matcher::{ByteMatcher, SplitIter};
use crate::core::split::{EmptyPolicy, WHITESPACE};

/// 按字符集合切分
///
/// - 空输入：`Preserve` 得到一个空段，`Drop` 得到空序列
/// - 空分隔符集合：每个字节一个段
/// - 其余情况：每个分隔字节关闭当前段并开启新段，
///   开头、结尾及相邻分隔符产生的空段按 `policy` 保留或丢弃
pub fn split<'a>(input: &'a [u8], delimiters: &[u8], policy: EmptyPolicy) -> Vec<&'a [u8]> {
    if input.is_empty() {
        return policy.collect(std::iter::once(input));
    }

    let Some(matcher) = ByteMatcher::new(delimiters) else {
        return input.chunks(1).collect();
    };

    policy.collect(SplitIter::new(input, matcher))
}

/// 按单个字符切分
pub fn split_char(input: &[u8], delimiter: u8, policy: EmptyPolicy) -> Vec<&[u8]> {
    split(input, &[delimiter], policy)
}

/// 按空白字符（空格、制表符、`\n`、`\r`）切分
pub fn split_whitespace(input: &[u8], policy: EmptyPolicy) -> Vec<&[u8]> {
    split(input, WHITESPACE, policy)
}
