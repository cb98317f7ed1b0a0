// 分隔符描述与切分器配置
//
// 职责：用一个枚举描述四种互斥的分隔方式，并提供可复用的切分器

use crate::core::split::owned::to_owned_segments;
use crate::core::split::{split, split_lines, split_substr, EmptyPolicy, WHITESPACE};

/// 分隔方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterSpec<'d> {
    /// 单个字符
    Char(u8),
    /// 字符集合中的任一字符
    AnyOf(&'d [u8]),
    /// 完整子串
    Substr(&'d [u8]),
    /// 通用换行规则（`\n`、`\r`、`\r\n`）
    Lines,
}

impl DelimiterSpec<'static> {
    /// 空白字符集合
    pub const WHITESPACE: Self = DelimiterSpec::AnyOf(WHITESPACE);
}

/// 按分隔方式切分
///
/// `Lines` 的空行规则固定，忽略 `policy`。
pub fn split_by<'a>(
    input: &'a [u8],
    delimiter: &DelimiterSpec<'_>,
    policy: EmptyPolicy,
) -> Vec<&'a [u8]> {
    match *delimiter {
        DelimiterSpec::Char(ch) => split(input, &[ch], policy),
        DelimiterSpec::AnyOf(set) => split(input, set, policy),
        DelimiterSpec::Substr(sub) => split_substr(input, sub, policy),
        DelimiterSpec::Lines => split_lines(input),
    }
}

/// 按分隔方式切分并复制每个段
pub fn split_by_copy(
    input: &[u8],
    delimiter: &DelimiterSpec<'_>,
    policy: EmptyPolicy,
) -> Vec<Vec<u8>> {
    to_owned_segments(split_by(input, delimiter, policy))
}

/// 预先配置好的切分器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splitter<'d> {
    delimiter: DelimiterSpec<'d>,
    policy: EmptyPolicy,
}

impl<'d> Splitter<'d> {
    pub fn new(delimiter: DelimiterSpec<'d>, policy: EmptyPolicy) -> Self {
        Self { delimiter, policy }
    }

    /// 行切分器
    pub fn lines() -> Self {
        Self::new(DelimiterSpec::Lines, EmptyPolicy::Preserve)
    }

    /// 空白切分器，默认丢弃空段
    pub fn whitespace() -> Self {
        Self::new(DelimiterSpec::WHITESPACE, EmptyPolicy::Drop)
    }

    pub fn with_policy(mut self, policy: EmptyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn delimiter(&self) -> &DelimiterSpec<'d> {
        &self.delimiter
    }

    pub fn policy(&self) -> EmptyPolicy {
        self.policy
    }

    pub fn split<'a>(&self, input: &'a [u8]) -> Vec<&'a [u8]> {
        split_by(input, &self.delimiter, self.policy)
    }

    pub fn split_copy(&self, input: &[u8]) -> Vec<Vec<u8>> {
        split_by_copy(input, &self.delimiter, self.policy)
    }
}
