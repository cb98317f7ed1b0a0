// 子串切分
//
// 职责：以完整子串为一个分隔单元切分输入（非重叠、最左优先）

use crate::core::split::chars::split;
use crate::core::split::matcher::{SplitIter, SubstrMatcher};
use crate::core::split::EmptyPolicy;

/// 按子串切分
///
/// 空输入或空子串时退化为 [`split`]（空输入规则 / 每字节一段）。
/// 恰好位于末尾的分隔子串产生一个结尾空段（受 `policy` 约束）。
pub fn split_substr<'a>(input: &'a [u8], delimiter: &[u8], policy: EmptyPolicy) -> Vec<&'a [u8]> {
    if input.is_empty() {
        return split(input, delimiter, policy);
    }

    let Some(matcher) = SubstrMatcher::new(delimiter) else {
        return split(input, &[], policy);
    };

    policy.collect(SplitIter::new(input, matcher))
}
