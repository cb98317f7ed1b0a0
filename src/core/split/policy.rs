// 空段策略
//
// 职责：决定零长度段是否保留在输出序列中

/// 空段策略
///
/// 默认值为 [`EmptyPolicy::Drop`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyPolicy {
    /// 保留零长度段（开头、结尾、相邻分隔符之间）
    Preserve,
    /// 丢弃零长度段
    #[default]
    Drop,
}

impl EmptyPolicy {
    /// 该段是否应当输出
    #[inline]
    pub fn keeps(self, segment: &[u8]) -> bool {
        match self {
            EmptyPolicy::Preserve => true,
            EmptyPolicy::Drop => !segment.is_empty(),
        }
    }

    /// 按策略收集段
    pub(crate) fn collect<'a, I>(self, segments: I) -> Vec<&'a [u8]>
    where
        I: Iterator<Item = &'a [u8]>,
    {
        segments.filter(|segment| self.keeps(segment)).collect()
    }
}
