// 分隔符匹配与段迭代
//
// 职责：定位下一个分隔符，并按“分隔符关闭当前段、开启新段”的规则
//       产出零拷贝段。字符集合切分与子串切分共用同一个迭代器

use std::iter::FusedIterator;

use memchr::memmem;

/// 分隔符查找器
pub trait Matcher {
    /// 在 `haystack` 中查找最左侧的分隔符，返回 `(起始偏移, 分隔符长度)`
    ///
    /// 分隔符长度必须大于 0。
    fn find(&self, haystack: &[u8]) -> Option<(usize, usize)>;
}

/// 字节集合查找器（任一字节即为分隔符）
#[derive(Debug, Clone)]
pub enum ByteMatcher {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
    /// 四个及以上字节：256 项查找表
    Table(Box<[bool; 256]>),
}

impl ByteMatcher {
    /// 空集合没有可匹配的分隔符，返回 `None`
    pub fn new(set: &[u8]) -> Option<Self> {
        match set {
            [] => None,
            &[a] => Some(ByteMatcher::One(a)),
            &[a, b] => Some(ByteMatcher::Two(a, b)),
            &[a, b, c] => Some(ByteMatcher::Three(a, b, c)),
            _ => {
                let mut table = Box::new([false; 256]);
                for &byte in set {
                    table[usize::from(byte)] = true;
                }
                Some(ByteMatcher::Table(table))
            }
        }
    }

    /// 该字节是否属于集合
    pub fn contains(&self, byte: u8) -> bool {
        match *self {
            ByteMatcher::One(a) => byte == a,
            ByteMatcher::Two(a, b) => byte == a || byte == b,
            ByteMatcher::Three(a, b, c) => byte == a || byte == b || byte == c,
            ByteMatcher::Table(ref table) => table[usize::from(byte)],
        }
    }
}

impl Matcher for ByteMatcher {
    #[inline]
    fn find(&self, haystack: &[u8]) -> Option<(usize, usize)> {
        let offset = match *self {
            ByteMatcher::One(a) => memchr::memchr(a, haystack),
            ByteMatcher::Two(a, b) => memchr::memchr2(a, b, haystack),
            ByteMatcher::Three(a, b, c) => memchr::memchr3(a, b, c, haystack),
            ByteMatcher::Table(ref table) => {
                haystack.iter().position(|&byte| table[usize::from(byte)])
            }
        };
        offset.map(|offset| (offset, 1))
    }
}

/// 子串查找器（非重叠、最左优先）
#[derive(Debug, Clone)]
pub struct SubstrMatcher<'d> {
    finder: memmem::Finder<'d>,
}

impl<'d> SubstrMatcher<'d> {
    /// 空子串会在每个位置以零长度匹配，返回 `None`
    pub fn new(needle: &'d [u8]) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        Some(Self {
            finder: memmem::Finder::new(needle),
        })
    }

    pub fn needle(&self) -> &[u8] {
        self.finder.needle()
    }
}

impl Matcher for SubstrMatcher<'_> {
    #[inline]
    fn find(&self, haystack: &[u8]) -> Option<(usize, usize)> {
        self.finder
            .find(haystack)
            .map(|offset| (offset, self.finder.needle().len()))
    }
}

/// 零拷贝段迭代器
///
/// 始终按保留空段的语义产出：N 个分隔符产生 N+1 个段，空输入产生一个空段。
/// 空段过滤由调用方按 [`EmptyPolicy`](super::EmptyPolicy) 完成。
#[derive(Debug, Clone)]
pub struct SplitIter<'a, M> {
    input: &'a [u8],
    pos: usize,
    matcher: M,
    finished: bool,
}

impl<'a, M: Matcher> SplitIter<'a, M> {
    pub fn new(input: &'a [u8], matcher: M) -> Self {
        Self {
            input,
            pos: 0,
            matcher,
            finished: false,
        }
    }
}

impl<'a, M: Matcher> Iterator for SplitIter<'a, M> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let input = self.input;
        let rest = &input[self.pos..];

        match self.matcher.find(rest) {
            Some((offset, len)) => {
                self.pos += offset + len;
                Some(&rest[..offset])
            }
            None => {
                // 最后一个分隔符之后的部分（可能为空）
                self.finished = true;
                self.pos = input.len();
                Some(rest)
            }
        }
    }
}

impl<M: Matcher> FusedIterator for SplitIter<'_, M> {}
