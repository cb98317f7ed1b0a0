// 行切分
//
// 职责：按通用换行规则（`\n`、`\r`、`\r\n`）切分文本行，
//       换行符不计入行内容，行间空行保留

use std::iter::FusedIterator;

/// 行迭代器（零拷贝）
///
/// `\r\n` 视为一个换行符；输入末尾的换行符不会产生额外的空行。
#[derive(Debug, Clone)]
pub struct LineIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LineIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// 尚未消费的字节
    pub fn remainder(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        if self.pos >= data.len() {
            return None;
        }

        let rest = &data[self.pos..];
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(end) => {
                let crlf = rest[end] == b'\r' && rest.get(end + 1) == Some(&b'\n');
                self.pos += end + if crlf { 2 } else { 1 };
                Some(&rest[..end])
            }
            None => {
                // 最后一行没有换行符
                self.pos = data.len();
                Some(rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for LineIter<'_> {}

/// 切分文本行
///
/// 空输入返回空序列（与通用切分的“一个空段”规则不同）。
pub fn split_lines(data: &[u8]) -> Vec<&[u8]> {
    LineIter::new(data).collect()
}
