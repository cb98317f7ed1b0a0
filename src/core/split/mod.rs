// 切分器 - 零拷贝切分算法族
//
// 职责：在借用的字节视图上按字符、字符集合、子串或换行规则切分，
//       每种操作同时提供借用版本和复制版本

mod chars;
mod delimiter;
mod lines;
mod matcher;
mod owned;
mod policy;
mod substr;

// 重新导出
pub use self::chars::{split, split_char, split_whitespace};
pub use self::delimiter::{split_by, split_by_copy, DelimiterSpec, Splitter};
pub use self::lines::{split_lines, LineIter};
pub use self::matcher::{ByteMatcher, Matcher, SplitIter, SubstrMatcher};
pub use self::owned::{
    split_char_copy, split_copy, split_lines_copy, split_substr_copy, split_whitespace_copy,
};
pub use self::policy::EmptyPolicy;
pub use self::substr::split_substr;

/// 空白字符集合
pub const WHITESPACE: &[u8] = b" \n\r\t";

/// 换行字符集合
pub const LINE_TERMINATORS: &[u8] = b"\r\n";

/// 单字符切分的默认分隔符
pub const DEFAULT_DELIMITER: u8 = b'\n';
