// 文件按行切分
//
// 职责：映射文件、按行切分并复制结果，返回前释放映射

use std::path::Path;

use tracing::trace;

use crate::core::split::split_lines_copy;
use crate::error::Result;
use crate::io::MappedFile;

/// 读取文件的所有行
///
/// 结果独立于映射存活；Unix（`\n`）与 DOS（`\r\n`）换行得到相同的行。
///
/// # Errors
///
/// 文件无法打开或映射时返回 [`SplitError::Io`](crate::SplitError::Io)。
pub fn split_file_lines(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let mapped = MappedFile::open(path)?;
    let lines = split_lines_copy(mapped.view());

    trace!(path = %mapped.path().display(), lines = lines.len(), "文件已按行切分");

    Ok(lines)
}
