// 错误类型
//
// 职责：定义对外暴露的错误分类。切分函数本身是全函数，只有文件映射会失败

use std::io;
use std::path::{Path, PathBuf};

/// 库级错误
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// 文件不存在、不可读或映射失败
    #[error("无法映射文件 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        SplitError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// 触发错误的文件路径
    pub fn path(&self) -> &Path {
        match self {
            SplitError::Io { path, .. } => path,
        }
    }

    /// 底层 IO 错误类型
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            SplitError::Io { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
