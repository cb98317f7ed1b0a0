// 只读内存映射文件
//
// 职责：把整个文件只读映射为一段连续字节视图，视图的生命周期绑定到映射对象

use std::fmt;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use memmap2::Mmap;
use tracing::{debug, trace};

use crate::error::{Result, SplitError};

/// 只读内存映射文件
///
/// 只能移动，不能复制。所有从 [`view`](MappedFile::view) 派生的切片都借用自本对象，
/// 编译器保证它们不会在映射释放后被使用：
///
/// ```compile_fail
/// use zsplit::{split_lines, MappedFile};
///
/// let lines = {
///     let file = MappedFile::open("Cargo.toml").unwrap();
///     split_lines(file.view())
/// };
/// println!("{}", lines.len());
/// ```
///
/// 需要脱离映射存活时，使用复制版本：
///
/// ```no_run
/// use zsplit::{split_lines_copy, MappedFile};
///
/// let lines = {
///     let file = MappedFile::open("Cargo.toml")?;
///     split_lines_copy(file.view())
/// };
/// println!("{}", lines.len());
/// # Ok::<(), zsplit::SplitError>(())
/// ```
pub struct MappedFile {
    /// 空文件不做映射
    #[cfg(not(target_arch = "wasm32"))]
    mmap: Option<Mmap>,

    #[cfg(target_arch = "wasm32")]
    data: Box<[u8]>,

    path: PathBuf,
}

impl MappedFile {
    /// 只读打开并映射整个文件
    ///
    /// # Errors
    ///
    /// 文件不存在、不可读或映射失败时返回 [`SplitError::Io`]。
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "打开文件失败");
            SplitError::io(path, e)
        })?;

        let length = file.metadata().map_err(|e| SplitError::io(path, e))?.len();

        let mmap = if length == 0 {
            None
        } else {
            // SAFETY: 只读映射，调用方只能拿到不可变切片；
            // 文件在映射期间被外部修改属于调用方违约
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| {
                debug!(path = %path.display(), error = %e, "内存映射失败");
                SplitError::io(path, e)
            })?;
            Some(mmap)
        };

        debug!(path = %path.display(), length, "文件已映射");

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    /// WebAssembly 环境没有 mmap，读入内存提供相同的契约
    ///
    /// # Errors
    ///
    /// 文件不存在或不可读时返回 [`SplitError::Io`]。
    #[cfg(target_arch = "wasm32")]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        use std::io::Read;

        let path = path.as_ref();
        let mut data = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut data))
            .map_err(|e| SplitError::io(path, e))?;

        debug!(path = %path.display(), length = data.len(), "文件已读入");

        Ok(Self {
            data: data.into_boxed_slice(),
            path: path.to_path_buf(),
        })
    }

    /// 整个文件内容
    #[cfg(not(target_arch = "wasm32"))]
    pub fn view(&self) -> &[u8] {
        match self.mmap {
            Some(ref mmap) => &mmap[..],
            None => &[],
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn view(&self) -> &[u8] {
        &self.data
    }

    /// 文件长度（字节）
    pub fn len(&self) -> usize {
        self.view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 被映射文件的路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MappedFile {
    fn drop(&mut self) {
        trace!(path = %self.path.display(), length = self.len(), "释放文件映射");
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.view()
    }
}

impl AsRef<[u8]> for MappedFile {
    fn as_ref(&self) -> &[u8] {
        self.view()
    }
}

impl fmt::Debug for MappedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedFile")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish()
    }
}
