// IO System - IO系统
//
// 职责：提供只读的整文件映射，作为按行切分文件的输入来源

pub mod file;
pub mod mmap;

pub use file::split_file_lines;
pub use mmap::MappedFile;
