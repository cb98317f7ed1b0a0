// zsplit - 零拷贝文本切分库
//
// Copyright (c) 2025 zedit team
//
// Licensed under MIT License

//! 按单字符、字符集合、子串或通用换行规则切分字节序列。
//!
//! 借用版本返回指向输入的切片（零拷贝），`*_copy` 版本返回独立拥有的 `Vec<u8>`。
//! 文件通过 [`MappedFile`] 只读映射，切片的生命周期由编译器绑定到映射对象上。
//!
//! ```
//! use zsplit::{split, split_lines, EmptyPolicy};
//!
//! let fields = split(b"a,,b", b",", EmptyPolicy::Preserve);
//! assert_eq!(fields, [b"a".as_slice(), b"", b"b"]);
//!
//! let lines = split_lines(b"one\r\ntwo\n");
//! assert_eq!(lines, [b"one".as_slice(), b"two"]);
//! ```

pub mod core;
pub mod error;
pub mod io;

pub use crate::core::split::{
    split, split_by, split_by_copy, split_char, split_char_copy, split_copy, split_lines,
    split_lines_copy, split_substr, split_substr_copy, split_whitespace, split_whitespace_copy,
    DelimiterSpec, EmptyPolicy, LineIter, SplitIter, Splitter, DEFAULT_DELIMITER,
    LINE_TERMINATORS, WHITESPACE,
};
pub use crate::error::{Result, SplitError};
pub use crate::io::{split_file_lines, MappedFile};
