// Core - 切分核心
//
// 职责：纯函数形式的切分算法，不涉及任何 IO

pub mod split;

pub use split::{DelimiterSpec, EmptyPolicy, Splitter};
