//! Repository adapters: list a directory tree, read path lists supplied by the caller.
//!
//! This crate is allowed to do filesystem IO. Everything it returns is a
//! [`TreePath`] relative to the listed directory, so the engine never sees host paths.

#![forbid(unsafe_code)]

mod list;
mod path_list;

pub use list::{list_directory, list_sub_directory};
pub use path_list::read_path_list;
