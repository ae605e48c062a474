//! The file module provides a structured, secure interface to the project
//! tree that agent tools operate on.
//!
//! ## Architecture
//!
//! ### resolver.rs
//! Maps caller-supplied relative paths to real paths inside the working
//! root, or refuses. Absolute inputs, `..` escapes, and symbolic links are
//! all rejected here, before any I/O happens. Resolution is repeated on
//! every call - the tree may change between calls, so a cached resolution
//! is never trusted.
//!
//! ### workdir.rs
//! All filesystem access, behind one type:
//! - Core APIs: read, create_file, create_dir, overwrite, move, delete, list
//! - Line-addressed mutations: replace_lines, delete_lines, insert_lines
//! - Nothing else in the crate touches the project tree directly
//!
//! ### patch.rs
//! The pure line-splice engine plus the numbered rendering every mutating
//! tool replies with. Works on strings only; no I/O.
//!
//! ### tree.rs
//! Recursive tagged rendering of a directory, with configured directory
//! names collapsed to opaque leaves so output stays bounded.
//!
//! The callers of these operations are LLM agents with no state beyond the
//! conversation, so error messages and return values echo the relative
//! paths the agent used. Real directories are never shown.

pub mod patch;
pub mod resolver;
pub mod tree;
pub mod workdir;
