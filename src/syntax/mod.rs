//! This module contains the syntax tree nodes a parser builds from the token stream.

#[allow(clippy::module_name_repetitions)]
pub mod tree;
