//! The lexical module is responsible for converting raw text into a stream of tokens that the parser can understand.

pub mod lexer;

pub mod token;

mod error;
pub use error::{Error, InvalidAccess, LexError};
#[doc(inline)]
pub use lexer::Lexer;
