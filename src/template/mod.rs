//! Template syntax for envplate
//!
//! This module turns template source into a tree the renderers can walk:
//! - `token`: Splits source text into literal text and `{{...}}` tags
//! - `parser`: Pairs section openers with their closers and builds the node tree

pub mod parser;
pub mod token;

pub use parser::{parse, Node};
pub use token::{Lexer, SectionKind, Token};
