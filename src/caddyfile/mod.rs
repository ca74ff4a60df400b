//! Caddyfile-style configuration text: lexing and token dispensing.

pub mod dispenser;
pub mod lexer;

pub use dispenser::Dispenser;
pub use lexer::{Token, tokenize};
