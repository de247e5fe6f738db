//! glint — a terminal live code playground with decode-reveal syntax
//! highlighting.

pub mod animate;
pub mod config;
pub mod highlight;
pub mod lexer;
pub mod schedule;
pub mod store;
pub mod theme;
pub mod tui;
