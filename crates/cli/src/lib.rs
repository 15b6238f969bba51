//! gfont CLI library.

pub mod cli;
