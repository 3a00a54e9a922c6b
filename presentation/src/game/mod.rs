//! Interactive game input

pub mod terminal;
