//! Core math modules.

pub mod beta;
pub mod grid;
pub mod stable;
