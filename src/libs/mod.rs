//! # Built-in Libraries
//!
//! Utility library modules

pub mod lunar;
pub mod string;
