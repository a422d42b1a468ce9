//! # Runtime System
//!
//! The boxed value type the libraries operate on

pub mod values;
