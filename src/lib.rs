//! # Wenyan Utility Libraries
//!
//! Small, self-contained utility modules in the wenyan tradition
//!
//! ## Architecture
//!
//! - **Libraries**: String operations (字符串經) and lunar calendar lookup (農曆)
//! - **Runtime**: The boxed `Value` type the libraries operate on
//!
//! Every operation is a pure function over `Value` arguments. Positions are
//! 1-based and count characters, never bytes. Invalid in-domain input (an
//! out-of-range position, a negative count, an unknown year) degrades to a
//! sentinel value instead of raising an error; only a wrong `Value` variant
//! is reported as an error.

pub mod error;
pub mod libs;
pub mod runtime;

// Re-export commonly used types
pub use crate::error::{Result, WenError};
pub use crate::libs::lunar::LunarOps;
pub use crate::libs::string::StringOps;
pub use crate::runtime::values::Value;
