//! Error types for the actionreel protocol layer.

mod bridge;
mod cache;
mod capture;
mod codegen;
mod edit;

pub use bridge::*;
pub use cache::*;
pub use capture::*;
pub use codegen::*;
pub use edit::*;
