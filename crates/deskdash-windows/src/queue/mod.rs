//! Focus queue: the explicit front-to-back order of all window records.

mod operations;
mod types;

pub use types::*;
