mod attendance;
pub mod client;
mod leave;
pub mod types;

pub use client::*;
pub use types::*;
