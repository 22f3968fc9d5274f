mod client;
mod decode;
mod error;

pub use client::*;
pub use decode::*;
pub use error::*;
