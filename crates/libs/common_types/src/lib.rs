#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools
)]
mod album;
mod asset;
mod auth;
mod error_envelope;
mod search;
mod storage;
mod user;

pub use album::*;
pub use asset::*;
pub use auth::*;
pub use error_envelope::*;
pub use search::*;
pub use storage::*;
pub use user::*;
