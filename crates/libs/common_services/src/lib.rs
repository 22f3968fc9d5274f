#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_inception,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation
)]

pub mod api;
pub mod backend;
pub mod immich_client;
pub mod service;
pub mod utils;
