mod immich_service;
mod state;

pub use immich_service::*;
pub use state::*;
