pub mod interfaces;
pub mod query;
