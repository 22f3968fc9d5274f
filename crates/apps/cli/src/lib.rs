pub mod cli;
pub mod commands;
mod render;
