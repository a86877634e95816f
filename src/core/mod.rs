pub mod commands;
pub mod host;
pub mod state;
pub mod stream;
