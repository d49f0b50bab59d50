pub mod cli;
pub mod commands;
mod context;
mod logging;

pub use context::AppContext;
