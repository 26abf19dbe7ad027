//! Command Handlers 实现

mod relay_handlers;

pub use relay_handlers::*;
