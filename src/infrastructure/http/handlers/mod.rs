//! HTTP Handlers

mod ping;
mod relay;

pub use ping::*;
pub use relay::*;
