pub mod client;
pub mod http_handlers;
pub mod loader;
pub mod sync;

pub use client::*;
pub use http_handlers::*;
pub use loader::*;
pub use sync::*;
