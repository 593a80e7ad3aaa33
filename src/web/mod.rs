pub mod api;
pub mod models;
pub mod server;

pub use api::create_router;
pub use server::{start_server, ServerConfig};
