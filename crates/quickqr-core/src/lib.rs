pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod placeholder;
pub mod request;
pub mod save;
pub mod session;
