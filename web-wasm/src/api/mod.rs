//! Backend API

pub mod recommend;

pub use recommend::{js_error_message, FetchTransport};
