//! Presentation shell: dashboard assembly and the HTTP server

pub mod dashboard;
pub mod http;

pub use dashboard::*;
pub use http::*;
