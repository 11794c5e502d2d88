//! Yahoo Finance chart API

pub mod provider;
pub mod response;

pub use provider::YahooProvider;
