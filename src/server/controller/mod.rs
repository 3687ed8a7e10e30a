//! HTTP request handlers.

pub mod ajax;
