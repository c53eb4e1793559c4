//! SQL gateway adapters

pub mod http;

pub use http::HttpSqlGateway;
