//! # sample-client: Echo Service Client
//!
//! Async access to the public HTTP echo service used by `sample-a`:
//!
//! - `GET {base_url}/ip` via [`SampleService::get_ip_info`]
//! - `POST {base_url}/post` via [`SampleService::post_data`]
//!
//! ## Architecture
//!
//! [`SampleService`] is written against the [`Transport`] trait. The
//! production [`HttpTransport`] wraps a `reqwest::Client` configured from
//! [`EchoApiConfig`]; tests plug in their own transport or point the HTTP
//! transport at a `wiremock` server.
//!
//! Both calls fail with [`sample_core::NetworkError`] and are never retried.

pub mod config;
pub mod service;
pub mod transport;

pub use async_trait::async_trait;
pub use config::{ConfigError, EchoApiConfig};
pub use service::SampleService;
pub use transport::{HttpTransport, Transport};
