//! HTTP client for the admin backend

pub mod client;

pub use client::ApiClient;
