//! Agentz reporting API integration

pub mod client;

pub use client::{AgentzClient, API_KEY_HEADER, REPORT_PATH};
