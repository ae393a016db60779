//! Stability AI text-to-image integration.

mod client;
mod types;

pub use client::StabilityClient;
