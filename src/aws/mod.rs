//! AWS client wiring.

pub mod client;

// Re-export the client container for convenience
pub use client::AwsClients;
