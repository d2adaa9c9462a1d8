//! Core types and client configuration for snskit.
//!
//! This crate holds the pieces shared by the model and wire crates that are
//! not themselves SNS shapes: account and region identifiers, SNS ARN
//! parsing, and the environment-driven client configuration.

pub mod arn;
pub mod config;
mod error;
mod types;

pub use arn::{SnsArn, SnsResource};
pub use config::SnsClientConfig;
pub use error::{CoreError, CoreResult};
pub use types::{AccountId, AwsRegion};
