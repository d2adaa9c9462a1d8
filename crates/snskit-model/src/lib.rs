//! SNS model types for snskit.
//!
//! This crate provides the typed request, result and shared value shapes of the
//! Amazon SNS API (`2010-03-31`), the closed enumerations SNS defines, and the
//! error carriers a transport layer produces when the service reports a failure.
//!
//! Every shape is a plain value: `pub` fields hold `Option`s, collection fields
//! distinguish "never set" (`None`) from "empty" (`Some(vec![])`), and fluent
//! `with_*` methods allow chained construction. Equality and hashing are
//! structural. `Display` renders the shape as its PascalCase JSON form with
//! unset fields omitted.
//!
//! ```
//! use snskit_model::input::PublishRequest;
//! use snskit_model::types::MessageAttributeValue;
//!
//! let req = PublishRequest::default()
//!     .with_topic_arn("arn:aws:sns:us-east-1:123456789012:orders")
//!     .with_message("hello")
//!     .with_message_attributes_entry("source", MessageAttributeValue::string("web"))
//!     .expect("fresh map has no duplicate");
//!
//! assert_eq!(req.message.as_deref(), Some("hello"));
//! assert!(req.to_string().contains("\"TopicArn\""));
//! ```
// "SNS" and "SMS" appear in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

#[macro_use]
mod shape;

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{ModelError, SnsError, SnsErrorCode};
pub use operations::SnsOperation;
pub use types::{
    LanguageCodeString, MessageAttributeValue, NumberCapability, RouteType,
    SMSSandboxPhoneNumberVerificationStatus,
};
