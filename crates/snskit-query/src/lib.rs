//! awsQuery wire layer for the SNS data model.
//!
//! Requests from [`snskit_model::input`] are flattened into ordered
//! `Action`/`Version`/member pairs and rendered as a form-encoded `POST`.
//! Error responses are decoded from the SNS `ErrorResponse` XML envelope.
//!
//! ```
//! use snskit_model::input::CreateTopicRequest;
//! use snskit_query::to_query;
//!
//! let params = to_query(&CreateTopicRequest::new("orders"));
//! assert_eq!(
//!     params.to_form_body(),
//!     "Action=CreateTopic&Version=2010-03-31&Name=orders"
//! );
//! ```

mod deserialize;
mod dispatch;
mod error;
mod params;
mod serialize;

pub use deserialize::parse_error_response;
pub use dispatch::{build_json_request, encode_json};
pub use error::{QueryError, SNS_NAMESPACE, error_to_xml};
pub use params::{QueryParams, SNS_API_VERSION};
pub use serialize::{FORM_CONTENT_TYPE, QuerySerialize, build_request, to_query};
