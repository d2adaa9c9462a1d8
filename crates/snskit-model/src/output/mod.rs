//! SNS result shapes, one per API action, grouped by area.
//!
//! Actions without response members still get an empty result struct so that
//! every request has a paired result type.

mod platform;
mod publish;
mod sms;
mod subscription;
mod tag;
mod topic;

pub use platform::*;
pub use publish::*;
pub use sms::*;
pub use subscription::*;
pub use tag::*;
pub use topic::*;
