//! SNS request shapes, one per API action, grouped by area.
//!
//! Every request pairs with a result of the same stem in [`crate::output`]
//! (`PublishRequest` / `PublishResult`).

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
