//! SNS resource ARNs.
//!
//! SNS uses four resource layouts after the account field:
//!
//! | Kind | Resource part |
//! |------|---------------|
//! | topic | `<topic-name>` |
//! | subscription | `<topic-name>:<subscription-id>` |
//! | platform application | `app/<platform>/<name>` |
//! | platform endpoint | `endpoint/<platform>/<app-name>/<endpoint-id>` |

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::{AccountId, AwsRegion};

/// The resource an [`SnsArn`] names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnsResource {
    /// A topic.
    Topic {
        /// Topic name; FIFO topics end in `.fifo`.
        name: String,
    },
    /// A subscription to a topic.
    Subscription {
        /// Name of the subscribed topic.
        topic: String,
        /// Subscription identifier.
        id: String,
    },
    /// A mobile push platform application.
    PlatformApplication {
        /// Push platform (`GCM`, `APNS`, ...).
        platform: String,
        /// Application name.
        name: String,
    },
    /// A device endpoint under a platform application.
    Endpoint {
        /// Push platform.
        platform: String,
        /// Owning application name.
        application: String,
        /// Endpoint identifier.
        id: String,
    },
}

/// A parsed `arn:<partition>:sns:<region>:<account>:<resource>` string.
///
/// # Examples
///
/// ```
/// use snskit_core::{SnsArn, SnsResource};
///
/// let arn: SnsArn = "arn:aws:sns:us-east-1:123456789012:orders".parse().unwrap();
/// assert_eq!(arn.resource, SnsResource::Topic { name: "orders".into() });
/// assert_eq!(arn.to_string(), "arn:aws:sns:us-east-1:123456789012:orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnsArn {
    /// Partition (`aws`, `aws-cn`, `aws-us-gov`).
    pub partition: String,
    /// Region the resource lives in.
    pub region: AwsRegion,
    /// Owning account.
    pub account_id: AccountId,
    /// The named resource.
    pub resource: SnsResource,
}

impl SnsArn {
    /// The ARN of topic `name` in the `aws` partition.
    #[must_use]
    pub fn topic(region: AwsRegion, account_id: AccountId, name: impl Into<String>) -> Self {
        Self {
            partition: "aws".to_owned(),
            region,
            account_id,
            resource: SnsResource::Topic { name: name.into() },
        }
    }

    /// Parse an ARN string.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidArn`] if the string is not an SNS ARN, and
    /// [`CoreError::InvalidAccountId`] if the account field is malformed.
    pub fn parse(arn: &str) -> CoreResult<Self> {
        let invalid = |reason| CoreError::InvalidArn {
            arn: arn.to_owned(),
            reason,
        };

        let mut parts = arn.splitn(6, ':');
        let (Some(prefix), Some(partition), Some(service), Some(region), Some(account), Some(rest)) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(invalid("expected six colon-separated fields"));
        };

        if prefix != "arn" {
            return Err(invalid("missing arn prefix"));
        }
        if partition.is_empty() {
            return Err(invalid("empty partition"));
        }
        if service != "sns" {
            return Err(invalid("service is not sns"));
        }
        if region.is_empty() {
            return Err(invalid("empty region"));
        }
        let account_id = AccountId::new(account)?;
        let resource = parse_resource(rest).ok_or_else(|| invalid("unrecognized resource"))?;

        Ok(Self {
            partition: partition.to_owned(),
            region: AwsRegion::new(region),
            account_id,
            resource,
        })
    }

    /// For a subscription ARN, the ARN of its topic; otherwise `None`.
    #[must_use]
    pub fn topic_arn(&self) -> Option<Self> {
        match &self.resource {
            SnsResource::Subscription { topic, .. } => Some(Self {
                resource: SnsResource::Topic {
                    name: topic.clone(),
                },
                ..self.clone()
            }),
            _ => None,
        }
    }

    /// Returns `true` for topics (and their subscriptions) whose name ends
    /// in `.fifo`.
    #[must_use]
    pub fn is_fifo(&self) -> bool {
        match &self.resource {
            SnsResource::Topic { name } | SnsResource::Subscription { topic: name, .. } => {
                name.ends_with(".fifo")
            }
            _ => false,
        }
    }
}

fn parse_resource(rest: &str) -> Option<SnsResource> {
    let non_empty = |s: &str| !s.is_empty();

    if let Some(app) = rest.strip_prefix("app/") {
        let (platform, name) = app.split_once('/')?;
        return (non_empty(platform) && non_empty(name) && !name.contains('/')).then(|| {
            SnsResource::PlatformApplication {
                platform: platform.to_owned(),
                name: name.to_owned(),
            }
        });
    }
    if let Some(endpoint) = rest.strip_prefix("endpoint/") {
        let mut segments = endpoint.split('/');
        let (Some(platform), Some(application), Some(id), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return None;
        };
        return [platform, application, id]
            .iter()
            .all(|s| non_empty(s))
            .then(|| SnsResource::Endpoint {
                platform: platform.to_owned(),
                application: application.to_owned(),
                id: id.to_owned(),
            });
    }

    match rest.split_once(':') {
        Some((topic, id)) if non_empty(topic) && non_empty(id) && !id.contains(':') => {
            Some(SnsResource::Subscription {
                topic: topic.to_owned(),
                id: id.to_owned(),
            })
        }
        Some(_) => None,
        None if non_empty(rest) && !rest.contains('/') => Some(SnsResource::Topic {
            name: rest.to_owned(),
        }),
        None => None,
    }
}

impl FromStr for SnsArn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SnsArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:sns:{}:{}:",
            self.partition, self.region, self.account_id
        )?;
        match &self.resource {
            SnsResource::Topic { name } => f.write_str(name),
            SnsResource::Subscription { topic, id } => write!(f, "{topic}:{id}"),
            SnsResource::PlatformApplication { platform, name } => {
                write!(f, "app/{platform}/{name}")
            }
            SnsResource::Endpoint {
                platform,
                application,
                id,
            } => write!(f, "endpoint/{platform}/{application}/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "123456789012";

    #[test]
    fn test_should_parse_every_resource_kind() {
        let cases = [
            (
                "arn:aws:sns:us-east-1:123456789012:orders",
                SnsResource::Topic {
                    name: "orders".into(),
                },
            ),
            (
                "arn:aws:sns:us-east-1:123456789012:orders:6f0c2d1e-8c4f-4b6a-9f0a-0d1e2f3a4b5c",
                SnsResource::Subscription {
                    topic: "orders".into(),
                    id: "6f0c2d1e-8c4f-4b6a-9f0a-0d1e2f3a4b5c".into(),
                },
            ),
            (
                "arn:aws:sns:us-east-1:123456789012:app/GCM/mobile",
                SnsResource::PlatformApplication {
                    platform: "GCM".into(),
                    name: "mobile".into(),
                },
            ),
            (
                "arn:aws:sns:us-east-1:123456789012:endpoint/GCM/mobile/5e3e9847",
                SnsResource::Endpoint {
                    platform: "GCM".into(),
                    application: "mobile".into(),
                    id: "5e3e9847".into(),
                },
            ),
        ];
        for (input, expected) in cases {
            let arn = SnsArn::parse(input).expect("valid arn");
            assert_eq!(arn.resource, expected, "{input}");
            assert_eq!(arn.to_string(), input);
        }
    }

    #[test]
    fn test_should_reject_malformed_arns() {
        for input in [
            "",
            "arn:aws:sns:us-east-1:123456789012",
            "arn:aws:sqs:us-east-1:123456789012:queue",
            "urn:aws:sns:us-east-1:123456789012:orders",
            "arn:aws:sns::123456789012:orders",
            "arn:aws:sns:us-east-1:123456789012:",
            "arn:aws:sns:us-east-1:123456789012:a:b:c",
            "arn:aws:sns:us-east-1:123456789012:app/GCM",
            "arn:aws:sns:us-east-1:123456789012:endpoint/GCM/mobile",
        ] {
            assert!(
                matches!(SnsArn::parse(input), Err(CoreError::InvalidArn { .. })),
                "{input}"
            );
        }
    }

    #[test]
    fn test_should_reject_bad_account() {
        assert!(matches!(
            SnsArn::parse("arn:aws:sns:us-east-1:1234:orders"),
            Err(CoreError::InvalidAccountId(_))
        ));
    }

    #[test]
    fn test_should_derive_topic_from_subscription() {
        let sub = SnsArn::parse("arn:aws-cn:sns:cn-north-1:123456789012:events.fifo:abc")
            .expect("valid arn");
        assert!(sub.is_fifo());
        let topic = sub.topic_arn().expect("subscription has a topic");
        assert_eq!(
            topic.to_string(),
            "arn:aws-cn:sns:cn-north-1:123456789012:events.fifo"
        );
        assert!(topic.topic_arn().is_none());
    }

    #[test]
    fn test_should_build_topic_arn() {
        let account = AccountId::new(ACCOUNT).expect("valid account");
        let arn = SnsArn::topic(AwsRegion::new("eu-west-1"), account, "alerts");
        assert_eq!(arn.to_string(), "arn:aws:sns:eu-west-1:123456789012:alerts");
        assert!(!arn.is_fifo());
    }
}
