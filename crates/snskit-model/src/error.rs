//! SNS error types.
//!
//! Two families live here. [`ModelError`] covers local usage errors raised
//! while building shapes (duplicate map keys, unparseable enum strings).
//! [`SnsError`] carries a failure reported by the SNS service, decoded from
//! the query-protocol `<ErrorResponse>` envelope by a transport layer.

use std::fmt;

/// Usage errors raised while constructing model shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A map entry was added under a key that is already present.
    #[error("duplicated key ({key}) provided for {field}")]
    DuplicateKey {
        /// Wire name of the map field.
        field: &'static str,
        /// The offending key.
        key: String,
    },

    /// An empty string was given where an enum wire value was expected.
    #[error("value cannot be empty for {type_name}")]
    EmptyEnumValue {
        /// Name of the enum type.
        type_name: &'static str,
    },

    /// A string did not match any wire value of the enum.
    #[error("cannot create {type_name} from value {value:?}")]
    InvalidEnumValue {
        /// Name of the enum type.
        type_name: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Well-known SNS error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SnsErrorCode {
    /// The user has been denied access to the requested resource.
    AuthorizationError,
    /// Two or more batch entries have the same `Id`.
    BatchEntryIdsNotDistinct,
    /// The combined length of all batch messages exceeds the limit.
    BatchRequestTooLong,
    /// Concurrent access to the resource is not permitted.
    ConcurrentAccess,
    /// The batch request contains no entries.
    EmptyBatchRequest,
    /// The endpoint is disabled.
    EndpointDisabled,
    /// The account has exceeded the number of filter policies allowed.
    FilterPolicyLimitExceeded,
    /// An internal service error.
    InternalError,
    /// A batch entry `Id` does not follow the allowed format.
    InvalidBatchEntryId,
    /// A request parameter does not comply with the constraints.
    #[default]
    InvalidParameter,
    /// A request parameter value is invalid (`InvalidParameterValueException`).
    ParameterValueInvalid,
    /// The credential signature is not SigV4.
    InvalidSecurity,
    /// The resource is in an invalid state for the operation.
    InvalidState,
    /// The KMS key could not be accessed.
    KMSAccessDenied,
    /// The KMS key is disabled.
    KMSDisabled,
    /// The KMS key is not in a valid state.
    KMSInvalidState,
    /// The KMS key does not exist.
    KMSNotFound,
    /// The account is not subscribed to KMS.
    KMSOptInRequired,
    /// The KMS request was throttled.
    KMSThrottling,
    /// The requested resource does not exist.
    NotFound,
    /// The phone number has opted out of receiving SMS.
    OptedOut,
    /// The platform application is disabled.
    PlatformApplicationDisabled,
    /// The tagged resource does not exist.
    ResourceNotFound,
    /// A tag was added or changed while another request was in flight.
    StaleTag,
    /// The account has too many subscriptions.
    SubscriptionLimitExceeded,
    /// The resource has too many tags.
    TagLimitExceeded,
    /// The request violates a tag policy.
    TagPolicy,
    /// The request rate is too high.
    Throttled,
    /// The batch request contains more entries than allowed.
    TooManyEntriesInBatchRequest,
    /// The account has too many topics.
    TopicLimitExceeded,
    /// The request could not be satisfied due to a user error.
    UserError,
    /// The request failed validation.
    ValidationException,
    /// The one-time password did not verify the phone number.
    VerificationException,
    /// A code this crate does not know.
    Unknown,
}

impl SnsErrorCode {
    /// All known codes, excluding [`SnsErrorCode::Unknown`].
    pub const KNOWN: &'static [Self] = &[
        Self::AuthorizationError,
        Self::BatchEntryIdsNotDistinct,
        Self::BatchRequestTooLong,
        Self::ConcurrentAccess,
        Self::EmptyBatchRequest,
        Self::EndpointDisabled,
        Self::FilterPolicyLimitExceeded,
        Self::InternalError,
        Self::InvalidBatchEntryId,
        Self::InvalidParameter,
        Self::ParameterValueInvalid,
        Self::InvalidSecurity,
        Self::InvalidState,
        Self::KMSAccessDenied,
        Self::KMSDisabled,
        Self::KMSInvalidState,
        Self::KMSNotFound,
        Self::KMSOptInRequired,
        Self::KMSThrottling,
        Self::NotFound,
        Self::OptedOut,
        Self::PlatformApplicationDisabled,
        Self::ResourceNotFound,
        Self::StaleTag,
        Self::SubscriptionLimitExceeded,
        Self::TagLimitExceeded,
        Self::TagPolicy,
        Self::Throttled,
        Self::TooManyEntriesInBatchRequest,
        Self::TopicLimitExceeded,
        Self::UserError,
        Self::ValidationException,
        Self::VerificationException,
    ];

    /// Returns the error code string used in the `<Code>` element.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationError => "AuthorizationError",
            Self::BatchEntryIdsNotDistinct => "BatchEntryIdsNotDistinct",
            Self::BatchRequestTooLong => "BatchRequestTooLong",
            Self::ConcurrentAccess => "ConcurrentAccess",
            Self::EmptyBatchRequest => "EmptyBatchRequest",
            Self::EndpointDisabled => "EndpointDisabled",
            Self::FilterPolicyLimitExceeded => "FilterPolicyLimitExceeded",
            Self::InternalError => "InternalError",
            Self::InvalidBatchEntryId => "InvalidBatchEntryId",
            Self::InvalidParameter => "InvalidParameter",
            Self::ParameterValueInvalid => "ParameterValueInvalid",
            Self::InvalidSecurity => "InvalidSecurity",
            Self::InvalidState => "InvalidState",
            Self::KMSAccessDenied => "KMSAccessDenied",
            Self::KMSDisabled => "KMSDisabled",
            Self::KMSInvalidState => "KMSInvalidState",
            Self::KMSNotFound => "KMSNotFound",
            Self::KMSOptInRequired => "KMSOptInRequired",
            Self::KMSThrottling => "KMSThrottling",
            Self::NotFound => "NotFound",
            Self::OptedOut => "OptedOut",
            Self::PlatformApplicationDisabled => "PlatformApplicationDisabled",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::StaleTag => "StaleTag",
            Self::SubscriptionLimitExceeded => "SubscriptionLimitExceeded",
            Self::TagLimitExceeded => "TagLimitExceeded",
            Self::TagPolicy => "TagPolicy",
            Self::Throttled => "Throttled",
            Self::TooManyEntriesInBatchRequest => "TooManyEntriesInBatchRequest",
            Self::TopicLimitExceeded => "TopicLimitExceeded",
            Self::UserError => "UserError",
            Self::ValidationException => "ValidationException",
            Self::VerificationException => "VerificationException",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a `<Code>` string. Returns `None` for codes this crate does not know.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::KNOWN.iter().copied().find(|c| c.as_str() == code)
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::AuthorizationError
            | Self::FilterPolicyLimitExceeded
            | Self::InvalidSecurity
            | Self::SubscriptionLimitExceeded
            | Self::TopicLimitExceeded => http::StatusCode::FORBIDDEN,
            Self::NotFound | Self::ResourceNotFound => http::StatusCode::NOT_FOUND,
            Self::Throttled => http::StatusCode::TOO_MANY_REQUESTS,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for SnsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error reported by the SNS service.
#[derive(Debug)]
pub struct SnsError {
    /// The error code.
    pub code: SnsErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The request ID echoed by the service, if any.
    pub request_id: Option<String>,
    /// `true` when the service blamed the caller (`<Type>Sender</Type>`).
    pub sender_fault: bool,
    /// Verification status reported alongside a `VerificationException`.
    pub verification_status: Option<String>,
    /// The raw `<Code>` string when `code` is [`SnsErrorCode::Unknown`].
    pub unrecognized_code: Option<String>,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for SnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.unrecognized_code.as_deref().unwrap_or(self.code.as_str());
        write!(f, "SnsError({code}): {}", self.message)?;
        if let Some(status) = &self.verification_status {
            write!(f, " (status: {status})")?;
        }
        Ok(())
    }
}

impl std::error::Error for SnsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl SnsError {
    /// Create a new `SnsError` from an error code.
    #[must_use]
    pub fn new(code: SnsErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new `SnsError` with a custom message.
    #[must_use]
    pub fn with_message(code: SnsErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            sender_fault: code.default_status_code().is_client_error(),
            code,
            request_id: None,
            verification_status: None,
            unrecognized_code: None,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the code string as it appeared on the wire.
    #[must_use]
    pub fn code_str(&self) -> &str {
        self.unrecognized_code
            .as_deref()
            .unwrap_or(self.code.as_str())
    }

    /// Returns `true` for throttling errors a caller may retry later.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        matches!(
            self.code,
            SnsErrorCode::Throttled | SnsErrorCode::KMSThrottling
        )
    }

    // -- Convenience constructors --

    /// The account has exceeded its filter policy quota.
    #[must_use]
    pub fn filter_policy_limit_exceeded(message: impl Into<String>) -> Self {
        Self::with_message(SnsErrorCode::FilterPolicyLimitExceeded, message)
    }

    /// A one-time password failed to verify a sandbox phone number.
    #[must_use]
    pub fn verification(message: impl Into<String>, status: impl Into<String>) -> Self {
        let mut err = Self::with_message(SnsErrorCode::VerificationException, message);
        err.verification_status = Some(status.into());
        err
    }

    /// A resource was not found.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(SnsErrorCode::NotFound, message)
    }

    /// A request parameter is invalid.
    #[must_use]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::with_message(SnsErrorCode::InvalidParameter, message)
    }

    /// A service error whose code this crate does not know.
    #[must_use]
    pub fn unrecognized(code: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::with_message(SnsErrorCode::Unknown, message);
        err.unrecognized_code = Some(code.into());
        err
    }
}

/// Create an `SnsError` from an error code.
///
/// # Examples
///
/// ```
/// use snskit_model::sns_error;
/// use snskit_model::error::SnsErrorCode;
///
/// let err = sns_error!(NotFound);
/// assert_eq!(err.code, SnsErrorCode::NotFound);
///
/// let err = sns_error!(TopicLimitExceeded, "too many topics");
/// assert_eq!(err.message, "too many topics");
/// ```
#[macro_export]
macro_rules! sns_error {
    ($code:ident) => {
        $crate::error::SnsError::new($crate::error::SnsErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::SnsError::with_message($crate::error::SnsErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_known_codes() {
        for code in SnsErrorCode::KNOWN {
            assert_eq!(SnsErrorCode::from_code(code.as_str()), Some(*code));
        }
        assert_eq!(SnsErrorCode::from_code("Unknown"), None);
        assert_eq!(SnsErrorCode::from_code("NoSuchThing"), None);
    }

    #[test]
    fn test_should_map_status_codes() {
        assert_eq!(
            SnsErrorCode::AuthorizationError.default_status_code(),
            http::StatusCode::FORBIDDEN
        );
        assert_eq!(
            SnsErrorCode::NotFound.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            SnsErrorCode::Throttled.default_status_code(),
            http::StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            SnsErrorCode::InternalError.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SnsErrorCode::InvalidParameter.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_carry_verification_status() {
        let err = SnsError::verification("OTP mismatch", "Pending");
        assert_eq!(err.code, SnsErrorCode::VerificationException);
        assert_eq!(err.verification_status.as_deref(), Some("Pending"));
        assert!(err.sender_fault);
        assert_eq!(
            err.to_string(),
            "SnsError(VerificationException): OTP mismatch (status: Pending)"
        );
    }

    #[test]
    fn test_should_build_filter_policy_limit_error() {
        let err = SnsError::filter_policy_limit_exceeded("quota reached");
        assert_eq!(err.code, SnsErrorCode::FilterPolicyLimitExceeded);
        assert_eq!(err.status_code, http::StatusCode::FORBIDDEN);
        assert!(err.verification_status.is_none());
    }

    #[test]
    fn test_should_keep_unrecognized_code() {
        let err = SnsError::unrecognized("FancyNewError", "boom");
        assert_eq!(err.code, SnsErrorCode::Unknown);
        assert_eq!(err.code_str(), "FancyNewError");
        assert_eq!(err.to_string(), "SnsError(FancyNewError): boom");
    }

    #[test]
    fn test_should_mark_internal_error_as_receiver_fault() {
        let err = sns_error!(InternalError);
        assert!(!err.sender_fault);
        assert_eq!(err.message, "InternalError");
    }

    #[test]
    fn test_should_format_model_errors() {
        let err = ModelError::DuplicateKey {
            field: "Attributes",
            key: "Policy".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicated key (Policy) provided for Attributes");

        let err = ModelError::InvalidEnumValue {
            type_name: "RouteType",
            value: "Bulk".to_owned(),
        };
        assert_eq!(err.to_string(), "cannot create RouteType from value \"Bulk\"");
    }
}
