//! SNS error envelope decoding.
//!
//! Failed awsQuery calls return
//!
//! ```xml
//! <ErrorResponse>
//!   <Error>
//!     <Type>Sender</Type>
//!     <Code>InvalidParameter</Code>
//!     <Message>...</Message>
//!   </Error>
//!   <RequestId>...</RequestId>
//! </ErrorResponse>
//! ```
//!
//! Some emulators omit the `ErrorResponse` wrapper; a bare `<Error>` root is
//! accepted too.

use http::StatusCode;
use quick_xml::Reader;
use quick_xml::events::Event;
use snskit_model::{SnsError, SnsErrorCode};

use crate::error::QueryError;

/// Fields collected from an error document.
#[derive(Debug, Default)]
struct ErrorEnvelope {
    error_type: Option<String>,
    code: Option<String>,
    message: Option<String>,
    status: Option<String>,
    request_id: Option<String>,
}

/// Decode an SNS error response body into an [`SnsError`].
///
/// `status`, when given, overrides the code's default HTTP status.
///
/// # Errors
///
/// Returns [`QueryError::MissingElement`] if the body has no `<Code>`, or
/// another [`QueryError`] if the XML is malformed.
///
/// # Examples
///
/// ```
/// use snskit_model::SnsErrorCode;
/// use snskit_query::parse_error_response;
///
/// let body = br#"<ErrorResponse><Error><Type>Sender</Type><Code>NotFound</Code>
///     <Message>Topic does not exist</Message></Error>
///     <RequestId>r-1</RequestId></ErrorResponse>"#;
/// let err = parse_error_response(body, None).unwrap();
/// assert_eq!(err.code, SnsErrorCode::NotFound);
/// assert_eq!(err.request_id.as_deref(), Some("r-1"));
/// ```
pub fn parse_error_response(body: &[u8], status: Option<StatusCode>) -> Result<SnsError, QueryError> {
    let envelope = read_envelope(body)?;
    let raw_code = envelope
        .code
        .ok_or_else(|| QueryError::MissingElement("Code".to_string()))?;
    let message = envelope.message.unwrap_or_default();

    let mut error = match SnsErrorCode::from_code(&raw_code) {
        Some(code) => SnsError::with_message(code, message),
        None => {
            tracing::warn!(code = %raw_code, "unrecognized SNS error code");
            SnsError::unrecognized(raw_code, message)
        }
    };

    if let Some(status) = status {
        error.status_code = status;
    }
    match envelope.error_type.as_deref() {
        Some("Sender") => error.sender_fault = true,
        Some("Receiver") => error.sender_fault = false,
        _ => error.sender_fault = error.status_code.is_client_error(),
    }
    error.verification_status = envelope.status;
    error.request_id = envelope.request_id;

    tracing::debug!(
        code = %error.code_str(),
        status = %error.status_code,
        sender_fault = error.sender_fault,
        "decoded SNS error response"
    );
    Ok(error)
}

fn read_envelope(body: &[u8]) -> Result<ErrorEnvelope, QueryError> {
    // No reader-level trimming: entity references split text into separate events.
    let mut reader = Reader::from_reader(body);
    let mut envelope = ErrorEnvelope::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| QueryError::Parse(e.to_string()))?;
                match tag_name {
                    // Descend into the wrapper; its children are handled here.
                    "ErrorResponse" => {}
                    "Error" => read_error_element(&mut reader, &mut envelope)?,
                    "RequestId" => envelope.request_id = Some(read_text_content(&mut reader)?),
                    _ => skip_element(&mut reader)?,
                }
            }
            Event::Eof => return Ok(envelope),
            _ => {}
        }
    }
}

fn read_error_element(
    reader: &mut Reader<&[u8]>,
    envelope: &mut ErrorEnvelope,
) -> Result<(), QueryError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| QueryError::Parse(e.to_string()))?;
                match tag_name {
                    "Type" => envelope.error_type = Some(read_text_content(reader)?),
                    "Code" => envelope.code = Some(read_text_content(reader)?),
                    "Message" => envelope.message = Some(read_text_content(reader)?),
                    "Status" => envelope.status = Some(read_text_content(reader)?),
                    "RequestId" => envelope.request_id = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                }
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(QueryError::UnexpectedElement(
                    "unexpected EOF in Error".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
///
/// Text inside nested markup is kept; the assembled value is trimmed once.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, QueryError> {
    let mut text = String::new();
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e.decode().map_err(|err| QueryError::Parse(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::CData(e) => {
                let decoded = e.decode().map_err(|err| QueryError::Parse(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| QueryError::Parse(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e.decode().map_err(|err| QueryError::Parse(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| QueryError::Parse(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(text.trim().to_owned());
                }
            }
            Event::Eof => {
                return Err(QueryError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), QueryError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(QueryError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::error_to_xml;

    const NOT_FOUND: &[u8] = br#"<?xml version="1.0"?>
<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <Error>
    <Type>Sender</Type>
    <Code>NotFound</Code>
    <Message>Topic does not exist</Message>
  </Error>
  <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
</ErrorResponse>"#;

    #[test]
    fn test_should_decode_known_error_code() {
        let err = parse_error_response(NOT_FOUND, None).expect("decode");
        assert_eq!(err.code, SnsErrorCode::NotFound);
        assert_eq!(err.message, "Topic does not exist");
        assert_eq!(err.status_code, StatusCode::NOT_FOUND);
        assert!(err.sender_fault);
        assert!(err.unrecognized_code.is_none());
        assert_eq!(
            err.request_id.as_deref(),
            Some("9dd01905-5012-5f99-8663-4b3ecd0dfaef")
        );
    }

    #[test]
    fn test_should_keep_unrecognized_code() {
        let body = b"<ErrorResponse><Error><Type>Receiver</Type><Code>BrandNewFault</Code>\
            <Message>boom</Message></Error></ErrorResponse>";
        let err = parse_error_response(body, Some(StatusCode::SERVICE_UNAVAILABLE))
            .expect("decode");
        assert_eq!(err.code, SnsErrorCode::Unknown);
        assert_eq!(err.unrecognized_code.as_deref(), Some("BrandNewFault"));
        assert_eq!(err.code_str(), "BrandNewFault");
        assert_eq!(err.status_code, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.sender_fault);
    }

    #[test]
    fn test_should_decode_verification_status() {
        let body = b"<ErrorResponse><Error><Type>Sender</Type>\
            <Code>VerificationException</Code><Message>Invalid OTP</Message>\
            <Status>Pending</Status></Error></ErrorResponse>";
        let err = parse_error_response(body, None).expect("decode");
        assert_eq!(err.code, SnsErrorCode::VerificationException);
        assert_eq!(err.verification_status.as_deref(), Some("Pending"));
        assert_eq!(err.to_string(), "SnsError(VerificationException): Invalid OTP (status: Pending)");
    }

    #[test]
    fn test_should_accept_bare_error_root() {
        let body = b"<Error><Code>Throttled</Code><Message>slow down</Message></Error>";
        let err = parse_error_response(body, None).expect("decode");
        assert!(err.is_throttling());
        assert!(err.request_id.is_none());
    }

    #[test]
    fn test_should_override_default_status() {
        let err = parse_error_response(NOT_FOUND, Some(StatusCode::BAD_REQUEST)).expect("decode");
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_should_fail_without_code() {
        let body = b"<ErrorResponse><Error><Message>no code</Message></Error></ErrorResponse>";
        let err = parse_error_response(body, None).expect_err("missing code");
        assert!(matches!(err, QueryError::MissingElement(ref e) if e == "Code"));
    }

    #[test]
    fn test_should_fail_on_truncated_document() {
        let body = b"<ErrorResponse><Error><Code>NotFound</Code>";
        assert!(parse_error_response(body, None).is_err());
    }

    #[test]
    fn test_should_unescape_entities_in_message() {
        let body = b"<Error><Code>InvalidParameter</Code>\
            <Message>Name must be &lt; 256 &amp; non-empty &#x2713;</Message></Error>";
        let err = parse_error_response(body, None).expect("decode");
        assert_eq!(err.message, "Name must be < 256 & non-empty \u{2713}");
    }

    #[test]
    fn test_should_keep_spaces_around_escaped_characters() {
        let original = SnsError::invalid_parameter("Topic name a & b is <invalid>");
        let err = parse_error_response(&error_to_xml(&original), None).expect("decode");
        assert_eq!(err.message, "Topic name a & b is <invalid>");
    }

    #[test]
    fn test_should_trim_indented_text_once() {
        let body = b"<Error>\n  <Code>\n    NotFound\n  </Code>\n  <Message>\n    a &amp; b\n  </Message>\n</Error>";
        let err = parse_error_response(body, None).expect("decode");
        assert_eq!(err.code, SnsErrorCode::NotFound);
        assert_eq!(err.message, "a & b");
    }

    #[test]
    fn test_should_read_through_markup_inside_message() {
        let body = b"<ErrorResponse><Error><Message>x<b>y</b>z</Message>\
            <Code>InvalidParameter</Code></Error><RequestId>r-2</RequestId></ErrorResponse>";
        let err = parse_error_response(body, None).expect("decode");
        assert_eq!(err.message, "xyz");
        assert_eq!(err.code, SnsErrorCode::InvalidParameter);
        assert_eq!(err.request_id.as_deref(), Some("r-2"));
    }

    #[test]
    fn test_should_decode_what_error_to_xml_writes() {
        let original = SnsError::verification("bad otp", "Pending").with_request_id("r-7");
        let err = parse_error_response(&error_to_xml(&original), None).expect("decode");
        assert_eq!(err.code, original.code);
        assert_eq!(err.message, original.message);
        assert_eq!(err.verification_status, original.verification_status);
        assert_eq!(err.request_id, original.request_id);
        assert_eq!(err.sender_fault, original.sender_fault);
    }
}
