//! Wire-layer error type and the SNS error envelope writer.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use snskit_model::SnsError;

/// The SNS XML namespace.
pub const SNS_NAMESPACE: &str = "http://sns.amazonaws.com/doc/2010-03-31/";

/// Errors raised while encoding requests or decoding responses.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The JSON rendering of a request could not be read.
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended or nested in a way the envelope does not allow.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error decoding XML text content.
    #[error("failed to parse value: {0}")]
    Parse(String),

    /// The HTTP request could not be assembled.
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),

    /// The client configuration cannot address a request.
    #[error(transparent)]
    Config(#[from] snskit_core::CoreError),
}

/// Format an SNS error as an `ErrorResponse` document.
///
/// # Example output
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
///   <Error>
///     <Type>Sender</Type>
///     <Code>NotFound</Code>
///     <Message>Topic does not exist</Message>
///   </Error>
///   <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
/// </ErrorResponse>
/// ```
#[must_use]
pub fn error_to_xml(error: &SnsError) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);
    if let Err(e) = write_error_xml(&mut buf, error) {
        tracing::error!(error = %e, "failed to serialize SNS error XML");
        buf.clear();
    }
    buf
}

fn write_error_xml(buf: &mut Vec<u8>, error: &SnsError) -> io::Result<()> {
    let mut writer = Writer::new(buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let fault = if error.sender_fault { "Sender" } else { "Receiver" };
    writer
        .create_element("ErrorResponse")
        .with_attribute(("xmlns", SNS_NAMESPACE))
        .write_inner_content(|w| {
            w.create_element("Error").write_inner_content(|w| {
                w.create_element("Type")
                    .write_text_content(BytesText::new(fault))?;
                w.create_element("Code")
                    .write_text_content(BytesText::new(error.code_str()))?;
                w.create_element("Message")
                    .write_text_content(BytesText::new(&error.message))?;
                if let Some(status) = &error.verification_status {
                    w.create_element("Status")
                        .write_text_content(BytesText::new(status))?;
                }
                Ok(())
            })?;
            if let Some(request_id) = &error.request_id {
                w.create_element("RequestId")
                    .write_text_content(BytesText::new(request_id))?;
            }
            Ok(())
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use snskit_model::SnsErrorCode;

    use super::*;

    #[test]
    fn test_should_format_sender_error() {
        let error = SnsError::not_found("Topic does not exist").with_request_id("req-1");
        let xml = error_to_xml(&error);
        let xml_str = std::str::from_utf8(&xml).expect("valid UTF-8");

        assert!(xml_str.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml_str.contains(SNS_NAMESPACE));
        assert!(xml_str.contains("<Type>Sender</Type>"));
        assert!(xml_str.contains("<Code>NotFound</Code>"));
        assert!(xml_str.contains("<RequestId>req-1</RequestId>"));
        assert!(!xml_str.contains("<Status>"));
    }

    #[test]
    fn test_should_format_receiver_error_with_escaping() {
        let error = SnsError::with_message(SnsErrorCode::InternalError, "a < b & c");
        let xml = error_to_xml(&error);
        let xml_str = std::str::from_utf8(&xml).expect("valid UTF-8");

        assert!(xml_str.contains("<Type>Receiver</Type>"));
        assert!(xml_str.contains("a &lt; b &amp; c"));
        assert!(!xml_str.contains("<RequestId>"));
    }
}
