//! snskit - offline companion for the SNS data model.
//!
//! Encodes requests given as JSON into awsQuery form, renders the HTTP
//! request that would be sent, decodes SNS error documents, and parses
//! ARNs. Nothing is sent over the network.
//!
//! # Usage
//!
//! ```text
//! echo '{"Name":"orders"}' | snskit encode CreateTopic
//! snskit request Publish publish.json
//! snskit decode-error --status 404 error.xml
//! snskit arn arn:aws:sns:us-east-1:123456789012:orders
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | `us-east-1` | Region used to derive the endpoint |
//! | `AWS_ENDPOINT_URL_SNS` | *(unset)* | Endpoint override |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use http::{Request, StatusCode};
use snskit_core::{SnsArn, SnsClientConfig, SnsResource};
use snskit_model::{SnsError, SnsOperation};
use snskit_query::{build_json_request, encode_json, error_to_xml, parse_error_response};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "snskit", author, version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a request into `key=value` query pairs
    Encode {
        /// SNS action name, e.g. `CreateTopic`
        action: String,
        /// JSON request file; `-` or absent reads stdin
        input: Option<PathBuf>,
        /// Print the form-encoded body instead of one pair per line
        #[arg(long)]
        form: bool,
    },

    /// Render the HTTP request that would be sent
    Request {
        /// SNS action name
        action: String,
        /// JSON request file; `-` or absent reads stdin
        input: Option<PathBuf>,
        /// Endpoint override (takes precedence over `AWS_ENDPOINT_URL_SNS`)
        #[arg(long)]
        endpoint_url: Option<String>,
        /// Region override (takes precedence over `AWS_REGION`)
        #[arg(long)]
        region: Option<String>,
    },

    /// Decode an SNS `ErrorResponse` document
    DecodeError {
        /// XML file; `-` or absent reads stdin
        input: Option<PathBuf>,
        /// HTTP status the document arrived with
        #[arg(long)]
        status: Option<u16>,
        /// Re-render the decoded error as XML
        #[arg(long)]
        xml: bool,
    },

    /// Parse an SNS ARN
    Arn {
        /// The ARN to parse
        arn: String,
    },

    /// List the supported actions
    Operations,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = SnsClientConfig::from_env();

    init_tracing(&config.log_level, cli.json_logs)?;

    let output = match cli.command {
        Command::Encode {
            action,
            input,
            form,
        } => {
            let operation = parse_operation(&action)?;
            let json = read_input(input.as_deref())?;
            let params = encode_json(operation, &json)
                .with_context(|| format!("failed to encode {operation} request"))?;
            info!(action = %operation, pairs = params.len(), "encoded request");
            if form {
                format!("{}\n", params.to_form_body())
            } else {
                params.to_lines()
            }
        }
        Command::Request {
            action,
            input,
            endpoint_url,
            region,
        } => {
            if let Some(region) = region {
                config.region = region.into();
            }
            if let Some(url) = endpoint_url {
                config.endpoint_url = Some(url);
            }
            let operation = parse_operation(&action)?;
            let json = read_input(input.as_deref())?;
            let request = build_json_request(&config, operation, &json)
                .with_context(|| format!("failed to build {operation} request"))?;
            render_request(&request)
        }
        Command::DecodeError { input, status, xml } => {
            let status = status
                .map(StatusCode::from_u16)
                .transpose()
                .context("invalid HTTP status")?;
            let body = read_input(input.as_deref())?;
            let error =
                parse_error_response(&body, status).context("failed to decode error response")?;
            if xml {
                let mut out = String::from_utf8_lossy(&error_to_xml(&error)).into_owned();
                out.push('\n');
                out
            } else {
                describe_error(&error)
            }
        }
        Command::Arn { arn } => {
            let arn = SnsArn::parse(&arn).with_context(|| format!("invalid ARN: {arn}"))?;
            describe_arn(&arn)
        }
        Command::Operations => list_operations(),
    };

    print!("{output}");
    Ok(())
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout stays
/// machine-readable.
fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

fn parse_operation(action: &str) -> Result<SnsOperation> {
    match SnsOperation::from_name(action) {
        Some(op) => Ok(op),
        None => bail!("unknown SNS action: {action} (see `snskit operations`)"),
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render_request(request: &Request<String>) -> String {
    let mut lines = vec![format!(
        "{} {} {:?}",
        request.method(),
        request.uri(),
        request.version()
    )];
    lines.extend(
        request
            .headers()
            .iter()
            .map(|(name, value)| format!("{name}: {}", String::from_utf8_lossy(value.as_bytes()))),
    );
    lines.push(String::new());
    lines.push(request.body().clone());
    join_lines(&lines)
}

fn describe_error(error: &SnsError) -> String {
    let fault = if error.sender_fault { "sender" } else { "receiver" };
    let mut lines = vec![
        format!("code: {}", error.code_str()),
        format!("message: {}", error.message),
        format!("status: {}", error.status_code.as_u16()),
        format!("fault: {fault}"),
    ];
    if error.is_throttling() {
        lines.push("retryable: true".to_owned());
    }
    if let Some(status) = &error.verification_status {
        lines.push(format!("verification-status: {status}"));
    }
    if let Some(request_id) = &error.request_id {
        lines.push(format!("request-id: {request_id}"));
    }
    join_lines(&lines)
}

fn describe_arn(arn: &SnsArn) -> String {
    let mut lines = vec![
        format!("partition: {}", arn.partition),
        format!("region: {}", arn.region),
        format!("account: {}", arn.account_id),
    ];
    match &arn.resource {
        SnsResource::Topic { name } => {
            lines.extend(["kind: topic".to_owned(), format!("name: {name}")]);
        }
        SnsResource::Subscription { topic, id } => lines.extend([
            "kind: subscription".to_owned(),
            format!("topic: {topic}"),
            format!("id: {id}"),
        ]),
        SnsResource::PlatformApplication { platform, name } => lines.extend([
            "kind: platform-application".to_owned(),
            format!("platform: {platform}"),
            format!("name: {name}"),
        ]),
        SnsResource::Endpoint {
            platform,
            application,
            id,
        } => lines.extend([
            "kind: endpoint".to_owned(),
            format!("platform: {platform}"),
            format!("application: {application}"),
            format!("id: {id}"),
        ]),
    }
    if arn.is_fifo() {
        lines.push("fifo: true".to_owned());
    }
    join_lines(&lines)
}

fn list_operations() -> String {
    let lines: Vec<String> = SnsOperation::ALL
        .iter()
        .map(|op| {
            if op.is_paginated() {
                format!("{op} (paginated)")
            } else {
                op.to_string()
            }
        })
        .collect();
    join_lines(&lines)
}

/// Join lines with a trailing newline.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_should_have_valid_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_should_parse_encode_command() {
        let cli = Cli::try_parse_from(["snskit", "encode", "CreateTopic", "-", "--form"])
            .expect("valid args");
        match cli.command {
            Command::Encode {
                action,
                input,
                form,
            } => {
                assert_eq!(action, "CreateTopic");
                assert_eq!(input.as_deref(), Some(Path::new("-")));
                assert!(form);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_should_reject_unknown_action() {
        let err = parse_operation("CreateQueue").expect_err("not an SNS action");
        assert!(err.to_string().contains("CreateQueue"));
        assert_eq!(
            parse_operation("PublishBatch").expect("known"),
            SnsOperation::PublishBatch
        );
    }

    #[test]
    fn test_should_render_http_request() {
        let config = SnsClientConfig::builder()
            .endpoint_url("http://localhost:4566")
            .build();
        let request = build_json_request(&config, SnsOperation::ListTopics, b"{}")
            .expect("request");
        let rendered = render_request(&request);
        assert!(rendered.starts_with("POST http://localhost:4566/ HTTP/1.1\n"));
        assert!(rendered.contains("content-length: 36\n"));
        assert!(rendered.ends_with("\nAction=ListTopics&Version=2010-03-31\n"));
    }

    #[test]
    fn test_should_describe_error() {
        let error = SnsError::verification("bad code", "Pending").with_request_id("r-1");
        let text = describe_error(&error);
        assert!(text.contains("code: VerificationException\n"));
        assert!(text.contains("fault: sender\n"));
        assert!(text.contains("verification-status: Pending\n"));
        assert!(text.contains("request-id: r-1\n"));
        assert!(!text.contains("retryable"));
    }

    #[test]
    fn test_should_describe_endpoint_arn() {
        let arn = SnsArn::parse("arn:aws:sns:us-east-1:123456789012:endpoint/APNS/ios/abc")
            .expect("valid arn");
        let text = describe_arn(&arn);
        assert!(text.contains("kind: endpoint\n"));
        assert!(text.contains("application: ios\n"));
        assert!(!text.contains("fifo"));
    }

    #[test]
    fn test_should_describe_fifo_subscription_arn_line_by_line() {
        let arn = SnsArn::parse("arn:aws:sns:us-east-1:123456789012:jobs.fifo:42")
            .expect("valid arn");
        assert_eq!(
            describe_arn(&arn),
            "partition: aws\nregion: us-east-1\naccount: 123456789012\n\
             kind: subscription\ntopic: jobs.fifo\nid: 42\nfifo: true\n"
        );
    }

    #[test]
    fn test_should_list_every_operation() {
        let text = list_operations();
        assert_eq!(text.lines().count(), SnsOperation::ALL.len());
        assert!(text.contains("ListTopics (paginated)\n"));
        assert!(text.contains("Publish\n"));
    }
}
