use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dtx_lib::output::DTX_OUTPUT_VERSION;
use dtx_lib::{DtxError, DtxOutput, ErrorOutput};
use serde_json::Value;

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &DtxOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string(body)?,
        // Human text only on an interactive stdout; files and pipes keep the JSON shape.
        OutputFormat::Pretty if output.is_none() && io::stdout().is_terminal() => {
            format_pretty(body, true)
        }
        OutputFormat::Pretty => serde_json::to_string_pretty(body)?,
    };
    emit(&content, output.as_deref())?;
    Ok(())
}

/// Render an error and return exit code 2.
///
/// The payload goes where regular output would; if that fails it falls back to stdout.
pub fn render_error(err: DtxError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    tracing::debug!(error = %err, "command failed");
    let payload = err.to_payload();
    let body = DtxOutput::Error(ErrorOutput {
        version: DTX_OUTPUT_VERSION.to_string(),
        message: Some(payload.message.clone()),
        error: payload,
    });

    if let Err(write_err) = write_output(&body, format, output) {
        tracing::error!(error = %write_err, "failed to write error output");
        let fallback =
            serde_json::to_string(&body).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
        println!("{fallback}");
    }
    ExitCode::from(2)
}

fn emit(content: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &DtxOutput, colorize: bool) -> String {
    match body {
        DtxOutput::Extract(out) => {
            let mut buf = String::new();
            let title = out.document.as_deref().unwrap_or("document");
            writeln!(buf, "{} Design tokens for {}", color("[OK]", "32", colorize), title).ok();
            for (name, record) in &out.tokens {
                match record {
                    Value::Null => {
                        writeln!(buf, "- {}: {}", name, color("absent", "90", colorize)).ok();
                    }
                    record => {
                        writeln!(
                            buf,
                            "- {}: {} light, {} dark",
                            name,
                            entry_count(record, "light"),
                            entry_count(record, "dark")
                        )
                        .ok();
                    }
                }
            }
            buf
        }
        DtxOutput::Categories(out) => {
            let mut buf = String::new();
            for category in &out.categories {
                writeln!(buf, "{category}").ok();
            }
            buf
        }
        DtxOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

/// Number of entries (variants, roles or scales) in one mode of a record.
fn entry_count(record: &Value, mode: &str) -> usize {
    record
        .get(mode)
        .and_then(Value::as_object)
        .map_or(0, |entries| entries.len())
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtx_lib::error::{ErrorCategory, ErrorPayload};
    use dtx_lib::{CategoriesOutput, Category, TokenOutput};
    use serde_json::{json, Map};
    use tempfile::tempdir;

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let code = render_error(
            DtxError::Config("boom".to_string()),
            OutputFormat::Json,
            None,
        );
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn render_error_writes_payload_to_output_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("error.json");
        render_error(
            DtxError::Document("not a node".to_string()),
            OutputFormat::Json,
            Some(path.clone()),
        );
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(written["mode"], "error");
        assert_eq!(written["error"]["category"], "document");
    }

    #[test]
    fn pretty_error_to_file_keeps_json_shape() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("error.json");
        render_error(
            DtxError::Correction {
                name: "buttons".to_string(),
                message: "expected value".to_string(),
            },
            OutputFormat::Pretty,
            Some(path.clone()),
        );
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(written["error"]["category"], "correction");
    }

    #[test]
    fn unwritable_error_output_still_exits_fatally() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("error.json");
        let code = render_error(
            DtxError::Unknown("x".to_string()),
            OutputFormat::Json,
            Some(path.clone()),
        );
        assert_eq!(code, ExitCode::from(2));
        assert!(!path.exists());
    }

    #[test]
    fn format_pretty_summarizes_categories() {
        let mut tokens = Map::new();
        tokens.insert(
            "buttons".into(),
            json!({"light": {"primary": {}, "secondary": {}}, "dark": {"primary": {}}}),
        );
        tokens.insert("badges".into(), Value::Null);
        let output = DtxOutput::Extract(TokenOutput::new(Some("Kit".into()), tokens));

        let text = format_pretty(&output, false);
        assert!(text.contains("Design tokens for Kit"));
        assert!(text.contains("- buttons: 2 light, 1 dark"));
        assert!(text.contains("- badges: absent"));
    }

    #[test]
    fn format_pretty_lists_category_names() {
        let output = DtxOutput::Categories(CategoriesOutput {
            version: DTX_OUTPUT_VERSION.to_string(),
            categories: vec![Category::Buttons, Category::NavMenus],
        });
        assert_eq!(format_pretty(&output, false), "buttons\nnav-menus\n");
    }

    #[test]
    fn format_pretty_handles_errors() {
        let output = DtxOutput::Error(ErrorOutput {
            version: DTX_OUTPUT_VERSION.to_string(),
            message: None,
            error: ErrorPayload {
                category: ErrorCategory::Config,
                message: "Config file not found: dtx.toml".to_string(),
                remediation: Some("Verify the file exists.".to_string()),
            },
        });

        let text = format_pretty(&output, false);
        assert!(text.contains("[ERROR] Config file not found: dtx.toml"));
        assert!(text.contains("Hint: Verify the file exists."));
    }
}
