//! `dkd-risk` argument handling and the single calculation it runs.
//!
//! Usage: `dkd-risk [--json] [--config PATH] [--stdin] [--fields] KEY=VALUE...`

use std::fmt;
use std::path::PathBuf;

use dkd_core::{compute_all, format_fingerprint, measurement_fingerprint};

use crate::config::{CalculatorConfig, ConfigError, OutputFormat, resolve_config};
use crate::input::{InputError, MeasurementForm};
use crate::report::{render_json, render_markdown, usage_notes};

/// Exit code for a completed calculation, including tiers with missing fields.
pub const EXIT_OK: u8 = 0;
/// Exit code for bad arguments, input or config.
pub const EXIT_USAGE: u8 = 2;

pub const USAGE: &str =
    "usage: dkd-risk [--json] [--config PATH] [--stdin] [--fields] KEY=VALUE...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Force JSON output regardless of config.
    pub json: bool,
    pub config: Option<PathBuf>,
    /// Read a JSON measurement object from stdin.
    pub stdin: bool,
    /// Print the field guide and exit.
    pub fields: bool,
    pub assignments: Vec<String>,
}

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Input(InputError),
    Config(ConfigError),
    Render(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            CliError::Input(e) => write!(f, "{e}"),
            CliError::Config(e) => write!(f, "{e}"),
            CliError::Render(e) => write!(f, "failed to render report: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::Input(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Render(e) => Some(e),
        }
    }
}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        CliError::Input(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Render(e)
    }
}

pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliArgs, CliError> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter().map(|a| a.as_ref());
    while let Some(arg) = iter.next() {
        match arg {
            "--json" => parsed.json = true,
            "--stdin" => parsed.stdin = true,
            "--fields" => parsed.fields = true,
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            assignment => parsed.assignments.push(assignment.to_string()),
        }
    }
    Ok(parsed)
}

/// Build the form from stdin JSON (if any) overlaid with `KEY=VALUE` args.
fn read_form(args: &CliArgs, stdin_body: Option<&str>) -> Result<MeasurementForm, CliError> {
    let mut form = match (args.stdin, stdin_body) {
        (true, Some(body)) => MeasurementForm::from_json(body)?,
        (true, None) => {
            return Err(CliError::Usage("--stdin given but no input was read".to_string()));
        }
        (false, _) => MeasurementForm::new(),
    };
    let overrides = MeasurementForm::from_assignments(&args.assignments)?;
    form.extend(overrides);
    Ok(form)
}

/// Run one calculation and return the rendered report.
pub fn run_with_config(
    args: &CliArgs,
    config: &CalculatorConfig,
    stdin_body: Option<&str>,
) -> Result<String, CliError> {
    if args.fields {
        return Ok(usage_notes());
    }

    let form = read_form(args, stdin_body)?;
    let measurements = form.into_measurements(config.age_when_absent);
    let report = compute_all(&measurements);

    tracing::info!(
        fingerprint = %format_fingerprint(measurement_fingerprint(&measurements)),
        scored = report.scored_count(),
        "dkd risk computed"
    );

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };
    match format {
        OutputFormat::Json => Ok(render_json(&report)? + "\n"),
        OutputFormat::Markdown => Ok(render_markdown(&report, config)),
    }
}

/// [`run_with_config`] with the config resolved from `--config` or the environment.
pub fn run(args: &CliArgs, stdin_body: Option<&str>) -> Result<String, CliError> {
    let config = resolve_config(args.config.as_deref())?;
    run_with_config(args, &config, stdin_body)
}
