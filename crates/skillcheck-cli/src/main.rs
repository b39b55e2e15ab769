//! Skillcheck CLI: directive builder and fixture checker.
//!
//! Command-line interface for building skill directives from partial requests
//! and checking captured skill responses against expected fixtures.

// CLI-specific lint allowances (CLI binary, not library)
#![allow(missing_docs)]
#![allow(clippy::print_stdout)] // CLI must print to stdout
#![allow(clippy::print_stderr)] // CLI must print to stderr
#![allow(clippy::exit)] // CLI uses exit codes

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use skillcheck::assertions::{
    assert_captured_calls, assert_captured_result, assert_discovered_appliances,
    assert_discovered_endpoints,
};
use skillcheck::directive::build_directive;
use skillcheck::fixture::{
    discovered_entities, load_directive_request, load_fixture_file, results_by_id,
};
use skillcheck::model::DiscoveryKind;
use skillcheck::{CheckError, CheckResult};
use std::io;
use std::path::{Path, PathBuf};

mod logging;

/// Color output mode
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and `NO_COLOR` env
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Which assertion `check` runs.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum CheckKind {
    /// Legacy discovered appliances against results keyed by `applianceId`
    Appliances,
    /// Discovered endpoints against results keyed by `endpointId`
    Endpoints,
    /// Subset match of a captured response
    Result,
    /// Exact match of a captured call log
    Calls,
}

impl CheckKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Appliances => "appliances",
            Self::Endpoints => "endpoints",
            Self::Result => "result",
            Self::Calls => "calls",
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "skillcheck",
    version,
    about = "Build smart-home skill directives and check responses against fixtures"
)]
struct Cli {
    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorMode,

    /// Log filter (overrides SKILLCHECK_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a complete directive from a partial request file
    Directive {
        #[arg(long, help = "Partial directive request (.json, .yaml or .yml)")]
        request: PathBuf,
        #[arg(long, help = "Wrap the output in a {\"directive\": ...} event")]
        event: bool,
    },
    /// Check a captured response against an expected fixture
    Check {
        #[arg(value_enum)]
        kind: CheckKind,
        #[arg(long, help = "Captured value (.json, .yaml or .yml)")]
        actual: PathBuf,
        #[arg(
            long,
            help = "Expected fixture; result and calls checks pass when omitted"
        )]
        expected: Option<PathBuf>,
        #[arg(long, help = "Print the outcome as JSON")]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        #[arg(value_enum, help = "Shell to generate completions for")]
        shell: Shell,
    },
}

/// Configure color output based on CLI flag and environment
fn configure_colors(mode: ColorMode) -> bool {
    let use_color = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable
            if std::env::var("NO_COLOR").is_ok() {
                false
            } else {
                supports_color::on(supports_color::Stream::Stderr).is_some()
            }
        }
    };

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(use_color)
                .unicode(use_color)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set
    use_color
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let use_color = configure_colors(cli.color);
    logging::init(cli.log_level.as_deref(), use_color);
    match cli.command {
        Commands::Directive { request, event } => cmd_directive(&request, event),
        Commands::Check {
            kind,
            actual,
            expected,
            json,
        } => cmd_check(kind, &actual, expected.as_deref(), json),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

// =============================================================================
// Command Handlers
// =============================================================================

/// Handle the directive command.
fn cmd_directive(request_path: &Path, event: bool) -> Result<()> {
    let request = match load_directive_request(request_path) {
        Ok(request) => request,
        Err(err) => return emit_failure(false, &err),
    };
    let directive = build_directive(&request);
    let output = if event {
        directive.to_event()
    } else {
        serde_json::to_value(&directive).into_diagnostic()?
    };
    println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    Ok(())
}

/// Handle the check command.
fn cmd_check(kind: CheckKind, actual: &Path, expected: Option<&Path>, json: bool) -> Result<()> {
    tracing::info!(
        kind = kind.as_str(),
        actual = %actual.display(),
        "running check"
    );
    match run_check(kind, actual, expected) {
        Ok(()) => {
            if json {
                let payload = serde_json::json!({ "status": "passed", "check": kind.as_str() });
                println!("{payload}");
            } else {
                eprintln!("check passed: {}", kind.as_str());
            }
            Ok(())
        }
        Err(err) => emit_failure(json, &err),
    }
}

/// Handle the completions command.
#[allow(clippy::unnecessary_wraps)] // Consistent with other command handlers
fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn run_check(kind: CheckKind, actual: &Path, expected: Option<&Path>) -> CheckResult<()> {
    let actual_value: Value = load_fixture_file(actual)?;
    let expected_value: Option<Value> = expected.map(load_fixture_file::<Value>).transpose()?;
    match kind {
        CheckKind::Result => assert_captured_result(&actual_value, expected_value.as_ref()),
        CheckKind::Calls => {
            let actual_calls = as_list(&actual_value, "actual")?;
            let expected_calls = expected_value
                .as_ref()
                .map(|value| as_list(value, "expected"))
                .transpose()?;
            assert_captured_calls(actual_calls, expected_calls)
        }
        CheckKind::Appliances => {
            let (entities, results) =
                discovery_inputs(DiscoveryKind::Appliances, &actual_value, expected_value)?;
            assert_discovered_appliances(&entities, &results)
        }
        CheckKind::Endpoints => {
            let (entities, results) =
                discovery_inputs(DiscoveryKind::Endpoints, &actual_value, expected_value)?;
            assert_discovered_endpoints(&entities, &results)
        }
    }
}

fn discovery_inputs(
    kind: DiscoveryKind,
    actual: &Value,
    expected: Option<Value>,
) -> CheckResult<(Vec<Value>, skillcheck::model::ResultsById)> {
    let Some(expected) = expected else {
        return Err(CheckError::cli_invalid_arg(format!(
            "--expected is required for {} checks",
            kind.label()
        )));
    };
    Ok((discovered_entities(kind, actual)?, results_by_id(expected)?))
}

fn as_list<'a>(value: &'a Value, label: &str) -> CheckResult<&'a [Value]> {
    value.as_array().map(Vec::as_slice).ok_or_else(|| {
        CheckError::decode(format!("{label} calls must be a list"), value)
    })
}

fn emit_failure(json: bool, err: &CheckError) -> Result<()> {
    if json {
        let payload = serde_json::to_string(&err.to_error_info()).into_diagnostic()?;
        println!("{payload}");
    } else {
        eprintln!("{:?}", miette::Report::new(err.clone()));
    }
    std::process::exit(err.exit_code());
}
