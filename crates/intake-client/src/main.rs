//! Astrology intake form: terminal submitter.
//!
//! Fills the intake form from command-line flags, fires one submit, and
//! reports the result the way the web form would: field errors and a status
//! line on stdout, diagnostics on stderr through `tracing`.
//!
//! # Usage
//!
//! ```text
//! intake-submit [OPTIONS]
//!
//! Options:
//!   --config <PATH>          Config file [default: intake.toml]
//!   --webhook-url <URL>      Webhook destination (overrides the config file)
//!   --timeout-secs <SECS>    Request timeout; unbounded when absent
//!   --log-level <LEVEL>      Log filter when RUST_LOG is unset
//!   --full-name, --email, --date-of-birth, --time-of-birth, --place-of-birth,
//!   --gender, --focus-area, --extra-context <TEXT>
//!   --consent                Acknowledge the guidance disclaimer
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Description                        |
//! |-----------------------|------------------------------------|
//! | `INTAKE_CONFIG`       | Config file path                   |
//! | `INTAKE_WEBHOOK_URL`  | Webhook destination                |
//! | `INTAKE_TIMEOUT_SECS` | Request timeout in seconds         |
//!
//! # Exit status
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | Webhook accepted the submission          |
//! | 1    | Event not handled, or already in flight  |
//! | 2    | One or more fields failed validation     |
//! | 3    | Webhook URL not configured               |
//! | 4    | Network failure or non-2xx response      |

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use intake_client::application::{
    FormHost, SubmissionController, SubmissionError, SubmitOutcome,
};
use intake_client::domain::IntakeConfig;
use intake_client::infrastructure::storage::DEFAULT_CONFIG_FILE;
use intake_client::infrastructure::{load_config, ConsoleForm, ReqwestTransport};
use intake_core::FormInputs;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Submit the astrology intake form to its webhook.
#[derive(Debug, Parser)]
#[command(
    name = "intake-submit",
    about = "Validate the astrology intake form and forward it to the webhook",
    version
)]
struct Cli {
    /// Path of the TOML config file.  A missing file means "all defaults".
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "INTAKE_CONFIG")]
    config: PathBuf,

    /// Webhook destination URL.  Takes precedence over the config file.
    #[arg(long, env = "INTAKE_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Upper bound on the webhook request in seconds.
    #[arg(long, env = "INTAKE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long, default_value = "")]
    full_name: String,

    #[arg(long, default_value = "")]
    email: String,

    /// Date of birth, e.g. `1990-04-12`.
    #[arg(long, default_value = "")]
    date_of_birth: String,

    /// Time of birth, e.g. `06:45`.
    #[arg(long, default_value = "")]
    time_of_birth: String,

    #[arg(long, default_value = "")]
    place_of_birth: String,

    #[arg(long, default_value = "")]
    gender: String,

    /// Area of focus for the reading, e.g. `career`.
    #[arg(long, default_value = "")]
    focus_area: String,

    /// Anything else the reader should know.
    #[arg(long, default_value = "")]
    extra_context: String,

    /// Acknowledge the guidance disclaimer.
    #[arg(long)]
    consent: bool,
}

impl Cli {
    /// Splits the arguments into runtime config and form values.
    ///
    /// Flags win over values from the config file.
    fn into_parts(self, file: IntakeConfig) -> (IntakeConfig, FormInputs) {
        let config = IntakeConfig {
            webhook_url: self.webhook_url.or(file.webhook_url),
            request_timeout_secs: self.timeout_secs.or(file.request_timeout_secs),
            log_level: self.log_level.unwrap_or(file.log_level),
        };
        let inputs = FormInputs {
            full_name: self.full_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            time_of_birth: self.time_of_birth,
            place_of_birth: self.place_of_birth,
            gender: self.gender,
            focus_area: self.focus_area,
            extra_context: self.extra_context,
            consent: self.consent,
        };
        (config, inputs)
    }
}

fn exit_code(outcome: Option<&SubmitOutcome>) -> u8 {
    match outcome {
        Some(SubmitOutcome::Submitted) => 0,
        Some(SubmitOutcome::Failed(SubmissionError::Validation(_))) => 2,
        Some(SubmitOutcome::Failed(SubmissionError::Configuration(_))) => 3,
        Some(SubmitOutcome::Failed(SubmissionError::Transport(_))) => 4,
        Some(SubmitOutcome::Busy) | None => 1,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let file_config = load_config(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    let (config, inputs) = cli.into_parts(file_config);

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // RUST_LOG wins; otherwise the configured level.  Logs go to stderr so
    // stdout carries only the rendered form.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        configured = config.webhook_url.is_some(),
        timeout = ?config.request_timeout(),
        "astrology intake submitter starting"
    );

    let transport = ReqwestTransport::new(config.request_timeout())
        .context("failed to build HTTP client")?;

    // ── Wire the form ─────────────────────────────────────────────────────────
    let form = Arc::new(ConsoleForm::new(inputs, std::io::stdout()));
    let controller = SubmissionController::new(&config, form.clone(), Arc::new(transport));
    form.on_submit(Arc::new(controller));
    form.mark_ready();

    let outcome = form.submit().await;
    Ok(ExitCode::from(exit_code(outcome.as_ref())))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
