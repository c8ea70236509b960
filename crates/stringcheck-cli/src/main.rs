use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_appender::rolling;
use tracing_subscriber::Layer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod ui;

#[derive(Parser)]
#[command(
    name = "stringcheck",
    version,
    about = "Validate format placeholders in translated strings.xml files against the English reference"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Only log warnings and errors to the console
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare every locale's placeholders with the reference locale
    Validate {
        /// Resource root to search for strings.xml (falls back to resources_path in stringcheck.toml)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Incoming-webhook URL the report is posted to
        #[arg(long, env = "STRINGCHECK_WEBHOOK")]
        webhook: Option<String>,
        /// Send the report to the webhook: true/false (unset or empty means false)
        #[arg(long, env = "STRINGCHECK_REPORT_TO_REMOTE")]
        report_to_remote: Option<String>,
        /// Free text appended to the end of the report
        #[arg(long, env = "STRINGCHECK_REPORT_PAYLOAD")]
        payload: Option<String>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Exit with an error when any issue was found
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// List discovered strings.xml files with their locale and key count
    Scan {
        #[arg(short, long)]
        root: Option<PathBuf>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Write JSON Schemas of the machine-readable outputs
    Schema {
        #[arg(long, default_value = "./docs/schemas")]
        out_dir: PathBuf,
    },
}

impl Commands {
    /// Subcommand name for logs. Arguments stay out: the webhook URL is a secret.
    fn name(&self) -> &'static str {
        match self {
            Commands::Validate { .. } => "validate",
            Commands::Scan { .. } => "scan",
            Commands::Schema { .. } => "schema",
        }
    }
}

trait Runnable {
    fn run(self) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self) -> Result<()> {
        let cmd_name = self.name();
        info!(event = "command_start", command = cmd_name);

        let result = match self {
            Commands::Validate {
                root,
                webhook,
                report_to_remote,
                payload,
                format,
                strict,
            } => commands::validate::run_validate(commands::validate::ValidateArgs {
                root,
                webhook,
                report_to_remote,
                payload,
                format,
                strict,
            }),
            Commands::Scan { root, format } => commands::scan::run_scan(root, format),
            Commands::Schema { out_dir } => commands::schema::run_schema(out_dir),
        };

        match &result {
            Ok(_) => info!(event = "command_done", command = cmd_name),
            Err(e) => error!(event = "command_failed", command = cmd_name, error = ?e),
        }

        result
    }
}

/// ureq logs request URLs below warn; the webhook URL must not reach the logs.
fn quiet_http(filter: EnvFilter) -> EnvFilter {
    match "ureq=warn".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

fn init_tracing(quiet: bool, use_color: bool) -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = std::env::var("STRINGCHECK_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let file_appender = rolling::daily(log_dir, "stringcheck.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if quiet { "warn" } else { "info" };
    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .with_filter(quiet_http(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        ));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(quiet_http(EnvFilter::new("debug")));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let use_color = !cli.no_color
        && std::io::stderr().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let _ = ui::USE_COLOR.set(use_color);
    let _guard = init_tracing(cli.quiet, use_color);
    debug!(event = "cli_parsed", use_color = use_color, quiet = cli.quiet);

    cli.cmd.run()
}
