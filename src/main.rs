use metrux_settings::{EnvTable, load_document, resolve_settings};
use std::env;
use std::process::ExitCode;
use tracing::{Level, debug, error};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "config/metrux.yml";

fn parse_arg(name: &str) -> Option<String> {
    let flag = format!("--{}=", name);
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(&flag).map(str::to_string))
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Logs go to stderr so stdout carries only the JSON output.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let env_table = EnvTable::from_process();
    let config_path = parse_arg("config").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let environment = parse_arg("env");

    let document = match load_document(&config_path, environment.as_deref(), &env_table) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(document.log_level.as_deref());
    debug!(config = %config_path, section = ?document.section, "Config loaded");

    let settings = match resolve_settings(&document, &env_table) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Failed to resolve metrics settings");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&settings) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize settings");
            ExitCode::FAILURE
        }
    }
}
