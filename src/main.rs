use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use askbox::client::HttpAnswerClient;
use askbox::core::config::{self, AskboxConfig, ConfigError, EnvOverrides, ResolvedConfig};
use askbox::core::state::Session;
use askbox::{cycle, tui};

#[derive(Parser)]
#[command(name = "askbox", about = "Terminal chat for a question-answering service")]
struct Args {
    /// Answer service URL (overrides config file and ASKBOX_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Ask one question, print the reply and exit instead of opening the TUI
    #[arg(short, long)]
    question: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config decides where the log goes, so its problems are held until
    // the logger is up.
    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (AskboxConfig::default(), Some(e)),
    };
    let config = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        args.endpoint.as_deref(),
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!("Askbox starting up, endpoint: {}", config.endpoint);
    report_config(load_error, &config);

    match args.question {
        Some(question) => ask_once(&config.endpoint, question).await,
        None => tui::run(config),
    }
}

fn report_config(load_error: Option<ConfigError>, config: &ResolvedConfig) {
    if let Some(e) = load_error {
        log::warn!("Failed to load config, using defaults: {}", e);
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    match config::config_path() {
        Some(path) => match config::ensure_default_config(&path) {
            Ok(true) => log::info!(
                "No config file found, generated default at {}",
                path.display()
            ),
            Ok(false) => log::info!("Config file: {}", path.display()),
            Err(e) => log::warn!("Failed to write default config: {}", e),
        },
        None => log::warn!("Could not determine home directory, using default config"),
    }
    log::debug!("Resolved config: {:?}", config);
}

/// `--question` mode: one submission cycle, reply on stdout.
async fn ask_once(endpoint: &str, question: String) -> std::io::Result<()> {
    let client = HttpAnswerClient::new(endpoint.to_string());
    let mut session = Session::new();

    if !cycle::submit_and_settle(&mut session, &client, question).await {
        eprintln!("askbox: nothing to ask (empty question)");
        return Ok(());
    }

    if let Some(reply) = session.history().last() {
        println!("{}", reply.content());
    }
    Ok(())
}
