use anyhow::Result;
use clap::Parser;
use std::{io::IsTerminal, sync::Arc};

use erd_picker::{
    Args, Config, FileSessionStorage, RecordingNavigator,
    logging::{init_logging, parse_early_log_config},
    ui::{CrosstermEventSource, ErdApp, init_terminal, restore_terminal, run_erd_mode, state::ErdModeState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging comes up before clap so argument errors can be traced too
    let raw_args: Vec<String> = std::env::args().collect();
    let _log_guard = init_logging(parse_early_log_config(&raw_args));

    let args = Args::parse();

    if args.create_config {
        Config::create_sample_config()?;
        return Ok(());
    }

    // Resolve configuration from CLI args, environment variables, and config file
    let config = Arc::new(args.resolve_config()?);
    tracing::info!(
        data = config.data(),
        data_source = config.data.source_name(),
        session_dir = %config.session_dir().display(),
        "configuration resolved"
    );

    // A blocking stdin read on the TUI's own terminal would never finish
    config.check_data_source(std::io::stdin().is_terminal())?;

    let navigator = RecordingNavigator::new();
    let mut app = ErdApp::new(
        config.clone(),
        Box::new(FileSessionStorage::new(config.session_dir())),
        Box::new(navigator.clone()),
    );

    let mut terminal = init_terminal()?;

    let result = run_erd_mode(
        &mut terminal,
        &mut app,
        &CrosstermEventSource::new(),
        ErdModeState::initial(),
    )
    .await;

    restore_terminal(&mut terminal)?;

    result?;

    // Hand the selection to the ERD viewer
    if let Some(request) = navigator.last() {
        println!("{}", serde_json::to_string(&request)?);
    }

    Ok(())
}
