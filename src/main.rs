use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use choices::core::config;
use choices::tui;

#[derive(Parser)]
#[command(name = "choices", about = "Put your life in my hands")]
struct Args {
    /// Where to store the option list (default: ~/.choices/options.json)
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - the terminal itself belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("choices.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Choices starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::ChoicesConfig::default()
    });
    let resolved = config::resolve(&file_config, args.data_file);

    tui::run(resolved)
}
