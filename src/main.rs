// src/main.rs

use log::warn;
use env_logger::Env;
use std::process;
use naturalnum::cli;
use naturalnum::config::NaturalConfig;

fn main() {
    let (config, config_error) = match NaturalConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (NaturalConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("NATURALNUM_LOG", config.log_level.as_str())
        .write_style_or("NATURALNUM_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        warn!("falling back to default configuration: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cli::run(&args, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
