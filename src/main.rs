use std::process;
use log::{error, LevelFilter};

use geotagkit::commands::{build_cli, CommandFactory, GeoTagCommandFactory};
use geotagkit::utils::logger::Logger;

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let matches = build_cli().get_matches();
    let level = level_for(matches.get_count("verbose"));

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let factory = GeoTagCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
