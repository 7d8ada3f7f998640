use clap::Parser;

use camsnap::app::{self, AppSettings};
use camsnap::cli::{self, Args, Command};
use camsnap::config::Config;

fn main() {
    let args = Args::parse();

    match args.command {
        Some(Command::ListCameras) => {
            cli::list_cameras();
        }
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone());
        }
        None => {
            let config = match Config::load(args.config.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let settings = AppSettings::from_sources(&args, &config);
            if let Err(e) = app::run(settings) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
