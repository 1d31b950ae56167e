use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use netcalc::cli::{self, Cli};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let cli = Cli::parse();
    if let Err(e) = cli::run(cli) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// Use log4rs.yml when present, otherwise a stderr console default.
fn init_logging() {
    if std::path::Path::new("log4rs.yml").exists() {
        if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
            return;
        }
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}
