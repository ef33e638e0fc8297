use UnitOpsCalc::cli::cli_main::run_interactive_menu;
use simplelog::{Config, LevelFilter, SimpleLogger};

pub fn main() {
    // the logger itself lets everything through; the global max level decides,
    // so that a task file can lower or raise it
    match SimpleLogger::init(LevelFilter::Trace, Config::default()) {
        Ok(()) => log::set_max_level(LevelFilter::Info),
        Err(e) => eprintln!("Failed to initialise logger: {}", e),
    }
    run_interactive_menu();
}
