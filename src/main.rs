use holyhell::config::{Config, USAGE};
use holyhell::gui;
use holyhell::logging::FileLogger;

fn main() -> eframe::Result {
    if let Err(e) = FileLogger::init() {
        eprintln!("{e}");
    }

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            log::logger().flush();
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };
    log::info!("starting with {config:?}");

    if config.print_only {
        print!("{}", config.layout.board());
        return Ok(());
    }

    gui::launch::launch(&config)
}
