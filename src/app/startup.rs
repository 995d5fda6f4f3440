use clap::{CommandFactory, FromArgMatches};

use crate::app::cli::args::Args;
use crate::app::commands;
use crate::app::error::AppError;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::styles::palette_to_clap;

/// Parse arguments, apply the config file, set up logging and run the
/// selected command. Returns the process exit status.
pub fn startup() -> i32 {
    let color_hint = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let matches = Args::command()
        .styles(palette_to_clap(color_hint))
        .get_matches();
    let mut args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    // Config errors are reported before logging exists, like argument errors
    let config_path = match args.load_config() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let use_color = args.use_color();
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error: {}", AppError::Logging(e.to_string()));
        return 1;
    }

    log::debug!(
        "pkgmeta {} (build {} {}) starting",
        env!("CARGO_PKG_VERSION"),
        crate::core::version::git_hash(),
        crate::core::version::build_time()
    );
    if let Some(path) = config_path {
        log::debug!("Applied configuration file {}", path.display());
    }
    log::debug!("Final arguments: {:?}", args);

    run_with(&args)
}

/// Run the selected command and print its output. Returns the process
/// exit status: 0 on success, 1 after logging the error.
pub fn run_with(args: &Args) -> i32 {
    match commands::run(args).and_then(|output| commands::emit(output, args.use_color())) {
        Ok(()) => 0,
        Err(e) => {
            log_error_with_context(&e, e.context());
            1
        }
    }
}
