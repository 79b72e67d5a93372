//! Roster - course roster manager
//!
//! Interactive command line tool for managing the students of one course.

use clap::Parser;

use roster::cli::{Cli, Commands};
use roster::ui::{Palette, report_error};
use roster::{commands, logging};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let palette = if cli.no_color {
        Palette::plain()
    } else {
        Palette::detect()
    };
    let overrides = cli.overrides();

    let result = match cli.command {
        None | Some(Commands::Session) => commands::session::run(overrides, palette),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        let stderr_palette = Palette::new(!cli.no_color && console::colors_enabled_stderr());
        let _ = report_error(&mut std::io::stderr(), stderr_palette, &e);
        std::process::exit(1);
    }
}
