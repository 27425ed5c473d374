//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the fit pipeline
//! - prints the per-series summary
//! - writes optional exports
//! - shows the interactive display

use std::io::IsTerminal;

use clap::Parser;

use crate::cli::Cli;
use crate::domain::RunConfig;
use crate::error::Result;

pub mod pipeline;

/// Entry point for the `anscombe` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init_logger(cli.verbose);

    let config = run_config_from_args(&cli);
    tracing::debug!(?config, "resolved run config");

    let run = pipeline::run_analysis(&config)?;

    println!("{}", crate::report::format_report(&run.analyses));

    if let Some(path) = &config.export_json {
        crate::io::write_summary_json(path, &config.data_path, &run.analyses)?;
    }
    if let Some(path) = &config.save_svg {
        crate::plot::save_svg(path, &run.figure, crate::plot::DEFAULT_SVG_SIZE)?;
    }

    if config.display {
        if std::io::stdout().is_terminal() {
            crate::tui::show(&run.figure, &config.data_path.display().to_string())?;
        } else {
            tracing::warn!("stdout is not a terminal, skipping interactive display");
        }
    }

    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        data_path: cli.data.clone(),
        display: !cli.no_display,
        save_svg: cli.save.clone(),
        export_json: cli.export.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_display_flag_turns_display_off() {
        let cli = Cli::parse_from(["anscombe", "--no-display", "--save", "q.svg"]);
        let config = run_config_from_args(&cli);
        assert!(!config.display);
        assert_eq!(config.save_svg.as_deref(), Some(std::path::Path::new("q.svg")));
        assert!(config.export_json.is_none());
    }
}
