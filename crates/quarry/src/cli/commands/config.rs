//! Implementation of `quarry config`.

use std::process::ExitCode;

use quarry_config::discover_config_files;

use crate::cli::context::CommandContext;

/// Shows the config files in use, the effective settings, and any warnings.
///
/// Exits with failure when the configuration has warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("# no configuration files found; showing defaults");
    } else {
        for path in &files {
            println!("# {}", path.display());
        }
    }

    match ctx.config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: failed to render settings: {e}");
            return ExitCode::FAILURE;
        }
    }

    let warnings = ctx.config.validate();
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    if warnings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
