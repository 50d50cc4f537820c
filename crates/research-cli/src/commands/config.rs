//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the `--config` override; the default location is used otherwise.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let target = match path {
                Some(p) => p.to_path_buf(),
                None => Config::path()?,
            };
            init_config(&target, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", target.display()))
            );
            Ok(())
        }
    }
}

/// Write the default configuration to `path`, refusing to overwrite unless forced.
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)
}
