//! `chains init` command — generate a default TOML configuration file.

use std::fs;
use std::path::Path;

use chains::Error;
use chains::config::generate_default_config;

/// Execute the `init` command.
///
/// Writes the configuration template to `output`, or to stdout when
/// `output` is `-`. An existing file is only replaced with `force`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
#[allow(clippy::print_stderr, clippy::print_stdout)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    let template = generate_default_config();
    if output == Path::new("-") {
        print!("{template}");
        return Ok(());
    }

    if output.exists() && !force {
        return Err(Error::config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }
    fs::write(output, template)
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))?;

    #[cfg(feature = "telemetry")]
    tracing::info!(path = %output.display(), "config template written");
    eprintln!("Config file written to {}", output.display());
    Ok(())
}
