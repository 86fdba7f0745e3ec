//! `figpick edit` / `figpick list` — figure selection from a directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::Args;
use figpick_core::{Config, PickKey, PickerOptions, pick};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Directory containing figure files (defaults to the configured one)
    dir: Option<PathBuf>,
}

/// Pick a figure and open it in the configured editor.
///
/// Custom action 1 (selector status 10) reveals the figures directory in the
/// system file browser instead; a cancelled or undefined result does nothing.
pub fn edit(args: &EditArgs) -> Result<()> {
    let config = Config::load();
    let dir = args.dir.clone().unwrap_or_else(|| config.figures_dir.clone());

    let files = crate::figures::figure_files(&dir, &config.extensions)?;
    if files.is_empty() {
        bail!("no figure files under {}", dir.display());
    }
    let labels: Vec<String> = files.iter().map(|p| crate::figures::label(p)).collect();

    let opts = PickerOptions::new().fuzzy(config.fuzzy).prompt(&config.prompt);
    let selection = pick(&labels, &opts)?;

    match selection.key {
        PickKey::Selected => {
            let Some(index) = selection.index else {
                bail!("{:?} is not a known figure", selection.selected);
            };
            open_editor(&config.editor, &files[index])
        }
        PickKey::Custom(1) => reveal(&dir),
        PickKey::Cancelled => {
            debug!("selection cancelled");
            Ok(())
        }
        key => {
            debug!(?key, "ignoring selector result");
            Ok(())
        }
    }
}

/// Print the figure labels a directory would offer, one per line.
#[allow(clippy::print_stdout)]
pub fn list(args: &EditArgs) -> Result<()> {
    let config = Config::load();
    let dir = args.dir.clone().unwrap_or_else(|| config.figures_dir.clone());

    for file in crate::figures::figure_files(&dir, &config.extensions)? {
        println!("{}", crate::figures::label(&file));
    }
    Ok(())
}

/// Launch the editor on the figure without waiting for it to exit.
fn open_editor(editor: &str, path: &Path) -> Result<()> {
    info!("opening {} with {editor}", path.display());
    Command::new(editor)
        .arg(path)
        .spawn()
        .with_context(|| format!("launching {editor}"))?;
    Ok(())
}

/// Open the figures directory in the system file browser.
fn reveal(dir: &Path) -> Result<()> {
    let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
    info!("revealing {} with {opener}", dir.display());
    Command::new(opener)
        .arg(dir)
        .spawn()
        .with_context(|| format!("launching {opener}"))?;
    Ok(())
}
