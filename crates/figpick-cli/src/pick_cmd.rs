//! `figpick pick` — pick one line from stdin with the platform selector.
//!
//! The process exit code mirrors the normalized key so shell callers can
//! branch on the result: 0 confirmed, 1 cancelled, 2 undefined selector
//! status, `9 + N` for custom action N (the selector's raw status).

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use figpick_core::{PickKey, PickerOptions, pick};

#[derive(Debug, Args)]
pub struct PickArgs {
    /// Prompt text shown by the selector
    #[arg(short, long, default_value = "Input")]
    prompt: String,

    /// Disable fuzzy matching
    #[arg(long)]
    no_fuzzy: bool,

    /// Print the zero-based index of the selection (-1 if absent) instead of
    /// its text
    #[arg(long)]
    print_index: bool,

    /// Extra arguments passed through to the selector, after `--`
    #[arg(last = true)]
    extra: Vec<String>,
}

#[allow(clippy::print_stdout)]
pub fn run(args: &PickArgs) -> Result<ExitCode> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading options from stdin")?;
    let options = parse_options(&input);

    let opts = PickerOptions::new()
        .fuzzy(!args.no_fuzzy)
        .prompt(&args.prompt)
        .extra_args(args.extra.iter());

    let selection = pick(&options, &opts)?;

    if args.print_index {
        match selection.index {
            Some(i) => println!("{i}"),
            None => println!("-1"),
        }
    } else if !selection.selected.is_empty() {
        println!("{}", selection.selected);
    }

    Ok(ExitCode::from(exit_code(selection.key)))
}

/// Non-empty stdin lines become the option list, in order.
fn parse_options(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

fn exit_code(key: PickKey) -> u8 {
    match key {
        PickKey::Selected => 0,
        PickKey::Cancelled => 1,
        PickKey::Other(_) => 2,
        // mirror the selector's raw status where it fits
        PickKey::Custom(n) => u8::try_from(n + 9).unwrap_or(2),
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let options = parse_options("fig-a\n\n  \nfig-b\n");
        assert_eq!(options, vec!["fig-a".to_string(), "fig-b".to_string()]);
    }

    #[test]
    fn exit_codes_mirror_the_selector_contract() {
        assert_eq!(exit_code(PickKey::Selected), 0);
        assert_eq!(exit_code(PickKey::Cancelled), 1);
        assert_eq!(exit_code(PickKey::Other(Some(5))), 2);
        assert_eq!(exit_code(PickKey::Other(None)), 2);
        assert_eq!(exit_code(PickKey::Custom(3)), 12);
    }

    #[test]
    fn out_of_range_custom_keys_fall_back_to_the_undefined_code() {
        assert_eq!(exit_code(PickKey::Custom(1000)), 2);
    }
}
