//! Picker command construction and invocation.
//!
//! Builds the argument vector for the platform's fuzzy selector (`rofi` in
//! dmenu mode on Linux, `choose` on macOS), feeds it the newline-joined
//! option list over stdin, and normalizes the exit status and stdout into a
//! [`Selection`].

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};
use crate::platform::{PlatformKind, is_wayland};

/// Options controlling how the picker command is built.
#[derive(Debug, Clone)]
pub struct PickerOptions {
    /// Enable fuzzy matching mode (`-matching fuzzy` for rofi).
    pub fuzzy: bool,
    /// Prompt text shown by the selector.
    pub prompt: String,
    /// Extra arguments appended after the platform-specific base, in order.
    pub extra_args: Vec<String>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            prompt: "Input".to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Append one extra selector argument. Non-string values (e.g. a line
    /// count) arrive as their `ToString` form.
    #[must_use]
    pub fn extra_arg(mut self, arg: impl ToString) -> Self {
        self.extra_args.push(arg.to_string());
        self
    }

    /// Append several extra selector arguments, in order.
    #[must_use]
    pub fn extra_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.extra_args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }
}

/// Normalized signal derived from the selector's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKey {
    /// Exit 0: a selection was confirmed.
    Selected,
    /// Exit 1: the user cancelled.
    Cancelled,
    /// Exit above 9: custom keybinding N (rofi reports `kb-custom-N` as
    /// status `9 + N`).
    Custom(i32),
    /// Any other status: exit codes 2 through 9 carry the raw code, death by
    /// signal carries `None`. The dmenu contract does not define these.
    Other(Option<i32>),
}

impl PickKey {
    fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => Self::Selected,
            Some(1) => Self::Cancelled,
            Some(n) if n > 9 => Self::Custom(n - 9),
            other => Self::Other(other),
        }
    }

    /// Integer encoding of the signal: 0 confirmed, -1 cancelled, positive N
    /// for custom action N, -2 for anything outside the selector contract.
    pub const fn code(self) -> i32 {
        match self {
            Self::Selected => 0,
            Self::Cancelled => -1,
            Self::Custom(n) => n,
            Self::Other(_) => -2,
        }
    }
}

/// Outcome of one picker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Normalized exit-status signal.
    pub key: PickKey,
    /// Position of `selected` within the (trimmed) option list, if any.
    /// `None` covers both "no match" and "user typed custom text".
    pub index: Option<usize>,
    /// Trimmed selector stdout.
    pub selected: String,
}

impl PlatformKind {
    /// Assemble the selector argument vector for this platform.
    ///
    /// No execution happens here. The Wayland check reads the live
    /// environment, so the result can change between calls.
    pub fn picker_command(self, opts: &PickerOptions) -> Vec<String> {
        let mut args = match self {
            Self::Linux => linux_args(opts, is_wayland()),
            Self::MacOs => vec!["choose".to_string()],
        };
        args.extend(opts.extra_args.iter().cloned());
        args
    }
}

fn linux_args(opts: &PickerOptions, wayland: bool) -> Vec<String> {
    let mut args = vec!["rofi", "-sort", "-no-levenshtein-sort"];
    if opts.fuzzy {
        args.extend(["-matching", "fuzzy"]);
    }
    args.extend(["-dmenu", "-p", &opts.prompt, "-format", "s", "-i", "-lines", "5"]);
    if wayland {
        // rofi's default overlay window misbehaves under Wayland compositors
        args.push("-normal-window");
    }
    args.into_iter().map(String::from).collect()
}

/// Build the full selector argument vector for the detected platform.
pub fn build_picker_command(opts: &PickerOptions) -> Result<Vec<String>> {
    Ok(PlatformKind::detect()?.picker_command(opts))
}

/// Run the platform selector over `options` and normalize its result.
///
/// A single blocking round trip: the calling thread is suspended until the
/// selector exits. No timeout or retry exists at this layer.
pub fn pick<S: AsRef<str>>(options: &[S], opts: &PickerOptions) -> Result<Selection> {
    let cmd = build_picker_command(opts)?;
    pick_with_command(&cmd, options)
}

/// Run an explicit selector argv over `options`.
///
/// Embedded newlines in an option are flattened to single spaces before the
/// list goes on the wire, since the dmenu protocol delimits entries by
/// newline; index lookup uses the flattened form.
pub fn pick_with_command<S: AsRef<str>>(cmd: &[String], options: &[S]) -> Result<Selection> {
    let (program, args) = cmd.split_first().ok_or(Error::EmptyCommand)?;

    let flattened: Vec<String> = options
        .iter()
        .map(|o| o.as_ref().replace('\n', " "))
        .collect();
    let input = flattened.join("\n");

    tracing::debug!("exec: {}", cmd.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        // A selector may exit (e.g. on cancel) before draining its stdin;
        // the broken pipe is not an error, the exit status still carries
        // the outcome.
        if let Err(err) = stdin.write_all(input.as_bytes()) {
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(err.into());
            }
        }
    }
    // stdin handle dropped above, closing the pipe before the wait
    let output = child.wait_with_output()?;

    let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let index = flattened.iter().position(|opt| opt.trim() == selected);
    let key = PickKey::from_status(output.status);

    tracing::debug!(?key, ?index, "selector finished");

    Ok(Selection {
        key,
        index,
        selected,
    })
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn linux_fuzzy_command_without_wayland() {
        let args = linux_args(&PickerOptions::new(), false);
        assert_eq!(
            args,
            strings(&[
                "rofi",
                "-sort",
                "-no-levenshtein-sort",
                "-matching",
                "fuzzy",
                "-dmenu",
                "-p",
                "Input",
                "-format",
                "s",
                "-i",
                "-lines",
                "5",
            ])
        );
    }

    #[test]
    fn linux_non_fuzzy_omits_matching_mode() {
        let args = linux_args(&PickerOptions::new().fuzzy(false), false);
        assert!(!args.contains(&"-matching".to_string()));
        assert!(!args.contains(&"fuzzy".to_string()));
    }

    #[test]
    fn wayland_session_appends_normal_window() {
        let args = linux_args(&PickerOptions::new(), true);
        assert_eq!(args.last().map(String::as_str), Some("-normal-window"));
    }

    #[test]
    fn prompt_is_passed_through() {
        let args = linux_args(&PickerOptions::new().prompt("Figure"), false);
        let p = args.iter().position(|a| a == "-p").unwrap();
        assert_eq!(args[p + 1], "Figure");
    }

    #[test]
    fn macos_command_is_bare_choose() {
        let cmd = PlatformKind::MacOs.picker_command(&PickerOptions::new());
        assert_eq!(cmd, strings(&["choose"]));
    }

    #[test]
    fn numeric_extra_arg_becomes_literal_string() {
        let cmd = PlatformKind::MacOs.picker_command(&PickerOptions::new().extra_arg(7));
        assert_eq!(cmd.last().map(String::as_str), Some("7"));
    }

    #[test]
    fn extra_args_keep_their_order() {
        let opts = PickerOptions::new().extra_args(["-theme", "gruvbox"]);
        let cmd = PlatformKind::MacOs.picker_command(&opts);
        assert_eq!(cmd, strings(&["choose", "-theme", "gruvbox"]));
    }

    #[test]
    fn empty_command_is_rejected() {
        match pick_with_command::<&str>(&[], &["a"]) {
            Err(Error::EmptyCommand) => {}
            other => panic!("expected EmptyCommand, got {other:?}"),
        }
    }

    #[test]
    fn missing_selector_binary_surfaces_io_error() {
        let cmd = strings(&["figpick-no-such-selector-binary"]);
        match pick_with_command(&cmd, &["a"]) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn confirmed_selection_maps_to_index() {
        let cmd = strings(&["sh", "-c", "printf 'fig-b\\n'"]);
        let selection = pick_with_command(&cmd, &["fig-a", "fig-b"]).unwrap();
        assert_eq!(selection.key, PickKey::Selected);
        assert_eq!(selection.index, Some(1));
        assert_eq!(selection.selected, "fig-b");
    }

    #[cfg(unix)]
    #[test]
    fn cancel_yields_no_index_and_empty_selection() {
        let cmd = strings(&["sh", "-c", "exit 1"]);
        let selection = pick_with_command(&cmd, &["fig-a", "fig-b"]).unwrap();
        assert_eq!(selection.key, PickKey::Cancelled);
        assert_eq!(selection.index, None);
        assert_eq!(selection.selected, "");
        assert_eq!(selection.key.code(), -1);
    }

    #[cfg(unix)]
    #[test]
    fn cancel_without_reading_stdin_is_still_a_cancel() {
        // Enough options to outlive the pipe buffer, against a selector that
        // exits without ever draining stdin.
        let options: Vec<String> = (0..100_000).map(|i| format!("fig-{i}")).collect();
        let cmd = strings(&["sh", "-c", "sleep 0.3; exit 1"]);
        let selection = pick_with_command(&cmd, &options).unwrap();
        assert_eq!(selection.key, PickKey::Cancelled);
        assert_eq!(selection.index, None);
        assert_eq!(selection.selected, "");
    }

    #[cfg(unix)]
    #[test]
    fn custom_exit_codes_are_offset_by_nine() {
        let cmd = strings(&["sh", "-c", "printf 'whatever'; exit 12"]);
        let selection = pick_with_command(&cmd, &["fig-a"]).unwrap();
        assert_eq!(selection.key, PickKey::Custom(3));
        assert_eq!(selection.key.code(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn undefined_exit_codes_carry_the_raw_status() {
        let cmd = strings(&["sh", "-c", "exit 2"]);
        let selection = pick_with_command(&cmd, &["fig-a"]).unwrap();
        assert_eq!(selection.key, PickKey::Other(Some(2)));
        assert_eq!(selection.key.code(), -2);
    }

    #[cfg(unix)]
    #[test]
    fn embedded_newlines_are_flattened_on_the_wire() {
        // `cat` echoes the wire form back, so the selection is exactly what
        // the selector was shown.
        let cmd = strings(&["cat"]);
        let selection = pick_with_command(&cmd, &["fig\nwith newline"]).unwrap();
        assert_eq!(selection.selected, "fig with newline");
        assert_eq!(selection.index, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn unmatched_stdout_yields_no_index() {
        let cmd = strings(&["sh", "-c", "printf 'typed-by-hand\\n'"]);
        let selection = pick_with_command(&cmd, &["fig-a", "fig-b"]).unwrap();
        assert_eq!(selection.key, PickKey::Selected);
        assert_eq!(selection.index, None);
        assert_eq!(selection.selected, "typed-by-hand");
    }
}
