// UI layer: the interactive translation loop, the one-shot translation and
// the console report for a purge. Prompts go through the `Terminal` trait
// so the loop can be driven by `dialoguer` on a TTY, by plain line reads
// when stdin is piped, or by a script in tests.

use crate::api::TranslationProvider;
use crate::errors::ApiError;
use crate::purge::PurgeReport;
use crate::translator::translate;
use anyhow::{bail, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

/// Text typed at the first prompt to end the session.
pub const EXIT_SENTINEL: &str = "exit";

const TEXT_PROMPT: &str = "Enter the text to translate (or 'exit' to quit)";
const LANGUAGE_PROMPT: &str = "Enter the target language code (e.g. es, de, fr)";

/// Line-based terminal used by the session loop.
pub trait Terminal {
    /// Show `prompt` and read one line of input.
    fn prompt(&mut self, prompt: &str) -> Result<String>;

    /// Print one line of output.
    fn print(&mut self, line: &str);
}

/// Terminal backed by `dialoguer` prompts on stdin/stdout.
#[derive(Default)]
pub struct DialoguerTerminal;

impl Terminal for DialoguerTerminal {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        // Empty input must reach validation instead of being re-prompted.
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Terminal for piped or redirected stdin. Reads one plain line per prompt;
/// running out of input is an error, so the session cannot spin on EOF.
pub struct LineTerminal<R> {
    reader: R,
}

impl<R: BufRead> LineTerminal<R> {
    pub fn new(reader: R) -> Self {
        LineTerminal { reader }
    }
}

impl<R: BufRead> Terminal for LineTerminal<R> {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        println!("{prompt}:");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            bail!("input closed before '{EXIT_SENTINEL}' was entered");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Picks `dialoguer` prompts when stdin is a terminal and plain line reads
/// otherwise.
pub fn stdin_terminal() -> Box<dyn Terminal> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        Box::new(DialoguerTerminal)
    } else {
        log::debug!("stdin is not a terminal, reading plain lines");
        Box::new(LineTerminal::new(stdin.lock()))
    }
}

/// Wraps a provider and shows an `indicatif` spinner while a call is in
/// flight.
pub struct SpinnerProvider<P> {
    inner: P,
}

impl<P> SpinnerProvider<P> {
    pub fn new(inner: P) -> Self {
        SpinnerProvider { inner }
    }
}

impl<P: TranslationProvider> TranslationProvider for SpinnerProvider<P> {
    fn translate_text(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, ApiError> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Translating...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = self.inner.translate_text(text, source_lang, target_lang);
        spinner.finish_and_clear();
        result
    }
}

/// Counts kept over one interactive session.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub translated: usize,
    pub failed: usize,
}

/// Returns true if `input` is the exit sentinel, ignoring case and
/// surrounding whitespace.
pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Interactive loop: ask for text, then for a language code, translate and
/// print, and start over until the user types `exit` at the text prompt.
///
/// Translation errors are printed and the loop continues. Only a terminal
/// failure (closed stdin, interrupt) ends the session with an error.
pub fn translation_session<T, P>(terminal: &mut T, provider: &P) -> Result<SessionSummary>
where
    T: Terminal + ?Sized,
    P: TranslationProvider,
{
    let mut summary = SessionSummary::default();
    loop {
        let text = terminal.prompt(TEXT_PROMPT)?;
        if is_exit(&text) {
            break;
        }
        let language = terminal.prompt(LANGUAGE_PROMPT)?;

        match translate(provider, &text, &language) {
            Ok(translated) => {
                summary.translated += 1;
                terminal.print(&format!("Translated text: {translated}"));
            }
            Err(e) => {
                summary.failed += 1;
                terminal.print(&format!("Translation failed: {e}"));
            }
        }
    }
    terminal.print(&format!(
        "Session ended: {} translated, {} failed.",
        summary.translated, summary.failed
    ));
    Ok(summary)
}

/// Translate a single text and print the result, or print the failure on
/// stderr. Returns whether the translation succeeded.
pub fn translate_once<P: TranslationProvider>(provider: &P, text: &str, language: &str) -> bool {
    match translate(provider, text, language) {
        Ok(translated) => {
            println!("Translated text: {translated}");
            true
        }
        Err(e) => {
            eprintln!("Translation failed: {e}");
            false
        }
    }
}

/// Print one line per deleted file on stdout and one per failure on stderr.
pub fn print_purge_report(report: &PurgeReport) {
    for path in &report.deleted {
        println!("Deleted file: {}", path.display());
    }
    for failure in &report.failed {
        eprintln!("{failure}");
    }
}
