//! Interactive menu dispatcher.
//!
//! Owns an ordered mapping from a short textual key to a labelled,
//! zero-argument action, renders it as a numbered menu, and loops reading
//! one line of input per iteration until the exit key is entered. The
//! registry is built once by the caller and never changes while the loop
//! runs; the only per-iteration state is the input line itself.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use thiserror::Error;

/// One selectable menu item: a lookup key, the label shown in the rendered
/// menu, and the demo to run when the key is chosen.
pub struct MenuEntry {
    pub key: String,
    pub label: String,
    action: Box<dyn Fn()>,
}

impl MenuEntry {
    pub fn invoke(&self) {
        (self.action)()
    }
}

/// Ordered registry of menu entries. Iteration order is registration order,
/// so the rendered menu is deterministic regardless of how many entries
/// there are.
#[derive(Default)]
pub struct MenuRegistry {
    entries: Vec<MenuEntry>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under `key`. Registering a key twice replaces the
    /// earlier entry in place (last write wins), keeping its menu position.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        action: impl Fn() + 'static,
    ) {
        let entry = MenuEntry {
            key: key.into(),
            label: label.into(),
            action: Box::new(action),
        };
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, key: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Recoverable input conditions. Both render the same uniform user message;
/// the variant only matters to callers inspecting what went wrong.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Invalid choice. Try again.")]
    Empty,
    #[error("Invalid choice. Try again.")]
    Unknown(String),
}

enum Selection<'a> {
    Exit,
    Run(&'a MenuEntry),
}

// Manual impl because MenuEntry holds a non-Debug `Box<dyn Fn()>`.
impl std::fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Exit => f.write_str("Exit"),
            Selection::Run(entry) => f.debug_tuple("Run").field(&entry.key).finish(),
        }
    }
}

/// Resolves one raw input line against the registry. Trims surrounding
/// whitespace before matching; the exit key wins over registry entries.
fn resolve<'a>(
    registry: &'a MenuRegistry,
    exit_key: &str,
    raw: &str,
) -> Result<Selection<'a>, ChoiceError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(ChoiceError::Empty);
    }
    if key == exit_key {
        return Ok(Selection::Exit);
    }
    registry
        .get(key)
        .map(Selection::Run)
        .ok_or_else(|| ChoiceError::Unknown(key.to_string()))
}

/// Runs the interactive loop until `exit_key` is entered or the input
/// stream reaches EOF. Generic over the streams so tests can drive it with
/// in-memory buffers; `main` passes locked stdin and stdout.
///
/// Errors raised inside an action are the action's own business; the
/// dispatcher neither catches nor wraps them. I/O errors on the streams
/// themselves propagate out.
pub fn start<R: BufRead, W: Write>(
    registry: &MenuRegistry,
    exit_key: &str,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", "Select a program to run:".bold().cyan())?;
        for entry in registry.entries() {
            writeln!(output, "{}. {}", entry.key, entry.label)?;
        }
        writeln!(output, "{}. Exit", exit_key)?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: a closed stdin must terminate rather than spin the loop.
            writeln!(output, "Exiting...")?;
            return Ok(());
        }

        match resolve(registry, exit_key, &line) {
            Ok(Selection::Exit) => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            Ok(Selection::Run(entry)) => {
                writeln!(output)?;
                entry.invoke();
            }
            Err(err) => writeln!(output, "{}", err.to_string().red())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;

    /// Registry with two counting actions, plus the counters themselves.
    fn counting_registry() -> (MenuRegistry, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let alpha = Rc::new(Cell::new(0));
        let beta = Rc::new(Cell::new(0));
        let mut registry = MenuRegistry::new();
        let a = Rc::clone(&alpha);
        registry.register("1", "Alpha", move || a.set(a.get() + 1));
        let b = Rc::clone(&beta);
        registry.register("2", "Beta", move || b.set(b.get() + 1));
        (registry, alpha, beta)
    }

    fn run_session(registry: &MenuRegistry, input: &str) -> String {
        let mut output = Vec::new();
        start(registry, "0", Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn valid_key_invokes_bound_action_once() {
        let (registry, alpha, beta) = counting_registry();
        run_session(&registry, "1\n0\n");
        assert_eq!(alpha.get(), 1);
        assert_eq!(beta.get(), 0);
    }

    #[test]
    fn loop_continues_after_action() {
        let (registry, alpha, beta) = counting_registry();
        // Menu must be rendered again and further input consumed after a run.
        run_session(&registry, "1\n2\n2\n0\n");
        assert_eq!(alpha.get(), 1);
        assert_eq!(beta.get(), 2);
    }

    #[test]
    fn whitespace_only_input_invokes_nothing() {
        let (registry, alpha, beta) = counting_registry();
        let out = run_session(&registry, "   \n0\n");
        assert!(out.contains("Invalid choice. Try again."));
        assert_eq!(alpha.get(), 0);
        assert_eq!(beta.get(), 0);
    }

    #[test]
    fn unknown_key_invokes_nothing() {
        let (registry, alpha, beta) = counting_registry();
        let out = run_session(&registry, "9\n0\n");
        assert!(out.contains("Invalid choice. Try again."));
        assert_eq!(alpha.get(), 0);
        assert_eq!(beta.get(), 0);
    }

    #[test]
    fn repeated_invalid_input_is_idempotent() {
        let (registry, alpha, beta) = counting_registry();
        let out = run_session(&registry, "x\n\ny\n  \nz\n0\n");
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 5);
        assert_eq!(alpha.get(), 0);
        assert_eq!(beta.get(), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn exit_key_terminates_and_reads_no_further_input() {
        let (registry, alpha, _) = counting_registry();
        // "1" after the exit key must never be consumed.
        let out = run_session(&registry, "0\n1\n1\n");
        assert!(out.contains("Exiting..."));
        assert_eq!(alpha.get(), 0);
        assert_eq!(out.matches("Select a program to run").count(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let (registry, _, beta) = counting_registry();
        run_session(&registry, " 2 \n0\n");
        assert_eq!(beta.get(), 1);
    }

    #[test]
    fn eof_terminates_the_loop() {
        let (registry, alpha, _) = counting_registry();
        let out = run_session(&registry, "1\n");
        assert_eq!(alpha.get(), 1);
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn menu_renders_entries_in_registration_order() {
        let (registry, _, _) = counting_registry();
        let out = run_session(&registry, "0\n");
        let alpha_at = out.find("1. Alpha").unwrap();
        let beta_at = out.find("2. Beta").unwrap();
        let exit_at = out.find("0. Exit").unwrap();
        assert!(alpha_at < beta_at && beta_at < exit_at);
    }

    #[test]
    fn duplicate_key_replaces_in_place() {
        let (mut registry, alpha, _) = counting_registry();
        let replacement = Rc::new(Cell::new(0));
        let r = Rc::clone(&replacement);
        registry.register("1", "Alpha v2", move || r.set(r.get() + 1));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].label, "Alpha v2");
        run_session(&registry, "1\n0\n");
        assert_eq!(alpha.get(), 0);
        assert_eq!(replacement.get(), 1);
    }

    #[test]
    fn resolve_distinguishes_empty_from_unknown() {
        let (registry, _, _) = counting_registry();
        assert_eq!(
            resolve(&registry, "0", "\t \n").unwrap_err(),
            ChoiceError::Empty
        );
        assert_eq!(
            resolve(&registry, "0", " 42 ").unwrap_err(),
            ChoiceError::Unknown("42".into())
        );
        assert!(matches!(
            resolve(&registry, "0", " 0 "),
            Ok(Selection::Exit)
        ));
    }
}
