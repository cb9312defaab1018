//! Terminal output formatting shared by both binaries.
//!
//! Cargo-style status lines with right-aligned coloured verbs on stderr.
//! Stdout is reserved for machine-readable output (alias listings,
//! completion scripts).

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. Verbose lines are
/// dropped unless the printer was built with [`Printer::with_verbose`].
pub struct Printer {
    color: bool,
    verbose: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Print a success/completion line with a green bold verb.
    /// e.g. "      Copied 12 files to ./site"
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Print a dim line, only when verbose output was requested.
    pub fn verbose(&self, verb: &str, message: &str) {
        if self.verbose {
            self.print_line(DIM, verb, message);
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "tile", "tiles")` → "1 tile".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a path relative to `base` when possible, unchanged otherwise.
pub fn display_path_from(path: &std::path::Path, base: &std::path::Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => format!(".{}{}", std::path::MAIN_SEPARATOR, relative.display()),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "tile", "tiles"), "1 tile");
    }

    #[test]
    fn test_plural_zero() {
        assert_eq!(plural(0, "alias", "aliases"), "0 aliases");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(5, "file", "files"), "5 files");
    }

    #[test]
    fn test_display_path_outside_base() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path_from(p, Path::new("/elsewhere")), "/nonexistent/path/to/file");
    }

    #[test]
    fn test_display_path_same_as_base() {
        assert_eq!(display_path_from(Path::new("/work"), Path::new("/work")), ".");
    }

    #[cfg(unix)]
    #[test]
    fn test_display_path_inside_base() {
        assert_eq!(
            display_path_from(Path::new("/work/site/assets"), Path::new("/work")),
            "./site/assets"
        );
    }
}
