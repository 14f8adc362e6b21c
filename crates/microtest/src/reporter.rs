//! Reporters - externally supplied reactions to check and test outcomes
//!
//! The engine never formats or prints on its own; it hands every outcome to
//! the [`Reporter`] injected into the runner. All methods default to no-ops
//! so an implementation only overrides what it cares about.

use colored::*;
use std::io::{self, Write};

use crate::descriptor::{Subject, SuiteDescriptor, TestDescriptor};

/// Reactions the engine invokes while a suite runs.
///
/// `assertion_*` fire for every check, with the descriptor (test or suite)
/// the check ran against. `test_*` fire exactly once per test, after its
/// `after_each` hook has finished.
pub trait Reporter {
    /// A check held.
    fn assertion_passed(&mut self, context: &dyn Subject, message: &str) {
        let _ = (context, message);
    }

    /// A check did not hold; the enclosing body is about to abort.
    fn assertion_failed(&mut self, context: &dyn Subject, message: &str) {
        let _ = (context, message);
    }

    /// A test finished and every one of its checks held.
    fn test_passed(&mut self, test: &TestDescriptor) {
        let _ = test;
    }

    /// A test finished with at least one failed check.
    fn test_failed(&mut self, test: &TestDescriptor) {
        let _ = test;
    }
}

/// Reporter that swallows every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that streams results to stdout.
///
/// Verbose mode prints one `PASS`/`FAIL` line per test; quiet mode prints a
/// dot per passing test and an `F` per failure. Failed checks always print
/// their message, with the declaration site when one was captured.
pub struct ConsoleReporter {
    /// Show one line per test instead of dots.
    verbose: bool,
    /// Disable colored output.
    no_color: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ConsoleReporter {
    /// Create a new console reporter.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            no_color: false,
        }
    }

    /// Disable colored output.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Print the closing summary block for a finished suite.
    pub fn summarize(&self, suite: &SuiteDescriptor) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let state = suite.counters();
        let failed = state.performed() - state.succeeded();

        let status = if suite.is_skipped() {
            "SKIPPED".yellow().bold()
        } else if suite.is_failed() {
            "FAILED".red().bold()
        } else {
            "PASSED".green().bold()
        };

        if !self.verbose {
            println!();
        }
        println!("{}", "─".repeat(50));
        println!(
            "Suite {}: {} | {} run, {} passed, {} failed",
            suite.name.bold(),
            status,
            state.performed(),
            state.succeeded().to_string().green(),
            if failed > 0 {
                failed.to_string().red().bold()
            } else {
                failed.to_string().normal()
            }
        );

        if self.no_color {
            colored::control::unset_override();
        }
    }
}

impl Reporter for ConsoleReporter {
    fn assertion_passed(&mut self, context: &dyn Subject, message: &str) {
        if !self.verbose {
            return;
        }
        if self.no_color {
            colored::control::set_override(false);
        }

        println!("  {} {}: {}", "ok".green(), context.name(), message);

        if self.no_color {
            colored::control::unset_override();
        }
    }

    fn assertion_failed(&mut self, context: &dyn Subject, message: &str) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let site = match context.origin() {
            Some(origin) => format!(" ({})", origin),
            None => String::new(),
        };
        println!(
            "  {} {}{}: {}",
            "●".red(),
            context.name().bold(),
            site.dimmed(),
            message
        );

        if self.no_color {
            colored::control::unset_override();
        }
    }

    fn test_passed(&mut self, test: &TestDescriptor) {
        if self.no_color {
            colored::control::set_override(false);
        }

        if self.verbose {
            println!("{} {}", "PASS".green().bold(), test.name);
        } else {
            print!("{}", ".".green());
            let _ = io::stdout().flush();
        }

        if self.no_color {
            colored::control::unset_override();
        }
    }

    fn test_failed(&mut self, test: &TestDescriptor) {
        if self.no_color {
            colored::control::set_override(false);
        }

        if self.verbose {
            println!("{} {}", "FAIL".red().bold(), test.name);
        } else {
            print!("{}", "F".red().bold());
            let _ = io::stdout().flush();
        }

        if self.no_color {
            colored::control::unset_override();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin;

    fn make_test(name: &str) -> TestDescriptor {
        let mut desc = TestDescriptor::new(name, "reporter fixture", origin!());
        desc.counters_mut().begin();
        desc
    }

    #[test]
    fn test_console_reporter_verbose_output() {
        let desc = make_test("test_one");
        let mut reporter = ConsoleReporter::new(true).with_no_color(true);

        // Just verify it doesn't panic
        reporter.assertion_passed(&desc, "holds");
        reporter.assertion_failed(&desc, "does not hold");
        reporter.test_passed(&desc);
        reporter.test_failed(&desc);
    }

    #[test]
    fn test_console_reporter_quiet_mode() {
        let desc = make_test("test_two");
        let mut reporter = ConsoleReporter::new(false).with_no_color(true);

        // Quiet mode prints dots; just verify it doesn't panic
        reporter.test_passed(&desc);
        reporter.test_failed(&desc);
    }

    #[test]
    fn test_console_reporter_summary() {
        let suite = SuiteDescriptor::new("math", "arithmetic coverage");
        let reporter = ConsoleReporter::new(true).with_no_color(true);

        reporter.summarize(&suite);
    }

    #[test]
    fn test_null_reporter_ignores_everything() {
        let desc = make_test("ignored");
        let mut reporter = NullReporter;

        reporter.assertion_passed(&desc, "msg");
        reporter.assertion_failed(&desc, "msg");
        reporter.test_passed(&desc);
        reporter.test_failed(&desc);
    }
}
