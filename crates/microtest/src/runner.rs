//! Suite runner - drive a suite through its lifecycle
//!
//! One strictly sequential pass: startup, then every test in registration
//! order (before_each, body, after_each), then teardown. Failed checks are
//! fatal only to their own body, except in startup, where they abort the
//! whole run before any test starts.

use crate::descriptor::Subject;
use crate::reporter::{NullReporter, Reporter};
use crate::scope::Scope;
use crate::suite::Suite;

/// Executes suites against an injected [`Reporter`].
pub struct SuiteRunner {
    reporter: Box<dyn Reporter>,
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteRunner {
    /// Create a runner that reports to [`NullReporter`].
    pub fn new() -> Self {
        Self {
            reporter: Box::new(NullReporter),
        }
    }

    /// Set the reporter invoked for check and test outcomes.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Run the suite and return whether it finished successful.
    ///
    /// Counters are reset at the start of every run, so rerunning a suite
    /// never accumulates state. The returned verdict reflects the suite's
    /// final state, after teardown.
    pub fn run(&mut self, suite: &mut Suite) -> bool {
        suite.desc.counters_mut().begin();

        {
            let mut scope = Scope::new(&mut suite.desc, self.reporter.as_mut());
            let _ = (suite.startup)(&mut scope);
        }
        // Failed startup checks poison the run: no tests, no teardown.
        if !suite.desc.is_successful() {
            return false;
        }

        for case in suite.tests.iter_mut() {
            case.desc.counters_mut().begin();
            suite.desc.counters_mut().note_performed();

            {
                let mut scope = Scope::new(&mut case.desc, self.reporter.as_mut());
                let _ = (suite.before_each)(&mut scope);
            }

            // The body runs only when before_each left the test clean.
            if case.desc.is_successful() {
                let mut scope = Scope::new(&mut case.desc, self.reporter.as_mut());
                let _ = (case.body)(&mut scope);
            }

            // Cleanup always runs, even for a failed or skipped body.
            {
                let mut scope = Scope::new(&mut case.desc, self.reporter.as_mut());
                let _ = (suite.after_each)(&mut scope);
            }

            if case.desc.is_successful() {
                suite.desc.counters_mut().note_succeeded();
                self.reporter.test_passed(&case.desc);
            } else {
                self.reporter.test_failed(&case.desc);
            }
        }

        {
            let mut scope = Scope::new(&mut suite.desc, self.reporter.as_mut());
            let _ = (suite.teardown)(&mut scope);
        }

        suite.desc.is_successful()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin;
    use crate::suite::TestCase;

    fn passing_test(name: &str) -> TestCase {
        TestCase::new(name, "always passes", origin!(), |scope| {
            scope.check(true, "holds")
        })
    }

    fn failing_test(name: &str) -> TestCase {
        TestCase::new(name, "always fails", origin!(), |scope| {
            scope.check(false, "does not hold")
        })
    }

    #[test]
    fn test_run_all_passing() {
        let mut suite = Suite::new("all_pass", "")
            .with_test(passing_test("one"))
            .with_test(passing_test("two"));

        let passed = SuiteRunner::new().run(&mut suite);

        assert!(passed);
        assert!(suite.descriptor().is_successful());
        assert_eq!(suite.descriptor().counters().performed(), 2);
        assert_eq!(suite.descriptor().counters().succeeded(), 2);
    }

    #[test]
    fn test_run_with_failure() {
        let mut suite = Suite::new("mixed", "")
            .with_test(passing_test("good"))
            .with_test(failing_test("bad"));

        let passed = SuiteRunner::new().run(&mut suite);

        assert!(!passed);
        assert!(suite.descriptor().is_failed());
        assert_eq!(suite.descriptor().counters().performed(), 2);
        assert_eq!(suite.descriptor().counters().succeeded(), 1);
    }

    #[test]
    fn test_failure_does_not_stop_later_tests() {
        let mut suite = Suite::new("keeps_going", "")
            .with_test(failing_test("bad"))
            .with_test(passing_test("good"));

        SuiteRunner::new().run(&mut suite);

        let good = &suite.tests()[1];
        assert!(good.descriptor().is_successful());
    }

    #[test]
    fn test_empty_suite_is_successful() {
        let mut suite = Suite::new("empty", "");

        let passed = SuiteRunner::new().run(&mut suite);

        assert!(passed);
        assert!(suite.descriptor().is_successful());
        assert_eq!(suite.descriptor().counters().performed(), 0);
    }

    #[test]
    fn test_runner_default_matches_new() {
        let mut suite = Suite::new("default", "").with_test(passing_test("t"));

        assert!(SuiteRunner::default().run(&mut suite));
    }
}
