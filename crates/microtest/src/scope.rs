//! Assertion scope - record checks and abort the enclosing body
//!
//! A [`Scope`] bundles the descriptor currently executing with the injected
//! reporter for the duration of one hook or test body. Each check records
//! into the descriptor's counters first and reports second; a failed check
//! returns [`Aborted`] so the body can short-circuit with `?`. The runner
//! drops that marker, which keeps a failure local to its own body.

use std::fmt;

use thiserror::Error;

use crate::descriptor::{Subject, SuiteDescriptor, TestDescriptor};
use crate::reporter::Reporter;

/// Marker returned by a failed check.
///
/// Aborting is scoped to the single hook or test body that performed the
/// failing check; sibling tests and the remaining suite lifecycle proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("check failed, enclosing body aborted")]
pub struct Aborted;

/// Result of one hook or test body: ran to completion, or stopped at the
/// first failed check.
pub type Outcome = Result<(), Aborted>;

/// Checking context handed to hooks and test bodies.
pub struct Scope<'a, S: Subject> {
    subject: &'a mut S,
    reporter: &'a mut dyn Reporter,
}

/// Scope over a single test's descriptor.
pub type TestScope<'a> = Scope<'a, TestDescriptor>;

/// Scope over the suite's own descriptor, as seen by startup and teardown.
pub type SuiteScope<'a> = Scope<'a, SuiteDescriptor>;

impl<'a, S: Subject> Scope<'a, S> {
    /// Bind a descriptor and a reporter for one body invocation.
    pub fn new(subject: &'a mut S, reporter: &'a mut dyn Reporter) -> Self {
        Self { subject, reporter }
    }

    /// The descriptor this scope checks against.
    pub fn subject(&self) -> &S {
        self.subject
    }

    /// Perform one check.
    ///
    /// The check is tallied before it is reported. A passing check returns
    /// `Ok(())`; a failing check reports and returns [`Aborted`], which the
    /// enclosing body is expected to propagate with `?`.
    pub fn check(&mut self, condition: bool, message: &str) -> Outcome {
        self.subject.counters_mut().record(condition);

        if condition {
            self.reporter.assertion_passed(&*self.subject, message);
            Ok(())
        } else {
            self.reporter.assertion_failed(&*self.subject, message);
            Err(Aborted)
        }
    }

    /// Fail unconditionally.
    pub fn fail(&mut self, message: &str) -> Outcome {
        self.check(false, message)
    }

    /// Check two values for equality.
    ///
    /// On mismatch the reported message carries the expected and actual
    /// values alongside the caller's message.
    pub fn check_eq<T>(&mut self, actual: T, expected: T, message: &str) -> Outcome
    where
        T: PartialEq + fmt::Display,
    {
        if actual == expected {
            self.check(true, message)
        } else {
            let detail = format!("{} (expected {}, got {})", message, expected, actual);
            self.check(false, &detail)
        }
    }
}
