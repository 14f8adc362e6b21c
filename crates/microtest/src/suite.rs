//! Suite assembly - explicit construction of tests and lifecycle hooks
//!
//! A suite is built directly in code: `Suite::new(..)` plus `with_*` calls,
//! each hook defaulting to a no-op. Registration order of tests is
//! execution order. The suite exclusively owns its test cases, which is
//! what makes a suite tree an isolated unit of mutable state.

use crate::descriptor::{SuiteDescriptor, TestDescriptor};
use crate::origin::Origin;
use crate::scope::{Outcome, SuiteScope, TestScope};

/// A test body or per-test hook: runs checks against one test's descriptor.
pub type TestFn = Box<dyn FnMut(&mut TestScope<'_>) -> Outcome>;

/// A suite-level hook: runs checks against the suite's own descriptor.
pub type SuiteFn = Box<dyn FnMut(&mut SuiteScope<'_>) -> Outcome>;

/// One registered test: identity plus the body to execute.
pub struct TestCase {
    pub(crate) desc: TestDescriptor,
    pub(crate) body: TestFn,
}

impl TestCase {
    /// Register a test with its declaration site and body.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        origin: Origin,
        body: impl FnMut(&mut TestScope<'_>) -> Outcome + 'static,
    ) -> Self {
        Self {
            desc: TestDescriptor::new(name, description, origin),
            body: Box::new(body),
        }
    }

    /// Identity and current run state of this test.
    pub fn descriptor(&self) -> &TestDescriptor {
        &self.desc
    }
}

/// A named, ordered collection of tests sharing lifecycle hooks.
pub struct Suite {
    pub(crate) desc: SuiteDescriptor,
    pub(crate) startup: SuiteFn,
    pub(crate) teardown: SuiteFn,
    pub(crate) before_each: TestFn,
    pub(crate) after_each: TestFn,
    pub(crate) tests: Vec<TestCase>,
}

impl Suite {
    /// Create a suite with no tests and no-op hooks.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            desc: SuiteDescriptor::new(name, description),
            startup: Box::new(|_| Ok(())),
            teardown: Box::new(|_| Ok(())),
            before_each: Box::new(|_| Ok(())),
            after_each: Box::new(|_| Ok(())),
            tests: Vec::new(),
        }
    }

    /// Hook run once before any test; failed checks here poison the run.
    pub fn with_startup(
        mut self,
        hook: impl FnMut(&mut SuiteScope<'_>) -> Outcome + 'static,
    ) -> Self {
        self.startup = Box::new(hook);
        self
    }

    /// Hook run once after all tests, even when some of them failed.
    pub fn with_teardown(
        mut self,
        hook: impl FnMut(&mut SuiteScope<'_>) -> Outcome + 'static,
    ) -> Self {
        self.teardown = Box::new(hook);
        self
    }

    /// Hook run before every test, against that test's descriptor.
    pub fn with_before_each(
        mut self,
        hook: impl FnMut(&mut TestScope<'_>) -> Outcome + 'static,
    ) -> Self {
        self.before_each = Box::new(hook);
        self
    }

    /// Hook run after every test, even when its body failed or never ran.
    pub fn with_after_each(
        mut self,
        hook: impl FnMut(&mut TestScope<'_>) -> Outcome + 'static,
    ) -> Self {
        self.after_each = Box::new(hook);
        self
    }

    /// Append a test; tests execute in the order they were added.
    pub fn with_test(mut self, test: TestCase) -> Self {
        self.tests.push(test);
        self
    }

    /// Identity and current run state of the suite.
    pub fn descriptor(&self) -> &SuiteDescriptor {
        &self.desc
    }

    /// The registered tests, in execution order.
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// Number of registered tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the suite has no tests.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
