//! Descriptors - identity plus run state for tests and suites
//!
//! A descriptor pairs the immutable identity of a test or suite with its
//! mutable [`RunCounters`]. Reporters see both kinds through the [`Subject`]
//! trait, which is also where the derived status predicates live.

use crate::counters::RunCounters;
use crate::origin::Origin;

/// Common read surface of the descriptor executing a check.
///
/// Implemented by [`TestDescriptor`] and [`SuiteDescriptor`]; reporters
/// receive it as `&dyn Subject` so one callback serves both levels.
pub trait Subject {
    /// Name of the test or suite.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Declaration site, when one was captured. Suites have none.
    fn origin(&self) -> Option<&Origin>;

    /// Current run state.
    fn counters(&self) -> &RunCounters;

    /// Mutable run state.
    ///
    /// Driven by the suite runner and the assertion scope; the mutating
    /// operations on [`RunCounters`] are crate-internal, so embedding code
    /// cannot corrupt the tallies through this method.
    fn counters_mut(&mut self) -> &mut RunCounters;

    /// Whether this item never started.
    fn is_skipped(&self) -> bool {
        self.counters().is_skipped()
    }

    /// Whether this item started and every check held.
    fn is_successful(&self) -> bool {
        self.counters().is_successful()
    }

    /// Whether this item is not successful.
    ///
    /// Overlaps with [`is_skipped`](Subject::is_skipped) for items that
    /// never started; reporting callers must test skipped first.
    fn is_failed(&self) -> bool {
        self.counters().is_failed()
    }
}

/// Identity and run state of a single test case.
#[derive(Debug, Clone)]
pub struct TestDescriptor {
    /// Test name, unique within its suite.
    pub name: String,
    /// What the test verifies.
    pub description: String,
    /// Where the test was declared.
    pub origin: Origin,
    state: RunCounters,
}

impl TestDescriptor {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        origin: Origin,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            origin,
            state: RunCounters::new(),
        }
    }
}

impl Subject for TestDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn origin(&self) -> Option<&Origin> {
        Some(&self.origin)
    }

    fn counters(&self) -> &RunCounters {
        &self.state
    }

    fn counters_mut(&mut self) -> &mut RunCounters {
        &mut self.state
    }
}

/// Identity and run state of a suite as a whole.
///
/// The counters absorb both suite-hook checks (startup and teardown may
/// assert against the suite) and the per-test attempted/succeeded tallies.
#[derive(Debug, Clone)]
pub struct SuiteDescriptor {
    /// Suite name.
    pub name: String,
    /// What the suite covers.
    pub description: String,
    state: RunCounters,
}

impl SuiteDescriptor {
    pub(crate) fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            state: RunCounters::new(),
        }
    }
}

impl Subject for SuiteDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn origin(&self) -> Option<&Origin> {
        None
    }

    fn counters(&self) -> &RunCounters {
        &self.state
    }

    fn counters_mut(&mut self) -> &mut RunCounters {
        &mut self.state
    }
}
