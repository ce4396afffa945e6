use orderguard_model::{Violation, ViolationCode};

/// Append-only sequence of violations for a single validation call.
#[derive(Debug, Default)]
pub struct ViolationCollector {
    violations: Vec<Violation>,
}

impl ViolationCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Builds and appends a violation.
    pub fn record(&mut self, rule_name: &str, code: ViolationCode, message: impl Into<String>) {
        self.add(Violation::new(rule_name, code, message));
    }

    /// True once anything has been recorded.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Copy of the recorded violations in insertion order.
    pub fn violations(&self) -> Vec<Violation> {
        self.violations.clone()
    }

    /// Iterates the recorded violations without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consumes the collector.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
