//! Sequential identifiers for generated entities.

/// Produces `"{prefix}{divider}{n}"` for n = 1, 2, 3, ...
#[derive(Debug, Clone)]
pub struct SequentialId {
    prefix: String,
    divider: String,
    count: u64,
}

impl SequentialId {
    pub fn new(prefix: impl Into<String>, divider: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            divider: divider.into(),
            count: 0,
        }
    }

    /// Sequence using the default `_` divider.
    pub fn underscored(prefix: impl Into<String>) -> Self {
        Self::new(prefix, "_")
    }

    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}{}{}", self.prefix, self.divider, self.count)
    }
}

impl Iterator for SequentialId {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_id())
    }
}

/// The id sequences shared by one generation run.
#[derive(Debug, Clone)]
pub struct IdSequences {
    pub vehicle: SequentialId,
    pub stop: SequentialId,
    pub task: SequentialId,
    pub tracking: SequentialId,
    pub contact_name: SequentialId,
}

impl IdSequences {
    pub fn new() -> Self {
        Self {
            vehicle: SequentialId::underscored("vehicle"),
            stop: SequentialId::underscored("stop"),
            task: SequentialId::underscored("task"),
            tracking: SequentialId::underscored("tracking"),
            contact_name: SequentialId::new("Customer", " "),
        }
    }
}

impl Default for IdSequences {
    fn default() -> Self {
        Self::new()
    }
}
