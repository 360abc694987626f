use hunch_core::{Bracket, Candidate};

/// Engine state captured immediately before a feedback step is applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) bracket: Bracket,
    pub(crate) candidate: Candidate,
    pub(crate) message: String,
}

/// Last-in-first-out log of prior engine states.
///
/// Appended on feedback, popped on undo, and dropped wholesale when the
/// bracket is re-seeded from edited bound text. Entries are never mutated
/// after creation.
#[derive(Debug, Default)]
pub(crate) struct History {
    entries: Vec<Snapshot>,
}

impl History {
    pub(crate) fn record(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
