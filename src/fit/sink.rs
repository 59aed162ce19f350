//! Destination for accepted mixtures.

use crate::domain::{MixtureRecord, SearchSummary};

/// Receives accepted mixtures in enumeration order, then one completion
/// signal when the search space is exhausted.
pub trait ResultSink {
    fn on_accept(&mut self, record: &MixtureRecord);
    fn on_complete(&mut self, _summary: &SearchSummary) {}
}

/// Keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub records: Vec<MixtureRecord>,
    pub summary: Option<SearchSummary>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for CollectingSink {
    fn on_accept(&mut self, record: &MixtureRecord) {
        self.records.push(record.clone());
    }

    fn on_complete(&mut self, summary: &SearchSummary) {
        self.summary = Some(*summary);
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn on_accept(&mut self, record: &MixtureRecord) {
        (**self).on_accept(record);
    }

    fn on_complete(&mut self, summary: &SearchSummary) {
        (**self).on_complete(summary);
    }
}

/// Fan out to two sinks, first `.0` then `.1`.
impl<A: ResultSink, B: ResultSink> ResultSink for (A, B) {
    fn on_accept(&mut self, record: &MixtureRecord) {
        self.0.on_accept(record);
        self.1.on_accept(record);
    }

    fn on_complete(&mut self, summary: &SearchSummary) {
        self.0.on_complete(summary);
        self.1.on_complete(summary);
    }
}
