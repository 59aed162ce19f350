//! Reporting utilities: the terminal table sink.

pub mod format;

use crate::domain::{Catalog, Composition, MixtureRecord, ReportStyle};
use crate::fit::ResultSink;

pub use format::{format_preamble, format_record, format_table_header};

/// Prints each accepted mixture to stdout as it arrives.
#[derive(Debug, Clone, Copy)]
pub struct TableReporter<'a> {
    composition: &'a Composition,
    catalog: &'a Catalog,
    style: ReportStyle,
}

impl<'a> TableReporter<'a> {
    pub fn new(composition: &'a Composition, catalog: &'a Catalog, style: ReportStyle) -> Self {
        Self {
            composition,
            catalog,
            style,
        }
    }

    /// Column headings; printed once before the first record.
    pub fn header(&self) -> String {
        format_table_header(self.composition, self.catalog, self.style)
    }

    pub fn render(&self, record: &MixtureRecord) -> String {
        format_record(record, self.composition, self.catalog, self.style)
    }
}

impl ResultSink for TableReporter<'_> {
    fn on_accept(&mut self, record: &MixtureRecord) {
        print!("{}", self.render(record));
    }
}
