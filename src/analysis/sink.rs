//! Shared result accumulation for analysis functions.

use super::FunctionDescriptor;
use std::sync::{Mutex, PoisonError};

/// One verdict appended by an analysis function.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    function: FunctionDescriptor,
    verdict: bool,
    key: Option<String>,
}

impl AnalysisResult {
    /// Identity of the function that produced this result.
    pub fn function(&self) -> FunctionDescriptor {
        self.function
    }

    /// The boolean outcome.
    pub fn verdict(&self) -> bool {
        self.verdict
    }

    /// Join key correlating the result back to a series, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Append-only, order-preserving collector shared by every analysis function
/// evaluated within one query.
///
/// Appends serialize through an internal lock; downstream consumers index
/// results positionally, so entries are never reordered or deduplicated.
#[derive(Debug, Default)]
pub struct ResultSink {
    results: Mutex<Vec<AnalysisResult>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result triple.
    pub fn add(&self, function: FunctionDescriptor, verdict: bool, key: Option<String>) {
        // A poisoned lock still holds a consistent buffer; keep appending.
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(AnalysisResult {
                function,
                verdict,
                key,
            });
    }

    /// Number of results appended so far.
    pub fn len(&self) -> usize {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the appended results, in append order.
    pub fn results(&self) -> Vec<AnalysisResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consume the sink, yielding the appended results in append order.
    pub fn into_results(self) -> Vec<AnalysisResult> {
        self.results
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
