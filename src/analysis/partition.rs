//! Attribute-equality partitioning of series collections.

use crate::core::TimeSeries;
use crate::error::{AnalysisError, Result};

/// An ordered set of `field=value` conditions splitting a series collection
/// into two comparison groups.
///
/// Parsed from one configuration token of the form
/// `field=value;field=value`, optionally wrapped in `compare(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatchSpec {
    fields: Vec<(String, String)>,
}

impl FieldMatchSpec {
    /// Parse a spec from its configuration token.
    ///
    /// A pair token without a `=` separator is a fatal configuration error.
    pub fn parse(token: &str) -> Result<Self> {
        let inner = strip_compare_wrapper(token);

        let mut fields = Vec::new();
        for pair in inner.split(';') {
            let (field, value) = pair.split_once('=').ok_or_else(|| {
                AnalysisError::InvalidArgument(format!(
                    "field filter must be of the form field=value, got '{pair}'"
                ))
            })?;
            fields.push((field.to_string(), value.to_string()));
        }

        Ok(Self { fields })
    }

    /// The conditions in token order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Whether the series satisfies every condition.
    ///
    /// A missing attribute or a differing value fails the check; evaluation
    /// stops at the first failing field.
    pub fn matches(&self, series: &TimeSeries) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| series.attribute(field) == Some(expected.as_str()))
    }
}

// Both the prefix and the closing bracket must be present for the wrapper to
// be stripped.
fn strip_compare_wrapper(token: &str) -> &str {
    token
        .strip_prefix("compare(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(token)
}

/// Split a series collection into the group matching the spec (left) and
/// the rest (right).
///
/// The pass is total and stable: every series lands in exactly one group and
/// both groups preserve the input order.
pub fn partition<'a>(
    series: &'a [TimeSeries],
    spec: &FieldMatchSpec,
) -> (Vec<&'a TimeSeries>, Vec<&'a TimeSeries>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for ts in series {
        if spec.matches(ts) {
            left.push(ts);
        } else {
            right.push(ts);
        }
    }

    (left, right)
}
