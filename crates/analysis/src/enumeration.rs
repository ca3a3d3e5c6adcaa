use crate::error::{AnalysisError, AnalysisResult};
use cluemine_core::Enumeration;

/// Parses a matched enumeration substring such as `(4,5)` or `(3-4)`.
///
/// The outer parentheses are stripped and `-` is treated as a group
/// separator just like `,`: hyphenated and multi-word answers are not
/// distinguished. Each group must be a positive integer; empty groups are
/// rejected rather than carried as garbage values.
pub fn parse_enumeration(raw: &str) -> AnalysisResult<Enumeration> {
    let inner = raw
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| AnalysisError::InvalidEnumeration(raw.to_string()))?;

    let mut lengths = Vec::new();
    for group in inner.replace('-', ",").split(',') {
        let value: u32 = group
            .parse()
            .map_err(|_| AnalysisError::InvalidEnumeration(raw.to_string()))?;
        if value == 0 {
            return Err(AnalysisError::InvalidEnumeration(raw.to_string()));
        }
        lengths.push(value);
    }

    Enumeration::new(lengths).ok_or_else(|| AnalysisError::InvalidEnumeration(raw.to_string()))
}
