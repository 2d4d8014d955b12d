use std::fmt;

use seqlike::Item;

/// Where two ordered sequences first differ.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// The common prefix is equal but the lengths differ.
    Length { expected: usize, actual: usize },
    /// The elements at `index` differ.
    Element {
        index: usize,
        expected: Item,
        actual: Item,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { expected, actual } => {
                write!(f, "expected length {}, got {}", expected, actual)
            }
            Mismatch::Element {
                index,
                expected,
                actual,
            } => write!(
                f,
                "at index {}: expected {}, got {}",
                index, expected, actual
            ),
        }
    }
}

/// Compare two sequences element by element.
///
/// Equal means same length and equal items at every position; an integer
/// never equals a string or a boolean.
pub fn compare_ordered(expected: &[Item], actual: &[Item]) -> Result<(), Mismatch> {
    for (index, (expected, actual)) in expected.iter().zip(actual).enumerate() {
        if expected != actual {
            return Err(Mismatch::Element {
                index,
                expected: expected.clone(),
                actual: actual.clone(),
            });
        }
    }
    if expected.len() != actual.len() {
        return Err(Mismatch::Length {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}
