//! Splitting a placeholder into dice text and an optional comparison.

use crate::error::{OracleError, OracleResult};

/// A comparison operator allowed after the dice text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `<`: true when the roll is strictly below the threshold.
    Less,
    /// `>`: true when the roll is strictly above the threshold.
    Greater,
}

impl Comparator {
    /// The operator character.
    pub fn symbol(self) -> char {
        match self {
            Self::Less => '<',
            Self::Greater => '>',
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    pub fn evaluate(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Less => lhs < rhs,
            Self::Greater => lhs > rhs,
        }
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A comparator with its right-hand threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// The operator.
    pub comparator: Comparator,
    /// The integer the roll is compared against.
    pub threshold: i64,
}

impl Comparison {
    /// Whether `total` satisfies this comparison.
    pub fn holds(&self, total: i64) -> bool {
        self.comparator.evaluate(total, self.threshold)
    }
}

/// Placeholder text split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedExpression<'a> {
    /// Text handed to the dice roller.
    pub dice_expr: &'a str,
    /// The trailing comparison, if any.
    pub comparison: Option<Comparison>,
}

/// Split placeholder text at its first `<`, else its first `>`.
///
/// `<` always takes precedence: in `1d6>3<4` the dice text is `1d6>3`, and
/// `1d6<3>4` fails because `3>4` is not an integer.
pub fn split(inner: &str) -> OracleResult<ParsedExpression<'_>> {
    for comparator in [Comparator::Less, Comparator::Greater] {
        if let Some(idx) = inner.find(comparator.symbol()) {
            let threshold = inner[idx + 1..].parse::<i64>().map_err(|source| {
                OracleError::MalformedComparator {
                    text: inner.to_string(),
                    source,
                }
            })?;
            return Ok(ParsedExpression {
                dice_expr: &inner[..idx],
                comparison: Some(Comparison {
                    comparator,
                    threshold,
                }),
            });
        }
    }

    Ok(ParsedExpression {
        dice_expr: inner,
        comparison: None,
    })
}
