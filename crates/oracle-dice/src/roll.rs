//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling one dice expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
    /// Flat modifier added after summing the dice.
    pub modifier: i64,
}

impl RollResult {
    /// A result with no dice whose total is exactly `total`.
    pub fn fixed(total: i64) -> Self {
        Self {
            dice: Vec::new(),
            modifier: total,
        }
    }

    /// Sum of all die values plus the modifier.
    pub fn total(&self) -> i64 {
        let sum: i64 = self.dice.iter().map(|d| i64::from(d.value)).sum();
        sum.saturating_add(self.modifier)
    }

    /// The individual die values in roll order.
    pub fn values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        match self.modifier {
            0 => write!(f, "[{}] = {}", values.join(", "), self.total()),
            m if m > 0 => write!(f, "[{}] +{m} = {}", values.join(", "), self.total()),
            m => write!(f, "[{}] {m} = {}", values.join(", "), self.total()),
        }
    }
}
