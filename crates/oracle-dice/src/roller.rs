//! The dice-evaluation seam used by template rendering.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::DiceResult;
use crate::notation::DiceExpr;
use crate::roll::RollResult;

/// Evaluates dice notation into a roll.
///
/// Every call samples afresh: two calls with the same expression may
/// return different totals.
pub trait DiceRoller {
    /// Parse and roll `expr`.
    fn roll(&mut self, expr: &str) -> DiceResult<RollResult>;
}

impl<R: DiceRoller + ?Sized> DiceRoller for &mut R {
    fn roll(&mut self, expr: &str) -> DiceResult<RollResult> {
        (**self).roll(expr)
    }
}

/// A roller backed by its own [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// A reproducible roller seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// A roller seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Wrap an existing RNG.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl DiceRoller for RngRoller {
    fn roll(&mut self, expr: &str) -> DiceResult<RollResult> {
        let parsed: DiceExpr = expr.parse()?;
        Ok(parsed.roll(&mut self.rng))
    }
}

/// A roller that replays a fixed list of totals in order, wrapping around.
///
/// Expressions are still parsed, so malformed notation fails exactly as it
/// would with [`RngRoller`]. Every expression passed to [`DiceRoller::roll`]
/// is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    totals: Vec<i64>,
    next: usize,
    calls: Vec<String>,
}

impl ScriptedRoller {
    /// Replay `totals`; an empty script always yields 0.
    pub fn new(totals: impl Into<Vec<i64>>) -> Self {
        Self {
            totals: totals.into(),
            next: 0,
            calls: Vec::new(),
        }
    }

    /// Expressions rolled so far, in call order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll(&mut self, expr: &str) -> DiceResult<RollResult> {
        expr.parse::<DiceExpr>()?;
        self.calls.push(expr.to_string());
        let total = self
            .totals
            .get(self.next % self.totals.len().max(1))
            .copied()
            .unwrap_or(0);
        self.next += 1;
        Ok(RollResult::fixed(total))
    }
}
