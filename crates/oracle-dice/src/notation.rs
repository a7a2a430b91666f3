//! Dice notation parsing.
//!
//! Accepts `[N]dM[+K|-K]`: an optional count (default 1), the side count
//! (`%` for percentile), and an optional signed modifier. Matching is
//! case-insensitive and ignores surrounding whitespace.

use std::str::FromStr;

use rand::Rng;

use crate::error::{DiceError, DiceResult};
use crate::roll::{DieResult, RollResult};
use crate::Die;

/// Largest dice count one expression may roll.
pub const MAX_DICE: u32 = 1000;

/// A parsed dice expression such as `2d6+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    /// Number of dice to roll.
    pub count: u32,
    /// The die rolled `count` times.
    pub die: Die,
    /// Flat modifier added to the sum.
    pub modifier: i64,
}

impl DiceExpr {
    /// Create an expression from its parts.
    pub fn new(count: u32, die: Die, modifier: i64) -> Self {
        Self {
            count,
            die,
            modifier,
        }
    }

    /// Lowest possible total.
    pub fn min(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Highest possible total.
    pub fn max(&self) -> i64 {
        (i64::from(self.count) * i64::from(self.die.sides())).saturating_add(self.modifier)
    }

    /// Roll every die once using the given RNG.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> RollResult {
        let dice = (0..self.count)
            .map(|_| DieResult {
                die: self.die,
                value: rng.random_range(1..=self.die.sides()),
            })
            .collect();
        RollResult {
            dice,
            modifier: self.modifier,
        }
    }
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

fn parse(notation: &str) -> DiceResult<DiceExpr> {
    let notation = notation.trim().to_lowercase();
    if notation.is_empty() {
        return Err(DiceError::Empty);
    }

    let d_pos = notation
        .find('d')
        .ok_or_else(|| DiceError::MissingSeparator(notation.clone()))?;

    let count_str = &notation[..d_pos];
    let count = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse::<u32>()
            .map_err(|_| DiceError::InvalidCount(count_str.to_string()))?
    };
    if count == 0 {
        return Err(DiceError::InvalidCount(count_str.to_string()));
    }
    if count > MAX_DICE {
        return Err(DiceError::TooManyDice {
            count,
            limit: MAX_DICE,
        });
    }

    let rest = &notation[d_pos + 1..];
    let (sides_str, modifier) = match rest.find(['+', '-']) {
        Some(pos) => {
            let mod_str = &rest[pos..];
            let modifier = mod_str
                .parse::<i64>()
                .map_err(|_| DiceError::InvalidModifier(mod_str.to_string()))?;
            (&rest[..pos], modifier)
        }
        None => (rest, 0),
    };

    let sides = if sides_str == "%" {
        100
    } else {
        sides_str
            .parse::<u32>()
            .map_err(|_| DiceError::InvalidSides(sides_str.to_string()))?
    };
    let die = Die::from_sides(sides).ok_or_else(|| DiceError::InvalidSides(sides_str.to_string()))?;

    Ok(DiceExpr::new(count, die, modifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_basic() {
        let expr: DiceExpr = "2d6".parse().unwrap();
        assert_eq!(expr, DiceExpr::new(2, Die::D6, 0));
    }

    #[test]
    fn parse_modifiers() {
        assert_eq!("1d20+5".parse::<DiceExpr>().unwrap().modifier, 5);
        assert_eq!("3d8-2".parse::<DiceExpr>().unwrap().modifier, -2);
    }

    #[test]
    fn parse_implicit_count_and_percentile() {
        assert_eq!("d6".parse::<DiceExpr>().unwrap(), DiceExpr::new(1, Die::D6, 0));
        assert_eq!("d%".parse::<DiceExpr>().unwrap().die, Die::D100);
    }

    #[test]
    fn parse_whitespace_and_case() {
        let expr: DiceExpr = "  2D10+3 ".parse().unwrap();
        assert_eq!(expr, DiceExpr::new(2, Die::D10, 3));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<DiceExpr>(), Err(DiceError::Empty));
        assert_eq!("   ".parse::<DiceExpr>(), Err(DiceError::Empty));
        assert!(matches!(
            "abc".parse::<DiceExpr>(),
            Err(DiceError::MissingSeparator(_))
        ));
        assert!(matches!(
            "0d6".parse::<DiceExpr>(),
            Err(DiceError::InvalidCount(_))
        ));
        assert!(matches!(
            "xd6".parse::<DiceExpr>(),
            Err(DiceError::InvalidCount(_))
        ));
        assert!(matches!(
            "2d".parse::<DiceExpr>(),
            Err(DiceError::InvalidSides(_))
        ));
        assert!(matches!(
            "2d1".parse::<DiceExpr>(),
            Err(DiceError::InvalidSides(_))
        ));
        assert!(matches!(
            "2d6+".parse::<DiceExpr>(),
            Err(DiceError::InvalidModifier(_))
        ));
        assert!(matches!(
            "2d6+-1".parse::<DiceExpr>(),
            Err(DiceError::InvalidModifier(_))
        ));
    }

    #[test]
    fn parse_rejects_comparison_text() {
        assert!("1d20>15".parse::<DiceExpr>().is_err());
    }

    #[test]
    fn too_many_dice() {
        assert_eq!(
            "1001d6".parse::<DiceExpr>(),
            Err(DiceError::TooManyDice {
                count: 1001,
                limit: MAX_DICE
            })
        );
        assert!("1000d6".parse::<DiceExpr>().is_ok());
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(DiceExpr::new(2, Die::D6, 0).to_string(), "2d6");
        assert_eq!(DiceExpr::new(1, Die::D20, 5).to_string(), "1d20+5");
        assert_eq!(DiceExpr::new(3, Die::D8, -2).to_string(), "3d8-2");
    }

    #[test]
    fn min_max() {
        let expr = DiceExpr::new(2, Die::D6, 3);
        assert_eq!(expr.min(), 5);
        assert_eq!(expr.max(), 15);
    }

    #[test]
    fn roll_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let expr = DiceExpr::new(3, Die::D6, 1);
        for _ in 0..200 {
            let result = expr.roll(&mut rng);
            assert_eq!(result.count(), 3);
            assert!((expr.min()..=expr.max()).contains(&result.total()));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let expr = DiceExpr::new(4, Die::D20, 0);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(expr.roll(&mut rng1), expr.roll(&mut rng2));
    }

    proptest! {
        #[test]
        fn any_roll_stays_within_min_and_max(
            count in 1u32..=20,
            sides in 2u32..=100,
            modifier in -50i64..=50,
            seed in any::<u64>(),
        ) {
            let expr: DiceExpr = DiceExpr::new(count, Die::Custom(sides), modifier)
                .to_string()
                .parse()
                .unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let total = expr.roll(&mut rng).total();
            prop_assert!(total >= expr.min());
            prop_assert!(total <= expr.max());
        }
    }
}
