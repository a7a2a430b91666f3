//! Dice notation and rolling for Oracle.
//!
//! Parses standard `NdM+K` notation, rolls it against an explicitly owned
//! RNG, and exposes the [`DiceRoller`] seam that the template renderer calls.
//! Nothing here touches a process-wide random source.

pub mod die;
pub mod error;
pub mod notation;
pub mod roll;
pub mod roller;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use notation::{DiceExpr, MAX_DICE};
pub use roll::{DieResult, RollResult};
pub use roller::{DiceRoller, RngRoller, ScriptedRoller};
