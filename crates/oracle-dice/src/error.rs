//! Error types for dice parsing.

/// Errors produced while parsing dice notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The expression was empty or only whitespace.
    #[error("empty dice expression")]
    Empty,

    /// The expression has no `d` between count and sides.
    #[error("missing 'd' in dice expression \"{0}\"")]
    MissingSeparator(String),

    /// The dice count is not a positive integer.
    #[error("invalid dice count \"{0}\"")]
    InvalidCount(String),

    /// The number of sides is not an integer of at least 2.
    #[error("invalid die sides \"{0}\"")]
    InvalidSides(String),

    /// The trailing `+K`/`-K` modifier is not an integer.
    #[error("invalid modifier \"{0}\"")]
    InvalidModifier(String),

    /// More dice were requested than a single roll allows.
    #[error("too many dice: {count} (limit {limit})")]
    TooManyDice {
        /// The requested dice count.
        count: u32,
        /// The largest accepted dice count.
        limit: u32,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
