//! Template rendering.
//!
//! Each placeholder is replaced in order. Replacements change the length of
//! the working string, so the renderer carries a running offset that maps
//! every later span from original coordinates into the rewritten text.

use std::ops::Range;

use oracle_dice::DiceRoller;
use tracing::{debug, trace};

use crate::comparator;
use crate::error::{OracleError, OracleResult};
use crate::scanner::{self, PlaceholderSpan};

/// Renders templates by rolling every placeholder with its own roller.
#[derive(Debug, Clone)]
pub struct Renderer<R> {
    roller: R,
}

impl<R: DiceRoller> Renderer<R> {
    /// Create a renderer that rolls with `roller`.
    pub fn new(roller: R) -> Self {
        Self { roller }
    }

    /// The roller this renderer uses.
    pub fn roller(&self) -> &R {
        &self.roller
    }

    /// Consume the renderer and return its roller.
    pub fn into_roller(self) -> R {
        self.roller
    }

    /// Replace every placeholder in `template` with its rolled result.
    ///
    /// `{2d6}` becomes `2d6: 9`. `{1d20>15}` becomes `14: true`, where the
    /// shown number comes from one roll and the boolean compares a second,
    /// independent roll against the threshold. The first failing placeholder
    /// aborts the whole render.
    pub fn render(&mut self, template: &str) -> OracleResult<String> {
        let spans = scanner::scan(template);
        if spans.is_empty() {
            return Ok(template.to_string());
        }

        let mut state = RenderState::new(template);
        for span in &spans {
            let replacement = self.replacement(state.inner(span))?;
            state.splice(span, &replacement);
        }

        debug!(placeholders = spans.len(), "rendered template");
        Ok(state.finish())
    }

    fn replacement(&mut self, expr: &str) -> OracleResult<String> {
        let parsed = comparator::split(expr)?;
        let shown = self.total(parsed.dice_expr)?;

        let replacement = match parsed.comparison {
            None => format!("{}: {shown}", parsed.dice_expr),
            Some(comparison) => {
                let compared = self.total(parsed.dice_expr)?;
                format!("{shown}: {}", comparison.holds(compared))
            }
        };
        trace!(placeholder = expr, %replacement, "substituted placeholder");
        Ok(replacement)
    }

    fn total(&mut self, dice_expr: &str) -> OracleResult<i64> {
        self.roller
            .roll(dice_expr)
            .map(|roll| roll.total())
            .map_err(|source| OracleError::InvalidDiceExpression {
                expr: dice_expr.to_string(),
                source,
            })
    }
}

/// The working string of one render call and its accumulated drift.
#[derive(Debug)]
struct RenderState {
    working: String,
    offset: isize,
}

impl RenderState {
    fn new(template: &str) -> Self {
        Self {
            working: template.to_string(),
            offset: 0,
        }
    }

    /// Where `span` sits in the working string.
    fn locate(&self, span: &PlaceholderSpan) -> Range<usize> {
        span.start.saturating_add_signed(self.offset)..span.end.saturating_add_signed(self.offset)
    }

    fn inner(&self, span: &PlaceholderSpan) -> &str {
        let range = self.locate(span);
        &self.working[range.start + 1..range.end - 1]
    }

    fn splice(&mut self, span: &PlaceholderSpan, replacement: &str) {
        let range = self.locate(span);
        self.working = [
            &self.working[..range.start],
            replacement,
            &self.working[range.end..],
        ]
        .concat();
        self.offset += replacement.len() as isize - (span.end - span.start) as isize;
    }

    fn finish(self) -> String {
        self.working
    }
}
