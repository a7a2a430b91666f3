//! Rolling on tables: choose a row, then render its placeholders.

use oracle_dice::DiceRoller;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::error::OracleResult;
use crate::render::Renderer;
use crate::table::TableSet;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRoll {
    /// The table that was rolled on.
    pub table: String,
    /// The 1-based row number.
    pub row: usize,
    /// The raw entry template.
    pub entry: String,
    /// The entry with every placeholder rendered.
    pub text: String,
}

/// A table set plus the randomness needed to roll on it.
///
/// Row choice and dice use separate RNGs so that a stubbed roller does not
/// change which rows are picked.
#[derive(Debug)]
pub struct Oracle<R> {
    tables: TableSet,
    renderer: Renderer<R>,
    rng: StdRng,
}

impl<R: DiceRoller> Oracle<R> {
    /// Combine tables, a dice roller and a row-choice RNG.
    pub fn new(tables: TableSet, roller: R, rng: StdRng) -> Self {
        Self {
            tables,
            renderer: Renderer::new(roller),
            rng,
        }
    }

    /// The loaded tables.
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    /// The renderer, for inspecting its roller.
    pub fn renderer(&self) -> &Renderer<R> {
        &self.renderer
    }

    /// Render a free-standing template.
    pub fn render(&mut self, template: &str) -> OracleResult<String> {
        self.renderer.render(template)
    }

    /// Choose one row of `name` and render it.
    pub fn roll_table(&mut self, name: &str) -> OracleResult<TableRoll> {
        let (idx, entry) = self.tables.choose(name, &mut self.rng)?;
        let text = self.renderer.render(entry)?;
        debug!(table = name, row = idx + 1, "rolled on table");
        Ok(TableRoll {
            table: name.to_string(),
            row: idx + 1,
            entry: entry.to_string(),
            text,
        })
    }

    /// Choose `n` distinct rows of `name` and render each.
    pub fn roll_table_n(&mut self, name: &str, n: usize) -> OracleResult<Vec<TableRoll>> {
        let picks = self.tables.choose_n(name, n, &mut self.rng)?;
        let mut rolls = Vec::with_capacity(picks.len());
        for (idx, entry) in picks {
            rolls.push(TableRoll {
                table: name.to_string(),
                row: idx + 1,
                entry: entry.to_string(),
                text: self.renderer.render(entry)?,
            });
        }
        debug!(table = name, count = rolls.len(), "rolled on table");
        Ok(rolls)
    }
}
