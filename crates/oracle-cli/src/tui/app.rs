use oracle_core::{DiceRoller, Oracle, TableRoll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// What the last roll produced. Failures stay on screen instead of ending
/// the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    Rolled(TableRoll),
    Failed { table: String, message: String },
}

pub struct App<R> {
    pub oracle: Oracle<R>,
    pub input_mode: InputMode,
    pub show_help: bool,

    // Table list state
    pub names: Vec<String>,
    pub filtered: Vec<usize>,
    pub cursor: usize,
    pub search_query: String,

    // Entries pane
    pub entries_scroll: u16,

    pub last_roll: Option<RollOutcome>,
}

impl<R: DiceRoller> App<R> {
    pub fn new(oracle: Oracle<R>) -> Self {
        let names: Vec<String> = oracle.tables().names().map(str::to_string).collect();
        let mut app = Self {
            oracle,
            input_mode: InputMode::Normal,
            show_help: false,
            filtered: (0..names.len()).collect(),
            names,
            cursor: 0,
            search_query: String::new(),
            entries_scroll: 0,
            last_roll: None,
        };
        app.update_filtered_list();
        app
    }

    pub fn update_filtered_list(&mut self) {
        let query = self.search_query.to_lowercase();
        self.filtered = self
            .names
            .iter()
            .enumerate()
            .filter(|(_, name)| query.is_empty() || name.to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect();
        // Clamp cursor
        if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len().saturating_sub(1);
        }
    }

    pub fn selected_table(&self) -> Option<&str> {
        self.filtered
            .get(self.cursor)
            .and_then(|&i| self.names.get(i))
            .map(String::as_str)
    }

    /// Numbered rows of the selected table.
    pub fn selected_listing(&self) -> String {
        self.selected_table()
            .and_then(|name| self.oracle.tables().describe(name).ok())
            .unwrap_or_default()
    }

    // Navigation
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
            self.entries_scroll = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.entries_scroll = 0;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
        self.entries_scroll = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.filtered.len().saturating_sub(1);
        self.entries_scroll = 0;
    }

    pub fn scroll_entries_down(&mut self) {
        self.entries_scroll = self.entries_scroll.saturating_add(1);
    }

    pub fn scroll_entries_up(&mut self) {
        self.entries_scroll = self.entries_scroll.saturating_sub(1);
    }

    /// Roll on the selected table and keep the outcome for display.
    pub fn roll_selected(&mut self) {
        let Some(table) = self.selected_table().map(str::to_string) else {
            return;
        };
        self.last_roll = Some(match self.oracle.roll_table(&table) {
            Ok(roll) => RollOutcome::Rolled(roll),
            Err(e) => {
                tracing::debug!(table = %table, error = %e, "roll failed");
                RollOutcome::Failed {
                    table,
                    message: e.to_string(),
                }
            }
        });
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // Search
    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_query.clear();
        self.update_filtered_list();
    }

    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.update_filtered_list();
    }

    pub fn confirm_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.cursor = 0;
        self.update_filtered_list();
    }

    pub fn search_backspace(&mut self) {
        self.search_query.pop();
        self.update_filtered_list();
    }
}
