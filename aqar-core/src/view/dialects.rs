//! Dialect selector

use crate::domain::types::Dialect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectOption {
    /// Raw dialect name sent to the service
    pub value: String,
    /// Display label
    pub label: String,
}

impl From<&Dialect> for DialectOption {
    fn from(dialect: &Dialect) -> Self {
        Self {
            value: dialect.name().to_string(),
            label: dialect.label(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialectSelector {
    options: Vec<DialectOption>,
    selected: Option<usize>,
    pub cursor: usize,
}

impl DialectSelector {
    pub fn options(&self) -> &[DialectOption] {
        &self.options
    }

    /// Replace every option. The selection survives if its value is still offered.
    pub fn replace_options(&mut self, dialects: &[Dialect]) {
        let selected_value = self.selected().map(|option| option.value.clone());
        self.options = dialects.iter().map(DialectOption::from).collect();
        self.selected = selected_value
            .and_then(|value| self.options.iter().position(|option| option.value == value));
        self.cursor = self.selected.unwrap_or(0);
    }

    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected = Some(index);
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&DialectOption> {
        self.selected.and_then(|index| self.options.get(index))
    }

    pub fn cursor_value(&self) -> Option<&str> {
        self.options
            .get(self.cursor)
            .map(|option| option.value.as_str())
    }

    pub fn cursor_down(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.options.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}
