//! Conversation selector: side panel of known conversations

use crate::domain::types::ConversationId;
use crate::gateway::ConversationSummary;

/// One row of the conversation panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub id: ConversationId,
    pub title: String,
    pub last_message: String,
    pub time: String,
    pub active: bool,
}

impl ConversationEntry {
    pub fn new(id: ConversationId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            last_message: String::new(),
            time: String::new(),
            active: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversationSelector {
    entries: Vec<ConversationEntry>,
    /// Highlighted row while the panel has focus
    pub cursor: usize,
}

impl ConversationSelector {
    pub fn new(entries: Vec<ConversationEntry>) -> Self {
        Self { entries, cursor: 0 }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the listed conversations. Previews and the active marker of
    /// conversations that are still listed carry over.
    pub fn replace(&mut self, summaries: Vec<ConversationSummary>) {
        let previous = std::mem::take(&mut self.entries);
        self.entries = summaries
            .into_iter()
            .map(|summary| {
                let mut entry = ConversationEntry::new(summary.id, summary.title);
                if let Some(old) = previous.iter().find(|old| old.id == entry.id) {
                    entry.last_message = old.last_message.clone();
                    entry.time = old.time.clone();
                    entry.active = old.active;
                }
                entry
            })
            .collect();
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
    }

    /// Add a conversation if it is not listed yet
    pub fn ensure(&mut self, id: &ConversationId, title: &str) {
        if !self.entries.iter().any(|entry| &entry.id == id) {
            self.entries.push(ConversationEntry::new(id.clone(), title));
        }
    }

    /// Mark exactly the entry for `id` active. Returns false if it is not listed,
    /// in which case no entry stays marked.
    pub fn set_active(&mut self, id: &ConversationId) -> bool {
        let mut found = false;
        for entry in &mut self.entries {
            entry.active = &entry.id == id;
            found |= entry.active;
        }
        found
    }

    pub fn clear_active(&mut self) {
        for entry in &mut self.entries {
            entry.active = false;
        }
    }

    pub fn active(&self) -> Option<&ConversationEntry> {
        self.entries.iter().find(|entry| entry.active)
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.active).count()
    }

    /// Overwrite the preview text and time of the entry for `id`
    pub fn update_preview(&mut self, id: &ConversationId, text: &str, time: &str) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.id == id) {
            Some(entry) => {
                entry.last_message = text.to_string();
                entry.time = time.to_string();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &ConversationId) -> Option<&ConversationEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Conversation id carried by the row at `index`
    pub fn id_at(&self, index: usize) -> Option<&ConversationId> {
        self.entries.get(index).map(|entry| &entry.id)
    }

    pub fn cursor_id(&self) -> Option<&ConversationId> {
        self.id_at(self.cursor)
    }

    pub fn cursor_down(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }
}
