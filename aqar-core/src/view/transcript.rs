//! Transcript renderer: the ordered, scrollable list of rendered messages

use crate::domain::types::Message;

/// Scroll offset meaning "stick to the newest entry"; resolved at draw time.
pub const SCROLL_BOTTOM: u16 = u16::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Message(Message),
    /// The "assistant is typing" placeholder
    Typing,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    header: Option<String>,
    entries: Vec<TranscriptEntry>,
    typing: bool,
    /// Scroll offset in lines, or [`SCROLL_BOTTOM`]
    pub scroll_offset: u16,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transcript {
    pub fn new(header: Option<String>) -> Self {
        Self {
            header,
            entries: Vec::new(),
            typing: false,
            scroll_offset: SCROLL_BOTTOM,
        }
    }

    /// Date header kept across [`Transcript::clear`]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|entry| match entry {
            TranscriptEntry::Message(message) => Some(message),
            TranscriptEntry::Typing => None,
        })
    }

    pub fn message_count(&self) -> usize {
        self.messages().count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages().last()
    }

    /// Append a message and jump to the bottom. A shown typing indicator
    /// stays the last entry.
    pub fn render(&mut self, message: Message) {
        let entry = TranscriptEntry::Message(message);
        match self
            .entries
            .iter()
            .position(|entry| matches!(entry, TranscriptEntry::Typing))
        {
            Some(index) => self.entries.insert(index, entry),
            None => self.entries.push(entry),
        }
        self.scroll_to_bottom();
    }

    /// Remove every entry except the header. The typing flag is left alone so
    /// an outstanding request can still clear it.
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.typing {
            self.entries.push(TranscriptEntry::Typing);
        }
        self.scroll_to_bottom();
    }

    /// Insert the typing indicator. Returns false if it was already shown.
    pub fn show_typing(&mut self) -> bool {
        if self.typing {
            return false;
        }
        self.typing = true;
        self.entries.push(TranscriptEntry::Typing);
        self.scroll_to_bottom();
        true
    }

    /// Remove the typing indicator. Returns false if none was shown.
    pub fn hide_typing(&mut self) -> bool {
        let was_typing = self.typing;
        self.typing = false;
        self.entries
            .retain(|entry| !matches!(entry, TranscriptEntry::Typing));
        was_typing
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn typing_indicator_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, TranscriptEntry::Typing))
            .count()
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        if self.scroll_offset == SCROLL_BOTTOM {
            self.scroll_offset = max_scroll;
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset == SCROLL_BOTTOM {
            return;
        }
        if self.scroll_offset + 1 >= max_scroll {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = SCROLL_BOTTOM;
    }
}
