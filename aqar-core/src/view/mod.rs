//! UI-agnostic view model
//!
//! Each component owns its own state and exposes typed update methods; the
//! front ends only read it to draw.

mod composer;
mod dialects;
mod selector;
mod transcript;

pub use composer::Composer;
pub use dialects::{DialectOption, DialectSelector};
pub use selector::{ConversationEntry, ConversationSelector};
pub use transcript::{SCROLL_BOTTOM, Transcript, TranscriptEntry};

use crate::constants::DEFAULT_TITLE;

/// Everything a front end draws
#[derive(Debug, Clone)]
pub struct ChatView {
    pub transcript: Transcript,
    pub selector: ConversationSelector,
    pub dialects: DialectSelector,
    pub composer: Composer,
    /// Title of the open conversation
    pub header_title: String,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ChatView {
    pub fn new(date_header: Option<String>) -> Self {
        Self {
            transcript: Transcript::new(date_header),
            selector: ConversationSelector::default(),
            dialects: DialectSelector::default(),
            composer: Composer::default(),
            header_title: DEFAULT_TITLE.to_string(),
        }
    }
}
