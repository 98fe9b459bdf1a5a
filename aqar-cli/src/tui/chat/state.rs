//! Screen-only state; everything about the conversation lives in the controller's view

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Composer,
    Conversations,
    Dialects,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Composer => Focus::Conversations,
            Focus::Conversations => Focus::Dialects,
            Focus::Dialects => Focus::Composer,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Composer => Focus::Dialects,
            Focus::Conversations => Focus::Composer,
            Focus::Dialects => Focus::Conversations,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScreenState {
    pub focus: Focus,
    /// Spinner frame of the typing indicator
    pub loading_frame: usize,
    /// Largest transcript scroll offset at the last draw
    pub max_scroll: u16,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self, typing: bool) {
        if typing {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }
}
