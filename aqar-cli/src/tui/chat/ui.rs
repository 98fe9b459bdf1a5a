//! Chat UI rendering components

use super::state::{Focus, ScreenState};
use crate::tui::theme;
use aqar_core::view::{ChatView, SCROLL_BOTTOM, TranscriptEntry};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, screen: &mut ScreenState, view: &ChatView, base_url: &str) {
        let area = frame.area();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(30)])
            .split(area);

        // Sidebar: conversations on top, dialects below
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(8)])
            .split(columns[0]);

        // Main column: Status bar, Messages, Input, Help bar
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(columns[1]);

        Self::render_conversations(frame, sidebar[0], screen, view);
        Self::render_dialects(frame, sidebar[1], screen, view);
        Self::render_status_bar(frame, main[0], screen, view, base_url);
        screen.max_scroll = Self::render_transcript(frame, main[1], screen, view);
        Self::render_composer(frame, main[2], screen, view);
        Self::render_help_bar(frame, main[3], screen);
    }

    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        screen: &ScreenState,
        view: &ChatView,
        base_url: &str,
    ) {
        let dialect = view
            .dialects
            .selected()
            .map(|option| option.label.clone())
            .unwrap_or_else(|| "-".into());

        let mut spans = vec![
            Span::styled(format!(" {} ", view.header_title), theme::title()),
            Span::styled("│ ", theme::subtitle()),
            Span::styled(format!("Dialect: {} ", dialect), theme::text()),
            Span::styled("│ ", theme::subtitle()),
            Span::styled(base_url.to_string(), theme::subtitle()),
        ];
        if view.transcript.is_typing() {
            spans.push(Span::styled(
                format!(" {} ", SPINNER[screen.loading_frame % SPINNER.len()]),
                theme::waiting(),
            ));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border(false));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    /// Draw the transcript and return the largest usable scroll offset
    fn render_transcript(
        frame: &mut Frame,
        area: Rect,
        screen: &ScreenState,
        view: &ChatView,
    ) -> u16 {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(header) = view.transcript.header() {
            lines.push(Line::from(Span::styled(
                format!("── {} ──", header),
                theme::subtitle(),
            )));
            lines.push(Line::from(""));
        }

        for entry in view.transcript.entries() {
            match entry {
                TranscriptEntry::Message(message) => {
                    let (prefix, style) = if message.is_from_user() {
                        ("You: ", theme::outbound())
                    } else {
                        ("Agent: ", theme::inbound())
                    };

                    let mut content = message.text.lines();
                    lines.push(Line::from(vec![
                        Span::styled(format!("[{}] ", message.time), theme::subtitle()),
                        Span::styled(prefix, style),
                        Span::raw(content.next().unwrap_or_default().to_string()),
                    ]));
                    let indent = " ".repeat(message.time.chars().count() + 3 + prefix.len());
                    for line in content {
                        lines.push(Line::from(format!("{}{}", indent, line)));
                    }
                    lines.push(Line::from(""));
                }
                TranscriptEntry::Typing => {
                    lines.push(Line::from(Span::styled(
                        format!(
                            "Agent: {} ...",
                            SPINNER[screen.loading_frame % SPINNER.len()]
                        ),
                        theme::waiting(),
                    )));
                }
            }
        }

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border(false));
        let inner = block.inner(area);
        let para = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Scroll limits count wrapped rows, not logical lines
        let rows = para.line_count(inner.width);
        let max_scroll = u16::try_from(rows.saturating_sub(inner.height as usize))
            .unwrap_or(SCROLL_BOTTOM - 1)
            .min(SCROLL_BOTTOM - 1);
        let scroll = if view.transcript.scroll_offset == SCROLL_BOTTOM {
            max_scroll
        } else {
            view.transcript.scroll_offset.min(max_scroll)
        };

        frame.render_widget(para.block(block).scroll((scroll, 0)), area);
        max_scroll
    }

    fn render_composer(frame: &mut Frame, area: Rect, screen: &ScreenState, view: &ChatView) {
        let composer = &view.composer;
        let focused = screen.focus == Focus::Composer;

        let display_input = if composer.is_empty() {
            Span::styled("Type your message...", theme::subtitle())
        } else {
            let mut chars: Vec<char> = composer.text().chars().collect();
            if focused {
                if composer.cursor() >= chars.len() {
                    chars.push('_');
                } else {
                    chars.insert(composer.cursor(), '|');
                }
            }
            Span::styled(chars.into_iter().collect::<String>(), theme::text())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(focused))
            .title(" Message ");
        let line = Line::from(vec![Span::styled("> ", theme::outbound()), display_input]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_conversations(frame: &mut Frame, area: Rect, screen: &ScreenState, view: &ChatView) {
        let focused = screen.focus == Focus::Conversations;
        let items: Vec<ListItem> = view
            .selector
            .entries()
            .iter()
            .map(|entry| {
                let marker = if entry.active {
                    Span::styled("● ", theme::active_marker())
                } else {
                    Span::raw("  ")
                };
                let mut lines = vec![Line::from(vec![
                    marker,
                    Span::styled(entry.title.clone(), theme::text()),
                    Span::styled(format!(" {}", entry.time), theme::subtitle()),
                ])];
                if !entry.last_message.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", entry.last_message),
                        theme::subtitle(),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(focused))
            .title(" Conversations ");
        let list = List::new(items).block(block).highlight_style(theme::selected());

        let mut state = ListState::default();
        if focused && !view.selector.is_empty() {
            state.select(Some(view.selector.cursor));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_dialects(frame: &mut Frame, area: Rect, screen: &ScreenState, view: &ChatView) {
        let focused = screen.focus == Focus::Dialects;
        let selected = view.dialects.selected().map(|option| option.value.as_str());
        let items: Vec<ListItem> = view
            .dialects
            .options()
            .iter()
            .map(|option| {
                let marker = if Some(option.value.as_str()) == selected {
                    Span::styled("● ", theme::active_marker())
                } else {
                    Span::raw("  ")
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::styled(option.label.clone(), theme::text()),
                ]))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(focused))
            .title(" Dialect ");
        let list = List::new(items).block(block).highlight_style(theme::selected());

        let mut state = ListState::default();
        if focused && !view.dialects.options().is_empty() {
            state.select(Some(view.dialects.cursor));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, screen: &ScreenState) {
        let hints: &[(&str, &str)] = match screen.focus {
            Focus::Composer => &[
                ("Enter", "Send"),
                ("Tab", "Panels"),
                ("PageUp/Down", "Scroll"),
                ("Ctrl+N", "New"),
                ("Ctrl+Q", "Exit"),
            ],
            Focus::Conversations => &[
                ("↑/↓", "Move"),
                ("Enter", "Open"),
                ("Tab", "Panels"),
                ("Ctrl+R", "Refresh"),
                ("Ctrl+Q", "Exit"),
            ],
            Focus::Dialects => &[
                ("↑/↓", "Move"),
                ("Enter", "Use dialect"),
                ("Tab", "Panels"),
                ("Ctrl+Q", "Exit"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (index, (key, label)) in hints.iter().enumerate() {
            let separator = if index + 1 == hints.len() { " " } else { " │ " };
            spans.push(Span::styled(format!(" {}", key), theme::key_hint()));
            spans.push(Span::raw(format!(": {}{}", label, separator)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
