/// Inline save prompt shown in the status line before an export
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::ThemeConfig;
use crate::export::{ExtensionFilter, FixedPath, CSV_FILTER, PNG_FILTER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Image,
    Csv,
}

impl ExportKind {
    pub fn filter(self) -> &'static ExtensionFilter {
        match self {
            ExportKind::Image => &PNG_FILTER,
            ExportKind::Csv => &CSV_FILTER,
        }
    }
}

/// Result of feeding a key to the prompt
#[derive(Debug)]
pub enum PromptResult {
    Editing,
    /// The prompt is closed; the path answers the save dialog, or cancels it
    Done(FixedPath),
}

#[derive(Debug, Clone)]
pub struct ExportPrompt {
    pub kind: ExportKind,
    pub roster: String,
    input: String,
}

impl ExportPrompt {
    /// Start a prompt prefilled with the roster name
    pub fn new(kind: ExportKind, roster: &str) -> Self {
        Self {
            kind,
            roster: roster.to_string(),
            input: roster.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptResult {
        match key.code {
            KeyCode::Enter => {
                let answer = self.input.trim();
                if answer.is_empty() {
                    PromptResult::Done(FixedPath::cancelled())
                } else {
                    PromptResult::Done(FixedPath::new(answer))
                }
            }
            KeyCode::Esc => PromptResult::Done(FixedPath::cancelled()),
            KeyCode::Backspace => {
                self.input.pop();
                PromptResult::Editing
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                PromptResult::Editing
            }
            _ => PromptResult::Editing,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &ThemeConfig) {
        let line = Line::from(vec![
            Span::styled(
                format!("Save {} as ({}): ", self.roster, self.kind.filter().description),
                Style::new().fg(theme.selection_fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.input.clone()),
            Span::styled("_", Style::new().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
