use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::Tab;
use super::theme::{self, MUTED_COLOR};
use crate::config::ThemeConfig;

/// Render the top tab bar with number shortcuts
pub fn render_tab_bar(f: &mut Frame, area: Rect, current_tab: Tab, theme_config: &ThemeConfig) {
    let mut spans = Vec::new();

    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }

        let label = format!("{}. {}", tab.number(), tab.label());
        let style = if *tab == current_tab {
            theme::tab_active_style(theme_config)
        } else {
            theme::tab_inactive_style()
        };
        spans.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

/// What the status bar shows next to the key help
pub struct StatusInfo<'a> {
    pub message: Option<&'a str>,
    pub members_only: bool,
    pub compare: Option<&'a str>,
}

/// Render the bottom status bar: last message, or key help, and the export options
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let help_style = Style::default().fg(MUTED_COLOR);
    let mut spans = Vec::new();

    match info.message {
        Some(message) if message.starts_with("Export failed") => {
            spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
        }
        Some(message) => spans.push(Span::raw(message.to_string())),
        None => {
            let help = ["↑/↓ Navigate", "Enter Select", "i Image", "c CSV", "m Members", "x Compare", "q Quit"];
            for (i, item) in help.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" │ ", help_style));
                }
                spans.push(Span::styled(*item, help_style));
            }
        }
    }

    let mut options = Vec::new();
    if info.members_only {
        options.push("members only".to_string());
    }
    if let Some(compare) = info.compare {
        options.push(format!("compare: {}", compare));
    }
    if !options.is_empty() {
        spans.push(Span::styled(format!("   [{}]", options.join(", ")), help_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
