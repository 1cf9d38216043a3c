/// Rosters tab: the stored roster keys, one per line
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::theme::{list_selected_style, LIST_HIGHLIGHT_SYMBOL, MUTED_COLOR};
use crate::config::ThemeConfig;

#[derive(Debug, Default)]
pub struct RosterList {
    keys: Vec<String>,
    selected: usize,
}

impl RosterList {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys, selected: 0 }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.keys.get(self.selected).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.keys.len() {
            self.selected += 1;
        }
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &ThemeConfig,
        browsing: Option<&str>,
        compare: Option<&str>,
    ) {
        let items: Vec<ListItem> = self
            .keys
            .iter()
            .map(|key| {
                let mut spans = vec![Span::raw(key.clone())];
                if browsing == Some(key.as_str()) {
                    spans.push(Span::styled("  [browsing]", Style::new().fg(MUTED_COLOR)));
                }
                if compare == Some(key.as_str()) {
                    spans.push(Span::styled("  [compare]", Style::new().fg(MUTED_COLOR)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Rosters "))
            .highlight_style(list_selected_style(theme, true))
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        if !self.keys.is_empty() {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}
