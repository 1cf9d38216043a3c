/// Browse tab: player list on the left, the chosen player's stat sheet on the right
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::{list_selected_style, LIST_HIGHLIGHT_SYMBOL, MUTED_COLOR};
use super::widgets::{RenderableWidget, StatSheetWidget};
use crate::config::Config;
use crate::data_provider::RosterSource;
use crate::layout_constants::PLAYER_LIST_WIDTH;
use crate::sheet::StatSheet;
use crate::types::Player;

pub const PLACEHOLDER: &str = "Nothing here yet :(";

#[derive(Debug, Default)]
pub struct DetailsTab {
    key: Option<String>,
    players: Vec<Player>,
    selected: Option<usize>,
    sheet: Option<StatSheet>,
}

impl DetailsTab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show roster `key` from `source`, preselecting its first player
    pub fn select_roster(&mut self, source: &dyn RosterSource, key: &str, config: &Config) {
        let players = source.get_set(key);
        tracing::debug!("Browsing roster '{}' ({} players)", key, players.len());
        self.key = Some(key.to_string());
        self.players = players;
        self.selected = None;
        self.sheet = None;
        self.select_player(0, config);
    }

    pub fn clear_roster(&mut self) {
        *self = Self::default();
    }

    /// Choose the player at `index`; out of range keeps the current choice
    pub fn select_player(&mut self, index: usize, config: &Config) {
        let Some(player) = self.players.get(index) else {
            return;
        };
        self.selected = Some(index);
        self.sheet = Some(StatSheet::build(player, config));
    }

    pub fn move_up(&mut self, config: &Config) {
        if let Some(i) = self.selected {
            self.select_player(i.saturating_sub(1), config);
        }
    }

    pub fn move_down(&mut self, config: &Config) {
        if let Some(i) = self.selected {
            self.select_player(i + 1, config);
        }
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.selected.and_then(|i| self.players.get(i))
    }

    pub fn sheet(&self) -> Option<&StatSheet> {
        self.sheet.as_ref()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, config: &Config) {
        let Some(key) = &self.key else {
            let placeholder = Paragraph::new(Line::styled(PLACEHOLDER, Style::new().fg(MUTED_COLOR)));
            f.render_widget(placeholder, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PLAYER_LIST_WIDTH), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = self
            .players
            .iter()
            .map(|p| ListItem::new(p.name.clone()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", key)))
            .highlight_style(list_selected_style(&config.theme, true))
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        state.select(self.selected);
        f.render_stateful_widget(list, chunks[0], &mut state);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);
        match &self.sheet {
            Some(sheet) => StatSheetWidget::new(sheet).render(inner, f.buffer_mut(), &config.theme),
            None => f.render_widget(Paragraph::new(Line::styled(PLACEHOLDER, Style::new().fg(MUTED_COLOR))), inner),
        }
    }
}
