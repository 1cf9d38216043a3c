use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::components::{render_status_bar, render_tab_bar, StatusInfo};
use super::details::DetailsTab;
use super::prompt::{ExportKind, ExportPrompt, PromptResult};
use super::rosters::RosterList;
use crate::config::Config;
use crate::data_provider::RosterSource;
use crate::export::{as_csv, as_image, FixedPath};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Rosters,
    Browse,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Rosters, Tab::Browse];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Rosters => "Rosters",
            Tab::Browse => "Browse players",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Tab::Rosters => 1,
            Tab::Browse => 2,
        }
    }

    pub fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(Tab::Rosters),
            2 => Some(Tab::Browse),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Rosters => Tab::Browse,
            Tab::Browse => Tab::Rosters,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Application state; keys are applied here so it runs without a terminal
pub struct App<'a> {
    source: &'a dyn RosterSource,
    pub config: Config,
    pub current_tab: Tab,
    pub rosters: RosterList,
    pub details: DetailsTab,
    pub members_only: bool,
    pub compare: Option<String>,
    pub status: Option<String>,
    pub prompt: Option<ExportPrompt>,
}

impl<'a> App<'a> {
    pub fn new(source: &'a dyn RosterSource, config: Config) -> Self {
        let rosters = RosterList::new(source.keys());
        tracing::debug!("Found {} rosters", rosters.keys().len());
        App {
            source,
            config,
            current_tab: Tab::Rosters,
            rosters,
            details: DetailsTab::new(),
            members_only: false,
            compare: None,
            status: None,
            prompt: None,
        }
    }

    /// The roster exports apply to: the browsed one on the Browse tab,
    /// the highlighted one on the Rosters tab
    pub fn current_roster(&self) -> Option<&str> {
        match self.current_tab {
            Tab::Rosters => self.rosters.selected_key(),
            Tab::Browse => self.details.selected_key(),
        }
    }

    /// Apply a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(mut prompt) = self.prompt.take() {
            match prompt.handle_key(key) {
                PromptResult::Done(fixed) => self.finish_export(prompt, fixed),
                PromptResult::Editing => self.prompt = Some(prompt),
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Left => self.current_tab = self.current_tab.prev(),
            KeyCode::Right => self.current_tab = self.current_tab.next(),
            KeyCode::Char(c @ '1'..='2') => {
                if let Some(tab) = c.to_digit(10).and_then(|n| Tab::from_number(n as usize)) {
                    self.current_tab = tab;
                }
            }
            KeyCode::Char('i') => self.start_export(ExportKind::Image),
            KeyCode::Char('c') => self.start_export(ExportKind::Csv),
            KeyCode::Char('m') => {
                self.members_only = !self.members_only;
                self.status = Some(if self.members_only {
                    "Exporting guild members only".to_string()
                } else {
                    "Exporting all players".to_string()
                });
            }
            KeyCode::Char('d') => {
                self.details.clear_roster();
                self.status = None;
            }
            _ => match self.current_tab {
                Tab::Rosters => self.handle_rosters_key(key),
                Tab::Browse => self.handle_browse_key(key),
            },
        }
        false
    }

    fn handle_rosters_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.rosters.move_up(),
            KeyCode::Down => self.rosters.move_down(),
            KeyCode::Enter => {
                if let Some(roster) = self.rosters.selected_key().map(str::to_string) {
                    self.details.select_roster(self.source, &roster, &self.config);
                    self.current_tab = Tab::Browse;
                }
            }
            KeyCode::Char('x') => {
                let Some(roster) = self.rosters.selected_key().map(str::to_string) else {
                    return;
                };
                if self.compare.as_deref() == Some(roster.as_str()) {
                    self.compare = None;
                    self.status = Some("Comparison cleared".to_string());
                } else {
                    self.status = Some(format!("Comparing against '{}'", roster));
                    self.compare = Some(roster);
                }
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.details.move_up(&self.config),
            KeyCode::Down => self.details.move_down(&self.config),
            _ => {}
        }
    }

    fn start_export(&mut self, kind: ExportKind) {
        match self.current_roster() {
            Some(roster) => self.prompt = Some(ExportPrompt::new(kind, roster)),
            None => self.status = Some("No roster selected".to_string()),
        }
    }

    fn finish_export(&mut self, prompt: ExportPrompt, mut fixed: FixedPath) {
        let outcome = match prompt.kind {
            ExportKind::Image => as_image(
                self.source,
                &self.config,
                &mut fixed,
                &prompt.roster,
                self.compare.as_deref(),
                self.members_only,
            ),
            ExportKind::Csv => as_csv(self.source, &mut fixed, &prompt.roster, self.members_only),
        };
        self.status = Some(outcome.summary());
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        render_tab_bar(f, chunks[0], self.current_tab, &self.config.theme);

        match self.current_tab {
            Tab::Rosters => self.rosters.render(
                f,
                chunks[1],
                &self.config.theme,
                self.details.selected_key(),
                self.compare.as_deref(),
            ),
            Tab::Browse => self.details.render(f, chunks[1], &self.config),
        }

        match &self.prompt {
            Some(prompt) => prompt.render(f, chunks[2], &self.config.theme),
            None => render_status_bar(
                f,
                chunks[2],
                &StatusInfo {
                    message: self.status.as_deref(),
                    members_only: self.members_only,
                    compare: self.compare.as_deref(),
                },
            ),
        }
    }
}
