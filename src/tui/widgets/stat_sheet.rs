/// StatSheetWidget - one player's sheet in two columns
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::formatting::{format_bar, BoxChars};
use crate::layout_constants::{SHEET_BAR_WIDTH, SHEET_LABEL_WIDTH};
use crate::sheet::{Bar, Field, StatSheet, Value};
use crate::tui::theme::{section_header_style, tier_style, MUTED_COLOR};

/// Rows above the two columns: title, guild, XP bar, blank
const HEADER_ROWS: u16 = 4;

pub struct StatSheetWidget<'a> {
    pub sheet: &'a StatSheet,
}

impl<'a> StatSheetWidget<'a> {
    pub fn new(sheet: &'a StatSheet) -> Self {
        Self { sheet }
    }

    fn section(title: &str) -> [Line<'static>; 2] {
        let rule = BoxChars::unicode().horizontal.repeat(title.width());
        [
            Line::from(Span::styled(title.to_string(), section_header_style())),
            Line::from(Span::styled(rule, Style::new().fg(MUTED_COLOR))),
        ]
    }

    fn label(label: &str) -> Span<'static> {
        Span::raw(format!("  {:<width$}", format!("{}:", label), width = SHEET_LABEL_WIDTH))
    }

    fn value_line(label: &str, value: &Value, theme: &ThemeConfig) -> Line<'static> {
        Line::from(vec![
            Self::label(label),
            Span::styled(value.text.clone(), tier_style(theme, value.tier)),
        ])
    }

    fn plain_line(label: &str, text: String) -> Line<'static> {
        Line::from(vec![Self::label(label), Span::raw(text)])
    }

    fn bar_lines(label: &str, bar: &Bar, theme: &ThemeConfig) -> [Line<'static>; 2] {
        let drawn = format_bar(bar.fraction, SHEET_BAR_WIDTH / 2, &BoxChars::unicode());
        [
            Line::from(vec![Self::label(label), Span::styled(drawn, tier_style(theme, bar.tier))]),
            Line::from(Span::styled(format!("    {}", bar.tooltip), Style::new().fg(MUTED_COLOR))),
        ]
    }

    fn fields(lines: &mut Vec<Line<'static>>, fields: &[Field], theme: &ThemeConfig) {
        lines.extend(fields.iter().map(|f| Self::value_line(f.label, &f.value, theme)));
    }

    fn left_column(&self, theme: &ThemeConfig) -> Vec<Line<'static>> {
        let sheet = self.sheet;
        let mut lines = Vec::from(Self::section("Mount & Potions"));
        lines.push(Self::value_line("Mount", &sheet.mount, theme));
        if sheet.potions.is_empty() {
            lines.push(Self::plain_line("Potions", "-".to_string()));
        }
        for (i, potion) in sheet.potions.iter().enumerate() {
            let label = if i == 0 { "Potions" } else { "" };
            let mut line = Self::plain_line(label, format!("{:<6}{}", potion.duration, potion.name));
            if i > 0 {
                line.spans[0] = Span::raw(" ".repeat(SHEET_LABEL_WIDTH + 2));
            }
            lines.push(line);
        }

        lines.push(Line::default());
        lines.extend(Self::section("Rankings"));
        for row in &sheet.rankings {
            lines.push(Self::plain_line(row.label, format!("#{} ({} honor)", row.rank, row.honor)));
        }

        if let Some(group) = &sheet.group {
            lines.push(Line::default());
            lines.extend(Self::section("Group"));
            lines.push(Self::plain_line("Position", group.position.to_string()));
            lines.push(Self::plain_line("Treasure", group.treasure.to_string()));
            lines.push(Self::plain_line("Instructor", group.instructor.to_string()));
            lines.push(Self::value_line("Pet", &group.pet, theme));
            lines.push(Self::value_line("Knights", &group.knights, theme));
        }
        lines
    }

    fn right_column(&self, theme: &ThemeConfig) -> Vec<Line<'static>> {
        let sheet = self.sheet;
        let mut lines = Vec::from(Self::section("Collectibles"));
        lines.extend(Self::bar_lines("Scrapbook", &sheet.scrapbook, theme));
        lines.extend(Self::bar_lines("Achievements", &sheet.achievements, theme));

        lines.push(Line::default());
        lines.extend(Self::section("Attributes"));
        Self::fields(&mut lines, &sheet.attributes, theme);

        lines.push(Line::default());
        lines.extend(Self::section("Fortress"));
        Self::fields(&mut lines, &sheet.fortress, theme);
        lines
    }

    fn render_column(lines: &[Line<'_>], area: Rect, buf: &mut Buffer) {
        for (i, line) in lines.iter().take(area.height as usize).enumerate() {
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}

impl RenderableWidget for StatSheetWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let sheet = self.sheet;
        let title = Line::from(vec![
            Span::styled(sheet.title.clone(), Style::new().add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled(sheet.gear.clone(), Style::new().fg(theme.selection_fg)),
        ]);
        let guild = Line::from(Span::styled(
            sheet.guild.clone().unwrap_or_default(),
            Style::new().fg(MUTED_COLOR),
        ));
        let xp = Line::from(vec![
            Span::raw("XP "),
            Span::raw(format_bar(sheet.xp.fraction, SHEET_BAR_WIDTH, &BoxChars::unicode())),
            Span::styled(format!("  {}", sheet.xp.tooltip), Style::new().fg(MUTED_COLOR)),
        ]);
        Self::render_column(&[title, guild, xp], area, buf);

        if area.height <= HEADER_ROWS {
            return;
        }
        let body_height = area.height - HEADER_ROWS;
        let left_width = area.width / 2;
        let left = Rect::new(area.x, area.y + HEADER_ROWS, left_width, body_height);
        let right = Rect::new(area.x + left_width, area.y + HEADER_ROWS, area.width - left_width, body_height);

        Self::render_column(&self.left_column(theme), left, buf);
        Self::render_column(&self.right_column(theme), right, buf);
    }

    fn preferred_height(&self) -> Option<u16> {
        let theme = ThemeConfig::default();
        let body = self.left_column(&theme).len().max(self.right_column(&theme).len());
        Some(HEADER_ROWS + body as u16)
    }
}
