use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;
use crate::formatting::DetailTier;

pub const MUTED_COLOR: Color = Color::DarkGray;

// Tab navigation
pub fn tab_active_style(theme: &ThemeConfig) -> Style {
    Style::new()
        .fg(theme.selection_fg)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive_style() -> Style {
    Style::new().fg(Color::White)
}

pub fn section_header_style() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

pub fn list_selected_style(theme: &ThemeConfig, focused: bool) -> Style {
    let fg = if focused {
        theme.selection_fg
    } else {
        theme.unfocused_selection_fg()
    };
    Style::new().fg(fg).add_modifier(Modifier::BOLD)
}

pub const LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Foreground for a stat sheet tier, plain text when untiered
pub fn tier_style(theme: &ThemeConfig, tier: Option<DetailTier>) -> Style {
    match tier {
        Some(DetailTier::Low) => Style::new().fg(theme.low_fg),
        Some(DetailTier::Mid) => Style::new().fg(theme.mid_fg),
        Some(DetailTier::High) => Style::new().fg(theme.high_fg),
        None => Style::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_style_uses_theme() {
        let theme = ThemeConfig::default();
        assert_eq!(tier_style(&theme, Some(DetailTier::Low)).fg, Some(theme.low_fg));
        assert_eq!(tier_style(&theme, Some(DetailTier::High)).fg, Some(Color::Green));
        assert_eq!(tier_style(&theme, None), Style::new());
    }

    #[test]
    fn test_unfocused_list_selection_is_dimmed() {
        let theme = ThemeConfig {
            selection_fg: Color::Rgb(200, 200, 200),
            ..Default::default()
        };
        assert_eq!(list_selected_style(&theme, true).fg, Some(Color::Rgb(200, 200, 200)));
        assert_eq!(list_selected_style(&theme, false).fg, Some(Color::Rgb(100, 100, 100)));
    }
}
