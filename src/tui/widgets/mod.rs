/// Widget-based rendering for the TUI
///
/// Widgets render themselves directly to a ratatui Buffer so that they can be
/// tested against plain buffers without a terminal.

#[cfg(test)]
pub mod testing;

pub mod stat_sheet;
pub use stat_sheet::StatSheetWidget;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
