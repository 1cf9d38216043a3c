/// Testing utilities for widget rendering
use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::ThemeConfig;
use super::RenderableWidget;

/// Render a widget to a buffer with the default theme
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, &ThemeConfig::default());
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width).map(|x| buf[(x, line)].symbol()).collect()
}

/// All buffer lines with trailing spaces removed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area().height)
        .map(|y| buffer_line(buf, y).trim_end().to_string())
        .collect()
}

/// Find the first cell whose line contains `text`, returning its position
pub fn find_text(buf: &Buffer, text: &str) -> Option<(u16, u16)> {
    for y in 0..buf.area().height {
        let line = buffer_line(buf, y);
        if let Some(byte_pos) = line.find(text) {
            let x = line[..byte_pos].chars().count() as u16;
            return Some((x, y));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
            buf.set_string(area.x, area.y + 1, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_and_find() {
        let widget = TestWidget { text: "Hello".to_string() };
        let buf = render_widget(&widget, 10, 2);
        assert_eq!(buffer_lines(&buf), vec!["".to_string(), "Hello".to_string()]);
        assert_eq!(find_text(&buf, "llo"), Some((2, 1)));
        assert_eq!(find_text(&buf, "bye"), None);
    }
}
