use unicode_width::UnicodeWidthStr;
use crate::config::Thresholds;
use crate::layout_constants::BOOK_TOTAL;

/// Drawing characters for text output
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub bar_filled: String,
    pub bar_empty: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            bar_filled: "█".to_string(),
            bar_empty: "░".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            bar_filled: "#".to_string(),
            bar_empty: ".".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `box_chars` - Character set to draw the underline with
pub fn format_header(text: &str, double_line: bool, box_chars: &BoxChars) -> String {
    let separator_char = if double_line {
        &box_chars.double_horizontal
    } else {
        &box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Draw a fixed-width progress bar for a fraction in 0.0..=1.0
pub fn format_bar(fraction: f64, width: usize, box_chars: &BoxChars) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (fraction * width as f64).round() as usize;
    format!(
        "{}{}",
        box_chars.bar_filled.repeat(filled),
        box_chars.bar_empty.repeat(width - filled)
    )
}

/// Color classes of the export threshold ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTier {
    Red,
    Yellow,
    Green,
}

impl ExportTier {
    pub fn hex(self) -> &'static str {
        match self {
            ExportTier::Red => "#FB4A2D",
            ExportTier::Yellow => "#FFE943",
            ExportTier::Green => "#70AD47",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ExportTier::Red => [0xFB, 0x4A, 0x2D],
            ExportTier::Yellow => [0xFF, 0xE9, 0x43],
            ExportTier::Green => [0x70, 0xAD, 0x47],
        }
    }
}

/// Classify a value with strict less-than comparisons.
///
/// `value < low` is red, `low <= value < high` is yellow, anything else green.
pub fn threshold_color(value: i64, thresholds: Thresholds) -> ExportTier {
    if value < thresholds.low {
        ExportTier::Red
    } else if value < thresholds.high {
        ExportTier::Yellow
    } else {
        ExportTier::Green
    }
}

/// Tiers of the stat sheet ladder, mapped to theme colors by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTier {
    Low,
    Mid,
    High,
}

/// Stat sheet ladder: no tier at all unless highlighted, otherwise
/// low below `low`, mid below `high`, high from `high` on.
pub fn detail_tier(value: i64, thresholds: Thresholds, highlighted: bool) -> Option<DetailTier> {
    if !highlighted {
        return None;
    }
    Some(if value < thresholds.low {
        DetailTier::Low
    } else if value < thresholds.high {
        DetailTier::Mid
    } else {
        DetailTier::High
    })
}

/// Signed integer delta: "+5", "-3"
pub fn format_delta(delta: i64) -> String {
    if delta < 0 {
        format!("-{}", delta.unsigned_abs())
    } else {
        format!("+{}", delta)
    }
}

/// Signed album percentage delta with two decimals: "+0.46", "-1.02"
pub fn format_percent_delta(book_delta: i64) -> String {
    let pct = book_percent(book_delta);
    if pct < 0.0 {
        format!("-{:.2}", -pct)
    } else {
        format!("+{:.2}", pct)
    }
}

/// Album fraction in 0.0..=1.0
pub fn book_fraction(book: i64) -> f64 {
    book as f64 / BOOK_TOTAL as f64
}

/// Album completion in percent
pub fn book_percent(book: i64) -> f64 {
    100.0 * book_fraction(book)
}

/// Group digits in thousands: 1234567 -> "1 234 567"
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
