use crate::config::Config;
use crate::data_provider::RosterSource;
use crate::formatting::{format_bar, format_header, BoxChars, DetailTier};
use crate::layout_constants::{SHEET_BAR_WIDTH, SHEET_LABEL_WIDTH};
use crate::sheet::{Bar, Field, StatSheet, Value};
use crate::types::find_by_name;
use anyhow::{bail, Result};

/// Width of each of the two sheet columns
const SHEET_COLUMN_WIDTH: usize = 36;

/// Spacing between the two sheet columns
const COLUMN_SPACING: usize = 4;

fn tier_marker(tier: Option<DetailTier>) -> &'static str {
    match tier {
        Some(DetailTier::Low) => " [low]",
        Some(DetailTier::Mid) => " [mid]",
        Some(DetailTier::High) => " [ok]",
        None => "",
    }
}

fn value_text(value: &Value) -> String {
    format!("{}{}", value.text, tier_marker(value.tier))
}

fn labeled(label: &str, value: &str) -> String {
    format!("  {:<width$}{}", format!("{}:", label), value, width = SHEET_LABEL_WIDTH)
}

fn section(title: &str, box_chars: &BoxChars) -> Vec<String> {
    format_header(title, false, box_chars)
        .lines()
        .map(|s| s.to_string())
        .collect()
}

fn fields(lines: &mut Vec<String>, fields: &[Field]) {
    for field in fields {
        lines.push(labeled(field.label, &value_text(&field.value)));
    }
}

fn bar_lines(label: &str, bar: &Bar, box_chars: &BoxChars) -> Vec<String> {
    vec![
        labeled(label, &format!("{}{}", format_bar(bar.fraction, SHEET_BAR_WIDTH / 2, box_chars), tier_marker(bar.tier))),
        format!("    {}", bar.tooltip),
    ]
}

fn left_column(sheet: &StatSheet, box_chars: &BoxChars) -> Vec<String> {
    let mut lines = section("Mount & Potions", box_chars);
    lines.push(labeled("Mount", &value_text(&sheet.mount)));
    if sheet.potions.is_empty() {
        lines.push(labeled("Potions", "-"));
    }
    for (i, potion) in sheet.potions.iter().enumerate() {
        let label = if i == 0 { "Potions" } else { "" };
        let text = format!("{:<6}{}", potion.duration, potion.name);
        if label.is_empty() {
            lines.push(format!("  {:<width$}{}", "", text, width = SHEET_LABEL_WIDTH));
        } else {
            lines.push(labeled(label, &text));
        }
    }

    lines.push(String::new());
    lines.extend(section("Rankings", box_chars));
    lines.push(format!("  {:<width$}{:>8}  {:>8}", "", "Rank", "Honor", width = SHEET_LABEL_WIDTH));
    for row in &sheet.rankings {
        lines.push(format!(
            "  {:<width$}{:>8}  {:>8}",
            format!("{}:", row.label),
            row.rank,
            row.honor,
            width = SHEET_LABEL_WIDTH
        ));
    }

    if let Some(group) = &sheet.group {
        lines.push(String::new());
        lines.extend(section("Group", box_chars));
        lines.push(labeled("Position", group.position));
        lines.push(labeled("Treasure", &group.treasure.to_string()));
        lines.push(labeled("Instructor", &group.instructor.to_string()));
        lines.push(labeled("Pet", &value_text(&group.pet)));
        lines.push(labeled("Knights", &value_text(&group.knights)));
    }

    lines
}

fn right_column(sheet: &StatSheet, box_chars: &BoxChars) -> Vec<String> {
    let mut lines = section("Collectibles", box_chars);
    lines.extend(bar_lines("Scrapbook", &sheet.scrapbook, box_chars));
    lines.extend(bar_lines("Achievements", &sheet.achievements, box_chars));

    lines.push(String::new());
    lines.extend(section("Attributes", box_chars));
    fields(&mut lines, &sheet.attributes);

    lines.push(String::new());
    lines.extend(section("Fortress", box_chars));
    fields(&mut lines, &sheet.fortress);

    lines
}

fn merge_columns(left_lines: Vec<String>, right_lines: Vec<String>, column_width: usize) -> String {
    let mut output = String::new();
    let max_len = left_lines.len().max(right_lines.len());

    for i in 0..max_len {
        let left = left_lines.get(i).map(|s| s.as_str()).unwrap_or("");
        let right = right_lines.get(i).map(|s| s.as_str()).unwrap_or("");

        let line = format!(
            "{:<width$}{}{}",
            left,
            " ".repeat(COLUMN_SPACING),
            right,
            width = column_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Format a full stat sheet as text in two columns
pub fn format_sheet(sheet: &StatSheet, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    output.push_str(&format_header(&format!("{}    {}", sheet.title, sheet.gear), true, box_chars));
    if let Some(guild) = &sheet.guild {
        output.push_str(guild);
        output.push('\n');
    }
    output.push_str(&format!(
        "XP {}  {}\n\n",
        format_bar(sheet.xp.fraction, SHEET_BAR_WIDTH, box_chars),
        sheet.xp.tooltip
    ));
    output.push_str(&merge_columns(
        left_column(sheet, box_chars),
        right_column(sheet, box_chars),
        SHEET_COLUMN_WIDTH,
    ));
    output
}

pub fn run(
    source: &dyn RosterSource,
    config: &Config,
    roster: &str,
    player: Option<String>,
    use_unicode: bool,
) -> Result<()> {
    let players = source.get_set(roster);
    if players.is_empty() {
        bail!("Roster '{}' is empty or does not exist", roster);
    }

    let box_chars = BoxChars::from_use_unicode(use_unicode);
    let selected: Vec<_> = match player.as_deref() {
        Some(name) => match find_by_name(&players, name) {
            Some(p) => vec![p],
            None => bail!("No player named '{}' in roster '{}'", name, roster),
        },
        None => players.iter().collect(),
    };

    for (i, p) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format_sheet(&StatSheet::build(p, config), &box_chars));
    }
    Ok(())
}
