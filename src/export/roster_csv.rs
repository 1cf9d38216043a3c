/// Roster CSV export: fixed header, one semicolon-delimited row per player
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::prompt::{SavePrompt, CSV_FILTER};
use super::{ExportError, ExportOutcome};
use crate::data_provider::RosterSource;
use crate::formatting::book_fraction;
use crate::lookup::{class_name, race_name, sex_name};
use crate::types::Player;

pub const HEADER: &str = "Name;Level;GearScore;Class;Race;Sex;Album;Awards;Potion;Potion;Potion;Treasure;Instructor;Pet;Knights;PlayerRank;PlayerHonor;FortressRank;FortressHonor;Wall;Warriors;Archers;Mages;Upgrades;Strength;Dexterity;Intelligence;Constitution;Luck;Armor";

/// Format one data row, without line terminator
pub fn format_row(p: &Player) -> String {
    let mut row = format!(
        "{};{};{};{};{};{};{:.6};{};{};{};{}",
        p.name,
        p.level,
        p.gear_score,
        class_name(p.class),
        race_name(p.race),
        sex_name(p.sex),
        book_fraction(p.book),
        p.achievements,
        p.potions[0].duration,
        p.potions[1].duration,
        p.potions[2].duration,
    );

    match &p.membership {
        Some(m) => row.push_str(&format!(";{};{};{};{}", m.treasure, m.instructor, m.pet, m.knights)),
        None => row.push_str(";;;;"),
    }

    let r = &p.rankings;
    let f = &p.fortress;
    row.push_str(&format!(
        ";{};{};{};{};{};{};{};{};{}",
        r.player_rank, r.player_honor, r.fortress_rank, r.fortress_honor,
        f.wall, f.warriors, f.archers, f.mages, f.upgrades,
    ));
    row.push_str(&format!(
        ";{};{};{};{};{};{}",
        p.strength, p.dexterity, p.intelligence, p.constitution, p.luck, p.armor,
    ));
    row
}

/// Write the header and the rows. Rows are newline-prefixed, so the output
/// has no trailing newline. Returns the number of rows written.
pub fn write_csv<W: Write>(out: &mut W, players: &[Player], only_members: bool) -> io::Result<usize> {
    out.write_all(HEADER.as_bytes())?;
    let mut rows = 0;
    for p in players.iter().filter(|p| !only_members || p.is_member()) {
        write!(out, "\n{}", format_row(p))?;
        rows += 1;
    }
    out.flush()?;
    Ok(rows)
}

fn write_file(path: &Path, players: &[Player], only_members: bool) -> Result<usize, ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, players, only_members).map_err(io_err)
}

/// Export roster `name` as CSV.
///
/// Cancelling the prompt is a no-op. Write failures are logged and reported
/// through the outcome instead of being propagated.
pub fn as_csv(
    source: &dyn RosterSource,
    prompt: &mut dyn SavePrompt,
    name: &str,
    only_members: bool,
) -> ExportOutcome {
    let Some(path) = prompt.choose("Save as", name, &CSV_FILTER) else {
        tracing::debug!("CSV export of '{}' cancelled", name);
        return ExportOutcome::Cancelled;
    };

    let players = source.get_set(name);
    match write_file(&path, &players, only_members) {
        Ok(rows) => {
            tracing::info!("Wrote {} rows to {}", rows, path.display());
            ExportOutcome::Written(vec![path])
        }
        Err(e) => ExportOutcome::failed(e),
    }
}
