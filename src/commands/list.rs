use crate::data_provider::RosterSource;
use anyhow::Result;

/// Width of roster name column
const ROSTER_COL_WIDTH: usize = 24;

/// Width of count columns
const COUNT_COL_WIDTH: usize = 8;

pub fn format_roster_list(source: &dyn RosterSource) -> String {
    let mut output = format!(
        "{:<name$} {:>count$} {:>count$}\n",
        "Roster",
        "Players",
        "Members",
        name = ROSTER_COL_WIDTH,
        count = COUNT_COL_WIDTH
    );
    for key in source.keys() {
        let players = source.get_set(&key);
        let members = players.iter().filter(|p| p.is_member()).count();
        output.push_str(&format!(
            "{:<name$} {:>count$} {:>count$}\n",
            key,
            players.len(),
            members,
            name = ROSTER_COL_WIDTH,
            count = COUNT_COL_WIDTH
        ));
    }
    output
}

pub fn run(source: &dyn RosterSource) -> Result<()> {
    print!("{}", format_roster_list(source));
    Ok(())
}
