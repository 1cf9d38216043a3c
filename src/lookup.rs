/// Static lookup tables for the small integer indices stored on a `Player`.
///
/// Indices start at 1 as in the game data; 0 and anything out of range map to
/// an empty or "Unknown" label instead of panicking.
use crate::types::GuildRole;

/// Class names indexed by class id
pub const CLASSES: [&str; 9] = [
    "",
    "Warrior",
    "Mage",
    "Scout",
    "Assassin",
    "Battle Mage",
    "Berserker",
    "Demon Hunter",
    "Druid",
];

/// Race names indexed by race id
pub const RACES: [&str; 9] = [
    "",
    "Human",
    "Elf",
    "Dwarf",
    "Gnome",
    "Orc",
    "Dark Elf",
    "Goblin",
    "Demon",
];

/// Sex labels indexed by sex id
pub const SEXES: [&str; 3] = ["", "Male", "Female"];

/// Potion type names indexed by potion kind
pub const POTIONS: [&str; 7] = [
    "",
    "Strength",
    "Dexterity",
    "Intelligence",
    "Constitution",
    "Luck",
    "Eternal Life",
];

const UNKNOWN: &str = "Unknown";

fn lookup(table: &'static [&'static str], index: u8) -> &'static str {
    table.get(index as usize).copied().unwrap_or(UNKNOWN)
}

pub fn class_name(index: u8) -> &'static str {
    lookup(&CLASSES, index)
}

pub fn race_name(index: u8) -> &'static str {
    lookup(&RACES, index)
}

pub fn sex_name(index: u8) -> &'static str {
    lookup(&SEXES, index)
}

pub fn potion_name(index: u8) -> &'static str {
    lookup(&POTIONS, index)
}

/// Label shown for a guild position
pub fn guild_role_name(role: GuildRole) -> &'static str {
    match role {
        GuildRole::Leader => "Leader",
        GuildRole::Officer => "Officer",
        GuildRole::Member => "Member",
        GuildRole::Invited => "Invited",
    }
}
