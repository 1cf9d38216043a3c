/// Roster data types shared between the library (export, sheet, tui) and the binary.
///
/// A `Player` is a read-only snapshot produced by a `RosterSource`. Nothing in
/// this crate creates players outside of fixtures or mutates them.
use serde::{Deserialize, Serialize};

/// Number of potion slots every player carries
pub const POTION_SLOTS: usize = 3;

/// Role of a player inside their guild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GuildRole {
    Leader,
    Officer,
    Member,
    Invited,
}

impl GuildRole {
    /// Index used by the lookup tables and the JSON representation
    pub fn index(self) -> u8 {
        match self {
            GuildRole::Leader => 1,
            GuildRole::Officer => 2,
            GuildRole::Member => 3,
            GuildRole::Invited => 4,
        }
    }
}

impl TryFrom<u8> for GuildRole {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GuildRole::Leader),
            2 => Ok(GuildRole::Officer),
            3 => Ok(GuildRole::Member),
            4 => Ok(GuildRole::Invited),
            other => Err(format!("invalid guild role index: {}", other)),
        }
    }
}

impl From<GuildRole> for u8 {
    fn from(role: GuildRole) -> Self {
        role.index()
    }
}

/// Guild-only data. Only exists for players holding a guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMembership {
    pub role: GuildRole,
    #[serde(default)]
    pub treasure: i64,
    #[serde(default)]
    pub instructor: i64,
    #[serde(default)]
    pub pet: i64,
    #[serde(default)]
    pub knights: i64,
}

/// One potion slot. A zero duration means the slot is inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionSlot {
    pub kind: u8,
    pub duration: i64,
}

impl PotionSlot {
    pub fn is_active(&self) -> bool {
        self.duration != 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rankings {
    pub player_rank: i64,
    pub player_honor: i64,
    pub fortress_rank: i64,
    pub fortress_honor: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fortress {
    pub wall: i64,
    pub warriors: i64,
    pub archers: i64,
    pub mages: i64,
    pub upgrades: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub name: String,
    pub guild: Option<String>,
    pub membership: Option<GuildMembership>,

    pub level: i64,
    pub xp: i64,
    pub xp_next: i64,
    pub book: i64,
    pub achievements: i64,
    pub mount: i64,

    pub class: u8,
    pub race: u8,
    pub sex: u8,

    pub strength: i64,
    pub dexterity: i64,
    pub intelligence: i64,
    pub constitution: i64,
    pub luck: i64,
    pub armor: i64,
    pub gear_score: i64,

    pub potions: [PotionSlot; POTION_SLOTS],
    pub rankings: Rankings,
    pub fortress: Fortress,
}

impl Player {
    /// Whether this player holds a guild role
    pub fn is_member(&self) -> bool {
        self.membership.is_some()
    }

    pub fn role(&self) -> Option<GuildRole> {
        self.membership.as_ref().map(|m| m.role)
    }

    /// Active potion slots in slot order, skipping inactive ones
    pub fn active_potions(&self) -> impl Iterator<Item = &PotionSlot> {
        self.potions.iter().filter(|slot| slot.is_active())
    }
}

/// Find the player with exactly the given name
pub fn find_by_name<'a>(players: &'a [Player], name: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.name == name)
}
