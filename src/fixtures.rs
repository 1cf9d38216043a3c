/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic roster data that can be used for:
/// 1. Unit tests - predictable players with and without guild membership
/// 2. The `--mock` flag and the `demo` command - running the app without real data
/// 3. Benchmarks - rosters of realistic size
use crate::types::{Fortress, GuildMembership, GuildRole, Player, PotionSlot, Rankings};

const NAMES: [&str; 12] = [
    "Aldric", "Brynja", "Cassius", "Dagny", "Eldrin", "Freya", "Gorm", "Hilde", "Ivar", "Jorunn",
    "Kael", "Liv",
];

/// Create a single player with predictable stats derived from `seed`
pub fn create_mock_player(name: &str, seed: i64, member: bool) -> Player {
    let level = 100 + seed * 7 % 300;
    Player {
        name: name.to_string(),
        guild: member.then(|| "Iron Wolves".to_string()),
        membership: member.then(|| GuildMembership {
            role: match seed % 10 {
                0 => GuildRole::Leader,
                1 | 2 => GuildRole::Officer,
                _ => GuildRole::Member,
            },
            treasure: 50 + seed % 150,
            instructor: 40 + seed % 160,
            pet: 20 + seed * 13 % 400,
            knights: seed % 21,
        }),
        level,
        xp: 1_000_000 + seed * 12_345,
        xp_next: 5_000_000,
        book: seed * 97 % 2160,
        achievements: seed * 3 % 71,
        mount: seed % 5,
        class: (seed % 8 + 1) as u8,
        race: (seed % 8 + 1) as u8,
        sex: (seed % 2 + 1) as u8,
        strength: 1000 + seed * 41,
        dexterity: 800 + seed * 37,
        intelligence: 600 + seed * 29,
        constitution: 1200 + seed * 53,
        luck: 500 + seed * 17,
        armor: 3000 + seed * 11,
        gear_score: 1500 + seed * 23 % 900,
        potions: mock_potions(seed),
        rankings: Rankings {
            player_rank: 1000 + seed * 31,
            player_honor: 9000 - seed * 5,
            fortress_rank: 2000 + seed * 19,
            fortress_honor: 4000 - seed * 3,
        },
        fortress: Fortress {
            wall: seed % 16,
            warriors: seed % 13,
            archers: seed % 11,
            mages: seed % 9,
            upgrades: seed % 20,
        },
    }
}

/// Potion slots filled front to back, `seed % 4` of them active
fn mock_potions(seed: i64) -> [PotionSlot; 3] {
    const ACTIVE: [PotionSlot; 3] = [
        PotionSlot { kind: 1, duration: 25 },
        PotionSlot { kind: 4, duration: 15 },
        PotionSlot { kind: 6, duration: 3 },
    ];
    let active = (seed % 4) as usize;
    let mut slots = [PotionSlot::default(); 3];
    slots[..active].copy_from_slice(&ACTIVE[..active]);
    slots
}

/// Create a roster of `count` players whose first `members` players hold a guild role
pub fn create_mock_roster(count: usize, members: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            let name = if i < NAMES.len() {
                NAMES[i].to_string()
            } else {
                format!("{}{}", NAMES[i % NAMES.len()], i / NAMES.len())
            };
            create_mock_player(&name, i as i64 + 1, i < members)
        })
        .collect()
}

/// Copy of `roster` where every player progressed a little
pub fn create_progressed_roster(roster: &[Player]) -> Vec<Player> {
    roster
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut next = p.clone();
            if i % 2 == 0 {
                next.level += 1;
                next.gear_score += 12;
            }
            next.book = (next.book + 9).min(crate::layout_constants::BOOK_TOTAL);
            if let Some(m) = next.membership.as_mut() {
                m.pet += 3;
                if i % 3 == 0 {
                    m.knights += 1;
                }
            }
            next
        })
        .collect()
}

/// Named rosters used by the `demo` command and the `--mock` flag
pub fn create_mock_rosters() -> Vec<(String, Vec<Player>)> {
    let week1 = create_mock_roster(40, 30);
    let week2 = create_progressed_roster(&week1);
    vec![
        ("guild_week1".to_string(), week1),
        ("guild_week2".to_string(), week2),
        ("hall_of_fame".to_string(), create_mock_roster(120, 0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_roster_members_first() {
        let roster = create_mock_roster(20, 5);
        assert_eq!(roster.len(), 20);
        assert!(roster[..5].iter().all(|p| p.is_member()));
        assert!(roster[5..].iter().all(|p| !p.is_member() && p.guild.is_none()));
    }

    #[test]
    fn test_mock_roster_names_unique() {
        let roster = create_mock_roster(30, 0);
        let mut names: Vec<_> = roster.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 30);
    }

    #[test]
    fn test_progressed_roster_keeps_names() {
        let week1 = create_mock_roster(6, 6);
        let week2 = create_progressed_roster(&week1);
        assert_eq!(week2[0].name, week1[0].name);
        assert_eq!(week2[0].level, week1[0].level + 1);
        assert_eq!(week2[1].level, week1[1].level);
    }
}
