//! Stat sheet of a single player, as shown on the browse tab and by `show`.
//!
//! The sheet is a plain model: renderers (the TUI widget, the text printer)
//! decide how tiers map to colors and where things go.

use crate::config::Config;
use crate::formatting::{book_fraction, detail_tier, format_grouped, DetailTier};
use crate::layout_constants::{ACHIEVEMENTS_TOTAL, BOOK_TOTAL};
use crate::lookup::{guild_role_name, potion_name};
use crate::types::Player;

/// A value with an optional tier color
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub text: String,
    pub tier: Option<DetailTier>,
}

impl Value {
    fn plain(value: impl ToString) -> Self {
        Self { text: value.to_string(), tier: None }
    }

    fn tiered(value: i64, tier: Option<DetailTier>) -> Self {
        Self { text: value.to_string(), tier }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: Value,
}

impl Field {
    fn plain(label: &'static str, value: impl ToString) -> Self {
        Self { label, value: Value::plain(value) }
    }
}

/// Progress bar with its hover text
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub fraction: f64,
    pub tooltip: String,
    pub tier: Option<DetailTier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PotionRow {
    /// "+25%"
    pub duration: String,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankRow {
    pub label: &'static str,
    pub rank: i64,
    pub honor: i64,
}

/// Guild-only part of the sheet
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSection {
    pub position: &'static str,
    pub treasure: i64,
    pub instructor: i64,
    pub pet: Value,
    pub knights: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatSheet {
    /// "<name> (<level>)"
    pub title: String,
    /// "★ <gear score>"
    pub gear: String,
    pub guild: Option<String>,
    pub xp: Bar,
    pub mount: Value,
    pub potions: Vec<PotionRow>,
    pub scrapbook: Bar,
    pub achievements: Bar,
    pub rankings: [RankRow; 2],
    pub attributes: [Field; 6],
    pub fortress: [Field; 5],
    pub group: Option<GroupSection>,
}

fn fraction(value: i64, total: i64) -> f64 {
    if total <= 0 {
        0.0
    } else {
        value as f64 / total as f64
    }
}

impl StatSheet {
    pub fn build(p: &Player, config: &Config) -> Self {
        let thresholds = &config.thresholds;
        let highlighted = p.is_member() || config.highlight_all;

        let potions = p
            .active_potions()
            .map(|slot| PotionRow {
                duration: format!("+{}%", slot.duration),
                name: potion_name(slot.kind),
            })
            .collect();

        let book_pct = (100.0 * book_fraction(p.book)) as i64;

        let group = p.membership.as_ref().map(|m| GroupSection {
            position: guild_role_name(m.role),
            treasure: m.treasure,
            instructor: m.instructor,
            pet: Value::tiered(m.pet, detail_tier(m.pet, thresholds.pet, true)),
            knights: Value::tiered(m.knights, detail_tier(m.knights, thresholds.knights, true)),
        });

        StatSheet {
            title: format!("{} ({})", p.name, p.level),
            gear: format!("\u{2605} {}", p.gear_score),
            guild: p.guild.clone(),
            xp: Bar {
                fraction: fraction(p.xp, p.xp_next),
                tooltip: format!(
                    "{} out of {} XP left to next level",
                    format_grouped(p.xp_next - p.xp),
                    format_grouped(p.xp_next)
                ),
                tier: None,
            },
            mount: Value::tiered(p.mount, detail_tier(p.mount, thresholds.mount, highlighted)),
            potions,
            scrapbook: Bar {
                fraction: book_fraction(p.book),
                tooltip: format!(
                    "{} ({}%) out of {} items collected",
                    p.book, book_pct, BOOK_TOTAL
                ),
                tier: detail_tier(p.book, thresholds.book, highlighted),
            },
            achievements: Bar {
                fraction: fraction(p.achievements, ACHIEVEMENTS_TOTAL),
                tooltip: format!(
                    "{} out of {} achievements collected",
                    p.achievements, ACHIEVEMENTS_TOTAL
                ),
                tier: None,
            },
            rankings: [
                RankRow {
                    label: "Player",
                    rank: p.rankings.player_rank,
                    honor: p.rankings.player_honor,
                },
                RankRow {
                    label: "Fortress",
                    rank: p.rankings.fortress_rank,
                    honor: p.rankings.fortress_honor,
                },
            ],
            attributes: [
                Field::plain("Strength", p.strength),
                Field::plain("Dexterity", p.dexterity),
                Field::plain("Intelligence", p.intelligence),
                Field::plain("Constitution", p.constitution),
                Field::plain("Luck", p.luck),
                Field::plain("Armor", p.armor),
            ],
            fortress: [
                Field::plain("Upgrades", p.fortress.upgrades),
                Field::plain("Wall", p.fortress.wall),
                Field::plain("Warriors", p.fortress.warriors),
                Field::plain("Archers", p.fortress.archers),
                Field::plain("Mages", p.fortress.mages),
            ],
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::fixtures::create_mock_player;
    use crate::types::PotionSlot;

    fn config() -> Config {
        let mut config = Config::default();
        config.thresholds.mount = Thresholds::new(2, 4);
        config.thresholds.pet = Thresholds::new(100, 200);
        config
    }

    #[test]
    fn test_title_and_gear() {
        let mut p = create_mock_player("Brynja", 3, false);
        p.level = 312;
        p.gear_score = 2048;
        let sheet = StatSheet::build(&p, &config());
        assert_eq!(sheet.title, "Brynja (312)");
        assert_eq!(sheet.gear, "★ 2048");
    }

    #[test]
    fn test_only_second_potion_active_gives_one_row() {
        let mut p = create_mock_player("Gorm", 7, false);
        p.potions = [
            PotionSlot { kind: 1, duration: 0 },
            PotionSlot { kind: 5, duration: 25 },
            PotionSlot { kind: 3, duration: 0 },
        ];
        let sheet = StatSheet::build(&p, &config());
        assert_eq!(
            sheet.potions,
            vec![PotionRow { duration: "+25%".to_string(), name: "Luck" }]
        );
    }

    #[test]
    fn test_non_member_has_no_group_section_and_no_mount_tier() {
        let p = create_mock_player("Ivar", 9, false);
        let sheet = StatSheet::build(&p, &config());
        assert!(sheet.group.is_none());
        assert_eq!(sheet.mount.tier, None);
        assert_eq!(sheet.scrapbook.tier, None);
    }

    #[test]
    fn test_highlight_all_colors_non_members() {
        let mut p = create_mock_player("Ivar", 9, false);
        p.mount = 1;
        let mut cfg = config();
        cfg.highlight_all = true;
        let sheet = StatSheet::build(&p, &cfg);
        assert_eq!(sheet.mount.tier, Some(DetailTier::Low));
        assert!(sheet.group.is_none());
    }

    #[test]
    fn test_member_mount_ladder() {
        let mut p = create_mock_player("Aldric", 1, true);
        let cfg = config();

        p.mount = 1;
        assert_eq!(StatSheet::build(&p, &cfg).mount.tier, Some(DetailTier::Low));
        p.mount = 2;
        assert_eq!(StatSheet::build(&p, &cfg).mount.tier, Some(DetailTier::Mid));
        p.mount = 4;
        assert_eq!(StatSheet::build(&p, &cfg).mount.tier, Some(DetailTier::High));
    }

    #[test]
    fn test_member_group_section() {
        let mut p = create_mock_player("Aldric", 1, true);
        if let Some(m) = p.membership.as_mut() {
            m.pet = 150;
            m.knights = 20;
            m.treasure = 77;
        }
        let sheet = StatSheet::build(&p, &config());
        let group = sheet.group.expect("member has a group section");
        assert_eq!(group.treasure, 77);
        assert_eq!(group.pet, Value { text: "150".to_string(), tier: Some(DetailTier::Mid) });
        assert_eq!(group.knights.tier, Some(DetailTier::High));
    }

    #[test]
    fn test_bars_and_tooltips() {
        let mut p = create_mock_player("Freya", 6, false);
        p.book = 1080;
        p.achievements = 35;
        p.xp = 1_500_000;
        p.xp_next = 2_000_000;
        let sheet = StatSheet::build(&p, &config());

        assert_eq!(sheet.scrapbook.fraction, 0.5);
        assert_eq!(sheet.scrapbook.tooltip, "1080 (50%) out of 2160 items collected");
        assert_eq!(sheet.achievements.fraction, 0.5);
        assert_eq!(sheet.achievements.tooltip, "35 out of 70 achievements collected");
        assert_eq!(sheet.xp.fraction, 0.75);
        assert_eq!(sheet.xp.tooltip, "500 000 out of 2 000 000 XP left to next level");
    }

    #[test]
    fn test_zero_xp_next_does_not_divide() {
        let mut p = create_mock_player("Liv", 12, false);
        p.xp_next = 0;
        assert_eq!(StatSheet::build(&p, &config()).xp.fraction, 0.0);
    }
}
