//! Shared layout constants used across CLI, TUI and export components.
//!
//! This module centralizes fixed dimensions and denominators so that the
//! image exporter, the CSV exporter and the stat sheet agree on them.

/// Number of scrapbook items a complete album holds
pub const BOOK_TOTAL: i64 = 2160;

/// Number of achievements in the game
pub const ACHIEVEMENTS_TOTAL: i64 = 70;

/// Maximum number of players rendered into one exported image
pub const PLAYERS_PER_IMAGE: usize = 50;

/// Width of every exported roster image in pixels
pub const IMAGE_WIDTH: u32 = 840;

/// Height of every exported roster image in pixels
pub const IMAGE_HEIGHT: u32 = 912;

/// Potion duration thresholds used for the potion indicator cells
pub const POTION_LOW: i64 = 5;
pub const POTION_HIGH: i64 = 25;

/// Width of the player list on the browse tab
pub const PLAYER_LIST_WIDTH: u16 = 24;

/// Width of the label column in the text stat sheet
pub const SHEET_LABEL_WIDTH: usize = 14;

/// Width of a progress bar drawn in the stat sheet
pub const SHEET_BAR_WIDTH: usize = 30;
