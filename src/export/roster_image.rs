//! Roster image export: players laid out in the fixed grid, 50 per image,
//! optionally annotated with the change since a compare roster.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ::image::RgbaImage;

use super::canvas::{Align, Canvas, BLACK, GREY, WHITE};
use super::grid::{self, cell_rect, row_plan, RowKind, COLUMN_WIDTHS, COL_ALBUM, COL_AWARDS,
    COL_GEAR, COL_INSTRUCTOR, COL_KNIGHTS, COL_LEVEL, COL_MOUNT, COL_NAME, COL_PET, COL_POTIONS,
    COL_TREASURE};
use super::prompt::{SavePrompt, PNG_FILTER};
use super::{ExportError, ExportOutcome};
use crate::config::{Config, Thresholds};
use crate::data_provider::RosterSource;
use crate::formatting::{book_percent, format_delta, format_percent_delta, threshold_color, ExportTier};
use crate::layout_constants::{IMAGE_HEIGHT, IMAGE_WIDTH, PLAYERS_PER_IMAGE, POTION_HIGH, POTION_LOW};
use crate::types::{find_by_name, Player};

const POTION_THRESHOLDS: Thresholds = Thresholds::new(POTION_LOW, POTION_HIGH);

/// One grid cell of a player row
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub col: usize,
    pub text: String,
    pub fill: Option<ExportTier>,
    /// Change since the compare roster, drawn under the value at the right edge
    pub delta: Option<String>,
}

impl Cell {
    fn new(col: usize, text: impl ToString) -> Self {
        Self { col, text: text.to_string(), fill: None, delta: None }
    }

    fn filled(mut self, fill: Option<ExportTier>) -> Self {
        self.fill = fill;
        self
    }
}

/// All cells of one player, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub cells: Vec<Cell>,
}

impl RowModel {
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.col == col)
    }

    fn cell_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.col == col)
    }

    fn annotate(&mut self, col: usize, delta: String) {
        if let Some(cell) = self.cell_mut(col) {
            cell.delta = Some(delta);
        }
    }
}

/// Build the cells of `p`, annotated against `previous` when given
pub fn build_row(p: &Player, previous: Option<&Player>, config: &Config) -> RowModel {
    let thresholds = &config.thresholds;
    let highlighted = p.is_member() || config.highlight_all;
    let tier = |value, pair| highlighted.then(|| threshold_color(value, pair));

    let mut cells = vec![
        Cell::new(COL_NAME, &p.name),
        Cell::new(COL_LEVEL, p.level),
        Cell::new(COL_GEAR, p.gear_score),
        Cell::new(COL_ALBUM, format!("{:.1}%", book_percent(p.book))).filled(tier(p.book, thresholds.book)),
        Cell::new(COL_MOUNT, p.mount).filled(tier(p.mount, thresholds.mount)),
        Cell::new(COL_AWARDS, p.achievements),
    ];

    for (i, slot) in p.potions.iter().enumerate() {
        cells.push(Cell::new(COL_POTIONS + i, "").filled(Some(threshold_color(slot.duration, POTION_THRESHOLDS))));
    }

    if let Some(m) = &p.membership {
        cells.push(Cell::new(COL_TREASURE, m.treasure));
        cells.push(Cell::new(COL_INSTRUCTOR, m.instructor));
        cells.push(Cell::new(COL_PET, m.pet).filled(Some(threshold_color(m.pet, thresholds.pet))));
        cells.push(Cell::new(COL_KNIGHTS, m.knights).filled(Some(threshold_color(m.knights, thresholds.knights))));
    }

    let mut row = RowModel { cells };

    if let Some(c) = previous {
        if c.level != p.level {
            row.annotate(COL_LEVEL, format_delta(p.level - c.level));
        }
        if c.gear_score != p.gear_score {
            row.annotate(COL_GEAR, format_delta(p.gear_score - c.gear_score));
        }
        if c.book != p.book {
            row.annotate(COL_ALBUM, format_percent_delta(p.book - c.book));
        }
        if let (Some(now), Some(then)) = (&p.membership, &c.membership) {
            if now.pet != then.pet {
                row.annotate(COL_PET, format_delta(now.pet - then.pet));
            }
            if now.knights != then.knights {
                row.annotate(COL_KNIGHTS, format_delta(now.knights - then.knights));
            }
        }
    }

    row
}

/// Split a roster into the blocks rendered as separate images.
///
/// Members-only exports produce exactly one block: the members among the
/// first 50 players, in roster order.
pub fn plan_blocks(players: &[Player], only_members: bool) -> Vec<Vec<&Player>> {
    if only_members {
        let members = players
            .chunks(PLAYERS_PER_IMAGE)
            .next()
            .unwrap_or_default()
            .iter()
            .filter(|p| p.is_member())
            .collect();
        return vec![members];
    }

    players
        .chunks(PLAYERS_PER_IMAGE)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn draw_header(canvas: &mut Canvas, text: &str, col: usize, row: usize, span: usize, rows: usize) {
    let y: u32 = grid::HEADER_ROW_HEIGHTS[..row].iter().sum();
    let height: u32 = grid::HEADER_ROW_HEIGHTS[row..row + rows].iter().sum();
    canvas.draw_text(cell_rect(col, span, y, height), text, BLACK, Align::Center, true);
}

fn draw_headers(canvas: &mut Canvas) {
    draw_header(canvas, "Name", COL_NAME, 0, 1, 2);
    draw_header(canvas, "General", COL_LEVEL, 0, 6, 1);
    draw_header(canvas, "Level", COL_LEVEL, 1, 1, 1);
    draw_header(canvas, "Gear", COL_GEAR, 1, 1, 1);
    draw_header(canvas, "Album", COL_ALBUM, 1, 1, 1);
    draw_header(canvas, "Mount", COL_MOUNT, 1, 1, 1);
    draw_header(canvas, "Awards", COL_AWARDS, 1, 1, 1);
    draw_header(canvas, "Potions", COL_POTIONS, 0, 3, 2);
    draw_header(canvas, "Guild", COL_TREASURE, 0, 4, 1);
    draw_header(canvas, "Treasure", COL_TREASURE, 1, 1, 1);
    draw_header(canvas, "Instructor", COL_INSTRUCTOR, 1, 1, 1);
    draw_header(canvas, "Pet", COL_PET, 1, 1, 1);
    draw_header(canvas, "Knights", COL_KNIGHTS, 1, 1, 1);
}

fn draw_row(canvas: &mut Canvas, row: &RowModel, y: u32, height: u32) {
    for cell in &row.cells {
        let rect = cell_rect(cell.col, 1, y, height);
        if let Some(fill) = cell.fill {
            canvas.fill(rect, fill.rgb());
        }
        match &cell.delta {
            Some(delta) => {
                let (upper, lower) = rect.split_rows();
                canvas.draw_text(upper, &cell.text, BLACK, Align::Left(2), false);
                canvas.draw_text(lower, delta, GREY, Align::Right(2), false);
            }
            None => canvas.draw_text(rect, &cell.text, BLACK, Align::Center, false),
        }
    }
}

/// Render one block into a fixed-size image
pub fn render_block(block: &[&Player], compare: Option<&[Player]>, config: &Config) -> RgbaImage {
    let mut canvas = Canvas::new(IMAGE_WIDTH, IMAGE_HEIGHT, WHITE);
    let plan = row_plan(block.len());
    let bottom = plan.last().map_or(0, |slot| slot.y + slot.height);

    draw_headers(&mut canvas);

    for slot in &plan {
        match slot.kind {
            RowKind::Header(_) => {}
            RowKind::Rule | RowKind::Separator => {
                canvas.fill(cell_rect(0, COLUMN_WIDTHS.len(), slot.y, slot.height), BLACK);
            }
            RowKind::Data(i) => {
                let p = block[i];
                let previous = compare.and_then(|players| find_by_name(players, &p.name));
                draw_row(&mut canvas, &build_row(p, previous, config), slot.y, slot.height);
            }
        }
    }

    for col in grid::FULL_BORDERS {
        canvas.fill(cell_rect(col, 1, 0, bottom), BLACK);
    }
    let inner_top: u32 = grid::HEADER_ROW_HEIGHTS.iter().sum();
    canvas.fill(cell_rect(grid::INNER_BORDER, 1, inner_top, bottom.saturating_sub(inner_top)), BLACK);

    canvas.into_image()
}

/// `<base>.png`, `<base>_1.png`, `<base>_2.png`, ... where base drops the chosen extension
pub fn block_file_paths(chosen: &Path, count: usize) -> Vec<PathBuf> {
    let base = chosen.with_extension("");
    (0..count)
        .map(|i| {
            let mut name = OsString::from(base.as_os_str());
            if i > 0 {
                name.push(format!("_{}", i));
            }
            name.push(".");
            name.push(PNG_FILTER.extension);
            PathBuf::from(name)
        })
        .collect()
}

fn write_images(images: &[RgbaImage], chosen: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let paths = block_file_paths(chosen, images.len());
    for (image, path) in images.iter().zip(&paths) {
        image.save(path).map_err(|source| ExportError::Encode {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Wrote roster image {}", path.display());
    }
    Ok(paths)
}

/// Export roster `name` as one or more PNG images.
///
/// Cancelling the prompt is a no-op. Write failures are logged and reported
/// through the outcome instead of being propagated.
pub fn as_image(
    source: &dyn RosterSource,
    config: &Config,
    prompt: &mut dyn SavePrompt,
    name: &str,
    compare_name: Option<&str>,
    only_members: bool,
) -> ExportOutcome {
    let players = source.get_set(name);
    let compare = compare_name.map(|key| source.get_set(key));

    let Some(chosen) = prompt.choose("Save as", name, &PNG_FILTER) else {
        tracing::debug!("Image export of '{}' cancelled", name);
        return ExportOutcome::Cancelled;
    };

    let images: Vec<RgbaImage> = plan_blocks(&players, only_members)
        .iter()
        .map(|block| {
            tracing::debug!("Rendering block of {} players", block.len());
            render_block(block, compare.as_deref(), config)
        })
        .collect();

    if images.is_empty() {
        tracing::warn!("Roster '{}' is empty, no image written", name);
    }

    match write_images(&images, &chosen) {
        Ok(paths) => ExportOutcome::Written(paths),
        Err(e) => ExportOutcome::failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::MemorySource;
    use crate::export::prompt::FixedPath;
    use crate::fixtures::{create_mock_player, create_mock_roster};
    use crate::types::PotionSlot;

    fn pixel(image: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
        let p = image.get_pixel(x, y).0;
        [p[0], p[1], p[2]]
    }

    #[test]
    fn test_blocks_of_fifty() {
        let roster = create_mock_roster(120, 0);
        let blocks = plan_blocks(&roster, false);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].len(), 50);
        assert_eq!(blocks[2].len(), 20);
        assert_eq!(blocks[1][0].name, roster[50].name);
    }

    #[test]
    fn test_members_only_is_one_block() {
        let roster = create_mock_roster(120, 70);
        let blocks = plan_blocks(&roster, true);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 50);
        assert!(blocks[0].iter().all(|p| p.is_member()));

        let mut mixed = create_mock_roster(50, 0);
        mixed[3] = create_mock_player("Member3", 3, true);
        mixed[40] = create_mock_player("Member40", 40, true);
        let names: Vec<&str> = plan_blocks(&mixed, true)[0].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Member3", "Member40"]);

        let no_members = create_mock_roster(10, 0);
        let blocks = plan_blocks(&no_members, true);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
    }

    #[test]
    fn test_members_only_looks_at_first_fifty_players() {
        let mut roster = create_mock_roster(120, 0);
        for (i, p) in roster.iter_mut().enumerate().skip(60).take(40) {
            *p = create_mock_player(&format!("Late{}", i), i as i64, true);
        }
        let blocks = plan_blocks(&roster, true);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
    }

    #[test]
    fn test_gear_delta_without_level_delta() {
        let mut now = create_mock_player("Aldric", 1, false);
        now.level = 10;
        now.gear_score = 100;
        let mut before = now.clone();
        before.gear_score = 95;

        let row = build_row(&now, Some(&before), &Config::default());
        assert_eq!(row.cell(COL_GEAR).unwrap().delta.as_deref(), Some("+5"));
        assert_eq!(row.cell(COL_LEVEL).unwrap().delta, None);
        assert_eq!(row.cell(COL_ALBUM).unwrap().delta, None);
    }

    #[test]
    fn test_negative_deltas_are_signed() {
        let now = create_mock_player("Dagny", 4, true);
        let mut before = now.clone();
        before.level += 2;
        before.book += 22;
        if let Some(m) = before.membership.as_mut() {
            m.pet += 1;
        }

        let row = build_row(&now, Some(&before), &Config::default());
        assert_eq!(row.cell(COL_LEVEL).unwrap().delta.as_deref(), Some("-2"));
        assert_eq!(row.cell(COL_ALBUM).unwrap().delta.as_deref(), Some("-1.02"));
        assert_eq!(row.cell(COL_PET).unwrap().delta.as_deref(), Some("-1"));
        assert_eq!(row.cell(COL_KNIGHTS).unwrap().delta, None);
    }

    #[test]
    fn test_member_deltas_need_both_sides() {
        let now = create_mock_player("Eldrin", 5, true);
        let mut before = create_mock_player("Eldrin", 5, false);
        before.level = now.level;

        let row = build_row(&now, Some(&before), &Config::default());
        assert_eq!(row.cell(COL_PET).unwrap().delta, None);
        assert_eq!(row.cell(COL_KNIGHTS).unwrap().delta, None);
    }

    #[test]
    fn test_non_member_row_has_no_guild_cells() {
        let p = create_mock_player("Hilde", 8, false);
        let row = build_row(&p, None, &Config::default());
        for col in [COL_TREASURE, COL_INSTRUCTOR, COL_PET, COL_KNIGHTS] {
            assert!(row.cell(col).is_none());
        }
        assert_eq!(row.cell(COL_MOUNT).unwrap().fill, None);
        assert_eq!(row.cell(COL_ALBUM).unwrap().fill, None);
    }

    #[test]
    fn test_row_colors() {
        let mut p = create_mock_player("Kael", 11, true);
        p.book = 1080;
        p.mount = 4;
        p.potions = [
            PotionSlot { kind: 1, duration: 25 },
            PotionSlot { kind: 2, duration: 5 },
            PotionSlot { kind: 3, duration: 0 },
        ];
        let mut config = Config::default();
        config.thresholds.book = Thresholds::new(1000, 2000);
        config.thresholds.mount = Thresholds::new(3, 4);

        let row = build_row(&p, None, &config);
        assert_eq!(row.cell(COL_ALBUM).unwrap().text, "50.0%");
        assert_eq!(row.cell(COL_ALBUM).unwrap().fill, Some(ExportTier::Yellow));
        assert_eq!(row.cell(COL_MOUNT).unwrap().fill, Some(ExportTier::Green));
        assert_eq!(row.cell(COL_POTIONS).unwrap().fill, Some(ExportTier::Green));
        assert_eq!(row.cell(COL_POTIONS + 1).unwrap().fill, Some(ExportTier::Yellow));
        assert_eq!(row.cell(COL_POTIONS + 2).unwrap().fill, Some(ExportTier::Red));
    }

    #[test]
    fn test_render_block_dimensions_and_fills() {
        let mut p = create_mock_player("Jorunn", 10, false);
        p.potions[0] = PotionSlot { kind: 1, duration: 0 };
        let block = vec![&p];
        let image = render_block(&block, None, &Config::default());

        assert_eq!(image.dimensions(), (IMAGE_WIDTH, IMAGE_HEIGHT));
        // corner of the first potion cell of the first data row
        let potion = cell_rect(COL_POTIONS, 1, 37, grid::DATA_ROW_HEIGHT);
        assert_eq!(pixel(&image, potion.x, potion.y), ExportTier::Red.rgb());
        // rule under the headers spans the whole width
        assert_eq!(pixel(&image, 0, 35), BLACK);
        assert_eq!(pixel(&image, IMAGE_WIDTH - 1, 36), BLACK);
        // full-height border after the name column
        assert_eq!(pixel(&image, 176, 40), BLACK);
        // the rest of the image stays blank
        assert_eq!(pixel(&image, 100, 600), WHITE);
    }

    /// Bounding box (min x, max x, min y, max y) of `color` inside `area`
    fn ink_box(image: &RgbaImage, area: grid::Rect, color: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in area.y..area.bottom() {
            for x in area.x..area.x + area.width {
                if pixel(image, x, y) != color {
                    continue;
                }
                found = Some(match found {
                    None => (x, x, y, y),
                    Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
                });
            }
        }
        found
    }

    fn count_color(image: &RgbaImage, color: [u8; 3]) -> usize {
        image.pixels().filter(|p| [p.0[0], p.0[1], p.0[2]] == color).count()
    }

    #[test]
    fn test_album_delta_is_drawn_below_value() {
        let mut now = create_mock_player("Aldric", 1, false);
        now.book = 1080;
        let mut before = now.clone();
        before.book = 1071;
        let compare = vec![before];

        let row = build_row(&now, compare.first(), &Config::default());
        assert_eq!(row.cell(COL_ALBUM).unwrap().text, "50.0%");
        assert_eq!(row.cell(COL_ALBUM).unwrap().delta.as_deref(), Some("+0.42"));

        let image = render_block(&[&now], Some(compare.as_slice()), &Config::default());
        let album = cell_rect(COL_ALBUM, 1, 37, grid::DATA_ROW_HEIGHT);
        let (_, _, _, value_bottom) = ink_box(&image, album, BLACK).unwrap();
        let (delta_left, _, delta_top, _) = ink_box(&image, album, GREY).unwrap();

        assert!(value_bottom < delta_top);
        // right aligned
        assert!(delta_left > album.x + album.width / 2 - 8);
    }

    #[test]
    fn test_highlight_all_colors_non_member_row() {
        let mut p = create_mock_player("Ivar", 9, false);
        p.mount = 1;
        p.book = 1900;
        let mut config = Config::default();
        config.highlight_all = true;

        let row = build_row(&p, None, &config);
        assert_eq!(row.cell(COL_MOUNT).unwrap().fill, Some(ExportTier::Red));
        assert_eq!(row.cell(COL_ALBUM).unwrap().fill, Some(ExportTier::Green));
        assert!(row.cell(COL_PET).is_none());

        let image = render_block(&[&p], None, &config);
        let mount = cell_rect(COL_MOUNT, 1, 37, grid::DATA_ROW_HEIGHT);
        assert_eq!(pixel(&image, mount.x, mount.y), ExportTier::Red.rgb());
        let plain = render_block(&[&p], None, &Config::default());
        assert_eq!(pixel(&plain, mount.x, mount.y), WHITE);
    }

    #[test]
    fn test_unmatched_compare_player_has_no_deltas() {
        let now = create_mock_player("Aldric", 1, true);
        let mut stranger = create_mock_player("Brynja", 2, true);
        stranger.level = now.level - 5;
        let compare = vec![stranger];

        let image = render_block(&[&now], Some(compare.as_slice()), &Config::default());
        assert_eq!(count_color(&image, GREY), 0);

        let mut earlier = now.clone();
        earlier.level -= 5;
        let image = render_block(&[&now], Some(std::slice::from_ref(&earlier)), &Config::default());
        assert!(count_color(&image, GREY) > 0);
    }

    #[test]
    fn test_as_image_with_unrelated_compare_roster() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::new()
            .with_set("now", create_mock_roster(3, 3))
            .with_set("other", vec![create_mock_player("Nobody", 99, true)]);
        let mut prompt = FixedPath::new(dir.path().join("now.png"));

        let outcome = as_image(&source, &Config::default(), &mut prompt, "now", Some("other"), false);
        assert_eq!(outcome, ExportOutcome::Written(vec![dir.path().join("now.png")]));
    }

    #[test]
    fn test_block_file_paths() {
        let paths = block_file_paths(Path::new("/tmp/out/guild.png"), 3);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tmp/out/guild.png"),
                PathBuf::from("/tmp/out/guild_1.png"),
                PathBuf::from("/tmp/out/guild_2.png"),
            ]
        );
    }

    #[test]
    fn test_as_image_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::new().with_set("hall", create_mock_roster(120, 0));
        let mut prompt = FixedPath::new(dir.path().join("hall.png"));

        let outcome = as_image(&source, &Config::default(), &mut prompt, "hall", None, false);
        let ExportOutcome::Written(paths) = &outcome else {
            panic!("expected files to be written, got {:?}", outcome);
        };
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.exists()));
        assert!(dir.path().join("hall_2.png").exists());

        let decoded = ::image::open(&paths[0]).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (IMAGE_WIDTH, IMAGE_HEIGHT));
    }

    #[test]
    fn test_as_image_members_only_writes_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::new().with_set("guild", create_mock_roster(120, 60));
        let mut prompt = FixedPath::new(dir.path().join("guild"));

        let outcome = as_image(&source, &Config::default(), &mut prompt, "guild", Some("guild"), true);
        assert_eq!(outcome, ExportOutcome::Written(vec![dir.path().join("guild.png")]));
    }

    #[test]
    fn test_as_image_cancelled_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::new().with_set("guild", create_mock_roster(5, 5));
        let mut prompt = FixedPath::cancelled();

        let outcome = as_image(&source, &Config::default(), &mut prompt, "guild", None, false);
        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_as_image_unwritable_destination_fails_softly() {
        let source = MemorySource::new().with_set("guild", create_mock_roster(5, 5));
        let mut prompt = FixedPath::new("/nonexistent/dir/guild.png");

        let outcome = as_image(&source, &Config::default(), &mut prompt, "guild", None, false);
        assert!(matches!(outcome, ExportOutcome::Failed(_)));
    }
}
