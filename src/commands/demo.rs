/// Write the fixture rosters to disk so the browser and exporters have data to show
use crate::data_provider::JsonStore;
use crate::fixtures::create_mock_rosters;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn write_demo_rosters(dir: PathBuf) -> Result<Vec<PathBuf>> {
    let store = JsonStore::new(dir);
    create_mock_rosters()
        .into_iter()
        .map(|(key, players)| {
            store
                .save(&key, &players)
                .with_context(|| format!("Failed to write demo roster '{}'", key))
        })
        .collect()
}

pub fn run(dir: PathBuf) -> Result<()> {
    for path in write_demo_rosters(dir)? {
        tracing::info!("Wrote demo roster {}", path.display());
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::RosterSource;

    #[test]
    fn test_demo_rosters_are_readable() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_demo_rosters(dir.path().to_path_buf()).unwrap();
        assert_eq!(paths.len(), 3);

        let store = JsonStore::new(dir.path());
        assert_eq!(store.get_set("guild_week2").len(), 40);
        assert_eq!(store.get_set("hall_of_fame").len(), 120);
    }
}
