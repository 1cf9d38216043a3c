use crate::config::Config;
use crate::data_provider::RosterSource;
use crate::export::{as_csv, as_image, ExportOutcome, FixedPath, SavePrompt, StdinPrompt};
use anyhow::{bail, Result};
use std::io;
use std::path::PathBuf;

/// `--output` answers the save prompt; without it the user is asked on stdin
fn prompt_for(output: Option<PathBuf>) -> Box<dyn SavePrompt> {
    match output {
        Some(path) => Box::new(FixedPath::new(path)),
        None => Box::new(StdinPrompt::new(io::stdin().lock(), io::stderr())),
    }
}

/// Print the outcome. Cancelling is fine; a failed write makes the command fail.
fn report(outcome: ExportOutcome) -> Result<()> {
    match outcome {
        ExportOutcome::Failed(message) => bail!("{}", message),
        other => {
            println!("{}", other.summary());
            Ok(())
        }
    }
}

pub fn run_image(
    source: &dyn RosterSource,
    config: &Config,
    roster: &str,
    compare: Option<&str>,
    only_members: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut prompt = prompt_for(output);
    report(as_image(source, config, prompt.as_mut(), roster, compare, only_members))
}

pub fn run_csv(
    source: &dyn RosterSource,
    roster: &str,
    only_members: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut prompt = prompt_for(output);
    report(as_csv(source, prompt.as_mut(), roster, only_members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::MemorySource;
    use crate::fixtures::create_mock_roster;

    #[test]
    fn test_run_csv_with_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = MemorySource::new().with_set("guild", create_mock_roster(4, 2));
        run_csv(&source, "guild", true, Some(dir.path().join("guild.csv"))).unwrap();

        let content = std::fs::read_to_string(dir.path().join("guild.csv")).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_run_image_failure_is_error() {
        let source = MemorySource::new().with_set("guild", create_mock_roster(4, 2));
        let result = run_image(
            &source,
            &Config::default(),
            "guild",
            None,
            false,
            Some(PathBuf::from("/nonexistent/dir/guild.png")),
        );
        assert!(result.is_err());
    }
}
