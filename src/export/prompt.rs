/// Save-destination prompts shown before every export
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// File type offered by a save prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionFilter {
    pub description: &'static str,
    pub extension: &'static str,
}

pub const PNG_FILTER: ExtensionFilter = ExtensionFilter {
    description: "PNG file (*.png)",
    extension: "png",
};

pub const CSV_FILTER: ExtensionFilter = ExtensionFilter {
    description: "CSV file (*.csv)",
    extension: "csv",
};

/// Asks the user where to save an export. `None` means the user cancelled.
pub trait SavePrompt {
    fn choose(&mut self, title: &str, default_name: &str, filter: &ExtensionFilter) -> Option<PathBuf>;
}

/// Append the filter's extension when the path has none
pub fn with_extension(path: &Path, filter: &ExtensionFilter) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(filter.extension)
    }
}

/// Prompt answered up front, e.g. from `--output`
#[derive(Debug, Clone, Default)]
pub struct FixedPath(pub Option<PathBuf>);

impl FixedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FixedPath(Some(path.into()))
    }

    pub fn cancelled() -> Self {
        FixedPath(None)
    }
}

impl SavePrompt for FixedPath {
    fn choose(&mut self, _title: &str, _default_name: &str, filter: &ExtensionFilter) -> Option<PathBuf> {
        self.0.as_deref().map(|path| with_extension(path, filter))
    }
}

/// Line-based prompt. An empty answer takes the default, `-` or end of input cancels.
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> SavePrompt for StdinPrompt<R, W> {
    fn choose(&mut self, title: &str, default_name: &str, filter: &ExtensionFilter) -> Option<PathBuf> {
        let default = with_extension(Path::new(default_name), filter);
        // A broken terminal only loses the question, not the answer
        let _ = write!(
            self.output,
            "{} [{}] {}: ",
            title,
            filter.description,
            default.display()
        );
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match answer.trim() {
            "" => Some(default),
            "-" => None,
            path => Some(with_extension(Path::new(path), filter)),
        }
    }
}
