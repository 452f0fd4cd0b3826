use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const UNTITLED_NAME: &str = "New file";

const MAX_RECENT_FILES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    fn apply(self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_owned(),
            LineEnding::CrLf => text.replace('\n', "\r\n"),
        }
    }
}

/// A single plain text document and its optional backing file.
///
/// Content is held with `\n` separators; the line ending seen on load is
/// reapplied when the document is written back.
#[derive(Debug)]
pub struct Document {
    path: Option<PathBuf>,
    pub content: String,
    modified: bool,
    line_ending: LineEnding,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            path: None,
            content: String::new(),
            modified: false,
            line_ending: LineEnding::Lf,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| Error::Encoding {
            path: path.to_path_buf(),
        })?;
        let line_ending = LineEnding::detect(&text);
        let content = match line_ending {
            LineEnding::Lf => text,
            LineEnding::CrLf => text.replace("\r\n", "\n"),
        };
        info!("opened {} ({} chars)", path.display(), content.chars().count());

        Ok(Self {
            path: Some(path.to_path_buf()),
            content,
            modified: false,
            line_ending,
        })
    }

    /// Writes the content back to the attached file. Documents that were
    /// never given a path return [`Error::NoPath`]; callers route that case
    /// to a save-as flow.
    pub fn save(&mut self) -> Result<PathBuf, Error> {
        let path = self.path.clone().ok_or(Error::NoPath)?;
        self.write_to(&path)?;
        self.modified = false;
        Ok(path)
    }

    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf, Error> {
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(path.to_path_buf())
    }

    // Write-then-persist so an interrupted save never truncates the target.
    fn write_to(&self, path: &Path) -> Result<(), Error> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(parent)?;
        file.write_all(self.line_ending.apply(&self.content).as_bytes())?;
        file.persist(path).map_err(|err| Error::Io(err.error))?;
        info!("saved {}", path.display());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_NAME.to_owned())
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Editor state carried across launches. The GUI persists this through
/// eframe storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub last_file: Option<PathBuf>,
    pub recent_files: Vec<PathBuf>,
    pub word_wrap: bool,
    pub font_size: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            last_file: None,
            recent_files: Vec::new(),
            word_wrap: true,
            font_size: 14.0,
        }
    }
}

impl Session {
    pub fn remember(&mut self, path: &Path) {
        self.recent_files.retain(|recent| recent != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);
        self.last_file = Some(path.to_path_buf());
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Encoding { path: PathBuf },
    NoPath,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{err}"),
            Error::Encoding { path } => {
                write!(f, "{} is not valid UTF-8 text", path.display())
            }
            Error::NoPath => write!(f, "The document has no file attached"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
