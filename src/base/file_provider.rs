use std::{
    borrow::Cow,
    collections::HashMap,
    path::{Component, Path, PathBuf},
};

use getset::Getters;

use super::Error;

/// A trait for providing file contents.
pub trait FileProvider {
    /// Reads the contents of the file at the given path as bytes.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error>;

    /// Reads the contents of the file at the given path.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    /// - If the file is not valid UTF-8.
    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<str>, Error> {
        let bytes = self.read_bytes(path)?;
        let string = std::str::from_utf8(&bytes)?.to_string();
        Ok(Cow::Owned(string))
    }
}

/// Reads source files below a root directory of the file system.
///
/// Paths are resolved relative to the root and may not climb above it.
#[derive(Debug, Clone, Getters)]
pub struct FsProvider {
    /// The directory that paths are resolved against.
    #[get = "pub"]
    root: PathBuf,
}

impl FsProvider {
    /// Creates a provider that reads files below `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of `path` on disk.
    fn resolve(&self, path: &Path) -> Result<PathBuf, Error> {
        normalize_path(path)
            .map(|relative| self.root.join(relative))
            .ok_or_else(|| {
                Error::IoError(format!("`{}` lies outside of the root", path.display()))
            })
    }
}

impl Default for FsProvider {
    fn default() -> Self {
        Self::new(".")
    }
}

impl<P> From<P> for FsProvider
where
    P: Into<PathBuf>,
{
    fn from(root: P) -> Self {
        Self::new(root)
    }
}

impl FileProvider for FsProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error> {
        let full_path = self.resolve(path.as_ref())?;
        std::fs::read(&full_path)
            .map(Cow::Owned)
            .map_err(|err| read_error(&full_path, &err))
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<str>, Error> {
        let bytes = self.read_bytes(path)?;
        let text = String::from_utf8(bytes.into_owned()).map_err(|err| err.utf8_error())?;
        Ok(Cow::Owned(text))
    }
}

fn read_error(path: &Path, err: &std::io::Error) -> Error {
    tracing::debug!(path = %path.display(), "Failed to read source file: {err}");
    Error::IoError(format!("failed to read `{}`: {err}", path.display()))
}

/// Provides file contents from an in-memory map of paths to text.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl MemoryProvider {
    /// Creates an empty [`MemoryProvider`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file with the given contents.
    ///
    /// Returns `false` if the path escapes the provider root.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, contents: impl Into<String>) -> bool {
        normalize_path(path).map_or(false, |path| {
            self.files.insert(path, contents.into());
            true
        })
    }
}

impl FileProvider for MemoryProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error> {
        self.read_str(path).map(|text| match text {
            Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
            Cow::Owned(text) => Cow::Owned(text.into_bytes()),
        })
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<str>, Error> {
        normalize_path(path).map_or_else(
            || Err(Error::IoError("Invalid path".to_string())),
            |path| {
                self.files
                    .get(&path)
                    .map(|text| Cow::Borrowed(text.as_str()))
                    .ok_or_else(|| Error::IoError("File not found".to_string()))
            },
        )
    }
}

/// Resolves `.` and `..` components; `None` if the path climbs above its root.
fn normalize_path<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let mut normalized = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                normalized.pop()?;
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    Some(normalized.into_iter().collect())
}
