use crate::TabError;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for rendered tabs.
pub trait TabWriter {
    fn write_text(&mut self, path: &Path, content: &str) -> Result<(), TabError>;
}

/// Writes tabs to the filesystem, optionally below a base folder.
#[derive(Debug, Default, Clone)]
pub struct FileWriter {
    folder: Option<PathBuf>,
}

impl FileWriter {
    pub const fn new(folder: Option<PathBuf>) -> Self {
        Self { folder }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.folder {
            Some(folder) => folder.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl TabWriter for FileWriter {
    fn write_text(&mut self, path: &Path, content: &str) -> Result<(), TabError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent)?;
            }
        }
        let mut file = File::create(&target)?;
        file.write_all(content.as_bytes())?;
        log::info!("Tab written to {target:?}");
        Ok(())
    }
}
