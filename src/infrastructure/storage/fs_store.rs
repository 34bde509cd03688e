use crate::config::ScrapeConfig;
use crate::domain::{MatchRecord, Storage};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemStore {
    output_path: PathBuf,
    debug_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_path: impl Into<PathBuf>, debug_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            debug_path: debug_path.into(),
        }
    }

    pub fn from_config(config: &ScrapeConfig) -> Self {
        Self::new(&config.output, &config.debug_path)
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        self.ensure_parent(path)?;
        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn save_matches(&self, records: &[MatchRecord]) -> Result<PathBuf> {
        self.write_json_file(&self.output_path, records)?;
        Ok(self.output_path.clone())
    }

    fn load_matches(&self) -> Result<Option<Vec<MatchRecord>>> {
        self.read_json_file(&self.output_path)
    }

    fn save_debug_markup(&self, markup: &str) -> Result<PathBuf> {
        self.ensure_parent(&self.debug_path)?;
        fs::write(&self.debug_path, markup)?;
        Ok(self.debug_path.clone())
    }
}
