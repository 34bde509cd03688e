use super::MatchRecord;
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn save_matches(&self, records: &[MatchRecord]) -> Result<PathBuf>;
    fn load_matches(&self) -> Result<Option<Vec<MatchRecord>>>;
    fn save_debug_markup(&self, markup: &str) -> Result<PathBuf>;
}
