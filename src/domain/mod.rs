mod match_record;
mod outcome;
pub(crate) mod storage;

pub use match_record::MatchRecord;
pub use outcome::ScrapeOutcome;
pub use storage::Storage;
