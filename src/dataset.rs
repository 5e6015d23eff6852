//! Read-only week → sentence mapping.
//!
//! Keys follow the page convention `week1`..`week4`. The dataset is either the
//! built-in one from [`crate::weeks`] or a JSON object of week keys to
//! sentence record arrays.

use std::collections::HashMap;

use crate::error::{GameError, GameResult};
use crate::model::{prepare_sentences, SentenceRecord};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SentenceDataset {
    weeks: HashMap<String, Vec<SentenceRecord>>,
}

pub fn week_key(week: u8) -> String {
    format!("week{week}")
}

impl SentenceDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week(mut self, week: u8, records: Vec<SentenceRecord>) -> Self {
        self.insert_week(week, records);
        self
    }

    pub fn insert_week(&mut self, week: u8, records: Vec<SentenceRecord>) {
        self.weeks.insert(week_key(week), records);
    }

    /// Records of one week, in source order.
    pub fn week(&self, week: u8) -> GameResult<&[SentenceRecord]> {
        self.weeks
            .get(&week_key(week))
            .map(Vec::as_slice)
            .ok_or(GameError::DataNotFound { week })
    }

    pub fn has_week(&self, week: u8) -> bool {
        self.weeks.contains_key(&week_key(week))
    }

    /// Parse and validate a `{"week1": [...], ...}` document.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> GameResult<Self> {
        let weeks: HashMap<String, Vec<SentenceRecord>> = serde_json::from_str(json)
            .map_err(|e| GameError::Parse(format!("sentence data: {e}")))?;
        let dataset = Self { weeks };
        dataset.validate()?;
        tracing::debug!(weeks = dataset.weeks.len(), "sentence data loaded from json");
        Ok(dataset)
    }

    /// Check token pairing and group shape for every week.
    pub fn validate(&self) -> GameResult<()> {
        let mut keys: Vec<&String> = self.weeks.keys().collect();
        keys.sort();
        for key in keys {
            let week = key
                .strip_prefix("week")
                .and_then(|n| n.parse::<u8>().ok())
                .ok_or_else(|| GameError::Parse(format!("week key '{key}'")))?;
            let records = &self.weeks[key];
            for record in records {
                validate_record(week, record)?;
            }
            for group in prepare_sentences(records) {
                let invalid = |reason: &str| GameError::InvalidDataset {
                    week,
                    id: group.id().to_string(),
                    reason: reason.to_string(),
                };
                if group.finals().next().is_none() {
                    return Err(invalid("no final sentence"));
                }
                if group.levels().windows(2).any(|w| w[0].level == w[1].level) {
                    return Err(invalid("duplicate level"));
                }
            }
        }
        Ok(())
    }
}

fn validate_record(week: u8, record: &SentenceRecord) -> GameResult<()> {
    let invalid = |reason: String| GameError::InvalidDataset {
        week,
        id: record.id.to_string(),
        reason,
    };
    let tokens = &record.chinese;
    if tokens.hanzi.is_empty() {
        return Err(invalid(format!("level {} has no hanzi tokens", record.level)));
    }
    if tokens.hanzi.len() != tokens.pinyin.len() {
        return Err(invalid(format!(
            "level {} has {} hanzi but {} pinyin tokens",
            record.level,
            tokens.hanzi.len(),
            tokens.pinyin.len()
        )));
    }
    Ok(())
}
