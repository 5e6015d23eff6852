//! Built-in sentence content, one child module per week.
//!
//! Each week is a static table of [`SentenceDesc`] rows. The tables are turned
//! into owned [`SentenceRecord`]s once and cached, mirroring how a host page
//! would hand the game a `sentenceData` object.

use std::sync::OnceLock;

use crate::dataset::SentenceDataset;
use crate::model::{ChineseTokens, SentenceId, SentenceRecord};

mod week1;
mod week2;
mod week3;
mod week4;

pub use week1::WEEK1;
pub use week2::WEEK2;
pub use week3::WEEK3;
pub use week4::WEEK4;

/// Static row of a week table. `tokens` pairs each hanzi chunk with its pinyin.
#[derive(Clone, Copy, Debug)]
pub struct SentenceDesc {
    pub id: u64,
    pub level: u32,
    pub korean: &'static str,
    pub is_final: bool,
    pub tokens: &'static [(&'static str, &'static str)],
}

impl SentenceDesc {
    pub fn to_record(&self) -> SentenceRecord {
        SentenceRecord {
            id: SentenceId::Num(self.id),
            level: self.level,
            korean: self.korean.to_string(),
            is_final: self.is_final,
            chinese: ChineseTokens::new(self.tokens),
        }
    }
}

/// All week tables in week order.
pub fn week_tables() -> [&'static [SentenceDesc]; 4] {
    [WEEK1, WEEK2, WEEK3, WEEK4]
}

pub fn builtin_dataset() -> &'static SentenceDataset {
    static DATASET: OnceLock<SentenceDataset> = OnceLock::new();
    DATASET.get_or_init(|| {
        let mut dataset = SentenceDataset::new();
        for (idx, table) in week_tables().iter().enumerate() {
            let records = table.iter().map(SentenceDesc::to_record).collect();
            dataset.insert_week(idx as u8 + 1, records);
        }
        dataset
    })
}
