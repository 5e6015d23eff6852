//! Sentence records and their grouping into difficulty ladders.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier shared by every level of one sentence. Datasets use either
/// numbers or strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SentenceId {
    Num(u64),
    Text(String),
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceId::Num(n) => write!(f, "{n}"),
            SentenceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SentenceId {
    fn from(n: u64) -> Self {
        SentenceId::Num(n)
    }
}

/// Parallel token lists; `pinyin[i]` reads `hanzi[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChineseTokens {
    pub hanzi: Vec<String>,
    pub pinyin: Vec<String>,
}

impl ChineseTokens {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            hanzi: pairs.iter().map(|(h, _)| (*h).to_string()).collect(),
            pinyin: pairs.iter().map(|(_, p)| (*p).to_string()).collect(),
        }
    }

    pub fn joined_hanzi(&self) -> String {
        self.hanzi.concat()
    }
}

/// One rendering of a sentence at a given difficulty level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SentenceRecord {
    pub id: SentenceId,
    pub level: u32,
    pub korean: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_final: bool,
    pub chinese: ChineseTokens,
}

/// All levels of one sentence, easiest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceGroup {
    records: Vec<SentenceRecord>,
}

impl SentenceGroup {
    pub fn id(&self) -> &SentenceId {
        &self.records[0].id
    }

    pub fn levels(&self) -> &[SentenceRecord] {
        &self.records
    }

    pub fn level(&self, index: usize) -> Option<&SentenceRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finals(&self) -> impl Iterator<Item = &SentenceRecord> {
        self.records.iter().filter(|r| r.is_final)
    }
}

/// Partition a week's records by `id`. Groups appear in first-seen order and
/// each group is stably sorted by `level`. Ids are compared by their text, so
/// `1` and `"1"` name the same sentence.
pub fn prepare_sentences(records: &[SentenceRecord]) -> Vec<SentenceGroup> {
    let mut slot_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<SentenceRecord>> = Vec::new();
    for record in records {
        let slot = *slot_of.entry(record.id.to_string()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(record.clone());
    }
    groups
        .into_iter()
        .map(|mut records| {
            records.sort_by_key(|r| r.level);
            SentenceGroup { records }
        })
        .collect()
}

/// Split a leading `A:` / `B:` speaker tag off a dialogue line.
pub fn split_speaker_tag(korean: &str) -> (Option<&str>, &str) {
    for tag in ["A:", "B:"] {
        if let Some(rest) = korean.strip_prefix(tag) {
            return (Some(tag), rest);
        }
    }
    (None, korean)
}

#[cfg(test)]
pub(crate) fn record(id: u64, level: u32, is_final: bool, hanzi: &[&str]) -> SentenceRecord {
    SentenceRecord {
        id: SentenceId::Num(id),
        level,
        korean: format!("문장 {id}-{level}"),
        is_final,
        chinese: ChineseTokens {
            hanzi: hanzi.iter().map(|h| h.to_string()).collect(),
            pinyin: hanzi.iter().map(|h| format!("py-{h}")).collect(),
        },
    }
}
