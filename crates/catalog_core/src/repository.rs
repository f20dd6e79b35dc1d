use std::collections::{BTreeSet, HashMap};

use crate::record::{ContentRecord, RecordKey};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("duplicate record key {0}")]
    DuplicateKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) record: ContentRecord,
    /// Lower-cased `title tags id platform`, matched by the search box.
    pub(crate) haystack: String,
    pub(crate) sort_key: i64,
}

/// Immutable catalog plus the indexes derived from it at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Repository {
    entries: Vec<Entry>,
    by_key: HashMap<RecordKey, usize>,
    tags: Vec<String>,
}

impl Repository {
    pub fn new(records: Vec<ContentRecord>) -> Result<Self, RepositoryError> {
        let mut by_key = HashMap::with_capacity(records.len());
        let mut tags = BTreeSet::new();
        let mut entries = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let key = record.key();
            if by_key.insert(key.clone(), index).is_some() {
                return Err(RepositoryError::DuplicateKey(key.to_string()));
            }
            tags.extend(record.tags.iter().cloned());
            let haystack = format!(
                "{} {} {} {}",
                record.title,
                record.tags.join(" "),
                record.id,
                record.platform
            )
            .to_lowercase();
            let sort_key = record.sort_key();
            entries.push(Entry {
                record,
                haystack,
                sort_key,
            });
        }

        Ok(Self {
            entries,
            by_key,
            tags: tags.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ContentRecord> + '_ {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn get(&self, index: usize) -> Option<&ContentRecord> {
        self.entries.get(index).map(|entry| &entry.record)
    }

    pub fn lookup(&self, key: &RecordKey) -> Option<&ContentRecord> {
        self.by_key.get(key).and_then(|&index| self.get(index))
    }

    /// Distinct tags across all records, sorted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).is_ok()
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
