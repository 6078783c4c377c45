//! The record store - the central read-only index over the whole dataset.

use std::collections::HashMap;
use thiserror::Error;

use crate::records::Record;

/// Dataset problems that reject the whole load.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate record name (case-insensitive): {name}")]
    DuplicateName { name: String },

    #[error("record at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("record '{name}' has no types")]
    NoTypes { name: String },
}

/// Immutable index over every record, built once at process start.
///
/// Records keep their dataset order in a vector; a lowercase-name index
/// points into it. There is no update or delete path, so `&RecordStore` is
/// safe to share across concurrent callers without locking.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// Lowercased names, parallel to `records`.
    names: Vec<String>,
    /// Lowercased name -> position in `records`.
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Build the store from an ordered sequence of records.
    ///
    /// The load is rejected wholesale on the first empty name, record without
    /// types, or case-insensitive duplicate name. Duplicates are an error
    /// rather than an overwrite: overwriting would silently break the
    /// name-uniqueness invariant every lookup relies on.
    pub fn from_records(
        records: impl IntoIterator<Item = Record>,
    ) -> Result<Self, DatasetError> {
        let mut store = Self::default();

        for (position, record) in records.into_iter().enumerate() {
            let key = record.key();
            if key.is_empty() {
                return Err(DatasetError::EmptyName { index: position });
            }
            if record.types.is_empty() {
                return Err(DatasetError::NoTypes { name: record.name });
            }
            if store.index.contains_key(&key) {
                return Err(DatasetError::DuplicateName { name: record.name });
            }

            store.index.insert(key.clone(), store.records.len());
            store.names.push(key);
            store.records.push(record);
        }

        Ok(store)
    }

    /// Build the store from the ETL's JSON output (an array of records).
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Look up a record by name, case-insensitively.
    pub fn lookup_exact(&self, name: &str) -> Option<&Record> {
        self.index
            .get(&name.to_lowercase())
            .map(|position| &self.records[*position])
    }

    /// All known names, lowercased, in dataset order.
    pub fn all_names(&self) -> &[String] {
        &self.names
    }

    /// All records in dataset order (used for random sampling).
    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;

    fn setup_test_store() -> RecordStore {
        RecordStore::from_records([
            Record::new("Pikachu").with_types([TypeTag::Electric]),
            Record::new("Charizard").with_types([TypeTag::Fire, TypeTag::Flying]),
            Record::new("Mr. Mime").with_types([TypeTag::Psychic, TypeTag::Fairy]),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_exact_is_case_insensitive() {
        let store = setup_test_store();

        for name in store.all_names().to_vec() {
            let record = store.lookup_exact(&name).unwrap();
            assert_eq!(record.key(), name);
        }

        assert_eq!(store.lookup_exact("PIKACHU").unwrap().name, "Pikachu");
        assert_eq!(store.lookup_exact("mr. mime").unwrap().name, "Mr. Mime");
        assert!(store.lookup_exact("missingno").is_none());
    }

    #[test]
    fn test_dataset_order_is_preserved() {
        let store = setup_test_store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.all_names()[0], "pikachu");
        assert_eq!(store.all_records()[1].name, "Charizard");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RecordStore::from_records([
            Record::new("Eevee").with_types([TypeTag::Normal]),
            Record::new("EEVEE").with_types([TypeTag::Normal]),
        ]);

        assert!(matches!(
            result,
            Err(DatasetError::DuplicateName { name }) if name == "EEVEE"
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = RecordStore::from_records([Record::new("").with_types([TypeTag::Normal])]);
        assert!(matches!(result, Err(DatasetError::EmptyName { index: 0 })));
    }

    #[test]
    fn test_record_without_types_rejected() {
        let result = RecordStore::from_records([Record::new("Ditto")]);
        assert!(matches!(
            result,
            Err(DatasetError::NoTypes { name }) if name == "Ditto"
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[{
            "name": "Squirtle",
            "types": ["water"],
            "abilities": ["Torrent"],
            "base_stats": {"hp":44,"attack":48,"defense":65,"sp_atk":50,"sp_def":64,"speed":43},
            "meta": {"generation":1,"is_legendary":false},
            "type_effectiveness": {"electric":2.0,"fire":0.5}
        }]"#;

        let store = RecordStore::from_json_str(json).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.lookup_exact("squirtle").is_some());
    }

    #[test]
    fn test_malformed_json_rejected() {
        // Missing base_stats entirely.
        let json = r#"[{"name": "Squirtle", "types": ["water"]}]"#;
        assert!(matches!(
            RecordStore::from_json_str(json),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_dataset_is_a_valid_store() {
        let store = RecordStore::from_records([]).unwrap();
        assert!(store.is_empty());
        assert!(store.lookup_exact("anything").is_none());
    }
}
