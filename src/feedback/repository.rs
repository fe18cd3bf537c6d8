use chrono::Utc;
use thiserror::Error;

use crate::feedback::models::{FeedbackFields, FeedbackRecord, ValidationError};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub fn encode_log(records: &[FeedbackRecord]) -> Result<String, StorageError> {
    serde_json::to_string(records).map_err(StorageError::Encode)
}

pub fn decode_log(raw: &str) -> Result<Vec<FeedbackRecord>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

/// The last `limit` records, most recent first.
pub fn latest(records: &[FeedbackRecord], limit: usize) -> impl Iterator<Item = &FeedbackRecord> {
    let start = records.len().saturating_sub(limit);
    records[start..].iter().rev()
}

/// Append-only feedback log persisted as one JSON array under a fixed key.
pub struct FeedbackRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl FeedbackRepository {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn try_load(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        match self.store.get_item(&self.key)? {
            Some(raw) => decode_log(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Full log. Unreadable or corrupt data reads as an empty log.
    pub fn load(&self) -> Vec<FeedbackRecord> {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("Ignoring stored feedback: {}", e);
            Vec::new()
        })
    }

    /// Refuses to write over a stored log it cannot decode.
    pub fn append(&self, record: FeedbackRecord) -> Result<(), StorageError> {
        let mut records = self.try_load()?;
        records.push(record);
        let raw = encode_log(&records)?;
        self.store.set_item(&self.key, &raw)
    }

    pub fn submit(&self, fields: &FeedbackFields) -> Result<FeedbackRecord, SubmitError> {
        fields.validate()?;
        let record = FeedbackRecord::from_fields(fields, Utc::now());
        self.append(record.clone())?;
        log::info!("Stored feedback from {}", record.name.trim());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    const KEY: &str = "opentrip_feedback";

    struct SharedStorage(Rc<MemoryStorage>);

    impl KeyValueStore for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value)
        }
    }

    struct FullStorage;

    impl KeyValueStore for FullStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    fn repository() -> (FeedbackRepository, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::default());
        let repo = FeedbackRepository::new(Box::new(SharedStorage(storage.clone())), KEY);
        (repo, storage)
    }

    fn fields(name: &str, message: &str) -> FeedbackFields {
        FeedbackFields {
            name: name.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_key_loads_empty() {
        let (repo, _) = repository();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let (repo, storage) = repository();
        storage.set_item(KEY, "{not json").unwrap();
        assert!(matches!(repo.try_load(), Err(StorageError::Decode(_))));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn invalid_submission_leaves_log_unchanged() {
        let (repo, _) = repository();
        repo.submit(&fields("Ana", "First")).unwrap();

        let err = repo.submit(&fields("", "Great trip")).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ValidationError::MissingName)));
        assert_eq!(repo.load().len(), 1);
    }

    #[test]
    fn valid_submission_appends_record() {
        let (repo, _) = repository();
        let before = Utc::now();

        let record = repo.submit(&fields("Ana", "Great trip")).unwrap();

        let log = repo.load();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], record);
        assert_eq!(record.rating, "5");
        // Stamped with millisecond precision, so compare at that granularity
        let created = record.created_at().expect("valid timestamp");
        assert!(created.timestamp_millis() >= before.timestamp_millis());
    }

    #[test]
    fn append_keeps_arrival_order() {
        let (repo, _) = repository();
        for i in 0..3 {
            repo.submit(&fields(&format!("user{}", i), "hi")).unwrap();
        }
        let names: Vec<_> = repo.load().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["user0", "user1", "user2"]);
    }

    #[test]
    fn latest_returns_last_five_newest_first() {
        let (repo, _) = repository();
        for i in 1..=7 {
            repo.submit(&fields(&format!("user{}", i), "hi")).unwrap();
        }
        let log = repo.load();
        let names: Vec<_> = latest(&log, 5).map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["user7", "user6", "user5", "user4", "user3"]);
        assert_eq!(repo.load().len(), 7);
    }

    #[test]
    fn write_failure_is_reported() {
        let repo = FeedbackRepository::new(Box::new(FullStorage), KEY);
        let err = repo.submit(&fields("Ana", "Great trip")).unwrap_err();
        assert!(matches!(err, SubmitError::Storage(StorageError::Write { .. })));
    }

    #[test]
    fn submission_keeps_records_with_numeric_ratings() {
        let (repo, storage) = repository();
        storage
            .set_item(
                KEY,
                r#"[{"name":"Old1","email":"","message":"a","rating":"4","createdAt":"2026-10-01T10:00:00.000Z"},{"name":"Old2","email":"","message":"b","rating":5,"createdAt":"2026-10-02T10:00:00.000Z"}]"#,
            )
            .unwrap();

        repo.submit(&fields("Ana", "Great trip")).unwrap();

        let names: Vec<_> = repo.load().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Old1", "Old2", "Ana"]);
        let raw = storage.get_item(KEY).unwrap().unwrap();
        assert!(raw.contains("Old1") && raw.contains("Old2"));
    }

    #[test]
    fn submission_does_not_overwrite_undecodable_log() {
        let (repo, storage) = repository();
        storage.set_item(KEY, "{not json").unwrap();

        let err = repo.submit(&fields("Ana", "Great trip")).unwrap_err();

        assert!(matches!(err, SubmitError::Storage(StorageError::Decode(_))));
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn log_survives_serialization() {
        let (repo, storage) = repository();
        repo.submit(&fields("Ana", "Great trip")).unwrap();
        repo.submit(&fields("Budi", "Seru <b>banget</b> & \"murah\"")).unwrap();

        let log = repo.load();
        let raw = storage.get_item(KEY).unwrap().unwrap();
        assert_eq!(decode_log(&raw).unwrap(), log);
        assert_eq!(decode_log(&encode_log(&log).unwrap()).unwrap(), log);
    }

    #[test]
    fn latest_handles_short_logs() {
        assert_eq!(latest(&[], 5).count(), 0);
        let (repo, _) = repository();
        repo.submit(&fields("Ana", "hi")).unwrap();
        assert_eq!(latest(&repo.load(), 5).count(), 1);
    }
}
