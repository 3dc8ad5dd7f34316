use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::{BookingId, BookingRecord, BookingStatus};

/// Failure of the persistent store backing the record collection.
#[derive(Debug)]
pub enum StorageError {
    NotFound(BookingId),
    AlreadyExists(BookingId),
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound(id) => write!(f, "record not found: {id}"),
            StorageError::AlreadyExists(id) => write!(f, "record already exists: {id}"),
            StorageError::Unavailable(e) => write!(f, "storage unavailable: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// The contract the workflow requires from persistent storage. The store
/// exclusively owns the record collection; the workflow holds records only
/// transiently during a request/response cycle.
///
/// `update_status` must be atomic for a single record — it is the commit
/// point of every state transition.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Current full collection, in any order.
    async fn fetch_all(&self) -> Result<Vec<BookingRecord>, StorageError>;

    /// Add a new record. Fails with `AlreadyExists` if the id is taken.
    async fn append(&self, record: BookingRecord) -> Result<(), StorageError>;

    /// Set the status of an existing record. Fails with `NotFound` if the
    /// id is absent. All other fields are immutable and stay untouched.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<(), StorageError>;
}

/// In-process repository keyed by booking id. Per-record updates are atomic
/// under the map's shard lock.
pub struct InMemoryRepository {
    records: DashMap<BookingId, BookingRecord>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn fetch_all(&self) -> Result<Vec<BookingRecord>, StorageError> {
        Ok(self.records.iter().map(|e| e.value().clone()).collect())
    }

    async fn append(&self, record: BookingRecord) -> Result<(), StorageError> {
        if self.records.contains_key(&record.id) {
            return Err(StorageError::AlreadyExists(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<(), StorageError> {
        match self.records.get_mut(&id) {
            Some(mut entry) => {
                entry.status = status;
                Ok(())
            }
            None => Err(StorageError::NotFound(id)),
        }
    }
}
