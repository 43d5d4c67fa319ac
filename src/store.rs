use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{NewSignup, SignupRecord};

pub const EMAIL_FIELD: &str = "email";

/// Result of an equality query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuerySnapshot {
    size: usize,
}

impl QuerySnapshot {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Remote document store holding waitlist signups.
///
/// Implementations run on the browser's single thread, so futures are not `Send`.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Records in `collection` whose `field` equals `value` exactly.
    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<QuerySnapshot, StoreError>;

    /// Write a new record; the store assigns its timestamp.
    async fn insert(&self, collection: &str, record: &NewSignup) -> Result<(), StoreError>;

    async fn count(&self, collection: &str) -> Result<usize, StoreError>;
}

/// Field lookup shared by stores that filter records themselves.
pub fn field_matches(record: &SignupRecord, field: &str, value: &str) -> bool {
    match field {
        "name" => record.name == value,
        "email" => record.email == value,
        "housing" => record.housing.value() == value,
        "status" => value == "active",
        _ => false,
    }
}
