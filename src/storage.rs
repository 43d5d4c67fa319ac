use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::store::{field_matches, DocumentStore, QuerySnapshot};
use crate::types::{NewSignup, SignupRecord};

const KEY_PREFIX: &str = "fluent_";

// LocalStorage fallback for builds without a remote project
pub fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn storage_key(collection: &str) -> String {
    format!("{}{}", KEY_PREFIX, collection)
}

/// Waitlist kept in this browser's localStorage as a JSON list.
#[derive(Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn load(&self, collection: &str) -> Result<Vec<SignupRecord>, StoreError> {
        let storage = get_local_storage().ok_or(StoreError::StorageUnavailable)?;
        let json = storage.get_item(&storage_key(collection))?;
        decode_records(json.as_deref())
    }
}

/// A missing key reads as an empty list. Anything unparseable is an error, so
/// a later save never overwrites it.
pub fn decode_records(json: Option<&str>) -> Result<Vec<SignupRecord>, StoreError> {
    match json {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(Vec::new()),
    }
}

/// Append unless the email is already present. Returns whether a record was added.
pub fn append_unique(
    records: &mut Vec<SignupRecord>,
    signup: &NewSignup,
    now: DateTime<Utc>,
) -> bool {
    if records.iter().any(|r| r.email == signup.email) {
        return false;
    }
    records.push(SignupRecord::from_new(signup, now));
    true
}

/// The stored list with `signup` appended, or `None` if its email is already
/// there.
pub fn with_signup(
    json: Option<&str>,
    signup: &NewSignup,
    now: DateTime<Utc>,
) -> Result<Option<String>, StoreError> {
    let mut records = decode_records(json)?;
    if !append_unique(&mut records, signup, now) {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(&records)?))
}

#[async_trait(?Send)]
impl DocumentStore for LocalStore {
    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<QuerySnapshot, StoreError> {
        let records = self.load(collection)?;
        let size = records.iter().filter(|r| field_matches(r, field, value)).count();
        Ok(QuerySnapshot::new(size))
    }

    async fn insert(&self, collection: &str, record: &NewSignup) -> Result<(), StoreError> {
        let storage = get_local_storage().ok_or(StoreError::StorageUnavailable)?;
        let json = storage.get_item(&storage_key(collection))?;
        match with_signup(json.as_deref(), record, Utc::now())? {
            Some(updated) => storage.set_item(&storage_key(collection), &updated)?,
            None => log::warn!("{} already stored locally, skipping", record.email),
        }
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        Ok(self.load(collection)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Housing, SignupStatus};

    fn signup(email: &str) -> NewSignup {
        NewSignup {
            name: "Jane".into(),
            email: email.into(),
            housing: Housing::Apartment,
            status: SignupStatus::Active,
        }
    }

    #[test]
    fn missing_list_is_empty_but_corrupt_list_is_an_error() {
        assert!(decode_records(None).unwrap().is_empty());
        assert!(matches!(decode_records(Some("{not json")), Err(StoreError::Decode(_))));
    }

    #[test]
    fn insert_refuses_to_overwrite_a_corrupt_list() {
        let result = with_signup(Some("[{\"name\":"), &signup("jane@berkeley.edu"), Utc::now());
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn insert_appends_to_the_stored_list() {
        let first = with_signup(None, &signup("jane@berkeley.edu"), Utc::now())
            .unwrap()
            .unwrap();
        let second = with_signup(Some(&first), &signup("oski@berkeley.edu"), Utc::now())
            .unwrap()
            .unwrap();
        assert_eq!(decode_records(Some(&second)).unwrap().len(), 2);
        assert_eq!(
            with_signup(Some(&second), &signup("jane@berkeley.edu"), Utc::now()).unwrap(),
            None
        );
    }

    #[test]
    fn append_skips_known_email() {
        let mut records = Vec::new();
        assert!(append_unique(&mut records, &signup("jane@berkeley.edu"), Utc::now()));
        assert!(!append_unique(&mut records, &signup("jane@berkeley.edu"), Utc::now()));
        assert!(append_unique(&mut records, &signup("oski@berkeley.edu"), Utc::now()));
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.submitted_at.is_some()));
    }

    #[test]
    fn stored_list_round_trips() {
        let mut records = Vec::new();
        append_unique(&mut records, &signup("jane@berkeley.edu"), Utc::now());
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(decode_records(Some(&json)).unwrap(), records);
    }

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(storage_key("waitlist"), "fluent_waitlist");
    }
}
