use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` numbered members: "Member 1" <member1@example.com>, ...
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Record::new(
                    format!("Member {}", i + 1),
                    format!("member{}@example.com", i + 1),
                    "Member".to_string(),
                );
                self.store.insert_record(record).unwrap();
            }
            self
        }

        pub fn with_record(mut self, name: &str, email: &str, role: &str) -> Self {
            let record = Record::new(name.to_string(), email.to_string(), role.to_string());
            self.store.insert_record(record).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn fixture_builds_records_in_order() {
        let fixture = StoreFixture::new()
            .with_record("Ann", "a@x.com", "Admin")
            .with_records(2);
        let names: Vec<_> = fixture
            .store
            .records()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, vec!["Ann", "Member 1", "Member 2"]);
    }
}
