use super::ObjectStore;
use crate::error::Result;
use crate::model::{ClassName, StoredObject};
use std::collections::BTreeMap;

/// In-memory store for testing.
/// `save` and `reload` succeed without touching anything.
#[derive(Default)]
pub struct InMemoryStore {
    objects: BTreeMap<String, StoredObject>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectStore for InMemoryStore {
    fn all(&self, class: Option<ClassName>) -> BTreeMap<String, StoredObject> {
        self.objects
            .iter()
            .filter(|(_, obj)| class.map_or(true, |c| obj.class() == c))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.get(key).cloned()
    }

    fn insert(&mut self, object: StoredObject) {
        self.objects.insert(object.key(), object);
    }

    fn remove(&mut self, key: &str) -> Option<StoredObject> {
        self.objects.remove(key)
    }

    fn save(&mut self) -> Result<()> {
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        Ok(())
    }
}

// --- Test Fixtures ---
