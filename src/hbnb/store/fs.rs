use super::ObjectStore;
use crate::error::Result;
use crate::model::{ClassName, StoredObject};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// File-backed object store: the whole collection lives in one JSON file
/// mapping `ClassName.id` keys to serialized objects.
pub struct FileStore {
    path: PathBuf,
    objects: BTreeMap<String, StoredObject>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            objects: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ObjectStore for FileStore {
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
        let content = serde_json::to_string_pretty(&self.objects)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        // a store that was never saved is an empty store, not an error
        if !self.path.exists() {
            return Ok(());
        }
        let content = fs::read_to_string(&self.path)?;
        self.objects = serde_json::from_str(&content)?;
        Ok(())
    }
}
