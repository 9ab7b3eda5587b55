//! The class registry and the stored object representation.
//!
//! The set of domain classes is fixed at compile time. Each class carries a
//! static attribute schema; new instances start from the schema defaults
//! plus the structural `id` / `created_at` / `updated_at` fields.

use crate::error::ConsoleError;
use crate::value::{Kind, Value};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fields every object carries that no command may overwrite.
pub const RESERVED_ATTRS: [&str; 3] = ["id", "created_at", "updated_at"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// The fixed registry of domain classes. Parsing a name that is not listed
/// here is the "class doesn't exist" condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassName {
    BaseModel,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl ClassName {
    pub const ALL: [ClassName; 7] = [
        ClassName::BaseModel,
        ClassName::User,
        ClassName::State,
        ClassName::City,
        ClassName::Amenity,
        ClassName::Place,
        ClassName::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::BaseModel => "BaseModel",
            ClassName::User => "User",
            ClassName::State => "State",
            ClassName::City => "City",
            ClassName::Amenity => "Amenity",
            ClassName::Place => "Place",
            ClassName::Review => "Review",
        }
    }

    /// Attribute schema: name and default kind for every declared attribute.
    pub fn schema(&self) -> &'static [(&'static str, Kind)] {
        match self {
            ClassName::BaseModel => &[],
            ClassName::User => &[
                ("email", Kind::Str),
                ("password", Kind::Str),
                ("first_name", Kind::Str),
                ("last_name", Kind::Str),
            ],
            ClassName::State => &[("name", Kind::Str)],
            ClassName::City => &[("state_id", Kind::Str), ("name", Kind::Str)],
            ClassName::Amenity => &[("name", Kind::Str)],
            ClassName::Place => &[
                ("city_id", Kind::Str),
                ("user_id", Kind::Str),
                ("name", Kind::Str),
                ("description", Kind::Str),
                ("number_rooms", Kind::Int),
                ("number_bathrooms", Kind::Int),
                ("max_guest", Kind::Int),
                ("price_by_night", Kind::Int),
                ("latitude", Kind::Float),
                ("longitude", Kind::Float),
                ("amenity_ids", Kind::List),
            ],
            ClassName::Review => &[
                ("place_id", Kind::Str),
                ("user_id", Kind::Str),
                ("text", Kind::Str),
            ],
        }
    }
}

impl FromStr for ClassName {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassName::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(ConsoleError::UnknownClass)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instance living in the object store, addressed by its
/// `ClassName.id` key.
///
/// All attributes, structural ones included, live in a single map so that
/// lookup, display, and serialization are uniform. The store file carries
/// the class under a `__class__` discriminator next to the flattened map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObject {
    #[serde(rename = "__class__")]
    class: ClassName,
    #[serde(flatten)]
    attrs: BTreeMap<String, Value>,
}

impl StoredObject {
    pub fn new(class: ClassName) -> Self {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let mut attrs = BTreeMap::new();
        attrs.insert("id".to_string(), Value::Str(Uuid::new_v4().to_string()));
        attrs.insert("created_at".to_string(), Value::Str(now.clone()));
        attrs.insert("updated_at".to_string(), Value::Str(now));
        for (name, kind) in class.schema() {
            attrs.insert((*name).to_string(), kind.default_value());
        }
        Self { class, attrs }
    }

    pub fn class(&self) -> ClassName {
        self.class
    }

    pub fn id(&self) -> &str {
        match self.attrs.get("id") {
            Some(Value::Str(s)) => s,
            _ => "",
        }
    }

    /// The store key, `ClassName.id`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.class, self.id())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Set an attribute. Structural fields are silently left alone; they
    /// anchor the store key and the object's history.
    pub fn set_attr(&mut self, name: &str, value: Value) {
        if RESERVED_ATTRS.contains(&name) {
            return;
        }
        self.attrs.insert(name.to_string(), value);
    }

    /// Refresh `updated_at`, called when a mutation is persisted.
    pub fn touch(&mut self) {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        self.attrs.insert("updated_at".to_string(), Value::Str(now));
    }
}

impl fmt::Display for StoredObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}) {{", self.class, self.id())?;
        for (i, (name, value)) in self.attrs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", name, value)?;
        }
        write!(f, "}}")
    }
}
