//! `create <Class> [key=value ...]`
//!
//! Instantiates a new object, applies any `key=value` pairs that name a
//! declared attribute, persists, and reports the new id. Unknown keys are
//! skipped without comment; underscores in values read as spaces.

use crate::commands::CmdOutput;
use crate::error::{ConsoleError, Result};
use crate::model::{ClassName, StoredObject};
use crate::store::ObjectStore;
use crate::tokenize;
use crate::value::Value;

pub fn run<S: ObjectStore>(store: &mut S, args: &str) -> Result<CmdOutput> {
    if args.trim().is_empty() {
        return Err(ConsoleError::MissingClassName);
    }
    let tokens = tokenize::split(args)?;
    let class: ClassName = tokens
        .first()
        .ok_or(ConsoleError::MissingClassName)?
        .parse()?;

    let mut object = StoredObject::new(class);
    for pair in &tokens[1..] {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        if !object.has_attr(key) {
            continue;
        }
        let raw = raw.replace('_', " ");
        object.set_attr(key, Value::parse_literal(&raw));
    }

    let id = object.id().to_string();
    store.insert(object);
    store.save()?;
    Ok(CmdOutput::line(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_missing_class_name() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, ""),
            Err(ConsoleError::MissingClassName)
        ));
    }

    #[test]
    fn reports_unknown_class() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "MyModel"),
            Err(ConsoleError::UnknownClass)
        ));
    }

    #[test]
    fn prints_the_new_id_and_stores_the_object() {
        let mut store = InMemoryStore::new();
        let out = run(&mut store, "User").unwrap();
        let id = &out.lines()[0];
        assert!(store.get(&format!("User.{}", id)).is_some());
    }

    #[test]
    fn applies_declared_attributes_with_coercion() {
        let mut store = InMemoryStore::new();
        let out = run(
            &mut store,
            "Place name=\"My_little_house\" number_rooms=4 latitude=37.77",
        )
        .unwrap();
        let key = format!("Place.{}", out.lines()[0]);
        let place = store.get(&key).unwrap();
        assert_eq!(
            place.get_attr("name"),
            Some(&Value::Str("My little house".to_string()))
        );
        assert_eq!(place.get_attr("number_rooms"), Some(&Value::Int(4)));
        assert_eq!(place.get_attr("latitude"), Some(&Value::Float(37.77)));
    }

    #[test]
    fn silently_skips_unknown_attributes() {
        let mut store = InMemoryStore::new();
        let out = run(&mut store, "User email=x@y.z shoe_size=44").unwrap();
        let user = store.get(&format!("User.{}", out.lines()[0])).unwrap();
        assert_eq!(user.get_attr("email"), Some(&Value::Str("x@y.z".into())));
        assert!(user.get_attr("shoe_size").is_none());
    }

    #[test]
    fn structural_fields_cannot_be_overridden() {
        let mut store = InMemoryStore::new();
        let out = run(&mut store, "User id=5").unwrap();
        let id = &out.lines()[0];
        // the printed id is the generated one, and the object kept it
        assert_ne!(id, "5");
        assert!(store.get(&format!("User.{}", id)).is_some());
    }

    #[test]
    fn tokens_without_equals_are_ignored() {
        let mut store = InMemoryStore::new();
        let out = run(&mut store, "State stray name=Oregon").unwrap();
        let state = store.get(&format!("State.{}", out.lines()[0])).unwrap();
        assert_eq!(state.get_attr("name"), Some(&Value::Str("Oregon".into())));
    }
}
