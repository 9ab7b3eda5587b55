//! `all [Class]` — list stored objects, optionally filtered to one class.
//!
//! An empty result is an empty list, never an error. The whole listing is
//! printed as one bracketed line.

use crate::commands::CmdOutput;
use crate::error::Result;
use crate::model::ClassName;
use crate::store::ObjectStore;

pub fn run<S: ObjectStore>(store: &S, args: &str) -> Result<CmdOutput> {
    // first space-delimited word only; trailing words are ignored
    let name = args.split(' ').next().unwrap_or("");
    let class = if name.is_empty() {
        None
    } else {
        Some(name.parse::<ClassName>()?)
    };
    let objects = store.all(class);
    let rendered: Vec<String> = objects.values().map(|o| o.to_string()).collect();
    Ok(CmdOutput::line(format!("[{}]", rendered.join(", "))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use crate::model::ClassName;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_prints_empty_list() {
        let store = InMemoryStore::new();
        assert_eq!(run(&store, "").unwrap().lines(), ["[]"]);
        assert_eq!(run(&store, "User").unwrap().lines(), ["[]"]);
    }

    #[test]
    fn unknown_class_is_reported() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, "Ghost"),
            Err(ConsoleError::UnknownClass)
        ));
    }

    #[test]
    fn filters_to_the_named_class() {
        let (fixture, _) = StoreFixture::new().with_instances(ClassName::User, 2);
        let (fixture, _) = fixture.with_instances(ClassName::City, 1);
        let out = run(&fixture.store, "User").unwrap();
        let line = &out.lines()[0];
        assert_eq!(line.matches("[User]").count(), 2);
        assert!(!line.contains("[City]"));
    }

    #[test]
    fn no_filter_lists_everything() {
        let (fixture, _) = StoreFixture::new().with_instances(ClassName::User, 1);
        let (fixture, _) = fixture.with_instances(ClassName::City, 1);
        let out = run(&fixture.store, "").unwrap();
        let line = &out.lines()[0];
        assert!(line.contains("[User]"));
        assert!(line.contains("[City]"));
    }

    #[test]
    fn repeated_calls_return_equal_listings() {
        let (fixture, _) = StoreFixture::new().with_instances(ClassName::Amenity, 3);
        let first = run(&fixture.store, "Amenity").unwrap();
        let second = run(&fixture.store, "Amenity").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn trailing_words_are_ignored() {
        let (fixture, _) = StoreFixture::new().with_instances(ClassName::User, 1);
        let filtered = run(&fixture.store, "User and more").unwrap();
        let plain = run(&fixture.store, "User").unwrap();
        assert_eq!(filtered, plain);
    }
}
