//! `destroy <Class> <id>` — remove one object.
//!
//! The store is reloaded before the delete and saved after it, whether or
//! not anything was removed, so the on-disk state always matches the
//! in-memory view.

use crate::commands::{class_and_id, object_key, CmdOutput};
use crate::error::{ConsoleError, Result};
use crate::store::ObjectStore;
use crate::tokenize;

pub fn run<S: ObjectStore>(store: &mut S, args: &str) -> Result<CmdOutput> {
    let tokens = tokenize::split(args)?;
    if tokens.is_empty() {
        return Err(ConsoleError::MissingClassName);
    }
    if tokens.len() == 1 {
        return Err(ConsoleError::MissingInstanceId);
    }
    store.reload()?;
    let (class, id) = class_and_id(&tokens)?;
    let removed = store.remove(&object_key(class, id));
    store.save()?;
    if removed.is_none() {
        return Err(ConsoleError::NoInstanceFound);
    }
    Ok(CmdOutput::default())
}
