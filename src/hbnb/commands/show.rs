//! `show <Class> <id>` — print one object's text form.

use crate::commands::{class_and_id, object_key, CmdOutput};
use crate::error::{ConsoleError, Result};
use crate::store::ObjectStore;
use crate::tokenize;

pub fn run<S: ObjectStore>(store: &S, args: &str) -> Result<CmdOutput> {
    let tokens = tokenize::split(args)?;
    let (class, id) = class_and_id(&tokens)?;
    match store.get(&object_key(class, id)) {
        Some(object) => Ok(CmdOutput::line(object.to_string())),
        None => Err(ConsoleError::NoInstanceFound),
    }
}
