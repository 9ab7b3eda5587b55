//! `update <Class> <id> <attribute> <value>` — set one attribute.
//!
//! The four fields are validated strictly left to right, each absence with
//! its own message. When the attribute already exists the new value is
//! coerced to its current runtime type; otherwise, or when coercion fails,
//! the raw string is stored. Tokens past the fourth are ignored.

use crate::commands::{object_key, CmdOutput};
use crate::error::{ConsoleError, Result};
use crate::model::ClassName;
use crate::store::ObjectStore;
use crate::tokenize;
use crate::value::Value;

pub fn run<S: ObjectStore>(store: &mut S, args: &str) -> Result<CmdOutput> {
    store.reload()?;
    let tokens = tokenize::split(args)?;
    match tokens.len() {
        0 => return Err(ConsoleError::MissingClassName),
        1 => return Err(ConsoleError::MissingInstanceId),
        2 => return Err(ConsoleError::MissingAttrName),
        3 => return Err(ConsoleError::MissingAttrValue),
        _ => {}
    }
    let class: ClassName = tokens[0].parse()?;
    let key = object_key(class, &tokens[1]);
    let Some(mut object) = store.get(&key) else {
        return Err(ConsoleError::NoInstanceFound);
    };

    let name = &tokens[2];
    let raw = &tokens[3];
    let value = match object.get_attr(name).map(Value::kind) {
        Some(kind) => Value::coerce(kind, raw).unwrap_or_else(|| Value::Str(raw.clone())),
        None => Value::Str(raw.clone()),
    };
    object.set_attr(name, value);
    object.touch();
    store.insert(object);
    store.save()?;
    Ok(CmdOutput::default())
}
