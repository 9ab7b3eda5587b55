//! `count [Class]` — count stored objects after refreshing from disk.
//!
//! With a class argument only exact class matches are counted. The whole
//! trimmed argument string is the class name, so trailing words make it
//! unresolvable rather than being ignored.

use crate::commands::CmdOutput;
use crate::error::Result;
use crate::model::ClassName;
use crate::store::ObjectStore;

pub fn run<S: ObjectStore>(store: &mut S, args: &str) -> Result<CmdOutput> {
    store.reload()?;
    let arg = args.trim();
    let class = if arg.is_empty() {
        None
    } else {
        Some(arg.parse::<ClassName>()?)
    };
    let count = store.all(class).len();
    Ok(CmdOutput::line(count.to_string()))
}
