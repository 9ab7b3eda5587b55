//! Command layer: one module per console operation.
//!
//! Every handler is a pure `run(store, args)` function that returns the
//! lines to print. User-facing failures come back as [`ConsoleError`]
//! variants whose display text is the message; handlers never print.
//!
//! Shared validation order, checked before the store is touched:
//! 1. missing class name
//! 2. missing instance id
//! 3. class not in the registry
//! 4. (update) missing attribute name, then missing value

use crate::error::{ConsoleError, Result};
use crate::model::ClassName;

pub mod all;
pub mod count;
pub mod create;
pub mod destroy;
pub mod show;
pub mod update;

/// Lines a command wants printed, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdOutput {
    lines: Vec<String>,
}

impl CmdOutput {
    pub fn line(content: impl Into<String>) -> Self {
        Self {
            lines: vec![content.into()],
        }
    }

    pub fn push(&mut self, content: impl Into<String>) {
        self.lines.push(content.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Validate the leading `class id` tokens shared by show and destroy.
/// Presence is checked before class existence; that ordering is part of
/// the user-visible contract.
pub(crate) fn class_and_id(tokens: &[String]) -> Result<(ClassName, &str)> {
    if tokens.is_empty() {
        return Err(ConsoleError::MissingClassName);
    }
    if tokens.len() == 1 {
        return Err(ConsoleError::MissingInstanceId);
    }
    let class: ClassName = tokens[0].parse()?;
    Ok((class, &tokens[1]))
}

pub(crate) fn object_key(class: ClassName, id: &str) -> String {
    format!("{}.{}", class, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_class_reported_first() {
        assert!(matches!(
            class_and_id(&[]),
            Err(ConsoleError::MissingClassName)
        ));
    }

    #[test]
    fn missing_id_reported_before_class_existence() {
        // "Nope" is not a registered class, but the id check wins
        assert!(matches!(
            class_and_id(&toks(&["Nope"])),
            Err(ConsoleError::MissingInstanceId)
        ));
    }

    #[test]
    fn unknown_class_reported_after_presence_checks() {
        assert!(matches!(
            class_and_id(&toks(&["Nope", "1234"])),
            Err(ConsoleError::UnknownClass)
        ));
    }

    #[test]
    fn valid_tokens_resolve() {
        let tokens = toks(&["User", "1234"]);
        let (class, id) = class_and_id(&tokens).unwrap();
        assert_eq!(class, ClassName::User);
        assert_eq!(id, "1234");
        assert_eq!(object_key(class, id), "User.1234");
    }
}
