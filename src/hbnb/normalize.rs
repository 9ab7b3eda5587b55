//! Dotted-call syntax rewriting.
//!
//! `<Class>.<command>([<id> [<args> or {<kwargs>}]])` is rewritten to the
//! canonical space-delimited line `<command> <class> <id> <args>` before
//! dispatch. Rewriting is best-effort: any line the grammar does not match
//! passes through unchanged, and the dispatcher deals with it.

use crate::value::parse_map_literal;

/// Commands reachable through the dotted form.
pub const DOT_COMMANDS: [&str; 5] = ["all", "count", "show", "destroy", "update"];

/// Rewrite a dotted-form line into canonical form, or return the line
/// unchanged when it does not match the dotted grammar.
pub fn rewrite(line: &str) -> String {
    rewrite_dotted(line).unwrap_or_else(|| line.to_string())
}

fn rewrite_dotted(line: &str) -> Option<String> {
    // cheap reject before any parsing
    if !(line.contains('.') && line.contains('(') && line.contains(')')) {
        return None;
    }

    let dot = line.find('.')?;
    let open = line.find('(')?;
    let close = line.find(')')?;

    let class = &line[..dot];
    let command = if open >= dot + 1 { &line[dot + 1..open] } else { "" };
    if !DOT_COMMANDS.contains(&command) {
        return None;
    }

    // body between the first '(' and the first ')', not balance-aware
    let body = if close > open { &line[open + 1..close] } else { "" };

    let mut id = String::new();
    let mut args = String::new();
    if !body.is_empty() {
        let (id_part, rest) = match body.split_once(", ") {
            Some((head, tail)) => (head, tail),
            None => (body, ""),
        };
        // an id written as "" collapses to an empty id here, which is then
        // indistinguishable from "no id given" downstream; kept on purpose
        id = id_part.replace('"', "");

        let rest = rest.trim();
        if !rest.is_empty() {
            if rest.starts_with('{') && rest.ends_with('}') && parse_map_literal(rest).is_some() {
                args = rest.to_string();
            } else {
                // positional args lose comma structure; only a single extra
                // token survives reliably
                args = rest.replace(',', "");
            }
        }
    }

    Some(format!("{} {} {} {}", command, class, id, args))
}
