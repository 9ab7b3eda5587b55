use thiserror::Error;

/// Every user-facing failure the console can report.
///
/// The `Display` form of each variant is the exact message printed to the
/// user, so handlers can return these and the REPL prints them verbatim.
/// The loop itself never aborts on any of them.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("** class name missing **")]
    MissingClassName,

    #[error("** instance id missing **")]
    MissingInstanceId,

    #[error("** attribute name missing **")]
    MissingAttrName,

    #[error("** value missing **")]
    MissingAttrValue,

    #[error("** class doesn't exist **")]
    UnknownClass,

    #[error("** no instance found **")]
    NoInstanceFound,

    #[error("*** Unknown syntax: {0}")]
    UnknownSyntax(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
