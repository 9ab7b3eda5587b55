//! # hbnb-console Architecture
//!
//! An interactive console over a file-backed store of typed domain objects.
//! The library is UI-agnostic; the binary wires it to a read-line loop.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Read-line loop, prompt/banner handling, terminal I/O     │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console Layer (console.rs)                                 │
//! │  - Dotted-form rewriting (normalize.rs), dispatch, fallback │
//! │  - Returns output lines and a Continue/Quit decision        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One pure run(store, args) per operation                  │
//! │  - Strict validation order, no I/O assumptions              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ObjectStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two surface grammars
//!
//! Every operation is reachable two ways: the space-delimited form
//! (`show User 1234`) and the dotted call form (`User.show("1234")`).
//! The normalizer rewrites the dotted form into the space form before
//! dispatch, so both produce identical output by construction. Lines that
//! match neither grammar go through a best-effort textual fallback and,
//! failing that, an unknown-syntax report. No user input ever crashes the
//! loop.
//!
//! ## Module Overview
//!
//! - [`console`]: per-line pipeline and control flow
//! - [`commands`]: business logic for each operation
//! - [`normalize`]: dotted-call grammar rewriting
//! - [`tokenize`]: shell-like argument splitting
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: class registry and stored objects
//! - [`value`]: the closed literal value grammar
//! - [`error`]: error types, one per user-visible message

pub mod commands;
pub mod console;
pub mod error;
pub mod model;
pub mod normalize;
pub mod store;
pub mod tokenize;
pub mod value;
