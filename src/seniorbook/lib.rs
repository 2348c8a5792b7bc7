//! # Seniorbook Architecture
//!
//! Seniorbook keeps a contact directory of seniors on disk in two formats at
//! once: a JSON file (the Primary) and a pipe-delimited text file (the
//! Secondary). It is a library with a small CLI client, not the other way
//! round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, sets up logging, prints messages       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - open, import, export, doctor, paths                      │
//! │  - Returns CmdResult: the book, load report, messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait: JsonStore, TextStore                    │
//! │  - DualStore keeps the two files in step                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery, Not Rejection
//!
//! Loading the Primary never fails because of one bad entry. Every entry is
//! decoded on its own; invalid ones and repeats of an identity already seen
//! are skipped with a diagnostic, and loading stops at the capacity bound.
//! Only a broken JSON document, an unreadable file, or a file in which no
//! entry survives is an error.
//!
//! The Secondary is strict by default: one bad line or duplicate rejects the
//! whole file. See [`config::TextMode`].
//!
//! ## Diagnostics
//!
//! Nothing under `api` writes to stdout or stderr. Stores report through an
//! injected [`diagnostics::DiagnosticSink`]; the binary plugs in
//! [`diagnostics::TracingSink`], tests use [`diagnostics::MemorySink`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Codecs, the two stores and the reconciler
//! - [`model`]: `Senior`, `SeniorBook` and the validated field types
//! - [`config`]: User preferences
//! - [`diagnostics`]: Diagnostic sinks
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod store;
