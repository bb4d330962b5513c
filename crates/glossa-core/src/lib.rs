#![forbid(unsafe_code)]
//! glossa-core library: glossary data model, editing operations, and
//! document persistence.
//!
//! # Conventions
//!
//! - **Errors**: library failures are typed (`thiserror` enums with stable
//!   `error_code()` strings); `anyhow` is reserved for binary-side context.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod ident;
pub mod model;
pub mod ops;
pub mod store;

pub use error::{OpsError, StoreError};
pub use model::{Category, DefinitionField, Definitions, GlossaryData, Term};
pub use store::{GlossaryStore, JsonFileStore, parse_document, to_document_json};
