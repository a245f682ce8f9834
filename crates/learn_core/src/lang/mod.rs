//! Vocabulary registries.
//!
//! This module is the “front door” for every spelling the normalizer and harness match against:
//! declaration keywords, built-in constructors, and reporter markers.
//!
//! The design goal is to avoid stringly-typed checks scattered across the normalizer and the output parser.
//! Callers work with **stable IDs** (e.g. `DeclarationId`, `MarkerId`) and look up spellings and metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use learn_core::lang::declarations::{self, DeclarationId};
//!
//! assert_eq!(declarations::from_str("it"), Some(DeclarationId::It));
//! assert_eq!(declarations::as_str(DeclarationId::Describe), "describe");
//! ```

pub mod constructors;
pub mod declarations;
pub mod registry;
pub mod reporter;
