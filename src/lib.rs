//! famix-mse - Backtracking Parser Combinators for the FAMIX MSE Format
//!
//! This crate parses the textual MSE serialization of a FAMIX software
//! model into typed entity records. It provides:
//! - A minimal, generic backtracking combinator engine (prefix matching,
//!   predicate and through scans, integer literals, sequencing, optional,
//!   ordered alternation, separator-delimited repetition)
//! - An entity grammar for the six supported record shapes (Namespace,
//!   Package, Class, Method, Attribute, Inheritance)
//! - A line-accumulating [`Session`] for interactive, retry-on-longer-input
//!   parsing
//! - Kind-frequency reporting with a textual bar chart
//!
//! Failure is silent and local: a parser that does not match returns `None`
//! and leaves its cursor untouched, so alternation and retry cost nothing.
//! Reference fields stay raw integers; the parser never resolves ids into
//! links and never validates referential integrity.
//!
//! ## Quick Start
//!
//! ```rust
//! use famix_mse::{parse_model, Entity};
//!
//! let outcome = parse_model(famix_mse::SAMPLE_MODEL);
//! let entities = outcome.entities.expect("sample parses");
//! assert_eq!(entities.len(), 11);
//! assert_eq!(outcome.rest, "");
//! assert!(matches!(entities[0], Entity::Namespace { id: 1, .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]

/// Logging macro - no-op when the logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macro - forwards to the log crate when the feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

pub(crate) use log_debug;

pub mod combinator;
pub mod cursor;
pub mod entity;
pub mod grammar;
pub mod prelude;
pub mod report;
pub mod session;

/// Re-export commonly used types for convenience
pub use combinator::{Parser, ParserExt};
pub use cursor::{Checkpoint, Cursor};
pub use entity::{Entity, EntityKind};
pub use grammar::{parse_model, ModelParse};
pub use report::{kind_histogram, render_bar_chart};
pub use session::Session;

/// The canonical eleven-record example model, as shipped with the original
/// tooling. Used by the CLI's `example` command, the tests, and the bench.
pub const SAMPLE_MODEL: &str = "\
((FAMIX.Namespace (id: 1)
    (name 'aNamespace'))
  (FAMIX.Package (id: 201)
    (name 'aPackage'))
  (FAMIX.Package (id: 202)
    (name 'anotherPackage')
    (parentPackage (ref: 201)))
  (FAMIX.Package (id: 203)
    (name 'anotherPackage')
    (parentPackage (ref: 201)))
  (FAMIX.Class (id: 2)
    (name 'ClassA')
    (container (ref: 1))
    (parentPackage (ref: 201)))
  (FAMIX.Method
    (name 'methodA1')
    (signature 'methodA1()')
    (parentType (ref: 2))
    (LOC 2))
  (FAMIX.Method
    (name 'methodA2')
    (signature 'methodA2()')
    (parentType (ref: 3))
    (LOC 3))
  (FAMIX.Method
    (name 'methodA3')
    (signature 'methodA3()')
    (parentType (ref: 4))
    (LOC 4))
  (FAMIX.Attribute
    (name 'attributeA1')
    (parentType (ref: 2)))
  (FAMIX.Class (id: 3)
    (name 'ClassB')
    (container (ref: 1))
    (parentPackage (ref: 202)))
  (FAMIX.Inheritance
    (subclass (ref: 3))
    (superclass (ref: 2))))";
