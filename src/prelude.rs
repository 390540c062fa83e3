//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions. A wildcard import
//! brings everything needed to parse models or build custom parsers into
//! scope:
//!
//! ```
//! use famix_mse::prelude::*;
//!
//! let (matched, rest) = prefix("id: ").take(int()).run("id: 7");
//! assert_eq!(matched, Some(((), 7)));
//! assert_eq!(rest, "");
//! ```

pub use crate::combinator::{
    boxed, int, one_of, optional, prefix, prefix_through, prefix_while, zip, zip3, zip4, zip5,
    BoxedParser, Parser, ParserExt,
};
pub use crate::cursor::{Checkpoint, Cursor};
pub use crate::entity::{Entity, EntityKind};
pub use crate::grammar::{parse_model, ModelParse};
pub use crate::report::{kind_histogram, render_bar_chart};
pub use crate::session::Session;
pub use crate::SAMPLE_MODEL;
