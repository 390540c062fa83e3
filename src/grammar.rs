//! The MSE entity grammar
//!
//! Each record shape is a zip-composition of a literal tag prefix, field
//! extractions, and a closing delimiter, all built from the primitives in
//! [`combinator`](crate::combinator). The shapes share two sub-parsers: the
//! quoted `(name '...')` field and the `(<tag> (ref: N))` reference field.
//!
//! Layout is significant exactly where the format says it is: a newline
//! followed by zero or more spaces separates fields and entities, and field
//! order within a record is fixed. A record whose fields appear out of order
//! fails to parse as that shape and falls through the alternation.

use crate::combinator::{
    boxed, int, one_of, optional, prefix, prefix_through, prefix_while, zip, zip3, zip4, zip5,
    Parser, ParserExt,
};
use crate::entity::Entity;
use crate::log_debug;

/// Zero or more spaces. Always succeeds.
fn spaces<'i>() -> impl Parser<'i, Output = ()> {
    prefix_while(|c| c == ' ').ignore()
}

/// The canonical inter-field and inter-entity separator: a newline followed
/// by zero or more spaces.
fn line_separator<'i>() -> impl Parser<'i, Output = ()> {
    zip(prefix("\n"), spaces()).ignore()
}

/// `(name '<chars except quote>')`, with optional leading spaces. Quoted
/// strings have no escape handling; any character except `'` is literal.
fn name_field<'i>() -> impl Parser<'i, Output = &'i str> {
    zip4(
        spaces(),
        prefix("(name '"),
        prefix_while(|c| c != '\''),
        prefix("')"),
    )
    .map(|(_, _, name, _)| name)
}

/// A `(<tag> (ref: N))`-shaped reference field. `tag` carries the literal
/// text up to and including `(ref: `; the trailing `))` closes both the ref
/// and the field.
fn ref_field<'i>(tag: &'static str) -> impl Parser<'i, Output = i64> {
    prefix(tag)
        .take(int())
        .skip(prefix_through("))"))
        .map(|(_, id)| id)
}

/// `(FAMIX.Namespace (id: N)` header, yielding the id.
fn namespace_header<'i>() -> impl Parser<'i, Output = i64> {
    zip3(prefix("(FAMIX.Namespace (id: "), int(), prefix_through(")")).map(|(_, id, _)| id)
}

/// A `(FAMIX.Namespace ...)` record.
pub fn namespace<'i>() -> impl Parser<'i, Output = Entity> {
    zip3(
        namespace_header().skip(line_separator()),
        name_field(),
        prefix(")"),
    )
    .map(|(id, name, _)| Entity::Namespace {
        name: name.to_string(),
        id,
    })
}

fn package_header<'i>() -> impl Parser<'i, Output = i64> {
    prefix("(FAMIX.Package (id: ")
        .take(int())
        .skip(prefix_through(")"))
        .map(|(_, id)| id)
}

/// A `(FAMIX.Package ...)` record, with its optional parent package.
pub fn package<'i>() -> impl Parser<'i, Output = Entity> {
    zip5(
        package_header(),
        line_separator(),
        name_field(),
        optional(zip(line_separator(), ref_field("(parentPackage (ref: "))),
        prefix(")"),
    )
    .map(|(id, _, name, parent, _)| Entity::Package {
        name: name.to_string(),
        id,
        parent_package: parent.map(|(_, id)| id),
    })
}

fn class_header<'i>() -> impl Parser<'i, Output = i64> {
    prefix("(FAMIX.Class (id: ")
        .take(int())
        .skip(prefix_through(")"))
        .map(|(_, id)| id)
}

/// A `(FAMIX.Class ...)` record.
pub fn class<'i>() -> impl Parser<'i, Output = Entity> {
    zip4(
        class_header().skip(line_separator()),
        name_field().skip(line_separator()),
        ref_field("(container (ref: ").skip(line_separator()),
        ref_field("(parentPackage (ref: ").skip(prefix(")")),
    )
    .map(|(id, name, container, parent_package)| Entity::Class {
        name: name.to_string(),
        id,
        container,
        parent_package,
    })
}

/// `(signature '...')`. The signature itself may contain parentheses; the
/// quote-bounded scan stops at the closing `'` and the through-parser then
/// consumes `')`.
fn signature_field<'i>() -> impl Parser<'i, Output = &'i str> {
    prefix("(signature '")
        .take(prefix_while(|c| c != '\''))
        .skip(prefix_through(")"))
        .map(|(_, signature)| signature)
}

/// `(LOC N))`, closing both the field and the method record.
fn loc_field<'i>() -> impl Parser<'i, Output = i64> {
    prefix("(LOC ")
        .take(int())
        .skip(prefix_through("))"))
        .map(|(_, loc)| loc)
}

/// A `(FAMIX.Method ...)` record.
pub fn method<'i>() -> impl Parser<'i, Output = Entity> {
    zip5(
        prefix("(FAMIX.Method").skip(line_separator()),
        name_field().skip(line_separator()),
        signature_field().skip(line_separator()),
        ref_field("(parentType (ref: ").skip(line_separator()),
        loc_field(),
    )
    .map(|(_, name, signature, parent_type, loc)| Entity::Method {
        name: name.to_string(),
        signature: signature.to_string(),
        parent_type,
        loc,
    })
}

/// A `(FAMIX.Attribute ...)` record.
pub fn attribute<'i>() -> impl Parser<'i, Output = Entity> {
    zip3(
        prefix("(FAMIX.Attribute").skip(line_separator()),
        name_field().skip(line_separator()),
        ref_field("(parentType (ref: ").skip(prefix(")")),
    )
    .map(|(_, name, parent_type)| Entity::Attribute {
        name: name.to_string(),
        parent_type,
    })
}

/// A `(FAMIX.Inheritance ...)` record.
pub fn inheritance<'i>() -> impl Parser<'i, Output = Entity> {
    zip3(
        prefix("(FAMIX.Inheritance").skip(line_separator()),
        ref_field("(subclass (ref: ").skip(line_separator()),
        ref_field("(superclass (ref: ").skip(prefix(")")),
    )
    .map(|(_, subclass, superclass)| Entity::Inheritance {
        subclass,
        superclass,
    })
}

/// Any single entity record.
///
/// Ordered alternation over the six shapes. Every shape starts with a
/// unique literal tag, so selection does not depend on the order.
pub fn entity<'i>() -> impl Parser<'i, Output = Entity> {
    one_of(vec![
        boxed(namespace()),
        boxed(package()),
        boxed(class()),
        boxed(method()),
        boxed(attribute()),
        boxed(inheritance()),
    ])
}

/// A whole model: `(` entities `)` with newline-plus-spaces separation.
///
/// The enclosing parentheses are mandatory. When the trailing `)` has not
/// arrived yet (the buffer is still being typed), the whole parser fails
/// and consumes nothing, so the caller can retry on a longer buffer.
pub fn model<'i>() -> impl Parser<'i, Output = Vec<Entity>> {
    prefix("(")
        .take(entity().zero_or_more(line_separator()))
        .skip(prefix(")"))
        .map(|(_, entities)| entities)
}

/// Outcome of one [`parse_model`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelParse<'i> {
    /// The parsed entities in source order, or `None` when the top-level
    /// parser did not match.
    pub entities: Option<Vec<Entity>>,
    /// The unconsumed suffix of the input. Equals the whole input when the
    /// parse failed.
    pub rest: &'i str,
}

impl ModelParse<'_> {
    /// True when the top-level parser matched.
    pub fn is_match(&self) -> bool {
        self.entities.is_some()
    }
}

/// Parse one accumulated buffer into entities plus remainder.
///
/// Stateless and re-entrant: parsing the same buffer twice yields the same
/// entities and remainder.
pub fn parse_model(input: &str) -> ModelParse<'_> {
    let (entities, rest) = model().run(input);
    log_debug!(
        "parse_model: matched={}, rest={} bytes",
        entities.is_some(),
        rest.len()
    );
    ModelParse { entities, rest }
}
