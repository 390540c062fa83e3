//! FAMIX entity records
//!
//! One parsed record of the software model. Integer fields are raw
//! identifiers as they appeared in the source text; references are never
//! resolved into links and dangling ids are not an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One software-model record, one variant per supported MSE record shape.
///
/// Entities are immutable values: created once by a successful grammar
/// match and collected in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum Entity {
    /// `(FAMIX.Namespace ...)`
    Namespace {
        /// Namespace name.
        name: String,
        /// Model-wide id of this namespace.
        id: i64,
    },
    /// `(FAMIX.Package ...)`
    Package {
        /// Package name.
        name: String,
        /// Model-wide id of this package.
        id: i64,
        /// Id of the enclosing package, when the record carried one.
        parent_package: Option<i64>,
    },
    /// `(FAMIX.Class ...)`
    Class {
        /// Class name.
        name: String,
        /// Model-wide id of this class.
        id: i64,
        /// Id of the containing namespace.
        container: i64,
        /// Id of the owning package.
        parent_package: i64,
    },
    /// `(FAMIX.Method ...)`
    Method {
        /// Method name.
        name: String,
        /// Full signature, including parameter list.
        signature: String,
        /// Id of the type defining this method.
        parent_type: i64,
        /// Lines of code.
        loc: i64,
    },
    /// `(FAMIX.Attribute ...)`
    Attribute {
        /// Attribute name.
        name: String,
        /// Id of the type defining this attribute.
        parent_type: i64,
    },
    /// `(FAMIX.Inheritance ...)`
    Inheritance {
        /// Id of the subclass.
        subclass: i64,
        /// Id of the superclass.
        superclass: i64,
    },
}

impl Entity {
    /// The kind tag of this record.
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Namespace { .. } => EntityKind::Namespace,
            Entity::Package { .. } => EntityKind::Package,
            Entity::Class { .. } => EntityKind::Class,
            Entity::Method { .. } => EntityKind::Method,
            Entity::Attribute { .. } => EntityKind::Attribute,
            Entity::Inheritance { .. } => EntityKind::Inheritance,
        }
    }
}

impl fmt::Display for Entity {
    /// Stable human-readable rendering: tag plus fields in declaration
    /// order. Display-only; there is no round-trip back into MSE syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Namespace { name, id } => {
                write!(f, "FAMIX.namespace, name: {name}, id: {id}")
            }
            Entity::Package {
                name,
                id,
                parent_package,
            } => {
                write!(
                    f,
                    "FAMIX.package, name: {name}, id: {id}, parentPackageID: {parent_package:?}"
                )
            }
            Entity::Class {
                name,
                id,
                container,
                parent_package,
            } => {
                write!(
                    f,
                    "FAMIX.class, name: {name}, id: {id}, container: {container}, parentPackage: {parent_package}"
                )
            }
            Entity::Method {
                name,
                signature,
                parent_type,
                loc,
            } => {
                write!(
                    f,
                    "FAMIX.method, name: {name}, signature: {signature}, parentType: {parent_type}, LOC: {loc}"
                )
            }
            Entity::Attribute { name, parent_type } => {
                write!(f, "FAMIX.attribute, name: {name}, parentID: {parent_type}")
            }
            Entity::Inheritance {
                subclass,
                superclass,
            } => {
                write!(
                    f,
                    "FAMIX.inheritance, subclassID: {subclass}, superclassID: {superclass}"
                )
            }
        }
    }
}

/// The closed set of entity kind tags.
///
/// The tag strings returned by [`EntityKind::name`] are stable and are the
/// keys consumed by frequency reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Namespace records.
    Namespace,
    /// Package records.
    Package,
    /// Class records.
    Class,
    /// Method records.
    Method,
    /// Attribute records.
    Attribute,
    /// Inheritance edges.
    Inheritance,
}

impl EntityKind {
    /// All kinds, in grammar alternation order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Namespace,
        EntityKind::Package,
        EntityKind::Class,
        EntityKind::Method,
        EntityKind::Attribute,
        EntityKind::Inheritance,
    ];

    /// Stable tag string for this kind.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Namespace => "Namespace",
            EntityKind::Package => "Package",
            EntityKind::Class => "Class",
            EntityKind::Method => "Method",
            EntityKind::Attribute => "Attribute",
            EntityKind::Inheritance => "Inheritance",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
