//! Integration tests for the MSE model grammar
//!
//! These tests cover the end-to-end behavior of the entity grammar:
//! - The canonical example model, field by field
//! - Alternation-order independence of entity selection
//! - The mandatory top-level wrapper on partial input
//! - Optional field handling
//! - Line-by-line accumulation via the session

use famix_mse::combinator::{boxed, one_of, BoxedParser, ParserExt};
use famix_mse::grammar::{self, parse_model};
use famix_mse::{Entity, EntityKind, Session, SAMPLE_MODEL};

fn expected_sample_entities() -> Vec<Entity> {
    vec![
        Entity::Namespace {
            name: "aNamespace".into(),
            id: 1,
        },
        Entity::Package {
            name: "aPackage".into(),
            id: 201,
            parent_package: None,
        },
        Entity::Package {
            name: "anotherPackage".into(),
            id: 202,
            parent_package: Some(201),
        },
        Entity::Package {
            name: "anotherPackage".into(),
            id: 203,
            parent_package: Some(201),
        },
        Entity::Class {
            name: "ClassA".into(),
            id: 2,
            container: 1,
            parent_package: 201,
        },
        Entity::Method {
            name: "methodA1".into(),
            signature: "methodA1()".into(),
            parent_type: 2,
            loc: 2,
        },
        Entity::Method {
            name: "methodA2".into(),
            signature: "methodA2()".into(),
            parent_type: 3,
            loc: 3,
        },
        Entity::Method {
            name: "methodA3".into(),
            signature: "methodA3()".into(),
            parent_type: 4,
            loc: 4,
        },
        Entity::Attribute {
            name: "attributeA1".into(),
            parent_type: 2,
        },
        Entity::Class {
            name: "ClassB".into(),
            id: 3,
            container: 1,
            parent_package: 202,
        },
        Entity::Inheritance {
            subclass: 3,
            superclass: 2,
        },
    ]
}

// ============================================================================
// Canonical Example
// ============================================================================

#[test]
fn test_sample_model_round_trip() {
    let outcome = parse_model(SAMPLE_MODEL);
    assert_eq!(outcome.entities, Some(expected_sample_entities()));
    assert_eq!(outcome.rest, "");
}

#[test]
fn test_sample_model_source_order() {
    let entities = parse_model(SAMPLE_MODEL).entities.unwrap();
    let kinds: Vec<EntityKind> = entities.iter().map(Entity::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Namespace,
            EntityKind::Package,
            EntityKind::Package,
            EntityKind::Package,
            EntityKind::Class,
            EntityKind::Method,
            EntityKind::Method,
            EntityKind::Method,
            EntityKind::Attribute,
            EntityKind::Class,
            EntityKind::Inheritance,
        ]
    );
}

// ============================================================================
// Alternation Order Independence
// ============================================================================

/// Single well-formed records, one per shape.
fn single_records() -> Vec<(&'static str, EntityKind)> {
    vec![
        (
            "(FAMIX.Namespace (id: 1)\n    (name 'aNamespace'))",
            EntityKind::Namespace,
        ),
        (
            "(FAMIX.Package (id: 201)\n    (name 'aPackage'))",
            EntityKind::Package,
        ),
        (
            "(FAMIX.Class (id: 2)\n    (name 'ClassA')\n    (container (ref: 1))\n    (parentPackage (ref: 201)))",
            EntityKind::Class,
        ),
        (
            "(FAMIX.Method\n    (name 'methodA1')\n    (signature 'methodA1()')\n    (parentType (ref: 2))\n    (LOC 2))",
            EntityKind::Method,
        ),
        (
            "(FAMIX.Attribute\n    (name 'attributeA1')\n    (parentType (ref: 2)))",
            EntityKind::Attribute,
        ),
        (
            "(FAMIX.Inheritance\n    (subclass (ref: 3))\n    (superclass (ref: 2)))",
            EntityKind::Inheritance,
        ),
    ]
}

fn shape_parsers<'i>() -> Vec<BoxedParser<'i, Entity>> {
    vec![
        boxed(grammar::namespace()),
        boxed(grammar::package()),
        boxed(grammar::class()),
        boxed(grammar::method()),
        boxed(grammar::attribute()),
        boxed(grammar::inheritance()),
    ]
}

#[test]
fn test_one_of_selects_correct_variant_in_any_rotation() {
    // The six tags are disjoint literal prefixes, so every rotation of the
    // alternative list picks the same variant for every record.
    for rotation in 0..6 {
        for (input, expected_kind) in single_records() {
            let mut parsers = shape_parsers();
            parsers.rotate_left(rotation);
            let (matched, rest) = one_of(parsers).run(input);
            let entity = matched.unwrap_or_else(|| {
                panic!("rotation {rotation} failed to parse {expected_kind} record")
            });
            assert_eq!(entity.kind(), expected_kind);
            assert_eq!(rest, "");
        }
    }
}

// ============================================================================
// Top-Level Wrapper and Partial Input
// ============================================================================

#[test]
fn test_inner_record_without_wrapper_yields_no_entities() {
    let input = "(FAMIX.Namespace (id: 1)\n    (name 'aNamespace'))";
    // The inner Namespace parser alone succeeds...
    assert!(grammar::namespace().run(input).0.is_some());
    // ...but the top-level parser demands the enclosing parentheses.
    let outcome = parse_model(input);
    assert!(!outcome.is_match());
    assert_eq!(outcome.rest, input);
}

#[test]
fn test_growing_buffer_retry() {
    // Simulate the read-loop: feed the sample line by line; the parse only
    // matches once the final closing line has arrived.
    let mut session = Session::new();
    let lines: Vec<&str> = SAMPLE_MODEL.lines().collect();
    for (index, line) in lines.iter().enumerate() {
        let ready = session.push_line(line);
        if index + 1 < lines.len() {
            assert!(!ready, "buffer matched early at line {}", index + 1);
        } else {
            assert!(ready, "buffer did not match after the final line");
        }
    }
    assert_eq!(session.take_results(), expected_sample_entities());
}

// ============================================================================
// Optional Fields
// ============================================================================

#[test]
fn test_package_parent_field_optional() {
    let bare = "(FAMIX.Package (id: 201)\n    (name 'aPackage'))";
    let (matched, _) = grammar::package().run(bare);
    assert_eq!(
        matched,
        Some(Entity::Package {
            name: "aPackage".into(),
            id: 201,
            parent_package: None
        })
    );

    let nested =
        "(FAMIX.Package (id: 202)\n    (name 'anotherPackage')\n    (parentPackage (ref: 201)))";
    let (matched, _) = grammar::package().run(nested);
    assert_eq!(
        matched,
        Some(Entity::Package {
            name: "anotherPackage".into(),
            id: 202,
            parent_package: Some(201)
        })
    );
}

// ============================================================================
// Failure Behavior
// ============================================================================

#[test]
fn test_failed_parse_is_idempotent_with_identical_remainder() {
    let input = "((FAMIX.Namespace (id: 1)\n    (name 'aNamespace')";
    let first = parse_model(input);
    let second = parse_model(input);
    assert!(!first.is_match());
    assert_eq!(first, second);
    assert_eq!(first.rest, input);
}

#[test]
fn test_malformed_record_inside_list_fails_whole_parse() {
    // "FAMIX.Clazz" matches no tag; zero entities parse and the top-level
    // close paren is never reached.
    let input = "((FAMIX.Clazz (id: 2)\n    (name 'ClassA')))";
    let outcome = parse_model(input);
    assert!(!outcome.is_match());
    assert_eq!(outcome.rest, input);
}
