//! Entity-kind frequency reporting
//!
//! Computes how often each record kind occurs in a parsed model and renders
//! the result as a textual bar chart for the CLI.

use hashbrown::HashMap;

use crate::entity::{Entity, EntityKind};

/// Width of the longest bar in [`render_bar_chart`].
const CHART_WIDTH: usize = 40;

/// Count entities per kind.
///
/// The result contains one `(kind, count)` pair for every kind that occurs
/// at least once, ordered by [`EntityKind::ALL`], so output is stable across
/// runs regardless of hash iteration order.
pub fn kind_histogram(entities: &[Entity]) -> Vec<(EntityKind, usize)> {
    let mut counts: HashMap<EntityKind, usize> = HashMap::new();
    for entity in entities {
        *counts.entry(entity.kind()).or_insert(0) += 1;
    }
    EntityKind::ALL
        .iter()
        .filter_map(|kind| counts.get(kind).map(|&count| (*kind, count)))
        .collect()
}

/// Render a histogram as an ASCII bar chart, one kind per line.
///
/// Bars are scaled so the most frequent kind spans [`CHART_WIDTH`] columns;
/// every non-zero count gets at least one column.
pub fn render_bar_chart(histogram: &[(EntityKind, usize)]) -> String {
    let Some(max) = histogram.iter().map(|&(_, count)| count).max() else {
        return String::new();
    };
    let label_width = histogram
        .iter()
        .map(|(kind, _)| kind.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for &(kind, count) in histogram {
        let bar = (count * CHART_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "{:<label_width$} ({:>3}) {}\n",
            kind.name(),
            count,
            "#".repeat(bar)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entities() -> Vec<Entity> {
        vec![
            Entity::Namespace {
                name: "ns".into(),
                id: 1,
            },
            Entity::Attribute {
                name: "a".into(),
                parent_type: 2,
            },
            Entity::Attribute {
                name: "b".into(),
                parent_type: 2,
            },
            Entity::Inheritance {
                subclass: 3,
                superclass: 2,
            },
        ]
    }

    #[test]
    fn test_histogram_counts_and_order() {
        let histogram = kind_histogram(&sample_entities());
        assert_eq!(
            histogram,
            vec![
                (EntityKind::Namespace, 1),
                (EntityKind::Attribute, 2),
                (EntityKind::Inheritance, 1),
            ]
        );
    }

    #[test]
    fn test_histogram_empty_input() {
        assert!(kind_histogram(&[]).is_empty());
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        let histogram = kind_histogram(&sample_entities());
        let chart = render_bar_chart(&histogram);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        // The most frequent kind gets the full width.
        assert!(lines[1].ends_with(&"#".repeat(40)));
        // Non-zero counts always get at least one column.
        assert!(lines[0].contains('#'));
    }

    #[test]
    fn test_bar_chart_empty_histogram() {
        assert_eq!(render_bar_chart(&[]), "");
    }
}
