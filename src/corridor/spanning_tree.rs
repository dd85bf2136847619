//! Minimum spanning tree over zone centers (Prim, O(n²))

use super::{CorridorKind, CorridorSegment};
use crate::placement::PlacedZone;

/// One strip per tree edge. Edges between two inner nodes are trunks
/// (`Main`); edges that end at a leaf zone are spurs (`Secondary`).
pub(super) fn route(zones: &[PlacedZone], width: f64) -> Vec<CorridorSegment> {
    let edges = minimum_spanning_tree(zones);

    let mut degree = vec![0usize; zones.len()];
    for &(a, b) in &edges {
        degree[a] += 1;
        degree[b] += 1;
    }

    edges
        .iter()
        .enumerate()
        .map(|(k, &(a, b))| {
            let kind = if degree[a] >= 2 && degree[b] >= 2 {
                CorridorKind::Main
            } else {
                CorridorKind::Secondary
            };
            CorridorSegment::strip(
                format!("corridor_{}", k),
                kind,
                zones[a].center(),
                zones[b].center(),
                width,
                (zones[a].id.clone(), zones[b].id.clone()),
            )
        })
        .collect()
}

/// Tree edges as (parent, child) index pairs in insertion order
fn minimum_spanning_tree(zones: &[PlacedZone]) -> Vec<(usize, usize)> {
    let n = zones.len();
    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    if n == 0 {
        return edges;
    }
    best[0] = 0.0;

    for _ in 0..n {
        // Lowest index wins ties, keeping the tree deterministic
        let Some(u) = (0..n)
            .filter(|&i| !in_tree[i])
            .min_by(|&a, &b| best[a].total_cmp(&best[b]).then(a.cmp(&b)))
        else {
            break;
        };
        in_tree[u] = true;
        if let Some(p) = parent[u] {
            edges.push((p, u));
        }

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let d = zones[u].distance_to(&zones[v]);
            if d < best[v] {
                best[v] = d;
                parent[v] = Some(u);
            }
        }
    }

    edges
}
