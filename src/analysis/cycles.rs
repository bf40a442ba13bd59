//! Bounded enumeration of simple directed cycles.
//!
//! Finds every simple cycle whose length (node count) falls within the
//! configured window, pruning paths as soon as they reach the maximum
//! length instead of enumerating unbounded cycles and filtering.
//!
//! # Traversal order
//!
//! Ring numbering downstream depends on the order cycles are emitted, so
//! the traversal order is fixed:
//!
//! 1. Strongly connected components are processed in ascending order of
//!    their smallest node index (first-appearance order of the account).
//! 2. Within a component, each cycle is discovered exactly once, rooted at
//!    its smallest-index member: roots ascend, and the depth-first search
//!    visits successors in ascending node-index order, restricted to
//!    indices at or above the root.
//!
//! Components are independent, so they are searched in parallel and the
//! results merged back in component order; output does not depend on
//! thread scheduling.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::config::AnalysisConfig;

use super::graph::TransactionGraph;
use super::types::Cycle;

/// Result of one cycle search.
#[derive(Debug, Clone, Default)]
pub struct CycleScan {
    /// Cycles in the fixed traversal order described in the module docs.
    pub cycles: Vec<Cycle>,
    /// True when the search stopped at `max_cycles`; the emitted cycles are
    /// then exactly the leading prefix of the uncapped enumeration.
    pub truncated: bool,
}

#[derive(Debug, Default)]
struct ComponentScan {
    cycles: Vec<Cycle>,
    truncated: bool,
}

/// Enumerate all simple cycles of length within the configured window.
///
/// Self-loops and 2-cycles fall below the default minimum of 3 and are
/// never reported. An empty graph yields an empty scan.
pub fn enumerate_bounded_cycles(graph: &TransactionGraph, config: &AnalysisConfig) -> CycleScan {
    // A cycle of length k needs k distinct nodes in one component, so
    // components below the minimum length cannot contribute.
    let mut components: Vec<Vec<usize>> = graph
        .strongly_connected_components()
        .into_iter()
        .filter(|component| component.len() >= config.min_cycle_length)
        .collect();

    for component in &mut components {
        component.sort_unstable();
    }
    components.sort_by_key(|component| component[0]);

    let per_component_cap = config.max_cycles.unwrap_or(usize::MAX);

    let scans: Vec<ComponentScan> = components
        .par_iter()
        .map(|component| scan_component(graph, component, config, per_component_cap))
        .collect();

    let mut scan = CycleScan::default();
    for component_scan in scans {
        scan.truncated |= component_scan.truncated;
        scan.cycles.extend(component_scan.cycles);
    }

    // Per-component caps bound memory during the parallel phase; the global
    // cap is enforced on the merged, deterministically ordered list.
    if let Some(cap) = config.max_cycles {
        if scan.cycles.len() > cap {
            scan.cycles.truncate(cap);
            scan.truncated = true;
        }
    }

    if scan.truncated {
        log::warn!(
            "Cycle search truncated at {} cycles (max_cycles cap)",
            scan.cycles.len()
        );
    } else {
        log::debug!("Cycle search found {} cycles", scan.cycles.len());
    }

    scan
}

/// Enumerate cycles inside one strongly connected component.
///
/// `members` must be sorted ascending. Returns at most `cap` cycles.
fn scan_component(
    graph: &TransactionGraph,
    members: &[usize],
    config: &AnalysisConfig,
    cap: usize,
) -> ComponentScan {
    let member_set: HashSet<usize> = members.iter().copied().collect();
    let mut scan = ComponentScan::default();

    for &root in members {
        if search_from_root(graph, &member_set, root, config, cap, &mut scan.cycles) {
            scan.truncated = true;
            break;
        }
    }

    scan
}

/// Depth-first search for cycles rooted at `root`.
///
/// Only nodes with index >= root are visited, so each cycle is emitted
/// exactly once, rooted at its smallest-index member. Returns true when
/// the cap was hit.
fn search_from_root(
    graph: &TransactionGraph,
    component: &HashSet<usize>,
    root: usize,
    config: &AnalysisConfig,
    cap: usize,
    out: &mut Vec<Cycle>,
) -> bool {
    let mut path: Vec<usize> = vec![root];
    let mut on_path: HashSet<usize> = HashSet::new();
    on_path.insert(root);

    // Explicit DFS stack: (node, successors, next child position).
    let mut stack: Vec<(usize, Vec<usize>, usize)> = Vec::new();
    stack.push((root, successors(graph, root, component, root), 0));

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;

        if frame.2 >= frame.1.len() {
            stack.pop();
            path.pop();
            on_path.remove(&node);
            continue;
        }

        let next = frame.1[frame.2];
        frame.2 += 1;

        if next == root {
            if path.len() >= config.min_cycle_length {
                if out.len() >= cap {
                    return true;
                }
                out.push(path.iter().map(|&idx| graph.account(idx).to_string()).collect());
            }
            continue;
        }

        if on_path.contains(&next) || path.len() >= config.max_cycle_length {
            continue;
        }

        path.push(next);
        on_path.insert(next);
        stack.push((next, successors(graph, next, component, root), 0));
    }

    false
}

/// Successors of `node` within the component, restricted to indices at or
/// above the current root, in ascending order.
fn successors(
    graph: &TransactionGraph,
    node: usize,
    component: &HashSet<usize>,
    root: usize,
) -> Vec<usize> {
    graph
        .out_neighbors(node)
        .filter(|next| *next >= root && component.contains(next))
        .collect()
}
