//! Transaction graph construction.
//!
//! Builds a directed simple graph from ledger records: nodes are account
//! identifiers in first-appearance order, edges are deduplicated
//! (sender, receiver) pairs. Repeated transfers between the same pair do
//! not create parallel edges; degree queries therefore count distinct
//! counterparties. Neighbor sets are ordered by node index so every
//! traversal over the graph is deterministic.

use std::collections::{BTreeSet, HashMap};

use super::types::TransactionRecord;

/// Directed transaction graph keyed by account index.
#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    /// Account identifiers in first-appearance order; index = node id.
    accounts: Vec<String>,
    indices: HashMap<String, usize>,
    out_edges: Vec<BTreeSet<usize>>,
    in_edges: Vec<BTreeSet<usize>>,
}

impl TransactionGraph {
    /// Build the graph from a sequence of ledger records.
    ///
    /// Both endpoints of every record become nodes; adding an existing edge
    /// is a no-op. Amounts and timestamps are not inspected here.
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut graph = TransactionGraph::default();

        for record in records {
            let from = graph.ensure_node(&record.sender_id);
            let to = graph.ensure_node(&record.receiver_id);
            graph.out_edges[from].insert(to);
            graph.in_edges[to].insert(from);
        }

        log::debug!(
            "Built transaction graph: {} accounts, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }

    fn ensure_node(&mut self, account: &str) -> usize {
        if let Some(&idx) = self.indices.get(account) {
            return idx;
        }
        let idx = self.accounts.len();
        self.accounts.push(account.to_string());
        self.indices.insert(account.to_string(), idx);
        self.out_edges.push(BTreeSet::new());
        self.in_edges.push(BTreeSet::new());
        idx
    }

    pub fn node_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges.iter().map(|targets| targets.len()).sum()
    }

    /// Account identifier for a node index.
    pub fn account(&self, idx: usize) -> &str {
        &self.accounts[idx]
    }

    /// All account identifiers in first-appearance order.
    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    pub fn node_index(&self, account: &str) -> Option<usize> {
        self.indices.get(account).copied()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.out_edges
            .get(from)
            .map(|targets| targets.contains(&to))
            .unwrap_or(false)
    }

    /// Successors of `idx` in ascending node-index order.
    pub fn out_neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges[idx].iter().copied()
    }

    /// Number of distinct counterparties sending to this account.
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_edges[idx].len()
    }

    /// Number of distinct counterparties this account sends to.
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_edges[idx].len()
    }

    /// Strongly connected components via iterative Tarjan.
    ///
    /// Component member lists are unordered; callers needing a fixed order
    /// sort them by node index.
    pub fn strongly_connected_components(&self) -> Vec<Vec<usize>> {
        let n = self.node_count();
        const UNVISITED: usize = usize::MAX;

        let mut index = vec![UNVISITED; n];
        let mut lowlink = vec![0usize; n];
        let mut on_stack = vec![false; n];
        let mut stack: Vec<usize> = Vec::new();
        let mut next_index = 0usize;
        let mut components: Vec<Vec<usize>> = Vec::new();

        for start in 0..n {
            if index[start] != UNVISITED {
                continue;
            }

            // Explicit call stack: (node, successors, next child position).
            let mut call: Vec<(usize, Vec<usize>, usize)> = Vec::new();

            index[start] = next_index;
            lowlink[start] = next_index;
            next_index += 1;
            stack.push(start);
            on_stack[start] = true;
            call.push((start, self.out_edges[start].iter().copied().collect(), 0));

            while let Some(frame) = call.last_mut() {
                let node = frame.0;

                if frame.2 < frame.1.len() {
                    let next = frame.1[frame.2];
                    frame.2 += 1;

                    if index[next] == UNVISITED {
                        index[next] = next_index;
                        lowlink[next] = next_index;
                        next_index += 1;
                        stack.push(next);
                        on_stack[next] = true;
                        call.push((next, self.out_edges[next].iter().copied().collect(), 0));
                    } else if on_stack[next] {
                        lowlink[node] = lowlink[node].min(index[next]);
                    }
                    continue;
                }

                call.pop();
                if let Some(parent) = call.last() {
                    let parent_node = parent.0;
                    lowlink[parent_node] = lowlink[parent_node].min(lowlink[node]);
                }

                if lowlink[node] == index[node] {
                    let mut component = Vec::new();
                    while let Some(member) = stack.pop() {
                        on_stack[member] = false;
                        component.push(member);
                        if member == node {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }

        components
    }
}
