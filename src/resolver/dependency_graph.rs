//! Require graph recorded during resolution.
//!
//! The resolver emits a flat list, which is all a bundler needs. The graph
//! keeps the edges it walked so tooling can show *why* a file was included
//! and report circular requires, which resolution itself tolerates silently.

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Directed graph of resolved files; an edge `a → b` means `a` requires `b`.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<PathBuf, ()>,
    node_map: HashMap<PathBuf, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file node if it isn't present yet.
    pub fn add_file(&mut self, file: &Path) -> NodeIndex {
        if let Some(&index) = self.node_map.get(file) {
            return index;
        }
        let index = self.graph.add_node(file.to_path_buf());
        self.node_map.insert(file.to_path_buf(), index);
        index
    }

    /// Record that `from` requires `to`. Duplicate edges are ignored.
    pub fn add_dependency(&mut self, from: &Path, to: &Path) {
        let from_idx = self.add_file(from);
        let to_idx = self.add_file(to);

        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Returns `true` if `file` is a node of the graph.
    #[must_use]
    pub fn contains(&self, file: &Path) -> bool {
        self.node_map.contains_key(file)
    }

    /// Files required directly by `file`, in the order they were recorded.
    #[must_use]
    pub fn direct_deps(&self, file: &Path) -> Vec<PathBuf> {
        let Some(&index) = self.node_map.get(file) else {
            return Vec::new();
        };

        // petgraph yields outgoing neighbors newest first
        let mut deps: Vec<PathBuf> = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .map(|idx| self.graph[idx].clone())
            .collect();
        deps.reverse();
        deps
    }

    /// Files that directly require `file`.
    #[must_use]
    pub fn dependents(&self, file: &Path) -> Vec<PathBuf> {
        let Some(&index) = self.node_map.get(file) else {
            return Vec::new();
        };

        let mut dependents: Vec<PathBuf> = self
            .graph
            .neighbors_directed(index, Direction::Incoming)
            .map(|idx| self.graph[idx].clone())
            .collect();
        dependents.reverse();
        dependents
    }

    /// Groups of files that require each other, directly or transitively.
    ///
    /// A file that requires itself forms a group of one. Files inside each
    /// group are sorted so the output is stable.
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Vec<PathBuf>> {
        let mut cycles: Vec<Vec<PathBuf>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component.first().is_some_and(|&idx| self.graph.contains_edge(idx, idx))
            })
            .map(|component| {
                let mut files: Vec<PathBuf> =
                    component.into_iter().map(|idx| self.graph[idx].clone()).collect();
                files.sort();
                files
            })
            .collect();
        cycles.sort();
        cycles
    }

    /// Number of files in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of require edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if no file was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Render the requires below `root` as an ASCII tree.
    ///
    /// `label` formats each file, e.g. to print paths relative to a web
    /// root. A file already shown elsewhere in the tree is marked
    /// `(already listed)`; a require that closes a cycle is marked
    /// `(circular require)`.
    pub fn to_tree_string(&self, root: &Path, label: impl Fn(&Path) -> String) -> String {
        let mut result = format!("{}\n", label(root));
        let mut listed = HashSet::from([root.to_path_buf()]);
        let mut stack = vec![root.to_path_buf()];
        self.build_tree_string(root, &label, "", &mut listed, &mut stack, &mut result);
        result
    }

    fn build_tree_string(
        &self,
        node: &Path,
        label: &impl Fn(&Path) -> String,
        prefix: &str,
        listed: &mut HashSet<PathBuf>,
        stack: &mut Vec<PathBuf>,
        result: &mut String,
    ) {
        let deps = self.direct_deps(node);

        for (i, dep) in deps.iter().enumerate() {
            let is_last = i == deps.len() - 1;
            let connector = if is_last {
                "└── "
            } else {
                "├── "
            };
            let child_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };

            let text = label(dep.as_path());
            if stack.contains(dep) {
                result.push_str(&format!("{prefix}{connector}{text} (circular require)\n"));
                continue;
            }
            if !listed.insert(dep.clone()) {
                result.push_str(&format!("{prefix}{connector}{text} (already listed)\n"));
                continue;
            }

            result.push_str(&format!("{prefix}{connector}{text}\n"));
            stack.push(dep.clone());
            self.build_tree_string(dep, label, &child_prefix, listed, stack, result);
            stack.pop();
        }
    }
}
