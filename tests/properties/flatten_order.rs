//! Property tests for load order and compilation units over random graphs.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use tempfile::TempDir;

use jspackager::domain::services::DependencyTree;
use jspackager::infrastructure::LocalFs;

/// `requires[i][j]` is honoured only for `j > i`, which keeps the graph acyclic
#[derive(Debug, Clone)]
struct Graph {
    requires: Vec<Vec<bool>>,
    roots: Vec<bool>,
}

impl Graph {
    fn edges(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.requires[i]
            .iter()
            .enumerate()
            .filter(move |&(j, &on)| on && j > i)
            .map(|(j, _)| j)
    }

    fn reachable(&self) -> HashSet<usize> {
        let mut seen = HashSet::from([0]);
        let mut stack = vec![0];
        while let Some(i) = stack.pop() {
            for j in self.edges(i) {
                if seen.insert(j) {
                    stack.push(j);
                }
            }
        }
        seen
    }

    /// Write one file per node and return the absolute path of each
    fn write(&self, dir: &TempDir) -> Vec<String> {
        let paths: Vec<String> = (0..self.roots.len())
            .map(|i| {
                dir.path()
                    .join(format!("file_{}.js", i))
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();

        for (i, path) in paths.iter().enumerate() {
            let mut contents = String::new();
            if self.roots[i] {
                contents.push_str("// @root\n");
            }
            for j in self.edges(i) {
                contents.push_str(&format!("// @require file_{}.js\n", j));
            }
            std::fs::write(path, contents).unwrap();
        }
        paths
    }
}

fn graph() -> impl Strategy<Value = Graph> {
    (1usize..7).prop_flat_map(|n| {
        (
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), n), n),
            proptest::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(requires, roots)| Graph { requires, roots })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every reachable file is listed once, after everything it requires,
    /// and the entry file comes last.
    #[test]
    fn property_flatten_is_a_topological_order(graph in graph()) {
        let dir = tempfile::tempdir().unwrap();
        let paths = graph.write(&dir);
        let fs = LocalFs::new();

        let order = DependencyTree::new(&fs, &paths[0])
            .flatten_dependency_tree(false)
            .unwrap();

        let position: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, p)| (p.as_str(), i)).collect();
        prop_assert_eq!(position.len(), order.len());
        prop_assert_eq!(order.last(), Some(&paths[0]));

        let reachable = graph.reachable();
        prop_assert_eq!(order.len(), reachable.len());
        for &i in &reachable {
            for j in graph.edges(i) {
                prop_assert!(position[paths[j].as_str()] < position[paths[i].as_str()]);
            }
        }
    }

    /// PROPERTY: compilation units are owned by the entry file or a package
    /// root, each owner once, with the entry file's unit last.
    #[test]
    fn property_sets_are_owned_by_roots(graph in graph()) {
        let dir = tempfile::tempdir().unwrap();
        let paths = graph.write(&dir);
        let fs = LocalFs::new();

        let sets = DependencyTree::new(&fs, &paths[0])
            .get_dependency_sets()
            .unwrap();

        prop_assert_eq!(sets.last().and_then(|s| s.owner()), Some(paths[0].as_str()));

        let mut owners = HashSet::new();
        for set in &sets {
            let owner = set.owner().unwrap();
            prop_assert!(owners.insert(owner.to_string()), "duplicate owner {}", owner);
            let index = paths.iter().position(|p| p == owner).unwrap();
            prop_assert!(index == 0 || graph.roots[index]);
            for package in &set.packages {
                prop_assert!(owners.contains(package), "package {} compiled after its user", package);
            }
        }
    }
}
