//! Defines the text renderer for a fitted decision tree.
use fixedbitset::FixedBitSet;

use crate::error::Error;
use super::fitted::FittedTree;


/// Default indentation, two spaces per tree level.
pub const DEFAULT_INDENT: &str = "  ";


/// Renders a [`FittedTree`] as an indented, one-line-per-node report.
///
/// The walk is depth first with an explicit stack seeded at the root.
/// For a test node the left child is pushed before the right one,
/// so the right subtree is popped (and printed) first;
/// the line order is the stack-pop order, not left-to-right pre-order.
///
/// # Example
///
/// ```
/// use minicharts::{FittedTree, TextReport};
///
/// let tree = FittedTree::from_arrays(
///     vec![1, -1, -1],
///     vec![2, -1, -1],
///     vec![0, -2, -2],
///     vec![1.5, -2.0, -2.0],
///     vec![
///         vec![vec![4.0, 4.0]],
///         vec![vec![4.0, 0.0]],
///         vec![vec![0.0, 4.0]],
///     ],
/// ).unwrap();
///
/// let report = TextReport::new(&tree)
///     .as_ratio(false)
///     .render()
///     .unwrap();
/// println!("{report}");
/// ```
pub struct TextReport<'a> {
    tree: &'a FittedTree,
    indent: String,
    as_ratio: bool,
}


impl<'a> TextReport<'a> {
    /// Construct a new `TextReport` for the given tree.
    /// By default the indent is two spaces
    /// and leaf values are shown as ratios.
    #[inline]
    pub fn new(tree: &'a FittedTree) -> Self {
        Self {
            tree,
            indent: String::from(DEFAULT_INDENT),
            as_ratio: true,
        }
    }


    /// Set the indentation printed per tree level.
    /// Default value is two spaces.
    #[inline]
    pub fn indent<T: ToString>(mut self, indent: T) -> Self {
        self.indent = indent.to_string();
        self
    }


    /// Show the leaf composition as ratios (`true`, default)
    /// or as the raw counts (`false`).
    /// Each value group of a leaf is divided by its own sum
    /// and rounded to 3 decimal places.
    #[inline]
    pub fn as_ratio(mut self, as_ratio: bool) -> Self {
        self.as_ratio = as_ratio;
        self
    }


    /// Render the report.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLeafValue`] if ratio mode is requested and
    ///   a value group of some leaf sums to zero.
    /// - [`Error::InvalidTreeStructure`] if the walk reaches a node twice
    ///   or fails to reach some node.
    pub fn render(&self) -> Result<String, Error> {
        let tree = self.tree;
        let n_nodes = tree.node_count();

        let mut is_leaf = FixedBitSet::with_capacity(n_nodes);
        let mut visited = FixedBitSet::with_capacity(n_nodes);

        let mut lines = Vec::with_capacity(n_nodes);

        // Seed is the root node id and its parent depth.
        let mut stack = vec![(0_usize, -1_i64)];
        while let Some((node, parent_depth)) = stack.pop() {
            if visited.contains(node) {
                return Err(Error::InvalidTreeStructure {
                    reason: format!("node {node} is reachable twice"),
                });
            }
            visited.insert(node);

            let depth = (parent_depth + 1) as usize;

            let left = tree.children_left[node];
            let right = tree.children_right[node];

            // Child indices were range-checked at construction,
            // so the casts below cannot go out of bounds.
            if left != right {
                stack.push((left as usize, depth as i64));
                stack.push((right as usize, depth as i64));
            } else {
                is_leaf.insert(node);
            }

            lines.push(self.line(node, depth, is_leaf.contains(node))?);
        }

        if lines.len() != n_nodes {
            return Err(Error::InvalidTreeStructure {
                reason: format!(
                    "only {visited} of {n_nodes} nodes are reachable \
                     from the root",
                    visited = lines.len(),
                ),
            });
        }

        Ok(lines.join("\n"))
    }


    /// Format the report line of a single node.
    fn line(&self, node: usize, depth: usize, leaf: bool)
        -> Result<String, Error>
    {
        let tree = self.tree;
        let pad = self.indent.repeat(depth);

        let line = if leaf {
            let value = if self.as_ratio {
                format!("{:?}", ratios(node, tree.value(node))?)
            } else {
                format!("{:?}", tree.value(node))
            };
            format!("{pad}node={node} leaf node: {value}")
        } else {
            let rule = format!(
                "{left} if {feature} <= {threshold} else to node {right}",
                left = tree.children_left[node],
                feature = tree.feature[node],
                threshold = tree.threshold[node],
                right = tree.children_right[node],
            );
            format!("{pad}node={node} test node: go to node {rule}")
        };
        Ok(line)
    }
}


/// Convert each value group of a leaf into proportions of its own sum,
/// rounded to 3 decimal places.
fn ratios(node: usize, groups: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, Error> {
    groups.iter()
        .map(|group| {
            let total = group.iter().sum::<f64>();
            if total == 0.0 {
                return Err(Error::InvalidLeafValue { node });
            }
            let ratio = group.iter()
                .map(|v| (v / total * 1_000.0).round() / 1_000.0)
                .collect::<Vec<_>>();
            Ok(ratio)
        })
        .collect()
}
