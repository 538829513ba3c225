//! Defines the array representation of a fitted decision tree.
use serde::{Serialize, Deserialize};

use crate::error::Error;


/// Sentinel child index meaning "no child."
pub const NO_CHILD: i64 = -1;


/// A fitted binary decision tree, laid out as parallel per-node arrays
/// the way tree-learning libraries expose their estimators:
/// node `0` is the root and the child arrays store indices into `0..N`.
/// A node `i` is a leaf iff `children_left[i] == children_right[i]`.
///
/// The tree is built entirely by an external learner;
/// this crate only reads it.
///
/// # Example
///
/// ```
/// use minicharts::FittedTree;
///
/// // root splits on feature 0 at 1.5; nodes 1 and 2 are leaves.
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
/// assert_eq!(tree.node_count(), 3);
/// assert!(tree.is_leaf(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedTree {
    pub(crate) children_left: Vec<i64>,
    pub(crate) children_right: Vec<i64>,
    pub(crate) feature: Vec<i64>,
    pub(crate) threshold: Vec<f64>,
    pub(crate) value: Vec<Vec<Vec<f64>>>,
}


impl FittedTree {
    /// Construct a `FittedTree` from the per-node arrays.
    ///
    /// All five arrays must have the same positive length `N`,
    /// and every child index must be `NO_CHILD` or in `0..N`.
    /// Violations yield [`Error::InvalidTreeStructure`].
    pub fn from_arrays(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<f64>,
        value: Vec<Vec<Vec<f64>>>,
    ) -> Result<Self, Error>
    {
        let n_nodes = children_left.len();
        if n_nodes == 0 {
            return Err(Error::InvalidTreeStructure {
                reason: String::from("the tree has no node"),
            });
        }

        let lengths = [
            children_right.len(), feature.len(),
            threshold.len(), value.len(),
        ];
        if lengths.into_iter().any(|len| len != n_nodes) {
            return Err(Error::InvalidTreeStructure {
                reason: format!(
                    "node arrays have mismatched lengths \
                     (children_left has {n_nodes} entries)"
                ),
            });
        }

        let children = children_left.iter().chain(children_right.iter());
        for &child in children {
            if child != NO_CHILD && !(0..n_nodes as i64).contains(&child) {
                return Err(Error::InvalidTreeStructure {
                    reason: format!(
                        "child index {child} is out of range \
                         for a tree with {n_nodes} nodes"
                    ),
                });
            }
        }

        Ok(Self { children_left, children_right, feature, threshold, value })
    }


    /// Total number of nodes in the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }


    /// `true` if node `id` is a leaf.
    /// Both child entries of a leaf point to the same index by convention.
    #[inline]
    pub fn is_leaf(&self, id: usize) -> bool {
        self.children_left[id] == self.children_right[id]
    }


    /// The value distribution recorded at node `id`,
    /// one inner sequence per output group.
    #[inline]
    pub fn value(&self, id: usize) -> &[Vec<f64>] {
        &self.value[id]
    }


    /// Deserialize a tree from its JSON representation.
    /// The arrays are validated as in [`FittedTree::from_arrays`].
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let tree: Self = serde_json::from_str(json)?;
        Self::from_arrays(
            tree.children_left,
            tree.children_right,
            tree.feature,
            tree.threshold,
            tree.value,
        )
    }


    /// Serialize the tree to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}
