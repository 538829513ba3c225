//! Defines the Graphviz (DOT) export of a fitted decision tree.
use fixedbitset::FixedBitSet;

use crate::error::Error;
use super::fitted::FittedTree;


/// Exports a [`FittedTree`] as Graphviz DOT source.
///
/// Feature and class names are optional; without them the split rules
/// and leaves show the raw indices and value distributions.
///
/// # Example
///
/// ```no_run
/// use minicharts::{FittedTree, DotExport};
///
/// # fn tree() -> FittedTree { unimplemented!() }
/// let tree: FittedTree = tree();
/// let dot = DotExport::new(&tree)
///     .feature_names(&["income", "age"])
///     .class_names(&["no", "yes"])
///     .export()
///     .unwrap();
/// println!("{dot}");
/// ```
pub struct DotExport<'a> {
    tree: &'a FittedTree,
    feature_names: Option<Vec<String>>,
    class_names: Option<Vec<String>>,
    max_depth: Option<usize>,
    rotate: bool,
}


impl<'a> DotExport<'a> {
    /// Construct a new `DotExport` for the given tree.
    #[inline]
    pub fn new(tree: &'a FittedTree) -> Self {
        Self {
            tree,
            feature_names: None,
            class_names: None,
            max_depth: None,
            rotate: false,
        }
    }


    /// Set the feature names shown in the split rules.
    #[inline]
    pub fn feature_names<T: ToString>(mut self, names: &[T]) -> Self {
        self.feature_names = Some(
            names.iter().map(|name| name.to_string()).collect()
        );
        self
    }


    /// Set the class names shown at the leaves.
    /// Only relevant for classification trees.
    #[inline]
    pub fn class_names<T: ToString>(mut self, names: &[T]) -> Self {
        self.class_names = Some(
            names.iter().map(|name| name.to_string()).collect()
        );
        self
    }


    /// Limit the depth of the exported graph.
    /// Subtrees below the limit collapse into a `(...)` box.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Rotate the layout of the graph (left to right).
    #[inline]
    pub fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }


    /// Produce the DOT source.
    pub fn export(&self) -> Result<String, Error> {
        let n_nodes = self.tree.node_count();
        let mut visited = FixedBitSet::with_capacity(n_nodes);
        let mut info = Vec::new();

        if self.rotate {
            info.push(String::from("\trankdir = LR;\n"));
        }
        self.to_dot_info(0, 0, &mut visited, &mut info)?;

        let body = info.concat();
        Ok(format!("graph Tree {{\n{body}}}\n"))
    }


    /// Append the statements of the subtree rooted at `node`.
    fn to_dot_info(
        &self,
        node: usize,
        depth: usize,
        visited: &mut FixedBitSet,
        info: &mut Vec<String>,
    ) -> Result<(), Error>
    {
        if visited.contains(node) {
            return Err(Error::InvalidTreeStructure {
                reason: format!("node {node} is reachable twice"),
            });
        }
        visited.insert(node);

        let tree = self.tree;
        if tree.is_leaf(node) {
            let label = self.leaf_label(node);
            info.push(format!(
                "\tnode_{node} [ label = \"{label}\", shape = box ];\n"
            ));
            return Ok(());
        }

        if self.max_depth.is_some_and(|limit| depth >= limit) {
            // The subtree below the depth limit collapses into one box.
            info.push(format!(
                "\tnode_{node} [ label = \"(...)\", shape = box ];\n"
            ));
            return Ok(());
        }

        let feature = tree.feature[node];
        let feature = self.feature_names.as_ref()
            .and_then(|names| names.get(feature as usize).cloned())
            .unwrap_or_else(|| feature.to_string());
        info.push(format!(
            "\tnode_{node} [ label = \"{feature} <= {threshold:.2} ?\" ];\n",
            threshold = tree.threshold[node],
        ));

        let left = tree.children_left[node] as usize;
        let right = tree.children_right[node] as usize;
        self.to_dot_info(left, depth + 1, visited, info)?;
        self.to_dot_info(right, depth + 1, visited, info)?;

        info.push(format!(
            "\tnode_{node} -- node_{left} [ label = \"Yes\" ];\n"
        ));
        info.push(format!(
            "\tnode_{node} -- node_{right} [ label = \"No\" ];\n"
        ));

        Ok(())
    }


    /// The label of a leaf: the majority class name when class names are
    /// given, the raw value distribution otherwise.
    fn leaf_label(&self, node: usize) -> String {
        let value = self.tree.value(node);

        let majority = value.first()
            .and_then(|group| {
                group.iter()
                    .enumerate()
                    .max_by(|a, b| a.1.total_cmp(b.1))
                    .map(|(class, _)| class)
            });

        match (&self.class_names, majority) {
            (Some(names), Some(class)) if class < names.len() => {
                names[class].clone()
            },
            _ => format!("{value:?}"),
        }
    }
}
