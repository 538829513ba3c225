use minicharts::prelude::*;


fn sample_tree() -> FittedTree {
    FittedTree::from_arrays(
        vec![1, NO_CHILD, NO_CHILD],
        vec![2, NO_CHILD, NO_CHILD],
        vec![0, -2, -2],
        vec![1.5, -2.0, -2.0],
        vec![
            vec![vec![4.0, 4.0]],
            vec![vec![4.0, 0.0]],
            vec![vec![0.0, 4.0]],
        ],
    ).unwrap()
}


#[test]
fn leaf_convention() {
    let tree = sample_tree();
    assert_eq!(tree.node_count(), 3);
    assert!(!tree.is_leaf(0));
    assert!(tree.is_leaf(1));
    assert!(tree.is_leaf(2));
    assert_eq!(tree.value(2), &[vec![0.0, 4.0]]);
}


#[test]
fn empty_tree_is_rejected() {
    let result = FittedTree::from_arrays(
        vec![], vec![], vec![], vec![], vec![],
    );
    assert!(matches!(result, Err(Error::InvalidTreeStructure { .. })));
}


#[test]
fn mismatched_arrays_are_rejected() {
    let result = FittedTree::from_arrays(
        vec![NO_CHILD, NO_CHILD],
        vec![NO_CHILD],
        vec![-2],
        vec![-2.0],
        vec![vec![vec![1.0]]],
    );
    assert!(matches!(result, Err(Error::InvalidTreeStructure { .. })));
}


#[test]
fn dangling_child_is_rejected() {
    let result = FittedTree::from_arrays(
        vec![1, NO_CHILD, NO_CHILD],
        vec![7, NO_CHILD, NO_CHILD],
        vec![0, -2, -2],
        vec![1.5, -2.0, -2.0],
        vec![
            vec![vec![1.0]],
            vec![vec![1.0]],
            vec![vec![1.0]],
        ],
    );
    assert!(matches!(result, Err(Error::InvalidTreeStructure { .. })));
}


#[test]
fn json_round_trip() {
    let tree = sample_tree();
    let json = tree.to_json().unwrap();
    let restored = FittedTree::from_json(&json).unwrap();
    assert_eq!(tree, restored);
}


#[test]
fn json_with_dangling_child_is_rejected() {
    let json = r#"{
        "children_left": [9],
        "children_right": [-1],
        "feature": [-2],
        "threshold": [-2.0],
        "value": [[[1.0]]]
    }"#;
    let result = FittedTree::from_json(json);
    assert!(matches!(result, Err(Error::InvalidTreeStructure { .. })));
}
