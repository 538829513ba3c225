use minicharts::prelude::*;


// Toy tree used in most tests.
//
//              node 0
//         [x0 <= 1.5 ?]
//          /         \
//        Yes          No
//        /             \
//    node 1          node 2
//    [4, 0]          [0, 4]
//
fn three_node_tree() -> FittedTree {
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


// A full tree of depth 2.
//
//                    node 0
//                   /      \
//             node 1        node 2
//            /      \      /      \
//        node 3  node 4  node 5  node 6
//
fn seven_node_tree() -> FittedTree {
    FittedTree::from_arrays(
        vec![1, 3, 5, NO_CHILD, NO_CHILD, NO_CHILD, NO_CHILD],
        vec![2, 4, 6, NO_CHILD, NO_CHILD, NO_CHILD, NO_CHILD],
        vec![0, 1, 1, -2, -2, -2, -2],
        vec![1.5, 0.5, 2.5, -2.0, -2.0, -2.0, -2.0],
        vec![
            vec![vec![4.0, 4.0]],
            vec![vec![3.0, 1.0]],
            vec![vec![1.0, 3.0]],
            vec![vec![3.0, 0.0]],
            vec![vec![0.0, 1.0]],
            vec![vec![1.0, 0.0]],
            vec![vec![0.0, 3.0]],
        ],
    ).unwrap()
}


#[test]
fn single_leaf_report() {
    let tree = FittedTree::from_arrays(
        vec![NO_CHILD],
        vec![NO_CHILD],
        vec![-2],
        vec![-2.0],
        vec![vec![vec![2.0, 2.0, 4.0]]],
    ).unwrap();

    let report = TextReport::new(&tree)
        .as_ratio(false)
        .render()
        .unwrap();
    assert_eq!(report, "node=0 leaf node: [[2.0, 2.0, 4.0]]");

    let report = TextReport::new(&tree).render().unwrap();
    assert_eq!(report, "node=0 leaf node: [[0.25, 0.25, 0.5]]");
}


#[test]
fn three_node_report_in_pop_order() {
    let tree = three_node_tree();
    let report = TextReport::new(&tree)
        .as_ratio(false)
        .render()
        .unwrap();
    println!("{report}");

    let expected = "\
node=0 test node: go to node 1 if 0 <= 1.5 else to node 2\n  \
node=2 leaf node: [[0.0, 4.0]]\n  \
node=1 leaf node: [[4.0, 0.0]]";
    assert_eq!(report, expected);
}


#[test]
fn one_line_per_node() {
    let tree = seven_node_tree();
    let report = TextReport::new(&tree).render().unwrap();
    println!("{report}");

    let lines = report.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), tree.node_count());
    for id in 0..tree.node_count() {
        let tag = format!("node={id} ");
        assert_eq!(
            lines.iter()
                .filter(|line| line.trim_start().starts_with(&tag))
                .count(),
            1,
        );
    }
}


#[test]
fn right_subtree_pops_ahead_of_left_siblings() {
    let tree = seven_node_tree();
    let report = TextReport::new(&tree).render().unwrap();

    // The stack pops the right subtree before
    // the left sibling at each level.
    let order = report.lines()
        .map(|line| {
            let tagged = line.trim_start()
                .strip_prefix("node=")
                .unwrap();
            let end = tagged.find(' ').unwrap();
            tagged[..end].parse::<usize>().unwrap()
        })
        .collect::<Vec<_>>();
    assert_eq!(order, vec![0, 2, 6, 5, 1, 4, 3]);
}


#[test]
fn custom_indent_tracks_depth() {
    let tree = seven_node_tree();
    let report = TextReport::new(&tree)
        .indent("....")
        .render()
        .unwrap();

    for line in report.lines() {
        if line.contains("node=3 ") || line.contains("node=6 ") {
            assert!(line.starts_with("........node="));
        }
    }
}


#[test]
fn zero_sum_leaf_fails_in_ratio_mode() {
    let tree = FittedTree::from_arrays(
        vec![NO_CHILD],
        vec![NO_CHILD],
        vec![-2],
        vec![-2.0],
        vec![vec![vec![0.0, 0.0, 0.0]]],
    ).unwrap();

    let result = TextReport::new(&tree).render();
    assert!(matches!(
        result,
        Err(Error::InvalidLeafValue { node: 0 }),
    ));

    // Count mode does not touch the sums.
    let report = TextReport::new(&tree)
        .as_ratio(false)
        .render()
        .unwrap();
    assert_eq!(report, "node=0 leaf node: [[0.0, 0.0, 0.0]]");
}


#[test]
fn shared_child_is_rejected() {
    // Node 2 points back into the left subtree.
    let tree = FittedTree::from_arrays(
        vec![1, NO_CHILD, 1],
        vec![2, NO_CHILD, 3],
        vec![0, -2, 1, -2],
        vec![1.5, -2.0, 0.5, -2.0],
        vec![
            vec![vec![4.0, 4.0]],
            vec![vec![4.0, 0.0]],
            vec![vec![0.0, 4.0]],
            vec![vec![0.0, 1.0]],
        ],
    ).unwrap();

    let result = TextReport::new(&tree).render();
    assert!(matches!(result, Err(Error::InvalidTreeStructure { .. })));
}


#[test]
fn report_is_idempotent() {
    let tree = seven_node_tree();
    let formatter = TextReport::new(&tree);
    let first = formatter.render().unwrap();
    let second = formatter.render().unwrap();
    assert_eq!(first, second);
}
