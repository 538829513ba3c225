use minicharts::prelude::*;


fn vocabulary() -> Vec<String> {
    ["analytics", "data", "mining"]
        .into_iter()
        .map(String::from)
        .collect()
}


#[test]
fn matrix_is_transposed_with_document_columns() {
    // Two documents:
    //   S1: "data mining data"
    //   S2: "data analytics"
    let mut counts = SparseCounts::new(2, 3);
    counts.push(0, 1, 2).unwrap();
    counts.push(0, 2, 1).unwrap();
    counts.push(1, 1, 1).unwrap();
    counts.push(1, 0, 1).unwrap();

    let vocabulary = vocabulary();
    let df = print_term_document_matrix(&vocabulary, &counts).unwrap();

    // One row per term, one column per document plus the term column.
    assert_eq!(df.shape(), (3, 3));
    assert_eq!(
        df.get_column_names(),
        vec!["term", "S1", "S2"],
    );

    let s1 = df.column("S1").unwrap().u32().unwrap();
    assert_eq!(s1.get(0), Some(0));
    assert_eq!(s1.get(1), Some(2));
    assert_eq!(s1.get(2), Some(1));

    let s2 = df.column("S2").unwrap().u32().unwrap();
    assert_eq!(s2.get(0), Some(1));
    assert_eq!(s2.get(1), Some(1));
    assert_eq!(s2.get(2), Some(0));
}


#[test]
fn duplicate_entries_accumulate() {
    let mut counts = SparseCounts::new(1, 1);
    counts.push(0, 0, 1).unwrap();
    counts.push(0, 0, 2).unwrap();
    assert_eq!(counts.to_dense(), vec![vec![3]]);
}


#[test]
fn out_of_range_entry_is_rejected() {
    let mut counts = SparseCounts::new(2, 3);
    let result = counts.push(2, 0, 1);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}


#[test]
fn vocabulary_size_must_match_the_matrix() {
    let counts = SparseCounts::new(2, 4);
    let result = print_term_document_matrix(&vocabulary(), &counts);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}
