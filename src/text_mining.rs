//! Pretty printing of a term-document matrix.
//! The vectorizer that produced the matrix is an external collaborator;
//! it only needs to expose its vocabulary.
use colored::Colorize;
use polars::prelude::*;

use crate::error::Error;


/// A fitted text vectorizer.
/// Implementors expose the vocabulary in term-index order,
/// matching the columns of the count matrix they produce.
pub trait FittedVectorizer {
    /// The learned vocabulary, one entry per term index.
    fn vocabulary(&self) -> &[String];
}


impl FittedVectorizer for Vec<String> {
    fn vocabulary(&self) -> &[String] {
        self
    }
}


/// A sparse document-term count matrix,
/// stored as `(document, term, count)` triplets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseCounts {
    n_documents: usize,
    n_terms: usize,
    entries: Vec<(usize, usize, u32)>,
}


impl SparseCounts {
    /// Construct an empty matrix of the given shape.
    #[inline]
    pub fn new(n_documents: usize, n_terms: usize) -> Self {
        Self { n_documents, n_terms, entries: Vec::new() }
    }


    /// Record `count` occurrences of `term` in `document`.
    /// Fails with [`Error::ShapeMismatch`] for out-of-range indices.
    pub fn push(&mut self, document: usize, term: usize, count: u32)
        -> Result<(), Error>
    {
        if document >= self.n_documents || term >= self.n_terms {
            return Err(Error::ShapeMismatch {
                reason: format!(
                    "entry ({document}, {term}) does not fit a \
                     {n_documents} x {n_terms} matrix",
                    n_documents = self.n_documents,
                    n_terms = self.n_terms,
                ),
            });
        }
        self.entries.push((document, term, count));
        Ok(())
    }


    /// The `(documents, terms)` shape of the matrix.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_documents, self.n_terms)
    }


    /// Densify into a `documents x terms` grid.
    /// Duplicate triplets accumulate.
    pub fn to_dense(&self) -> Vec<Vec<u32>> {
        let mut dense = vec![vec![0_u32; self.n_terms]; self.n_documents];
        for &(document, term, count) in &self.entries {
            dense[document][term] += count;
        }
        dense
    }
}


/// Print the term-document matrix produced by a vectorizer.
///
/// The matrix is transposed into one row per term with columns
/// `S1..Sn`, one per document, preceded by the vocabulary column.
/// The assembled DataFrame is printed to stdout and returned.
///
/// # Example
///
/// ```
/// use minicharts::{SparseCounts, print_term_document_matrix};
///
/// let vocabulary = vec![
///     String::from("data"),
///     String::from("mining"),
/// ];
/// let mut counts = SparseCounts::new(2, 2);
/// counts.push(0, 0, 3).unwrap();
/// counts.push(1, 1, 1).unwrap();
///
/// let df = print_term_document_matrix(&vocabulary, &counts).unwrap();
/// assert_eq!(df.shape(), (2, 3));
/// ```
pub fn print_term_document_matrix<V: FittedVectorizer>(
    vectorizer: &V,
    counts: &SparseCounts,
) -> Result<DataFrame, Error>
{
    let vocabulary = vectorizer.vocabulary();
    let (n_documents, n_terms) = counts.shape();

    if vocabulary.len() != n_terms {
        return Err(Error::ShapeMismatch {
            reason: format!(
                "the vocabulary has {n_vocab} terms but the matrix \
                 has {n_terms} term columns",
                n_vocab = vocabulary.len(),
            ),
        });
    }

    let dense = counts.to_dense();

    let mut columns = Vec::with_capacity(n_documents + 1);
    columns.push(Series::new("term", vocabulary));
    for document in 0..n_documents {
        let name = format!("S{}", document + 1);
        columns.push(Series::new(&name, &dense[document]));
    }

    let df = DataFrame::new(columns)?;

    println!(
        "{}",
        format!(
            "term-document matrix  [{n_terms} terms] [{n_documents} documents]"
        ).bold()
    );
    println!("{df}");

    Ok(df)
}
