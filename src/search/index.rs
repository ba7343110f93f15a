//! Inverted index and boolean queries
//!
//! Maps stemmed terms to sorted posting lists of document ids. Queries
//! combine posting lists with `and`, `or` and `not`; the operator words
//! are reserved and cannot themselves be searched for.

use crate::search::tokenize::{stem, tokenize};
use crate::storage::DocumentStore;
use crate::Result;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Progress is logged every this many indexed documents
const PROGRESS_INTERVAL: usize = 5000;

/// Boolean connective applied between query terms
#[derive(Debug, Clone, Copy)]
enum QueryOp {
    And,
    Or,
    Not,
}

/// In-memory inverted index over the clean-text collection
///
/// Document ids are positions in the document list handed back by
/// [`build_index`]; posting lists stay sorted because documents are added
/// in id order.
#[derive(Debug, Default)]
pub struct SearchIndex {
    terms: HashMap<String, Vec<u32>>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one document's text under the given id
    ///
    /// Ids must be fed in ascending order. Repeated occurrences of a term
    /// within one document collapse to a single posting.
    pub fn add_document(&mut self, doc_id: u32, text: &str) {
        for token in tokenize(text) {
            let list = self.terms.entry(stem(&token)).or_default();
            if list.last() != Some(&doc_id) {
                list.push(doc_id);
            }
        }
    }

    /// Looks up the posting list for a single word, stemming it first
    pub fn postings(&self, word: &str) -> &[u32] {
        let term = stem(word);
        self.terms.get(&term).map(|list| list.as_slice()).unwrap_or(&[])
    }

    /// Number of distinct terms in the index
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Evaluates a boolean query, returning matching document ids
    ///
    /// The query is processed left to right. `and`, `or` and `not` set the
    /// connective for the terms that follow; it stays in effect until
    /// another operator appears. With no operator given, `and` applies.
    /// The first term always seeds the result set as-is.
    pub fn query(&self, input: &str) -> Vec<u32> {
        let mut result: Option<Vec<u32>> = None;
        let mut op = QueryOp::And;

        for token in tokenize(input) {
            match token.as_str() {
                "and" => op = QueryOp::And,
                "or" => op = QueryOp::Or,
                "not" => op = QueryOp::Not,
                _ => {
                    let postings = self.postings(&token);
                    result = Some(match result.take() {
                        None => postings.to_vec(),
                        Some(current) => match op {
                            QueryOp::And => intersect(&current, postings),
                            QueryOp::Or => union(&current, postings),
                            QueryOp::Not => difference(&current, postings),
                        },
                    });
                }
            }
        }

        result.unwrap_or_default()
    }
}

/// Merge of two sorted lists keeping ids present in both
fn intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Merge of two sorted lists keeping ids present in either, without dupes
fn union(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Merge keeping ids from the first list that are absent from the second
fn difference(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        if j >= b.len() || a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out
}

/// Builds the index from every stored clean record
///
/// # Arguments
///
/// * `store` - Document store holding the clean-text collection
///
/// # Returns
///
/// * `Ok((index, urls))` - The populated index and the document list;
///   position in `urls` is the document id
/// * `Err(GleanerError)` - Reading the clean collection failed
pub fn build_index(store: &dyn DocumentStore) -> Result<(SearchIndex, Vec<String>)> {
    let records = store.clean_records()?;
    let mut index = SearchIndex::new();
    let mut urls = Vec::with_capacity(records.len());

    for (doc_id, record) in records.iter().enumerate() {
        index.add_document(doc_id as u32, &record.clean_text);
        urls.push(record.url.clone());
        if (doc_id + 1) % PROGRESS_INTERVAL == 0 {
            tracing::info!("Indexed {} documents", doc_id + 1);
        }
    }

    tracing::info!(
        "Index ready: {} documents, {} terms",
        urls.len(),
        index.term_count()
    );
    Ok((index, urls))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SearchIndex {
        let mut index = SearchIndex::new();
        index.add_document(0, "rust systems programming");
        index.add_document(1, "rust web services");
        index.add_document(2, "python web scripting");
        index.add_document(3, "systems administration");
        index
    }

    #[test]
    fn test_add_document_dedupes_within_document() {
        let mut index = SearchIndex::new();
        index.add_document(0, "echo echo echo");
        assert_eq!(index.postings("echo"), &[0]);
    }

    #[test]
    fn test_postings_stem_query_word() {
        let mut index = SearchIndex::new();
        index.add_document(0, "walking the dog");
        // Both the indexed token and the query word reduce to "walk".
        assert_eq!(index.postings("walked"), &[0]);
    }

    #[test]
    fn test_postings_unknown_term_empty() {
        let index = sample_index();
        assert!(index.postings("haskell").is_empty());
    }

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&[0, 1, 3, 5], &[1, 2, 3]), vec![1, 3]);
        assert!(intersect(&[0, 1], &[]).is_empty());
    }

    #[test]
    fn test_union() {
        assert_eq!(union(&[0, 2, 4], &[1, 2, 5]), vec![0, 1, 2, 4, 5]);
        assert_eq!(union(&[], &[3, 7]), vec![3, 7]);
        assert_eq!(union(&[1, 9], &[]), vec![1, 9]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[0, 1, 2, 3], &[1, 3]), vec![0, 2]);
        assert_eq!(difference(&[0, 1], &[]), vec![0, 1]);
        assert!(difference(&[], &[1]).is_empty());
    }

    #[test]
    fn test_query_single_term() {
        let index = sample_index();
        assert_eq!(index.query("rust"), vec![0, 1]);
    }

    #[test]
    fn test_query_implicit_and() {
        let index = sample_index();
        assert_eq!(index.query("rust web"), vec![1]);
    }

    #[test]
    fn test_query_or() {
        let index = sample_index();
        assert_eq!(index.query("rust or python"), vec![0, 1, 2]);
    }

    #[test]
    fn test_query_not() {
        let index = sample_index();
        assert_eq!(index.query("web not python"), vec![1]);
    }

    #[test]
    fn test_query_operator_persists() {
        let index = sample_index();
        // After "or" every following term keeps widening the result.
        assert_eq!(index.query("rust or python systems"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_query_leading_operator_ignored_for_first_term() {
        let index = sample_index();
        // The first term seeds the result even with "not" pending.
        assert_eq!(index.query("not rust"), vec![0, 1]);
    }

    #[test]
    fn test_query_empty_and_operator_only() {
        let index = sample_index();
        assert!(index.query("").is_empty());
        assert!(index.query("and or not").is_empty());
    }

    #[test]
    fn test_query_case_insensitive() {
        let index = sample_index();
        assert_eq!(index.query("Rust AND Web"), vec![1]);
    }
}
