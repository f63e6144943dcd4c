//! Cosine similarity calculations

use ndarray::{Array2, ArrayView1};
use tracing::{debug, warn};

use crate::text::Document;
use crate::vector_space::{TermVectors, VectorSpaceModel, VectorizerOptions};

/// Calculate cosine similarity between two term-weight vectors
///
/// Returns a value between 0.0 (no shared weighted terms) and 1.0 (same
/// direction). An all-zero vector is similar to nothing.
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
pub fn cosine_similarity(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Vectors must share a vocabulary (got {} and {} terms)",
        a.len(),
        b.len()
    );

    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    // Avoid division by zero
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Identical vectors must compare exactly equal to 1.0
    if a == b {
        return 1.0;
    }

    (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Symmetric pairwise similarity of every document in a batch
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    values: Array2<f64>,
}

impl SimilarityMatrix {
    /// Every document similar only to itself
    pub fn identity(n: usize) -> Self {
        Self {
            values: Array2::eye(n),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Pairwise similarity of already-built term vectors
    pub fn from_vectors(vectors: &TermVectors) -> Self {
        let n = vectors.len();
        let mut values = Array2::<f64>::eye(n);

        for i in 0..n {
            for j in (i + 1)..n {
                let score = cosine_similarity(vectors.vector(i), vectors.vector(j));
                values[[i, j]] = score;
                values[[j, i]] = score;
            }
        }

        Self { values }
    }

    /// Vectorize a batch and compute its similarity matrix
    ///
    /// A degenerate batch yields the identity matrix instead of an error.
    pub fn from_documents(documents: &[Document]) -> Self {
        let vectors = VectorSpaceModel::new(VectorizerOptions::similarity()).build(documents);

        if vectors.is_empty() {
            if !documents.is_empty() {
                warn!(
                    "No similarity information for {} documents, treating all as distinct",
                    documents.len()
                );
            }
            return Self::identity(documents.len());
        }

        let matrix = Self::from_vectors(&vectors);
        debug!("Computed {}x{} similarity matrix", matrix.len(), matrix.len());
        matrix
    }

    /// Number of documents covered
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Similarity between documents `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    /// Whether `matrix[i][j] == matrix[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        self.values == self.values.t()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    fn docs(texts: &[&str]) -> Vec<Document> {
        texts.iter().map(|t| Document::new(*t)).collect()
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let a = arr1(&[1.0, 2.0, 3.0]);
        let b = arr1(&[1.0, 2.0, 3.0]);
        let sim = cosine_similarity(a.view(), b.view());
        assert_eq!(sim, 1.0, "Identical vectors should have similarity 1.0");
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = arr1(&[1.0, 0.0, 0.0]);
        let b = arr1(&[0.0, 1.0, 0.0]);
        let sim = cosine_similarity(a.view(), b.view());
        assert!(sim.abs() < 1e-9, "Orthogonal vectors should have similarity ~0.0");
    }

    #[test]
    fn test_cosine_similarity_scaled() {
        let a = arr1(&[1.0, 2.0, 0.0]);
        let b = arr1(&[2.0, 4.0, 0.0]);
        let sim = cosine_similarity(a.view(), b.view());
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = arr1(&[0.0, 0.0]);
        let b = arr1(&[1.0, 0.0]);
        assert_eq!(cosine_similarity(a.view(), b.view()), 0.0);
        assert_eq!(cosine_similarity(a.view(), a.view()), 0.0);
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let matrix = SimilarityMatrix::from_documents(&docs(&[
            "savings bank launches new deposit product",
            "savings bank deposit rates rise",
            "football match ends in a draw",
            "",
        ]));

        assert_eq!(matrix.len(), 4);
        assert!(matrix.is_symmetric());
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.len() {
                let v = matrix.get(i, j);
                assert!((0.0..=1.0).contains(&v));
            }
        }
        assert!(matrix.get(0, 1) > matrix.get(0, 2));
        assert_eq!(matrix.get(0, 2), 0.0);
        assert_eq!(matrix.get(0, 3), 0.0);
    }

    #[test]
    fn test_degenerate_batch_gives_identity() {
        let matrix = SimilarityMatrix::from_documents(&docs(&["", "...", "<>"]));
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.get(0, 0), 1.0);
        assert_eq!(matrix.get(0, 1), 0.0);
        assert_eq!(matrix.get(2, 1), 0.0);

        assert!(SimilarityMatrix::from_documents(&[]).is_empty());
    }
}
