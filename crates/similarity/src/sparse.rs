//! Sparse vectors and the TF-IDF matrix.

/// Sparse vector of `(column, weight)` pairs sorted by column.
///
/// Columns are unique; zero weights are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    /// The zero vector
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from unsorted entries. Duplicate columns are summed, zeros dropped.
    pub fn from_entries(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_by_key(|&(column, _)| column);

        let mut merged: Vec<(usize, f32)> = Vec::with_capacity(entries.len());
        for (column, weight) in entries {
            match merged.last_mut() {
                Some((last, sum)) if *last == column => *sum += weight,
                _ => merged.push((column, weight)),
            }
        }
        merged.retain(|&(_, weight)| weight != 0.0);

        Self { entries: merged }
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at `column`, 0.0 when absent
    pub fn get(&self, column: usize) -> f32 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(0.0)
    }

    /// Euclidean (L2) norm
    pub fn norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    /// Scale to unit length in place; the zero vector stays zero
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let (a, b) = (&self.entries, &other.entries);
        let mut sum = 0.0;

        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine similarity; 0.0 whenever either vector is zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0)
}

/// One row per document in corpus order, one column per vocabulary term
#[derive(Debug, Clone, Default)]
pub struct TfidfMatrix {
    pub(crate) rows: Vec<SparseVector>,
    pub(crate) n_columns: usize,
}

impl TfidfMatrix {
    pub fn new(rows: Vec<SparseVector>, n_columns: usize) -> Self {
        Self { rows, n_columns }
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_columns)
    }

    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseVector::nnz).sum()
    }
}
