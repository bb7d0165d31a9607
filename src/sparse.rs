//! Binary CSR storage for the membership matrix.
//!
//! Values are implicitly 1; only the column positions of nonzero entries are
//! stored. Building the |labels| x N matrix therefore costs O(total nonzeros)
//! rather than O(rows x N).

/// Compressed sparse row binary matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrMatrix {
    n_cols: usize,
    /// `indptr[i]..indptr[i + 1]` delimits row i within `indices`.
    indptr: Vec<usize>,
    indices: Vec<usize>,
}

impl CsrMatrix {
    /// Matrix with zero rows.
    pub fn empty(n_cols: usize) -> Self {
        Self { n_cols, indptr: vec![0], indices: Vec::new() }
    }

    pub fn n_rows(&self) -> usize {
        self.indptr.len() - 1
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols)
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Column positions of the 1-entries in row `row`, ascending.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.indices[self.indptr[row]..self.indptr[row + 1]]
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.row(row).binary_search(&col).is_ok()
    }

    /// Dense expansion. Intended for inspection and tests, not for large
    /// matrices.
    pub fn to_dense(&self) -> Vec<Vec<u8>> {
        (0..self.n_rows())
            .map(|r| {
                let mut dense = vec![0u8; self.n_cols];
                for &c in self.row(r) {
                    dense[c] = 1;
                }
                dense
            })
            .collect()
    }
}

/// Row-at-a-time builder. Each row is fed its sorted, deduplicated column
/// positions once; the coordinate buffer converts to CSR in a single pass with
/// no intermediate format.
#[derive(Clone, Debug)]
pub struct CsrBuilder {
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
}

impl CsrBuilder {
    pub fn new(n_cols: usize) -> Self {
        Self { n_cols, indptr: vec![0], indices: Vec::new() }
    }

    /// Append one row. `cols` must be strictly ascending and within bounds.
    pub fn push_row(&mut self, cols: &[usize]) {
        debug_assert!(cols.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(cols.last().map_or(true, |&c| c < self.n_cols));
        self.indices.extend_from_slice(cols);
        self.indptr.push(self.indices.len());
    }

    pub fn finish(self) -> CsrMatrix {
        CsrMatrix { n_cols: self.n_cols, indptr: self.indptr, indices: self.indices }
    }
}
