//! Matrix-vector products and the weight-representation strategy used by the cell.
use serde::{Deserialize, Serialize};

use super::fixed::{demote, demote_wide, Iter, QValue, Q15, Q31, Q63, Scale};

/// Shifts of one matrix-vector product: matrix, vector, and the final demotion of the sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatVecScales {
    pub mat: Scale,
    pub vec: Scale,
    pub out: Scale,
}

impl MatVecScales {
    pub const fn new(mat: Scale, vec: Scale, out: Scale) -> Self { Self { mat, vec, out } }

    #[inline]
    pub fn total(&self) -> Scale { self.mat + self.vec + self.out }
}

/// Scales of a projection. `second` is only read by the low-rank representation, where
/// `first` drives the product into the rank buffer and `second` the product out of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionScales {
    pub first: MatVecScales,
    #[serde(default)]
    pub second: MatVecScales,
}

impl ProjectionScales {
    pub const fn single(sc: MatVecScales) -> Self {
        Self { first: sc, second: MatVecScales::new(0, 0, 0) }
    }

    pub const fn low_rank(first: MatVecScales, second: MatVecScales) -> Self { Self { first, second } }
}

/// Dense row-major product: `ret[r] = sat((sum_c mat[r, c] * x[c]) >> (mat + vec + out))`.
/// Products are exact in 32 bits and accumulated in 64 bits, so the only truncation is the final one.
pub fn mul_vec<V: QValue>(mat: &[Q15], x: &[V], rows: usize, cols: usize, ret: &mut [Q15], sc: MatVecScales) {
    debug_assert!(mat.len() >= rows * cols, "matrix shorter than {}x{}", rows, cols);
    debug_assert!(x.len() >= cols && ret.len() >= rows);
    let shift = sc.total();
    for (r, out) in ret[..rows].iter_mut().enumerate() {
        let row = &mat[r * cols..(r + 1) * cols];
        let mut acc: Q63 = 0;
        for (&m, &v) in row.iter().zip(&x[..cols]) {
            acc += (m as Q31 * v.widen()) as Q63;
        }
        *out = Q15::saturate_wide(demote_wide(acc, shift));
    }
}

/// Column-list sparse product.
///
/// `ids` holds, for each of the `cols` input columns, the 1-based output rows of its nonzeros
/// followed by a `0` terminator; `vals` holds the nonzeros in the same order. `ret` is cleared and
/// every term `(val * x[c]) >> (mat + vec + out)` is saturating-added into its row.
pub fn sparse_mul_vec<V: QValue>(ids: &[Iter], vals: &[Q15], x: &[V], cols: usize, ret: &mut [Q15], sc: MatVecScales) {
    ret.fill(0);
    let shift = sc.total();
    let (mut i, mut k) = (0usize, 0usize);
    for &v in &x[..cols] {
        let v = v.widen();
        while let Some(&row) = ids.get(i) {
            i += 1;
            if row == 0 { break; }
            let term = demote(vals[k] as Q31 * v, shift);
            k += 1;
            let slot = &mut ret[row as usize - 1];
            *slot = Q15::saturate(*slot as Q31 + term);
        }
    }
}

/// Encode a dense row-major matrix into the column-list form read by [`sparse_mul_vec`].
pub fn encode_sparse(mat: &[Q15], rows: usize, cols: usize) -> (Vec<Iter>, Vec<Q15>) {
    let mut ids = Vec::with_capacity(cols);
    let mut vals = Vec::new();
    for c in 0..cols {
        for r in 0..rows {
            let m = mat[r * cols + c];
            if m != 0 {
                ids.push((r + 1) as Iter);
                vals.push(m);
            }
        }
        ids.push(0);
    }
    (ids, vals)
}

/// Weight representation of one of the cell's matrices, chosen once per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection<'a> {
    /// Row-major `rows x cols`.
    Dense(&'a [Q15]),
    /// `first` is `rank x cols` and is applied first; `second` is `rows x rank`.
    LowRank { first: &'a [Q15], second: &'a [Q15], rank: usize },
    /// Column-list encoding, see [`sparse_mul_vec`].
    Sparse { ids: &'a [Iter], vals: &'a [Q15] },
}

impl<'a> Projection<'a> {
    /// Rank of the intermediate buffer, for the low-rank representation only.
    pub fn rank(&self) -> Option<usize> {
        match self {
            Projection::LowRank { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    pub fn is_low_rank(&self) -> bool { self.rank().is_some() }

    /// `ret = M * x` for an `rows x cols` matrix, demoted to the output scale in `sc`.
    /// `scratch` must hold at least `rank` entries for the low-rank representation and is
    /// ignored otherwise.
    pub fn project<V: QValue>(&self, x: &[V], rows: usize, cols: usize, scratch: &mut [Q15], ret: &mut [Q15], sc: &ProjectionScales) {
        match *self {
            Projection::Dense(mat) => mul_vec(mat, x, rows, cols, ret, sc.first),
            Projection::LowRank { first, second, rank } => {
                let tmp = &mut scratch[..rank];
                mul_vec(first, x, rank, cols, tmp, sc.first);
                mul_vec(second, &*tmp, rows, rank, ret, sc.second);
            }
            Projection::Sparse { ids, vals } => sparse_mul_vec(ids, vals, x, cols, &mut ret[..rows], sc.first),
        }
    }
}
