use crate::error::{CellError, Result};
use crate::quant::{QValue, Q15};

use super::params::Params;

/// Caller-owned scratch space for one cell call.
///
/// A buffer that is `None` or shorter than the call needs counts as missing. Contents before a
/// call are irrelevant and are overwritten.
#[derive(Debug, Clone, Default)]
pub struct Buffers<T: QValue> {
    pub pre_comp1: Option<Vec<Q15>>,
    pub pre_comp2: Option<Vec<Q15>>,
    pub pre_comp3: Option<Vec<Q15>>,
    pub temp_lrw: Option<Vec<Q15>>,
    pub temp_lru: Option<Vec<Q15>>,
    pub norm_features: Option<Vec<T>>,
}

/// Borrowed, length-checked view handed to the step loop.
pub(crate) struct Scratch<'b, T> {
    pub pre_comp1: &'b mut [Q15],
    pub pre_comp2: &'b mut [Q15],
    pub pre_comp3: &'b mut [Q15],
    pub temp_lrw: &'b mut [Q15],
    pub temp_lru: &'b mut [Q15],
    pub norm_features: &'b mut [T],
}

fn take<'b, E>(buf: &'b mut Option<Vec<E>>, len: usize, err: CellError) -> Result<&'b mut [E]> {
    match buf {
        Some(v) if v.len() >= len => Ok(&mut v[..len]),
        _ => Err(err),
    }
}

impl<T: QValue> Buffers<T> {
    /// Allocate exactly what a model needs. Rank buffers and the normalization buffer are only
    /// allocated when the representation or `normalize` asks for them.
    pub fn for_model(params: &Params<'_, T>, hidden_dims: usize, input_dims: usize, normalize: bool) -> Self {
        Self {
            pre_comp1: Some(vec![0; hidden_dims]),
            pre_comp2: Some(vec![0; hidden_dims]),
            pre_comp3: Some(vec![0; hidden_dims]),
            temp_lrw: params.w_rank().map(|r| vec![0; r]),
            temp_lru: params.u_rank().map(|r| vec![0; r]),
            norm_features: normalize.then(|| vec![T::default(); input_dims]),
        }
    }

    /// Every buffer allocated, sized for the largest rank either matrix may use.
    pub fn with_capacity(hidden_dims: usize, input_dims: usize, max_rank: usize) -> Self {
        Self {
            pre_comp1: Some(vec![0; hidden_dims]),
            pre_comp2: Some(vec![0; hidden_dims]),
            pre_comp3: Some(vec![0; hidden_dims]),
            temp_lrw: Some(vec![0; max_rank]),
            temp_lru: Some(vec![0; max_rank]),
            norm_features: Some(vec![T::default(); input_dims]),
        }
    }

    /// Check presence and capacity in a fixed order: pre-compute 1, 2, 3, W scratch,
    /// U scratch, normalization buffer. Only the buffers the configuration reads are checked.
    pub(crate) fn checkout(
        &mut self,
        hidden_dims: usize,
        input_dims: usize,
        w_rank: Option<usize>,
        u_rank: Option<usize>,
        normalize: bool,
    ) -> Result<Scratch<'_, T>> {
        let Buffers { pre_comp1, pre_comp2, pre_comp3, temp_lrw, temp_lru, norm_features } = self;
        let pre_comp1 = take(pre_comp1, hidden_dims, CellError::PreComp(1))?;
        let pre_comp2 = take(pre_comp2, hidden_dims, CellError::PreComp(2))?;
        let pre_comp3 = take(pre_comp3, hidden_dims, CellError::PreComp(3))?;
        let temp_lrw: &mut [Q15] = match w_rank {
            Some(r) => take(temp_lrw, r, CellError::TempLrw)?,
            None => &mut [],
        };
        let temp_lru: &mut [Q15] = match u_rank {
            Some(r) => take(temp_lru, r, CellError::TempLru)?,
            None => &mut [],
        };
        let norm_features: &mut [T] = if normalize {
            take(norm_features, input_dims, CellError::NormFeatures)?
        } else {
            &mut []
        };
        Ok(Scratch { pre_comp1, pre_comp2, pre_comp3, temp_lrw, temp_lru, norm_features })
    }
}
