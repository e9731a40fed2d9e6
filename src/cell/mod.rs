//! Multi-step quantized FastGRNN cell.
//!
//! One orchestrator drives every configuration: the input precision is a type parameter and
//! the weight representation of W and U is a [`Projection`](crate::quant::Projection) chosen when the model is built.
//! Per step:
//!
//! ```text
//! x'    = normalize(x)                        (optional)
//! pre   = W x' + U h
//! gate  = sigmoid(pre + bg)
//! c     = tanh(pre + bh)
//! h     = gate * h + (zeta * (1 - gate) + nu) * c
//! ```
pub mod buffers;
pub mod layout;
pub mod params;
pub mod scales;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{CellError, Result};
use crate::quant::activation::{v_sigmoid, v_tanh};
use crate::quant::normalize::{normalize, stats_for_step};
use crate::quant::vector::{v_add, v_hadamard, v_hadamard_inplace, v_scalar_add, v_scalar_mul, v_scalar_sub};
use crate::quant::{QValue, Q15, Q7};

pub use buffers::Buffers;
pub use layout::Layout;
pub use params::Params;
pub use scales::{AddScales, ScaleTable};

use buffers::Scratch;

/// Order in which the steps of the input are consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    /// Last step first; two passes in opposite directions make a bidirectional layer.
    Backward,
}

impl Direction {
    #[inline]
    pub fn step_offset(self, t: usize, steps: usize) -> usize {
        match self {
            Direction::Forward => t,
            Direction::Backward => steps - 1 - t,
        }
    }
}

/// Run `steps` cell updates over `input` (`input_dims * steps` values, step-major), updating
/// `hidden_state` in place. Its length is the hidden dimension.
///
/// Buffers are checked once, before anything is written; on error the hidden state is
/// unchanged. `steps == 0` is a successful no-op once the buffers check out.
#[allow(clippy::too_many_arguments)]
pub fn fastgrnn<T: QValue>(
    hidden_state: &mut [Q15],
    input: &[T],
    input_dims: usize,
    steps: usize,
    params: &Params<'_, T>,
    buffers: &mut Buffers<T>,
    scales: &ScaleTable,
    direction: Direction,
    normalize_input: bool,
) -> Result<()> {
    let hidden_dims = hidden_state.len();
    let scratch = match buffers.checkout(hidden_dims, input_dims, params.w_rank(), params.u_rank(), normalize_input) {
        Ok(s) => s,
        Err(e) => {
            debug!("fastgrnn: refusing to run ({}), code {}", e, e.code());
            return Err(e);
        }
    };
    debug_assert!(input.len() >= input_dims * steps, "input holds fewer than {} steps", steps);
    debug_assert!(params.bg.len() >= hidden_dims && params.bh.len() >= hidden_dims);
    debug_assert!(
        !normalize_input || [input_dims, input_dims * steps].contains(&params.mean.len()),
        "mean holds {} values, expected {} shared or {} per step", params.mean.len(), input_dims, input_dims * steps
    );
    trace!("fastgrnn: hidden={} input={} steps={} {:?} normalize={}", hidden_dims, input_dims, steps, direction, normalize_input);

    let Scratch { pre_comp1, pre_comp2, pre_comp3, temp_lrw, temp_lru, norm_features } = scratch;
    let norm = scales.norm();
    for t in 0..steps {
        let offset = direction.step_offset(t, steps);
        let x = &input[offset * input_dims..(offset + 1) * input_dims];
        let features: &[T] = if normalize_input {
            let mean = stats_for_step(params.mean, offset, input_dims);
            let std_dev = stats_for_step(params.std_dev, offset, input_dims);
            normalize(x, mean, std_dev, norm_features, &norm);
            &*norm_features
        } else {
            x
        };

        params.w.project(features, hidden_dims, input_dims, temp_lrw, pre_comp1, &scales.w);
        params.u.project(&*hidden_state, hidden_dims, hidden_dims, temp_lru, pre_comp2, &scales.u);
        let c = &scales.combine;
        v_add(pre_comp1, pre_comp2, pre_comp3, c.lhs, c.rhs, c.out, c.demote);

        let g = &scales.gate_bias;
        v_add(pre_comp3, params.bg, pre_comp2, g.lhs, g.rhs, g.out, g.demote);
        v_sigmoid(pre_comp2, scales.div, scales.add, scales.sigmoid_limit, scales.sigmoid_in, scales.sigmoid_out, scales.sigmoid_uses_table());

        let b = &scales.update_bias;
        v_add(pre_comp3, params.bh, pre_comp1, b.lhs, b.rhs, b.out, b.demote);
        v_tanh(pre_comp1, scales.tanh_in, scales.tanh_out, scales.tanh_uses_table());

        // pre_comp2: gate, pre_comp1: candidate update.
        v_hadamard(&*hidden_state, &*pre_comp2, pre_comp3, scales.hidden_hd_gate, scales.gate_hd_hidden);
        v_scalar_sub(scales.q_one, pre_comp2, scales.one_scale, scales.one_sub_gate, scales.one_sub_gate_out);
        v_scalar_mul(params.zeta, pre_comp2, scales.zeta, scales.zeta_mul_one_sub_gate);
        v_scalar_add(params.nu, pre_comp2, scales.nu, scales.nu_add_one_sub_gate, scales.nu_add_one_sub_gate_out);
        v_hadamard_inplace(&*pre_comp2, pre_comp1, scales.coeff_hd_update, scales.update_hd_coeff);

        let h = &scales.hidden;
        v_add(pre_comp3, pre_comp1, hidden_state, h.lhs, h.rhs, h.out, h.demote);
    }
    Ok(())
}

/// 16-bit input, dense or sparse W and U.
#[allow(clippy::too_many_arguments)]
pub fn fastgrnn_q15(
    hidden_state: &mut [Q15],
    input: &[Q15],
    input_dims: usize,
    steps: usize,
    params: &Params<'_, Q15>,
    buffers: &mut Buffers<Q15>,
    scales: &ScaleTable,
    direction: Direction,
    normalize_input: bool,
) -> Result<()> {
    fastgrnn(hidden_state, input, input_dims, steps, params, buffers, scales, direction, normalize_input)
}

/// 16-bit input, W and U both given as two factors. Rejects any other representation
/// before looking at the buffers.
#[allow(clippy::too_many_arguments)]
pub fn fastgrnn_q15_low_rank(
    hidden_state: &mut [Q15],
    input: &[Q15],
    input_dims: usize,
    steps: usize,
    params: &Params<'_, Q15>,
    buffers: &mut Buffers<Q15>,
    scales: &ScaleTable,
    direction: Direction,
    normalize_input: bool,
) -> Result<()> {
    if !(params.w.is_low_rank() && params.u.is_low_rank()) {
        return Err(CellError::NotLowRank);
    }
    fastgrnn(hidden_state, input, input_dims, steps, params, buffers, scales, direction, normalize_input)
}

/// 8-bit input and statistics, 16-bit weights and hidden state.
#[allow(clippy::too_many_arguments)]
pub fn fastgrnn_q7xq15(
    hidden_state: &mut [Q15],
    input: &[Q7],
    input_dims: usize,
    steps: usize,
    params: &Params<'_, Q7>,
    buffers: &mut Buffers<Q7>,
    scales: &ScaleTable,
    direction: Direction,
    normalize_input: bool,
) -> Result<()> {
    fastgrnn(hidden_state, input, input_dims, steps, params, buffers, scales, direction, normalize_input)
}

/// A model ready to run: parameters plus the scale table they were calibrated with.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a, T: QValue> {
    pub params: Params<'a, T>,
    pub scales: &'a ScaleTable,
    pub input_dims: usize,
    pub hidden_dims: usize,
}

impl<'a, T: QValue> Cell<'a, T> {
    pub fn new(params: Params<'a, T>, scales: &'a ScaleTable, input_dims: usize, hidden_dims: usize) -> Self {
        Self { params, scales, input_dims, hidden_dims }
    }

    pub fn buffers(&self, normalize_input: bool) -> Buffers<T> {
        Buffers::for_model(&self.params, self.hidden_dims, self.input_dims, normalize_input)
    }

    /// Run over a whole step-major sequence; the step count is `input.len() / input_dims`.
    pub fn run(&self, hidden_state: &mut [Q15], input: &[T], buffers: &mut Buffers<T>, direction: Direction, normalize_input: bool) -> Result<()> {
        let steps = if self.input_dims == 0 { 0 } else { input.len() / self.input_dims };
        fastgrnn(hidden_state, input, self.input_dims, steps, &self.params, buffers, self.scales, direction, normalize_input)
    }
}
