use serde::{Deserialize, Serialize};

use crate::quant::normalize::NormScales;
use crate::quant::{Iter, MatVecScales, ProjectionScales, Scale, Q15};

/// Shifts of a scale-aligned vector addition: one per operand, the sum's demotion, and a
/// further demotion applied after saturating to 16 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddScales {
    pub lhs: Scale,
    pub rhs: Scale,
    pub out: Scale,
    #[serde(default)]
    pub demote: Scale,
}

impl AddScales {
    pub const fn new(lhs: Scale, rhs: Scale, out: Scale, demote: Scale) -> Self { Self { lhs, rhs, out, demote } }
}

/// Every shift and constant of one FastGRNN cell, as produced by the calibration tool.
///
/// Nothing here is validated at runtime: a table whose declared scales do not line up gives
/// wrong numbers, never undefined behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleTable {
    // normalization
    pub input: Scale,
    pub mean: Scale,
    pub mean_sub: Scale,
    pub std_dev: Scale,
    pub norm_hd_std_dev: Scale,

    // projections
    pub w: ProjectionScales,
    pub u: ProjectionScales,
    /// W projection (lhs) plus U projection (rhs).
    pub combine: AddScales,

    /// Pre-activation (lhs) plus gate bias (rhs).
    pub gate_bias: AddScales,
    pub sigmoid_in: Scale,
    pub sigmoid_out: Scale,
    /// Pre-activation (lhs) plus update bias (rhs).
    pub update_bias: AddScales,
    pub tanh_in: Scale,
    pub tanh_out: Scale,

    // blend
    pub gate_hd_hidden: Scale,
    pub hidden_hd_gate: Scale,
    pub one_scale: Scale,
    pub one_sub_gate: Scale,
    pub one_sub_gate_out: Scale,
    pub zeta: Scale,
    pub zeta_mul_one_sub_gate: Scale,
    pub nu: Scale,
    pub nu_add_one_sub_gate: Scale,
    pub nu_add_one_sub_gate_out: Scale,
    /// Blend coefficient in its product with the candidate update.
    pub coeff_hd_update: Scale,
    /// Candidate update in its product with the blend coefficient.
    pub update_hd_coeff: Scale,
    /// Gated previous state (lhs) plus weighted update (rhs), demoted to the hidden-state scale.
    pub hidden: AddScales,

    pub sigmoid_limit: Q15,
    pub div: Q15,
    pub add: Q15,
    pub q_one: Q15,
    /// Nonzero selects the lookup-table sigmoid. Kept as the persisted 16-bit value.
    pub use_table_sigmoid: Iter,
    /// Nonzero selects the lookup-table tanh.
    pub use_table_tanh: Iter,
}

impl ScaleTable {
    /// Table for a hand-built model whose tensors all live at scale `s` (1.0 == `1 << s`,
    /// `s <= 14`): products shift by `s`, sums stay put, the computed sigmoid is
    /// `x / 2 + 0.5` clamped to `[0, 1]` and the blend constant `q_one` is 1.0.
    pub fn single_scale(s: Scale) -> Self {
        let (a, b) = (s / 2, s - s / 2);
        let mv = MatVecScales::new(a, b, 0);
        let one = 1i32 << s.clamp(0, 14);
        Self {
            std_dev: a,
            norm_hd_std_dev: b,
            w: ProjectionScales::low_rank(mv, mv),
            u: ProjectionScales::low_rank(mv, mv),
            sigmoid_in: s,
            sigmoid_out: s,
            tanh_in: s,
            tanh_out: s,
            gate_hd_hidden: a,
            hidden_hd_gate: b,
            zeta: a,
            zeta_mul_one_sub_gate: b,
            coeff_hd_update: a,
            update_hd_coeff: b,
            sigmoid_limit: one as Q15,
            div: 2,
            add: (one / 2) as Q15,
            q_one: one as Q15,
            ..Self::default()
        }
    }

    pub fn sigmoid_uses_table(&self) -> bool { self.use_table_sigmoid != 0 }

    pub fn tanh_uses_table(&self) -> bool { self.use_table_tanh != 0 }

    pub fn norm(&self) -> NormScales {
        NormScales {
            input: self.input,
            mean: self.mean,
            mean_sub: self.mean_sub,
            std_dev: self.std_dev,
            norm_hd_std_dev: self.norm_hd_std_dev,
        }
    }
}
