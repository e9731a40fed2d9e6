use crate::quant::{Projection, QValue, Q15};

/// Read-only model parameters. Everything is borrowed so compiled-in constant tables can be
/// used without copying; see [`crate::loader::ModelBundle`] for an owned form.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a, T: QValue> {
    /// Per-dimension mean, `input_dims` long or `input_dims * steps` for per-step statistics.
    pub mean: &'a [T],
    /// Inverse standard deviation, same shape as `mean`.
    pub std_dev: &'a [T],
    /// Input to hidden, `hidden x input`.
    pub w: Projection<'a>,
    /// Hidden to hidden, `hidden x hidden`.
    pub u: Projection<'a>,
    /// Gate bias.
    pub bg: &'a [Q15],
    /// Candidate update bias.
    pub bh: &'a [Q15],
    pub zeta: Q15,
    pub nu: Q15,
}

impl<'a, T: QValue> Params<'a, T> {
    pub fn w_rank(&self) -> Option<usize> { self.w.rank() }
    pub fn u_rank(&self) -> Option<usize> { self.u.rank() }
}
