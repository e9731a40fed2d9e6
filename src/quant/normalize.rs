use super::fixed::{QValue, Scale};
use super::vector::{v_hadamard_inplace, v_sub};

/// Shifts of the normalization stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormScales {
    pub input: Scale,
    pub mean: Scale,
    pub mean_sub: Scale,
    pub std_dev: Scale,
    pub norm_hd_std_dev: Scale,
}

/// Statistics are either shared by every step (exactly `dims` long) or given per step
/// (`dims * steps` long). Per-step statistics that stop short of `step` panic.
#[inline]
pub fn stats_for_step<T>(stats: &[T], step: usize, dims: usize) -> &[T] {
    let start = if stats.len() == dims { 0 } else { step * dims };
    debug_assert!(stats.len() >= start + dims, "statistics hold {} values, step {} needs {}", stats.len(), step, start + dims);
    &stats[start..start + dims]
}

/// `out = (x - mean) * inv_std_dev`, each stage scale-aligned and saturated.
pub fn normalize<T: QValue>(x: &[T], mean: &[T], inv_std_dev: &[T], out: &mut [T], sc: &NormScales) {
    let dims = out.len();
    v_sub(&x[..dims], &mean[..dims], out, sc.input, sc.mean, sc.mean_sub);
    v_hadamard_inplace(&inv_std_dev[..dims], out, sc.std_dev, sc.norm_hd_std_dev);
}
