//! Sigmoid and tanh in fixed point.
//!
//! Two strategies share one contract (monotonic, saturating, output at the requested scale):
//! a computed piecewise-linear form clamped at a limit, and an interpolated lookup into
//! constant tables compiled into the binary. Both are integer-only.
use super::fixed::{rescale, QValue, Q15, Q31, Scale};
use super::tables::{SIGMOID_TABLE, TANH_TABLE};

/// Scale of the values stored in the lookup tables.
pub const TABLE_SCALE_OUT: Scale = 14;
/// Tables cover `[-TABLE_DOMAIN, TABLE_DOMAIN]`.
pub const TABLE_DOMAIN: Q31 = 8;
/// Entries per unit of input, as a power of two.
pub const TABLE_STEP_BITS: Scale = 6;
/// Inputs are rescaled to this scale before indexing; the bits below the step are interpolated.
pub const TABLE_INDEX_SCALE: Scale = 12;
pub const TABLE_LEN: usize = (2 * TABLE_DOMAIN as usize) << TABLE_STEP_BITS as usize | 1;

pub fn sigmoid_table() -> &'static [Q15; TABLE_LEN] { &SIGMOID_TABLE }

pub fn tanh_table() -> &'static [Q15; TABLE_LEN] { &TANH_TABLE }

fn lookup(table: &[Q15; TABLE_LEN], v: Q15, scale_in: Scale, scale_out: Scale) -> Q15 {
    let frac_bits = TABLE_INDEX_SCALE - TABLE_STEP_BITS;
    let span = (2 * TABLE_DOMAIN) << TABLE_INDEX_SCALE;
    let pos = rescale(v as Q31, scale_in, TABLE_INDEX_SCALE).saturating_add(TABLE_DOMAIN << TABLE_INDEX_SCALE);
    let y = if pos <= 0 {
        table[0] as Q31
    } else if pos >= span {
        table[TABLE_LEN - 1] as Q31
    } else {
        let idx = (pos >> frac_bits) as usize;
        let frac = pos & ((1 << frac_bits) - 1);
        let lo = table[idx] as Q31;
        let hi = table[idx + 1] as Q31;
        lo + (((hi - lo) * frac) >> frac_bits)
    };
    Q15::saturate(rescale(y, TABLE_SCALE_OUT, scale_out))
}

/// Hard sigmoid: `x = v / div + add`, clamped to `[0, limit]`, then moved from `scale_in` to
/// `scale_out`. With `div = 2` and `add = limit / 2` the argument saturates outside
/// `[-limit, limit]`.
///
/// `div` must be nonzero. Debug builds assert it; release builds read a zero `div` as 1.
#[inline]
pub fn sigmoid_computed(v: Q15, div: Q15, add: Q15, limit: Q15, scale_in: Scale, scale_out: Scale) -> Q15 {
    debug_assert!(div != 0, "sigmoid divisor of zero in the scale table");
    let v = v as Q31;
    let x = v.checked_div(div as Q31).unwrap_or(v) + add as Q31;
    let clipped = x.clamp(0, (limit as Q31).max(0));
    Q15::saturate(rescale(clipped, scale_in, scale_out))
}

#[inline]
pub fn sigmoid_lookup(v: Q15, scale_in: Scale, scale_out: Scale) -> Q15 {
    lookup(sigmoid_table(), v, scale_in, scale_out)
}

/// Hard tanh: clamp to `±1.0` at `scale_in`, then move to `scale_out`.
#[inline]
pub fn tanh_computed(v: Q15, scale_in: Scale, scale_out: Scale) -> Q15 {
    let one: Q31 = 1 << (scale_in.clamp(0, 30) as u32);
    Q15::saturate(rescale((v as Q31).clamp(-one, one), scale_in, scale_out))
}

#[inline]
pub fn tanh_lookup(v: Q15, scale_in: Scale, scale_out: Scale) -> Q15 {
    lookup(tanh_table(), v, scale_in, scale_out)
}

pub fn v_sigmoid(v: &mut [Q15], div: Q15, add: Q15, limit: Q15, scale_in: Scale, scale_out: Scale, use_table: bool) {
    if use_table {
        let table = sigmoid_table();
        for x in v.iter_mut() { *x = lookup(table, *x, scale_in, scale_out); }
    } else {
        for x in v.iter_mut() { *x = sigmoid_computed(*x, div, add, limit, scale_in, scale_out); }
    }
}

pub fn v_tanh(v: &mut [Q15], scale_in: Scale, scale_out: Scale, use_table: bool) {
    if use_table {
        let table = tanh_table();
        for x in v.iter_mut() { *x = lookup(table, *x, scale_in, scale_out); }
    } else {
        for x in v.iter_mut() { *x = tanh_computed(*x, scale_in, scale_out); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(f: fn(f64) -> f64) -> Vec<Q15> {
        let one = (1 << TABLE_SCALE_OUT) as f64;
        let step = (1 << TABLE_STEP_BITS) as f64;
        (0..TABLE_LEN).map(|i| (f(i as f64 / step - TABLE_DOMAIN as f64) * one).round() as Q15).collect()
    }

    #[test]
    fn constant_tables_match_their_definition() {
        assert_eq!(sigmoid_table().to_vec(), generate(|x| 1.0 / (1.0 + (-x).exp())));
        assert_eq!(tanh_table().to_vec(), generate(f64::tanh));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sigmoid divisor")]
    fn zero_divisor_is_rejected_in_debug_builds() {
        sigmoid_computed(100, 0, 128, 256, 8, 8);
    }
}
