//! Element-wise vector kernels over quantized values.
//! Every kernel processes `ret.len()` (or the in-place target's length) elements.
use super::fixed::{aligned_add, aligned_sub, demote, QValue, Q15, Q31, Scale};

/// Scale-aligned addition followed by saturation and a post-saturation demotion.
///
/// `ret[i] = sat(((a[i] >> sc_a) + (b[i] >> sc_b)) >> sc_out) >> demote_by`
pub fn v_add(a: &[Q15], b: &[Q15], ret: &mut [Q15], sc_a: Scale, sc_b: Scale, sc_out: Scale, demote_by: Scale) {
    debug_assert!(a.len() >= ret.len() && b.len() >= ret.len());
    for i in 0..ret.len() {
        ret[i] = add_one(a[i], b[i], sc_a, sc_b, sc_out, demote_by);
    }
}

#[inline]
fn add_one(a: Q15, b: Q15, sc_a: Scale, sc_b: Scale, sc_out: Scale, demote_by: Scale) -> Q15 {
    let sum = Q15::saturate(aligned_add(a as Q31, b as Q31, sc_a, sc_b, sc_out));
    Q15::saturate(demote(sum as Q31, demote_by))
}

/// `ret[i] = sat(((a[i] >> sc_a) - (b[i] >> sc_b)) >> sc_out)`
pub fn v_sub<T: QValue>(a: &[T], b: &[T], ret: &mut [T], sc_a: Scale, sc_b: Scale, sc_out: Scale) {
    debug_assert!(a.len() >= ret.len() && b.len() >= ret.len());
    for i in 0..ret.len() {
        ret[i] = T::saturate(aligned_sub(a[i].widen(), b[i].widen(), sc_a, sc_b, sc_out));
    }
}

/// Element-wise product: `ret[i] = sat((a[i] * b[i]) >> (sc_a + sc_b))`
pub fn v_hadamard<T: QValue>(a: &[T], b: &[T], ret: &mut [T], sc_a: Scale, sc_b: Scale) {
    debug_assert!(a.len() >= ret.len() && b.len() >= ret.len());
    for i in 0..ret.len() {
        ret[i] = T::saturate(demote(a[i].widen() * b[i].widen(), sc_a + sc_b));
    }
}

/// [`v_hadamard`] writing back into `b`.
pub fn v_hadamard_inplace<T: QValue>(a: &[T], b: &mut [T], sc_a: Scale, sc_b: Scale) {
    debug_assert!(a.len() >= b.len());
    for (y, &x) in b.iter_mut().zip(a) {
        *y = T::saturate(demote(x.widen() * y.widen(), sc_a + sc_b));
    }
}

/// `v[i] = sat(((scalar >> sc_scalar) - (v[i] >> sc_vec)) >> sc_out)`
pub fn v_scalar_sub(scalar: Q15, v: &mut [Q15], sc_scalar: Scale, sc_vec: Scale, sc_out: Scale) {
    for x in v.iter_mut() {
        *x = Q15::saturate(aligned_sub(scalar as Q31, *x as Q31, sc_scalar, sc_vec, sc_out));
    }
}

/// `v[i] = sat(((scalar >> sc_scalar) + (v[i] >> sc_vec)) >> sc_out)`
pub fn v_scalar_add(scalar: Q15, v: &mut [Q15], sc_scalar: Scale, sc_vec: Scale, sc_out: Scale) {
    for x in v.iter_mut() {
        *x = Q15::saturate(aligned_add(scalar as Q31, *x as Q31, sc_scalar, sc_vec, sc_out));
    }
}

/// `v[i] = sat((scalar * v[i]) >> (sc_scalar + sc_vec))`
pub fn v_scalar_mul(scalar: Q15, v: &mut [Q15], sc_scalar: Scale, sc_vec: Scale) {
    for x in v.iter_mut() {
        *x = Q15::saturate(demote(scalar as Q31 * *x as Q31, sc_scalar + sc_vec));
    }
}
