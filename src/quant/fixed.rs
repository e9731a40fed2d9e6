//! Fixed-point scalar types and the saturating/shift primitives everything else is built on.
//!
//! A quantized value is a plain integer `raw` standing for `raw * 2^-scale`. The scale is never
//! stored next to the value; every operation takes the shift amounts it needs explicitly.
use std::fmt::Debug;

pub type Q7 = i8;
pub type Q15 = i16;
pub type Q31 = i32;
pub type Q63 = i64;
/// Shift amount. Positive demotes (arithmetic right shift), negative promotes.
pub type Scale = i16;
/// Index type of the persisted sparse encoding and flag fields.
pub type Iter = u16;

/// Input precision the cell can be instantiated with.
pub trait QValue: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    const MIN: Q31;
    const MAX: Q31;

    fn widen(self) -> Q31;
    fn saturate(v: Q31) -> Self;

    #[inline]
    fn saturate_wide(v: Q63) -> Self {
        Self::saturate(v.clamp(Self::MIN as Q63, Self::MAX as Q63) as Q31)
    }
}

impl QValue for Q15 {
    const MIN: Q31 = i16::MIN as Q31;
    const MAX: Q31 = i16::MAX as Q31;

    #[inline]
    fn widen(self) -> Q31 { self as Q31 }

    #[inline]
    fn saturate(v: Q31) -> Self { v.clamp(<Self as QValue>::MIN, <Self as QValue>::MAX) as Q15 }
}

impl QValue for Q7 {
    const MIN: Q31 = i8::MIN as Q31;
    const MAX: Q31 = i8::MAX as Q31;

    #[inline]
    fn widen(self) -> Q31 { self as Q31 }

    #[inline]
    fn saturate(v: Q31) -> Self { v.clamp(<Self as QValue>::MIN, <Self as QValue>::MAX) as Q7 }
}

#[inline]
pub fn q15_saturate(v: Q31) -> Q15 { Q15::saturate(v) }

#[inline]
pub fn q7_saturate(v: Q31) -> Q7 { Q7::saturate(v) }

/// Shift `v` down by `by` bits (truncating toward negative infinity). A negative `by` promotes.
#[inline]
pub fn demote(v: Q31, by: Scale) -> Q31 {
    if by >= 0 {
        v >> (by as u32).min(31)
    } else {
        promote(v, by.saturating_neg())
    }
}

/// Shift `v` up by `by` bits, saturating at the 32-bit range. A negative `by` demotes.
#[inline]
pub fn promote(v: Q31, by: Scale) -> Q31 {
    if by < 0 {
        return demote(v, by.saturating_neg());
    }
    let by = (by as u32).min(31);
    let wide = (v as Q63) << by;
    wide.clamp(Q31::MIN as Q63, Q31::MAX as Q63) as Q31
}

/// 64-bit variant of [`demote`] used by the wide mat-vec accumulator.
#[inline]
pub fn demote_wide(v: Q63, by: Scale) -> Q63 {
    if by >= 0 {
        v >> (by as u32).min(63)
    } else {
        let by = (by.saturating_neg() as u32).min(62);
        v.checked_mul(1 << by).unwrap_or(if v < 0 { Q63::MIN } else { Q63::MAX })
    }
}

/// Re-express a value held at scale `from` at scale `to`.
#[inline]
pub fn rescale(v: Q31, from: Scale, to: Scale) -> Q31 {
    demote(v, from - to)
}

#[inline]
pub fn q15_add(a: Q15, b: Q15) -> Q15 { a.saturating_add(b) }

#[inline]
pub fn q15_sub(a: Q15, b: Q15) -> Q15 { a.saturating_sub(b) }

/// `(a * b) >> shift`, saturated to Q15.
#[inline]
pub fn q15_mul(a: Q15, b: Q15, shift: Scale) -> Q15 {
    q15_saturate(demote(a as Q31 * b as Q31, shift))
}

/// Scale-aligned sum of two operands held at different scales.
///
/// Each operand is first demoted by its own shift so both share a scale, then the sum is demoted
/// by `sc_out` and saturated.
#[inline]
pub fn aligned_add(a: Q31, b: Q31, sc_a: Scale, sc_b: Scale, sc_out: Scale) -> Q31 {
    demote(demote(a, sc_a).saturating_add(demote(b, sc_b)), sc_out)
}

#[inline]
pub fn aligned_sub(a: Q31, b: Q31, sc_a: Scale, sc_b: Scale, sc_out: Scale) -> Q31 {
    demote(demote(a, sc_a).saturating_sub(demote(b, sc_b)), sc_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demote_truncates_toward_negative_infinity() {
        assert_eq!(demote(7, 1), 3);
        assert_eq!(demote(-7, 1), -4);
        assert_eq!(demote(-1, 4), -1);
        assert_eq!(demote(5, 0), 5);
    }

    #[test]
    fn negative_shift_promotes() {
        assert_eq!(demote(3, -2), 12);
        assert_eq!(promote(3, 2), 12);
        assert_eq!(promote(12, -2), 3);
        assert_eq!(promote(Q31::MAX, 4), Q31::MAX);
        assert_eq!(promote(Q31::MIN, 4), Q31::MIN);
    }

    #[test]
    fn saturation_clamps_instead_of_wrapping() {
        assert_eq!(q15_saturate(40_000), i16::MAX);
        assert_eq!(q15_saturate(-40_000), i16::MIN);
        assert_eq!(q7_saturate(200), i8::MAX);
        assert_eq!(q7_saturate(-200), i8::MIN);
        assert_eq!(q15_add(i16::MAX, 1), i16::MAX);
        assert_eq!(q15_sub(i16::MIN, 1), i16::MIN);
        assert_eq!(q15_mul(i16::MAX, i16::MAX, 0), i16::MAX);
        assert_eq!(Q15::saturate_wide(1 << 40), i16::MAX);
    }

    #[test]
    fn aligned_add_brings_operands_to_a_common_scale() {
        // 1.0 at scale 10 plus 1.0 at scale 8, summed at scale 8 then demoted to scale 7.
        assert_eq!(aligned_add(1024, 256, 2, 0, 1), 256);
        assert_eq!(aligned_sub(1024, 256, 2, 0, 0), 0);
        assert_eq!(rescale(256, 8, 11), 2048);
        assert_eq!(rescale(2048, 11, 8), 256);
    }
}
