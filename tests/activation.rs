use qfastgrnn::quant::activation::{
    sigmoid_computed, sigmoid_lookup, sigmoid_table, tanh_computed, tanh_lookup, tanh_table, v_sigmoid, v_tanh, TABLE_LEN,
};

// Computed sigmoid at scale 8: x / 2 + 0.5 clamped to [0, 1].
const DIV: i16 = 2;
const ADD: i16 = 128;
const LIMIT: i16 = 256;

fn sweep() -> impl Iterator<Item = i16> {
    (i16::MIN..=i16::MAX).step_by(7).chain(std::iter::once(i16::MAX))
}

#[test]
fn tables_are_built_once_and_span_the_domain() {
    assert_eq!(TABLE_LEN, 1025);
    assert!(std::ptr::eq(sigmoid_table(), sigmoid_table()));
    assert!(std::ptr::eq(tanh_table(), tanh_table()));
    let s = sigmoid_table();
    assert_eq!((s[0], s[512], s[TABLE_LEN - 1]), (5, 8192, 16379));
    let t = tanh_table();
    assert_eq!((t[0], t[512], t[TABLE_LEN - 1]), (-16384, 0, 16384));
}

#[test]
fn both_strategies_agree_at_zero() {
    assert_eq!(sigmoid_computed(0, DIV, ADD, LIMIT, 8, 8), LIMIT / 2);
    assert_eq!(sigmoid_lookup(0, 8, 14), 8192);
    assert_eq!(sigmoid_lookup(0, 8, 8), 128);
    assert_eq!(tanh_computed(0, 8, 8), 0);
    assert_eq!(tanh_lookup(0, 8, 14), 0);
}

#[test]
fn computed_forms_saturate_at_their_limits() {
    assert_eq!(sigmoid_computed(256, DIV, ADD, LIMIT, 8, 8), 256);
    assert_eq!(sigmoid_computed(i16::MAX, DIV, ADD, LIMIT, 8, 8), 256);
    assert_eq!(sigmoid_computed(-256, DIV, ADD, LIMIT, 8, 8), 0);
    assert_eq!(sigmoid_computed(i16::MIN, DIV, ADD, LIMIT, 8, 8), 0);
    assert_eq!(sigmoid_computed(64, DIV, ADD, LIMIT, 8, 8), 160);
    // Output scale differs from input scale.
    assert_eq!(sigmoid_computed(i16::MAX, DIV, ADD, LIMIT, 8, 14), 16384);

    assert_eq!(tanh_computed(300, 8, 8), 256);
    assert_eq!(tanh_computed(-300, 8, 8), -256);
    assert_eq!(tanh_computed(100, 8, 8), 100);
    assert_eq!(tanh_computed(i16::MIN, 8, 14), -16384);
}

#[test]
fn lookups_clamp_outside_the_table_domain() {
    // 12.0 and -12.0 at scale 10 lie beyond [-8, 8].
    assert_eq!(sigmoid_lookup(12 << 10, 10, 14), 16379);
    assert_eq!(sigmoid_lookup(-12 << 10, 10, 14), 5);
    assert_eq!(tanh_lookup(i16::MAX, 8, 14), 16384);
    assert_eq!(tanh_lookup(i16::MIN, 8, 14), -16384);
}

#[test]
fn lookups_interpolate_between_entries() {
    // 1.0 at scale 12 hits entry 576 exactly; half a step further lands between 576 and 577.
    assert_eq!(sigmoid_lookup(4096, 12, 14), 11978);
    assert_eq!(sigmoid_lookup(4096 + 32, 12, 14), 12003);
    assert_eq!(tanh_lookup(4096, 12, 14), 12478);
    assert_eq!(tanh_lookup(4096 + 32, 12, 14), 12531);
}

#[test]
fn every_strategy_is_monotonic() {
    let mut prev = [i16::MIN; 4];
    for v in sweep() {
        let cur = [
            sigmoid_computed(v, DIV, ADD, LIMIT, 8, 8),
            sigmoid_lookup(v, 10, 14),
            tanh_computed(v, 8, 8),
            tanh_lookup(v, 10, 14),
        ];
        for k in 0..4 {
            assert!(cur[k] >= prev[k], "strategy {} decreased at {}: {} < {}", k, v, cur[k], prev[k]);
        }
        prev = cur;
    }
}

#[test]
fn strategies_agree_near_saturation() {
    for v in [3000i16, 8000, i16::MAX] {
        let hard = sigmoid_computed(v, DIV, ADD, LIMIT, 8, 14) as i32;
        let smooth = sigmoid_lookup(v, 8, 14) as i32;
        assert!((hard - smooth).abs() <= 16384 / 100, "{} vs {} at {}", hard, smooth, v);
        let hard = tanh_computed(-v, 8, 14) as i32;
        let smooth = tanh_lookup(-v, 8, 14) as i32;
        assert!((hard - smooth).abs() <= 16384 / 100, "{} vs {} at {}", hard, smooth, -v);
    }
}

#[test]
fn vector_forms_match_scalar_forms() {
    let input: Vec<i16> = vec![-700, -256, -1, 0, 1, 100, 256, 900];
    for use_table in [false, true] {
        let mut s = input.clone();
        v_sigmoid(&mut s, DIV, ADD, LIMIT, 8, 8, use_table);
        let mut t = input.clone();
        v_tanh(&mut t, 8, 8, use_table);
        for (i, &x) in input.iter().enumerate() {
            let (es, et) = if use_table {
                (sigmoid_lookup(x, 8, 8), tanh_lookup(x, 8, 8))
            } else {
                (sigmoid_computed(x, DIV, ADD, LIMIT, 8, 8), tanh_computed(x, 8, 8))
            };
            assert_eq!(s[i], es);
            assert_eq!(t[i], et);
        }
    }
}
