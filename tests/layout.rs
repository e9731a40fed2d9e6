use std::fs::File;
use std::io::Write;

use qfastgrnn::cell::AddScales;
use qfastgrnn::quant::{MatVecScales, ProjectionScales};
use qfastgrnn::{Layout, ScaleTable};

fn field(bytes: &[u8], i: usize) -> i16 {
    i16::from_le_bytes([bytes[2 * i], bytes[2 * i + 1]])
}

fn sample() -> ScaleTable {
    ScaleTable {
        input: 1,
        mean: 2,
        mean_sub: 3,
        std_dev: 4,
        norm_hd_std_dev: 5,
        w: ProjectionScales::low_rank(MatVecScales::new(6, 7, 8), MatVecScales::new(9, 10, 11)),
        u: ProjectionScales::low_rank(MatVecScales::new(12, 13, 14), MatVecScales::new(15, 16, 17)),
        combine: AddScales::new(18, 19, 20, 21),
        gate_bias: AddScales::new(22, 23, 24, 25),
        sigmoid_in: 26,
        sigmoid_out: 27,
        update_bias: AddScales::new(28, 29, 30, 31),
        tanh_in: 32,
        tanh_out: 33,
        gate_hd_hidden: 34,
        hidden_hd_gate: 35,
        one_scale: 36,
        one_sub_gate: 37,
        one_sub_gate_out: 38,
        zeta: 39,
        zeta_mul_one_sub_gate: 40,
        nu: 41,
        nu_add_one_sub_gate: 42,
        nu_add_one_sub_gate_out: 43,
        coeff_hd_update: 44,
        update_hd_coeff: -45,
        hidden: AddScales::new(46, 47, 48, -49),
        sigmoid_limit: 16384,
        div: 2,
        add: 8192,
        q_one: -32768,
        use_table_sigmoid: 1,
        use_table_tanh: 0,
    }
}

#[test]
fn packed_sizes() {
    assert_eq!(Layout::Dense.byte_len(), 98);
    assert_eq!(Layout::LowRank.byte_len(), 110);
    assert_eq!(sample().to_le_bytes(Layout::Dense).len(), 98);
    assert_eq!(sample().to_le_bytes(Layout::LowRank).len(), 110);
}

#[test]
fn dense_field_order() {
    let b = sample().to_le_bytes(Layout::Dense);
    assert_eq!((0..5).map(|i| field(&b, i)).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    // W then U, one product each.
    assert_eq!((5..11).map(|i| field(&b, i)).collect::<Vec<_>>(), vec![6, 7, 8, 12, 13, 14]);
    assert_eq!(field(&b, 11), 18);
    assert_eq!(field(&b, 38), -45);
    assert_eq!((39..43).map(|i| field(&b, i)).collect::<Vec<_>>(), vec![46, 47, 48, -49]);
    // div, add, limit, one
    assert_eq!((43..47).map(|i| field(&b, i)).collect::<Vec<_>>(), vec![2, 8192, 16384, -32768]);
    assert_eq!((field(&b, 47), field(&b, 48)), (1, 0));
}

#[test]
fn low_rank_field_order() {
    let b = sample().to_le_bytes(Layout::LowRank);
    assert_eq!((5..17).map(|i| field(&b, i)).collect::<Vec<_>>(), (6..18).collect::<Vec<i16>>());
    assert_eq!(field(&b, 17), 18);
    assert_eq!((45..49).map(|i| field(&b, i)).collect::<Vec<_>>(), vec![46, 47, 48, -49]);
    // limit, div, add, one
    assert_eq!((49..53).map(|i| field(&b, i)).collect::<Vec<_>>(), vec![16384, 2, 8192, -32768]);
    assert_eq!((field(&b, 53), field(&b, 54)), (1, 0));
}

#[test]
fn read_back_what_was_written() {
    let t = sample();
    assert_eq!(ScaleTable::from_le_bytes(&t.to_le_bytes(Layout::LowRank), Layout::LowRank).unwrap(), t);

    // The dense layout carries no second-factor scales.
    let dense = ScaleTable { w: ProjectionScales::single(t.w.first), u: ProjectionScales::single(t.u.first), ..t };
    assert_eq!(ScaleTable::from_le_bytes(&t.to_le_bytes(Layout::Dense), Layout::Dense).unwrap(), dense);
}

#[test]
fn flag_values_survive_a_round_trip() {
    for layout in [Layout::Dense, Layout::LowRank] {
        let mut b = ScaleTable::single_scale(8).to_le_bytes(layout);
        let n = b.len();
        b[n - 4..n - 2].copy_from_slice(&2u16.to_le_bytes());
        b[n - 2..].copy_from_slice(&0x8001u16.to_le_bytes());
        let t = ScaleTable::from_le_bytes(&b, layout).unwrap();
        assert_eq!((t.use_table_sigmoid, t.use_table_tanh), (2, 0x8001));
        assert!(t.sigmoid_uses_table() && t.tanh_uses_table());
        assert_eq!(t.to_le_bytes(layout), b);
    }
    let t = ScaleTable::default();
    assert!(!t.sigmoid_uses_table() && !t.tanh_uses_table());
}

#[test]
fn wrong_length_is_rejected() {
    let b = sample().to_le_bytes(Layout::Dense);
    assert!(ScaleTable::from_le_bytes(&b, Layout::LowRank).is_err());
    assert!(ScaleTable::from_le_bytes(&b[..97], Layout::Dense).is_err());
    assert!(ScaleTable::read_layout(&mut &b[..40], Layout::Dense).is_err());
}

#[test]
fn reads_from_a_file() {
    let path = "target/layout_scales.bin";
    let t = sample();
    let mut f = File::create(path).unwrap();
    t.write_layout(&mut f, Layout::LowRank).unwrap();
    f.flush().unwrap();
    drop(f);
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(bytes, t.to_le_bytes(Layout::LowRank));
    let back = ScaleTable::read_layout(&mut File::open(path).unwrap(), Layout::LowRank).unwrap();
    assert_eq!(back, t);
}
