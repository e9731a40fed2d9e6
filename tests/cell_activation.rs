use pretty_assertions::assert_eq;
use qfastgrnn::quant::activation::{sigmoid_computed, sigmoid_lookup, tanh_computed, tanh_lookup};
use qfastgrnn::quant::vector::{v_add, v_hadamard, v_hadamard_inplace, v_scalar_add, v_scalar_mul, v_scalar_sub};
use qfastgrnn::quant::Projection;
use qfastgrnn::{fastgrnn, Buffers, Direction, Params, ScaleTable};

const W: [i16; 12] = [128, -64, 32, 64, 64, -128, -32, 96, 0, 256, 0, -64];
const U: [i16; 16] = [64, 0, 0, -32, 0, 128, 32, 0, 16, -16, 64, 0, -64, 32, 0, 96];
const BG: [i16; 4] = [20, -10, 0, 40];
const BH: [i16; 4] = [-30, 15, 60, 0];
const INPUT: [i16; 9] = [256, -128, 64, -64, 192, 128, 300, 40, -200];
const H0: [i16; 4] = [0, 64, -128, 32];

fn params() -> Params<'static, i16> {
    Params { mean: &[], std_dev: &[], w: Projection::Dense(&W), u: Projection::Dense(&U), bg: &BG, bh: &BH, zeta: 200, nu: 20 }
}

fn scales(sigmoid_table: u16, tanh_table: u16) -> ScaleTable {
    ScaleTable { use_table_sigmoid: sigmoid_table, use_table_tanh: tanh_table, ..ScaleTable::single_scale(8) }
}

/// One step written out with scalar activations, so the nonlinearity for each flag is fixed here.
fn step_by_hand(h: &mut [i16; 4], x: &[i16], p: &Params<'_, i16>, sc: &ScaleTable, table_sigmoid: bool, table_tanh: bool) {
    let (mut wx, mut uh, mut pre) = ([0i16; 4], [0i16; 4], [0i16; 4]);
    p.w.project(x, 4, 3, &mut [], &mut wx, &sc.w);
    p.u.project(&h[..], 4, 4, &mut [], &mut uh, &sc.u);
    let c = sc.combine;
    v_add(&wx, &uh, &mut pre, c.lhs, c.rhs, c.out, c.demote);

    let (mut gate, mut cand) = ([0i16; 4], [0i16; 4]);
    let g = sc.gate_bias;
    v_add(&pre, p.bg, &mut gate, g.lhs, g.rhs, g.out, g.demote);
    let b = sc.update_bias;
    v_add(&pre, p.bh, &mut cand, b.lhs, b.rhs, b.out, b.demote);
    for v in gate.iter_mut() {
        *v = if table_sigmoid {
            sigmoid_lookup(*v, sc.sigmoid_in, sc.sigmoid_out)
        } else {
            sigmoid_computed(*v, sc.div, sc.add, sc.sigmoid_limit, sc.sigmoid_in, sc.sigmoid_out)
        };
    }
    for v in cand.iter_mut() {
        *v = if table_tanh { tanh_lookup(*v, sc.tanh_in, sc.tanh_out) } else { tanh_computed(*v, sc.tanh_in, sc.tanh_out) };
    }

    let mut kept = [0i16; 4];
    v_hadamard(&h[..], &gate, &mut kept, sc.hidden_hd_gate, sc.gate_hd_hidden);
    let mut coeff = gate;
    v_scalar_sub(sc.q_one, &mut coeff, sc.one_scale, sc.one_sub_gate, sc.one_sub_gate_out);
    v_scalar_mul(p.zeta, &mut coeff, sc.zeta, sc.zeta_mul_one_sub_gate);
    v_scalar_add(p.nu, &mut coeff, sc.nu, sc.nu_add_one_sub_gate, sc.nu_add_one_sub_gate_out);
    v_hadamard_inplace(&coeff, &mut cand, sc.coeff_hd_update, sc.update_hd_coeff);
    let hd = sc.hidden;
    v_add(&kept, &cand, &mut h[..], hd.lhs, hd.rhs, hd.out, hd.demote);
}

fn run_cell(sc: &ScaleTable) -> [i16; 4] {
    let p = params();
    let mut bufs = Buffers::for_model(&p, 4, 3, false);
    let mut h = H0;
    fastgrnn(&mut h, &INPUT, 3, 3, &p, &mut bufs, sc, Direction::Forward, false).unwrap();
    h
}

fn run_by_hand(sc: &ScaleTable, table_sigmoid: bool, table_tanh: bool) -> [i16; 4] {
    let p = params();
    let mut h = H0;
    for x in INPUT.chunks(3) {
        step_by_hand(&mut h, x, &p, sc, table_sigmoid, table_tanh);
    }
    h
}

#[test]
fn each_flag_selects_its_own_nonlinearity() {
    let mut seen = Vec::new();
    for (sig, tanh) in [(0u16, 0u16), (1, 0), (0, 1), (1, 1)] {
        let sc = scales(sig, tanh);
        let got = run_cell(&sc);
        assert_eq!(got, run_by_hand(&sc, sig != 0, tanh != 0), "sigmoid table {} tanh table {}", sig, tanh);
        seen.push(got);
    }
    // Every combination changes the result, so a swapped flag cannot go unnoticed.
    for i in 0..seen.len() {
        for j in i + 1..seen.len() {
            assert_ne!(seen[i], seen[j], "combinations {} and {} agree", i, j);
        }
    }
}

#[test]
fn any_nonzero_flag_value_selects_the_table() {
    assert_eq!(run_cell(&scales(2, 0)), run_cell(&scales(1, 0)));
    assert_eq!(run_cell(&scales(0, 0x8000)), run_cell(&scales(0, 1)));
}
