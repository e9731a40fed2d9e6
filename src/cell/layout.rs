//! Raw persisted form of [`ScaleTable`].
//!
//! The calibration tool emits the table as a packed struct of 2-byte little-endian fields
//! (shifts and constants signed, the two table flags unsigned), no header, no padding. Field
//! order differs between the dense/sparse and the low-rank cells and is part of the contract.
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use super::scales::ScaleTable;
use crate::quant::{Iter, Scale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Dense or sparse W and U.
    Dense,
    /// W and U each given as two factors.
    LowRank,
}

enum Field<'a> {
    Scale(&'a mut Scale),
    Flag(&'a mut Iter),
}

fn fields(t: &mut ScaleTable, layout: Layout) -> Vec<Field<'_>> {
    use Field::{Flag, Scale as S};
    let ScaleTable {
        input, mean, mean_sub, std_dev, norm_hd_std_dev,
        w, u, combine, gate_bias, sigmoid_in, sigmoid_out, update_bias, tanh_in, tanh_out,
        gate_hd_hidden, hidden_hd_gate, one_scale, one_sub_gate, one_sub_gate_out,
        zeta, zeta_mul_one_sub_gate, nu, nu_add_one_sub_gate, nu_add_one_sub_gate_out,
        coeff_hd_update, update_hd_coeff, hidden,
        sigmoid_limit, div, add, q_one, use_table_sigmoid, use_table_tanh,
    } = t;

    let mut out = vec![S(input), S(mean), S(mean_sub), S(std_dev), S(norm_hd_std_dev)];
    match layout {
        Layout::Dense => out.extend([
            S(&mut w.first.mat), S(&mut w.first.vec), S(&mut w.first.out),
            S(&mut u.first.mat), S(&mut u.first.vec), S(&mut u.first.out),
        ]),
        Layout::LowRank => out.extend([
            S(&mut w.first.mat), S(&mut w.first.vec), S(&mut w.first.out),
            S(&mut w.second.mat), S(&mut w.second.vec), S(&mut w.second.out),
            S(&mut u.first.mat), S(&mut u.first.vec), S(&mut u.first.out),
            S(&mut u.second.mat), S(&mut u.second.vec), S(&mut u.second.out),
        ]),
    }
    out.extend([
        S(&mut combine.lhs), S(&mut combine.rhs), S(&mut combine.out), S(&mut combine.demote),
        S(&mut gate_bias.lhs), S(&mut gate_bias.rhs), S(&mut gate_bias.out), S(&mut gate_bias.demote),
        S(sigmoid_in), S(sigmoid_out),
        S(&mut update_bias.lhs), S(&mut update_bias.rhs), S(&mut update_bias.out), S(&mut update_bias.demote),
        S(tanh_in), S(tanh_out),
        S(gate_hd_hidden), S(hidden_hd_gate),
        S(one_scale), S(one_sub_gate), S(one_sub_gate_out),
        S(zeta), S(zeta_mul_one_sub_gate),
        S(nu), S(nu_add_one_sub_gate), S(nu_add_one_sub_gate_out),
        S(coeff_hd_update), S(update_hd_coeff),
        S(&mut hidden.lhs), S(&mut hidden.rhs), S(&mut hidden.out), S(&mut hidden.demote),
    ]);
    match layout {
        Layout::Dense => out.extend([S(div), S(add), S(sigmoid_limit), S(q_one)]),
        Layout::LowRank => out.extend([S(sigmoid_limit), S(div), S(add), S(q_one)]),
    }
    out.extend([Flag(use_table_sigmoid), Flag(use_table_tanh)]);
    out
}

impl Layout {
    /// Size of the packed struct in bytes.
    pub fn byte_len(self) -> usize {
        fields(&mut ScaleTable::default(), self).len() * 2
    }
}

impl ScaleTable {
    pub fn read_layout<R: Read>(r: &mut R, layout: Layout) -> Result<Self> {
        let mut table = ScaleTable::default();
        let mut b2 = [0u8; 2];
        for (i, field) in fields(&mut table, layout).into_iter().enumerate() {
            r.read_exact(&mut b2).with_context(|| format!("read scale table field {} ({:?} layout)", i, layout))?;
            match field {
                Field::Scale(s) => *s = Scale::from_le_bytes(b2),
                Field::Flag(f) => *f = Iter::from_le_bytes(b2),
            }
        }
        Ok(table)
    }

    pub fn from_le_bytes(bytes: &[u8], layout: Layout) -> Result<Self> {
        if bytes.len() != layout.byte_len() {
            bail!("scale table is {} bytes, {:?} layout needs {}", bytes.len(), layout, layout.byte_len());
        }
        Self::read_layout(&mut &bytes[..], layout)
    }

    pub fn write_layout<W: Write>(&self, w: &mut W, layout: Layout) -> Result<()> {
        w.write_all(&self.to_le_bytes(layout)).context("write scale table")
    }

    pub fn to_le_bytes(&self, layout: Layout) -> Vec<u8> {
        let mut copy = *self;
        let mut out = Vec::with_capacity(layout.byte_len());
        for field in fields(&mut copy, layout) {
            match field {
                Field::Scale(s) => out.extend_from_slice(&s.to_le_bytes()),
                Field::Flag(f) => out.extend_from_slice(&f.to_le_bytes()),
            }
        }
        out
    }
}
