use anyhow::{bail, ensure, Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::cell::{Cell, Layout, Params, ScaleTable};
use crate::quant::{Iter, Projection, QValue, Q15};

/// Owned weight matrix in one of the three representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Weights {
    Dense { data: Vec<Q15> },
    LowRank { first: Vec<Q15>, second: Vec<Q15>, rank: usize },
    Sparse { ids: Vec<Iter>, vals: Vec<Q15> },
}

impl Weights {
    pub fn as_projection(&self) -> Projection<'_> {
        match self {
            Weights::Dense { data } => Projection::Dense(data),
            Weights::LowRank { first, second, rank } => Projection::LowRank { first, second, rank: *rank },
            Weights::Sparse { ids, vals } => Projection::Sparse { ids, vals },
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Weights::LowRank { .. } => Layout::LowRank,
            _ => Layout::Dense,
        }
    }

    fn check(&self, name: &str, rows: usize, cols: usize) -> Result<()> {
        match self {
            Weights::Dense { data } => {
                ensure!(data.len() == rows * cols, "{}: dense matrix has {} values, expected {}x{}", name, data.len(), rows, cols);
            }
            Weights::LowRank { first, second, rank } => {
                ensure!(*rank > 0, "{}: rank must be positive", name);
                ensure!(first.len() == rank * cols, "{}: first factor has {} values, expected {}x{}", name, first.len(), rank, cols);
                ensure!(second.len() == rows * rank, "{}: second factor has {} values, expected {}x{}", name, second.len(), rows, rank);
            }
            Weights::Sparse { ids, vals } => {
                let columns = ids.iter().filter(|&&i| i == 0).count();
                let nonzeros = ids.len() - columns;
                ensure!(columns == cols, "{}: sparse ids describe {} columns, expected {}", name, columns, cols);
                ensure!(ids.last() == Some(&0), "{}: sparse ids must end with a column terminator", name);
                ensure!(vals.len() == nonzeros, "{}: {} sparse values for {} indices", name, vals.len(), nonzeros);
                if let Some(&bad) = ids.iter().find(|&&i| i as usize > rows) {
                    bail!("{}: sparse row index {} exceeds {} rows", name, bad, rows);
                }
            }
        }
        Ok(())
    }
}

/// Owned model: shapes, statistics, weights, biases, and the calibrated scale table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle<T> {
    pub hidden_dims: usize,
    pub input_dims: usize,
    #[serde(default)]
    pub mean: Vec<T>,
    #[serde(default)]
    pub std_dev: Vec<T>,
    pub w: Weights,
    pub u: Weights,
    pub bg: Vec<Q15>,
    pub bh: Vec<Q15>,
    pub zeta: Q15,
    pub nu: Q15,
    pub scales: ScaleTable,
}

impl<T: QValue + Serialize + DeserializeOwned> ModelBundle<T> {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(&path).with_context(|| format!("open model bundle: {}", path.as_ref().display()))?;
        let model: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse model bundle: {}", path.as_ref().display()))?;
        model.validate()?;
        info!(
            "loaded model {}: hidden={} input={} w={:?} u={:?}",
            path.as_ref().display(), model.hidden_dims, model.input_dims, model.w.layout(), model.u.layout()
        );
        Ok(model)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = File::create(&path).with_context(|| format!("create model bundle: {}", path.as_ref().display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), self).context("write model bundle")?;
        Ok(())
    }
}

impl<T: QValue> ModelBundle<T> {
    /// Shape checks the engine itself never performs.
    pub fn validate(&self) -> Result<()> {
        let (h, i) = (self.hidden_dims, self.input_dims);
        ensure!(h > 0 && i > 0, "dimensions must be positive (hidden={}, input={})", h, i);
        self.w.check("W", h, i)?;
        self.u.check("U", h, h)?;
        ensure!(self.bg.len() == h, "bg has {} values, expected {}", self.bg.len(), h);
        ensure!(self.bh.len() == h, "bh has {} values, expected {}", self.bh.len(), h);
        for (name, stats) in [("mean", &self.mean), ("std_dev", &self.std_dev)] {
            ensure!(stats.len() % i == 0, "{} has {} values, not a multiple of the input dimension {}", name, stats.len(), i);
        }
        ensure!(self.mean.len() == self.std_dev.len(), "mean and std_dev differ in length");
        Ok(())
    }

    pub fn has_stats(&self) -> bool { !self.mean.is_empty() }

    /// Steps covered by per-step statistics; `None` when they are shared or absent.
    pub fn stats_steps(&self) -> Option<usize> {
        (self.mean.len() > self.input_dims).then(|| self.mean.len() / self.input_dims)
    }

    /// Normalizing with per-step statistics needs every sequence to have exactly that many steps.
    pub fn check_sequences(&self, sequences: &[Vec<T>]) -> Result<()> {
        let steps = match self.stats_steps() {
            Some(steps) => steps,
            None => return Ok(()),
        };
        for (n, s) in sequences.iter().enumerate() {
            let got = s.len() / self.input_dims;
            ensure!(got == steps, "sequence {} has {} steps, per-step statistics cover {}", n, got, steps);
        }
        Ok(())
    }

    /// Layout a raw scale table for this model is persisted in.
    pub fn layout(&self) -> Layout {
        if self.w.layout() == Layout::LowRank || self.u.layout() == Layout::LowRank { Layout::LowRank } else { Layout::Dense }
    }

    pub fn params(&self) -> Params<'_, T> {
        Params {
            mean: &self.mean,
            std_dev: &self.std_dev,
            w: self.w.as_projection(),
            u: self.u.as_projection(),
            bg: &self.bg,
            bh: &self.bh,
            zeta: self.zeta,
            nu: self.nu,
        }
    }

    pub fn cell(&self) -> Cell<'_, T> {
        Cell::new(self.params(), &self.scales, self.input_dims, self.hidden_dims)
    }

    /// Replace the inline scale table with one read from its raw persisted form.
    pub fn load_scales<P: AsRef<Path>>(&mut self, path: P, layout: Layout) -> Result<()> {
        let f = File::open(&path).with_context(|| format!("open scale table: {}", path.as_ref().display()))?;
        self.scales = ScaleTable::read_layout(&mut BufReader::new(f), layout)?;
        Ok(())
    }
}

/// Read a JSON array of step-major input sequences and check they fit the input dimension.
pub fn load_sequences<T: QValue + DeserializeOwned, P: AsRef<Path>>(path: P, input_dims: usize) -> Result<Vec<Vec<T>>> {
    let f = File::open(&path).with_context(|| format!("open inputs: {}", path.as_ref().display()))?;
    let seqs: Vec<Vec<T>> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse inputs: {}", path.as_ref().display()))?;
    for (n, s) in seqs.iter().enumerate() {
        ensure!(s.len() % input_dims == 0, "sequence {} has {} values, not a multiple of {}", n, s.len(), input_dims);
    }
    Ok(seqs)
}
