use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use qfastgrnn::batch::run_batch_with;
use qfastgrnn::loader::{load_sequences, ModelBundle};
use qfastgrnn::quant::{QValue, Q15, Q7};
use qfastgrnn::{result_code, Direction, Layout};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Precision {
    /// 16-bit input
    Q15,
    /// 8-bit input, 16-bit weights
    Q7,
}

#[derive(Parser, Debug)]
#[command(name = "qfastgrnn", version, about = "Run a quantized FastGRNN model over input sequences")]
struct Args {
    /// Model bundle (JSON)
    #[arg(long)]
    model: PathBuf,

    /// Input sequences: JSON array of step-major integer arrays
    #[arg(long)]
    input: PathBuf,

    /// Input precision of the model
    #[arg(long, value_enum, default_value_t = Precision::Q15)]
    precision: Precision,

    /// Consume steps last to first
    #[arg(long, default_value_t = false)]
    backward: bool,

    /// Apply mean/std-dev normalization (requires statistics in the bundle)
    #[arg(long, default_value_t = false)]
    normalize: bool,

    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Raw scale table overriding the one in the bundle
    #[arg(long)]
    scales_bin: Option<PathBuf>,

    /// Layout of --scales-bin (defaults to the model's representation)
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Show a progress bar
    #[arg(long, default_value_t = false)]
    progress: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    index: usize,
    code: i32,
    hidden: &'a [Q15],
}

fn run<T: QValue + Serialize + DeserializeOwned>(args: &Args) -> Result<()> {
    let mut model = ModelBundle::<T>::load(&args.model)?;
    if let Some(path) = &args.scales_bin {
        let layout = args.layout.unwrap_or_else(|| model.layout());
        model.load_scales(path, layout)?;
        info!("scale table from {} ({:?} layout)", path.display(), layout);
    }
    if args.normalize && !model.has_stats() {
        anyhow::bail!("--normalize needs mean/std_dev in the model bundle");
    }
    let sequences = load_sequences::<T, _>(&args.input, model.input_dims)?;
    if args.normalize {
        model.check_sequences(&sequences)?;
    }
    let cell = model.cell();
    let init = vec![0 as Q15; model.hidden_dims];
    let direction = if args.backward { Direction::Backward } else { Direction::Forward };

    let pb = if args.progress { ProgressBar::new(sequences.len() as u64) } else { ProgressBar::hidden() };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .context("progress template")?
            .progress_chars("#>-"),
    );

    let t0 = Instant::now();
    let results = run_batch_with(&cell, &init, &sequences, direction, args.normalize, || pb.inc(1));
    pb.finish_and_clear();
    let dt = t0.elapsed();

    let mut failed = 0usize;
    for (index, res) in results.iter().enumerate() {
        let code = result_code(res);
        let hidden: &[Q15] = match res {
            Ok(h) => h,
            Err(e) => {
                failed += 1;
                warn!("sequence {}: {}", index, e);
                &[]
            }
        };
        println!("{}", serde_json::to_string(&Record { index, code, hidden })?);
    }
    info!("{} sequences ({} failed) in {:.3}s", results.len(), failed, dt.as_secs_f64());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new().num_threads(args.threads).build_global().context("thread pool")?;
    }
    match args.precision {
        Precision::Q15 => run::<Q15>(&args),
        Precision::Q7 => run::<Q7>(&args),
    }
}
