// Fixed-point FastGRNN inference
pub mod quant;
pub mod cell;
pub mod error;
pub mod loader;
pub mod batch;

pub use cell::{fastgrnn, fastgrnn_q15, fastgrnn_q15_low_rank, fastgrnn_q7xq15, Buffers, Cell, Direction, Layout, Params, ScaleTable};
pub use error::{result_code, CellError};
