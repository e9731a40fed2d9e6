use thiserror::Error;

pub const ERR_PRECOMP_NOT_INIT: i32 = -1;
pub const ERR_TEMPLRW_NOT_INIT: i32 = -2;
pub const ERR_TEMPLRU_NOT_INIT: i32 = -3;
pub const ERR_NORMFEATURES_NOT_INIT: i32 = -4;
pub const ERR_NOT_LOW_RANK: i32 = -5;

/// Why a cell call refused to run. The hidden state is untouched whenever one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    #[error("pre-compute buffer {0} missing or shorter than the hidden dimension")]
    PreComp(u8),

    #[error("low-rank W scratch missing or shorter than the W rank")]
    TempLrw,

    #[error("low-rank U scratch missing or shorter than the U rank")]
    TempLru,

    #[error("normalization buffer missing or shorter than the input dimension")]
    NormFeatures,

    #[error("low-rank entry point called with a non-low-rank W or U")]
    NotLowRank,
}

impl CellError {
    /// Numeric result code; all three pre-compute buffers share one code.
    pub fn code(&self) -> i32 {
        match self {
            CellError::PreComp(_) => ERR_PRECOMP_NOT_INIT,
            CellError::TempLrw => ERR_TEMPLRW_NOT_INIT,
            CellError::TempLru => ERR_TEMPLRU_NOT_INIT,
            CellError::NormFeatures => ERR_NORMFEATURES_NOT_INIT,
            CellError::NotLowRank => ERR_NOT_LOW_RANK,
        }
    }
}

/// `0` on success, the error's code otherwise.
pub fn result_code<T>(res: &Result<T>) -> i32 {
    match res {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}

pub type Result<T> = std::result::Result<T, CellError>;
