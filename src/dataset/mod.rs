//! Dataset generation and invariants
//!
//! A [`Dataset`] is the ordered, mutable sequence of values being sorted.
//! It is non-empty by construction, and the minimum/maximum observed at
//! construction time are recorded so bar geometry stays fixed for the
//! lifetime of the list.  The only mutation exposed is [`Dataset::swap`],
//! which is all the step sequences need to permute values in place.

use rand::Rng;
use std::fmt;

/// Errors from dataset construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// A dataset must contain at least one value
    Empty,

    /// Generation range with `lo > hi`
    InvalidRange { lo: u32, hi: u32 },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "Dataset must not be empty"),
            DatasetError::InvalidRange { lo, hi } => {
                write!(f, "Invalid value range: {}..={}", lo, hi)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// The list of values under visualization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<u32>,
    min_val: u32,
    max_val: u32,
}

impl Dataset {
    /// Generate `len` independent uniform samples in `lo..=hi`.
    ///
    /// Duplicates are permitted and expected.
    pub fn generate<R: Rng>(
        rng: &mut R,
        len: usize,
        lo: u32,
        hi: u32,
    ) -> Result<Self, DatasetError> {
        if lo > hi {
            return Err(DatasetError::InvalidRange { lo, hi });
        }
        let values = (0..len).map(|_| rng.gen_range(lo..=hi)).collect();
        Self::from_values(values)
    }

    /// Adopt an explicit list of values, recording its observed min/max.
    pub fn from_values(values: Vec<u32>) -> Result<Self, DatasetError> {
        let min_val = *values.iter().min().ok_or(DatasetError::Empty)?;
        let max_val = *values.iter().max().ok_or(DatasetError::Empty)?;
        Ok(Dataset {
            values,
            min_val,
            max_val,
        })
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value observed at construction time
    pub fn min_val(&self) -> u32 {
        self.min_val
    }

    /// Largest value observed at construction time
    pub fn max_val(&self) -> u32 {
        self.max_val
    }

    /// Swap the values at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }
}
