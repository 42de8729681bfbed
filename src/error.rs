use std::io;
use thiserror::Error;

use crate::store::validation::InvalidReason;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    InvalidInput(#[from] InvalidReason),

    #[error("This color already exists for the selected brand.")]
    DuplicateColor,

    #[error("This color does not exist for the selected brand.")]
    ColorNotFound,
}

pub type Result<T> = std::result::Result<T, PaintError>;
