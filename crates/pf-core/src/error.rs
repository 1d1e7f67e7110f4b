use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PfError {
    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
