//! Crate-wide error type.

use thiserror::Error;

/// Errors raised while configuring or running an optimizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration parameter is out of its valid range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Selection probabilities were requested for a population whose
    /// total fitness is zero.
    #[error("total population fitness is zero; selection probabilities are undefined")]
    ZeroTotalFitness,

    /// A regression routine was handed a dataset without points.
    #[error("dataset contains no points")]
    EmptyDataset,
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Error::InvalidConfig { field, reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
