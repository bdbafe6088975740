use crate::models::NetworkError;

/// Errors returned by the generator and the class/mask parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Class is not one of A, B or C
    #[error("Unknown private network class {0:?}. Choose either A, B or C!")]
    InvalidClass(String),
    /// Mask bits are not an integer or do not fit the class
    #[error("{0}")]
    InvalidMaskBits(String),
    /// Network has no address besides network and broadcast
    #[error("Network {network} has {count} addresses, at least 3 are needed to pick a host")]
    HostRangeTooSmall { network: String, count: u64 },
    /// Failure from the address arithmetic
    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type Result<T> = std::result::Result<T, Error>;
