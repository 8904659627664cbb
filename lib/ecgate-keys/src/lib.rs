//! Elliptic curve public keys: parsing, canonicalization and comparison.
//!
//! The same public key can be written down in many ways. The curve may be
//! referenced by name or spelled out parameter by parameter, and the point
//! may be compressed, uncompressed or hybrid. This crate decides whether
//! two such encodings denote the same key.

pub mod armor;
pub mod authorized_key;
pub mod canonical;
pub mod curve;
pub mod equality;
mod field;
pub mod fingerprint;
pub mod matcher;
pub mod registry;
pub mod spki;

#[cfg(test)]
mod test_vectors;

use der::asn1::ObjectIdentifier;

pub use authorized_key::AuthorizedKey;
pub use canonical::canonicalize;
pub use curve::{AffinePoint, CurveParameters, CurvePoint, PointFormat};
pub use equality::points_equal;
pub use fingerprint::Fingerprint;
pub use registry::{CurveIdentifier, CurveRegistry, RegistryEntry};
pub use spki::{DomainParameters, KeyInfo, SpecifiedCurve};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
    #[error("unknown named curve: {0}")]
    UnknownCurve(ObjectIdentifier),
    #[error("invalid point: {0}")]
    InvalidPoint(String),
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(String),
    #[error("points belong to non-equivalent curves")]
    CurveMismatch,
    #[error("unsupported PEM label: {0}")]
    UnsupportedPem(String),
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Self::MalformedEncoding(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
