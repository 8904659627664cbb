//! Fingerprints and the OpenSSH form of keys.
//!
//! Both are computed from the decoded point and the matched curve, so every
//! encoding of a key yields the same result.

use std::fmt::Display;

use base64::Engine;
use sha2::{Digest, Sha256};

use crate::{
    curve::CurveParameters,
    matcher,
    registry::{CurveRegistry, RegistryEntry},
    spki::{DomainParameters, KeyInfo, SpecifiedCurve},
    Result,
};

/// A SHA-256 key fingerprint, displayed like OpenSSH does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of_key(registry: &CurveRegistry, key: &KeyInfo) -> Result<Self> {
        let curve = key.curve(registry)?;
        Self::of_resolved(registry, &curve, key.public_key())
    }

    /// The fingerprint of `public_key` on an already resolved `curve`.
    pub fn of_resolved(
        registry: &CurveRegistry,
        curve: &CurveParameters,
        public_key: &[u8],
    ) -> Result<Self> {
        let normalized = Normalized::new(registry, curve, public_key)?;
        let encoding = match normalized.ssh_wire_encoding() {
            Some(wire) => wire,
            None => normalized.spki()?,
        };
        Ok(Self(Sha256::digest(encoding).into()))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = base64::prelude::BASE64_STANDARD_NO_PAD.encode(self.0);
        write!(f, "SHA256:{encoded}")
    }
}

/// `ecdsa-sha2-nistpXXX <base64>`, or `None` when SSH has no name for the
/// curve.
pub fn ssh_public_key_line(registry: &CurveRegistry, key: &KeyInfo) -> Result<Option<String>> {
    let curve = key.curve(registry)?;
    let normalized = Normalized::new(registry, &curve, key.public_key())?;
    Ok(normalized.ssh_wire_encoding().map(|wire| {
        let ssh_name = normalized
            .entry
            .and_then(|entry| entry.ssh_name)
            .unwrap_or_default();
        let encoded = base64::prelude::BASE64_STANDARD.encode(wire);
        format!("ecdsa-sha2-{ssh_name} {encoded}")
    }))
}

/// The key's curve looked up in the registry and its point uncompressed.
struct Normalized<'a> {
    curve: &'a CurveParameters,
    entry: Option<&'a RegistryEntry>,
    point: Vec<u8>,
}

impl<'a> Normalized<'a> {
    fn new(
        registry: &'a CurveRegistry,
        curve: &'a CurveParameters,
        public_key: &[u8],
    ) -> Result<Self> {
        let point = curve.decode_point(public_key)?.to_encoded(false);
        let entry = matcher::match_parameters(registry, curve);
        Ok(Self {
            curve,
            entry,
            point,
        })
    }

    /// <https://datatracker.ietf.org/doc/html/rfc5656#section-3.1>
    fn ssh_wire_encoding(&self) -> Option<Vec<u8>> {
        let ssh_name = self.entry?.ssh_name?;
        let mut wire = Vec::new();
        write_string(&mut wire, format!("ecdsa-sha2-{ssh_name}"));
        write_string(&mut wire, ssh_name);
        write_string(&mut wire, &self.point);
        Some(wire)
    }

    /// Curves without a name are spelled out in one fixed form, so the
    /// seed, the generator encoding and the cofactor field do not matter.
    fn spki(&self) -> Result<Vec<u8>> {
        let parameters = match self.entry {
            Some(entry) => DomainParameters::Named(*entry.id.oid()),
            None => DomainParameters::Explicit(SpecifiedCurve::from_parameters(self.curve)?),
        };
        KeyInfo::new(parameters, self.point.clone()).serialize()
    }
}

/// An SSH `string`: a `uint32` length followed by the bytes.
fn write_string(out: &mut Vec<u8>, data: impl AsRef<[u8]>) {
    let data = data.as_ref();
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(data);
}
