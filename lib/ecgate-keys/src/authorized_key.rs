use num_bigint::BigUint;
use subtle::ConstantTimeEq;
use tracing::trace;

use crate::{
    canonical::{canonicalize, canonicalize_resolved},
    curve::{AffinePoint, CurveParameters},
    equality::points_equal_on,
    fingerprint::Fingerprint,
    registry::CurveRegistry,
    spki::{DomainParameters, KeyInfo, SpecifiedCurve},
    Result,
};

/// The key that is allowed to log in.
///
/// It is validated once when loaded; afterwards it is only read.
#[derive(Debug, Clone)]
pub struct AuthorizedKey {
    key: KeyInfo,
    curve: CurveParameters,
    canonical_der: Vec<u8>,
    fingerprint: Fingerprint,
}

/// The outcome of checking one candidate key.
#[derive(Debug)]
pub struct Verdict {
    /// `None` if the candidate was rejected before its curve was resolved.
    pub fingerprint: Option<Fingerprint>,
    pub result: Result<bool>,
}

impl AuthorizedKey {
    /// Validates `key`: its curve must be known or valid, and its point must
    /// lie on that curve.
    pub fn new(registry: &CurveRegistry, key: KeyInfo) -> Result<Self> {
        let curve = key.curve(registry)?.into_owned();
        curve.decode_point(key.public_key())?;

        let fingerprint = Fingerprint::of_resolved(registry, &curve, key.public_key())?;
        let canonical_der = canonicalize(registry, &key).serialize()?;
        Ok(Self {
            key,
            curve,
            canonical_der,
            fingerprint,
        })
    }

    /// Loads the key from PEM or DER.
    pub fn load(registry: &CurveRegistry, content: &[u8]) -> Result<Self> {
        Self::new(registry, KeyInfo::from_pem_or_der(content)?)
    }

    pub fn key(&self) -> &KeyInfo {
        &self.key
    }

    pub fn canonical_der(&self) -> &[u8] {
        &self.canonical_der
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Whether `candidate` is this key, in whatever encoding.
    pub fn matches(
        &self,
        registry: &CurveRegistry,
        candidate: &KeyInfo,
        fast_path: bool,
    ) -> Result<bool> {
        self.verify(registry, candidate, fast_path).result
    }

    /// Checks `candidate`, resolving its curve at most once.
    ///
    /// Explicit parameters whose coefficients, order, cofactor or generator
    /// x-coordinate differ from the allowed curve are rejected before
    /// anything is decoded. With `fast_path`, identical canonical encodings
    /// are accepted without decoding any points. Everything else compares
    /// the decoded points like [`crate::points_equal`].
    pub fn verify(&self, registry: &CurveRegistry, candidate: &KeyInfo, fast_path: bool) -> Verdict {
        if let DomainParameters::Explicit(specified) = candidate.parameters() {
            if !self.may_be_equivalent(specified) {
                trace!("Explicit parameters differ from the allowed curve");
                return Verdict {
                    fingerprint: None,
                    result: Ok(false),
                };
            }
        }

        let curve = match candidate.curve(registry) {
            Ok(curve) => curve,
            Err(err) => {
                return Verdict {
                    fingerprint: None,
                    result: Err(err),
                }
            }
        };
        let fingerprint = Fingerprint::of_resolved(registry, &curve, candidate.public_key()).ok();
        let result = self.matches_on(registry, candidate, &curve, fast_path);
        Verdict {
            fingerprint,
            result,
        }
    }

    fn matches_on(
        &self,
        registry: &CurveRegistry,
        candidate: &KeyInfo,
        curve: &CurveParameters,
        fast_path: bool,
    ) -> Result<bool> {
        if fast_path {
            let canonical = canonicalize_resolved(registry, candidate, curve).serialize()?;
            if bool::from(self.canonical_der.as_slice().ct_eq(canonical.as_slice())) {
                trace!("Canonical encodings are identical");
                return Ok(true);
            }
        }
        points_equal_on(
            &self.curve,
            self.key.public_key(),
            curve,
            candidate.public_key(),
        )
    }

    /// Compares the fields that equivalent curves share as plain integers,
    /// without validating or decoding anything.
    fn may_be_equivalent(&self, specified: &SpecifiedCurve) -> bool {
        let same = |bytes: &[u8], value: &BigUint| BigUint::from_bytes_be(bytes) == *value;
        let AffinePoint::Finite { x: generator_x, .. } = self.curve.generator() else {
            return false;
        };

        same(specified.curve.a.as_bytes(), self.curve.a())
            && same(specified.curve.b.as_bytes(), self.curve.b())
            && same(specified.order.as_bytes(), self.curve.order())
            && specified
                .cofactor
                .as_ref()
                .map_or(true, |cofactor| same(cofactor.as_bytes(), self.curve.cofactor()))
            && encoded_x(specified.base.as_bytes()).is_some_and(|x| same(x, &generator_x))
    }
}

/// The x-coordinate of a compressed, uncompressed or hybrid SEC 1 point.
fn encoded_x(point: &[u8]) -> Option<&[u8]> {
    let (&tag, rest) = point.split_first()?;
    match tag {
        0x02 | 0x03 => Some(rest),
        0x04 | 0x06 | 0x07 if rest.len() % 2 == 0 => Some(&rest[..rest.len() / 2]),
        _ => None,
    }
}
