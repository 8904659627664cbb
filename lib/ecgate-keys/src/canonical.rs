//! Rewriting explicit domain parameters as named curves.

use tracing::debug;

use crate::{
    curve::CurveParameters,
    matcher,
    registry::CurveRegistry,
    spki::{DomainParameters, KeyInfo},
};

/// Replaces explicit domain parameters by the identifier of the named curve
/// they describe, keeping the point bytes as they are.
///
/// Keys that already name their curve, and keys whose parameters match no
/// registry entry (or do not even describe a valid curve), are returned
/// unchanged. Comparing such keys still works through
/// [`crate::points_equal`].
pub fn canonicalize(registry: &CurveRegistry, key: &KeyInfo) -> KeyInfo {
    let DomainParameters::Explicit(specified) = key.parameters() else {
        return key.clone();
    };

    match specified.resolve() {
        Ok(params) => canonicalize_resolved(registry, key, &params),
        Err(err) => {
            debug!(%err, "Explicit parameters do not describe a valid curve");
            key.clone()
        }
    }
}

/// [`canonicalize`] for a key whose curve has already been resolved to
/// `params`.
pub fn canonicalize_resolved(
    registry: &CurveRegistry,
    key: &KeyInfo,
    params: &CurveParameters,
) -> KeyInfo {
    if key.named_curve().is_some() {
        return key.clone();
    }
    match matcher::match_parameters(registry, params) {
        Some(entry) => KeyInfo::new(
            DomainParameters::Named(*entry.id.oid()),
            key.public_key().to_vec(),
        ),
        None => key.clone(),
    }
}
