//! Comparing public keys by the point they encode.

use tracing::trace;

use crate::{curve::CurveParameters, registry::CurveRegistry, spki::KeyInfo, Result};

/// Whether both keys denote the same point on the same curve, no matter how
/// curve and point are encoded.
///
/// Keys on non-equivalent curves are unequal. Named curves missing from the
/// registry are [`crate::Error::UnknownCurve`], points that do not decode
/// on their curve are [`crate::Error::InvalidPoint`].
pub fn points_equal(registry: &CurveRegistry, a: &KeyInfo, b: &KeyInfo) -> Result<bool> {
    let curve_a = a.curve(registry)?;
    let curve_b = b.curve(registry)?;
    points_equal_on(&curve_a, a.public_key(), &curve_b, b.public_key())
}

/// [`points_equal`] for SEC 1 encoded points on curves that are already
/// resolved.
pub fn points_equal_on(
    curve_a: &CurveParameters,
    a: &[u8],
    curve_b: &CurveParameters,
    b: &[u8],
) -> Result<bool> {
    if !curve_a.is_equivalent(curve_b) {
        trace!("Keys are on different curves");
        return Ok(false);
    }

    let point_a = curve_a.decode_point(a)?;
    let point_b = curve_b.decode_point(b)?;
    point_a.ct_eq(&point_b)
}
