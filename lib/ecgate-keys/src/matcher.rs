//! Matching explicit domain parameters against the named curves.

use tracing::debug;

use crate::{
    curve::CurveParameters,
    registry::{CurveRegistry, RegistryEntry},
};

/// Finds the first registry entry whose parameters are equivalent to
/// `target`.
///
/// `None` is an expected outcome: the parameters describe a curve that has
/// no name. The search order is the registry order, so the result is stable.
pub fn match_parameters<'r>(
    registry: &'r CurveRegistry,
    target: &CurveParameters,
) -> Option<&'r RegistryEntry> {
    let found = registry
        .entries()
        .iter()
        .filter(|entry| prefilter(&entry.params, target))
        .find(|entry| entry.params.is_equivalent(target));

    match found {
        Some(entry) => debug!(curve = %entry.id, "Explicit parameters match named curve"),
        None => debug!(
            field_bits = target.field_bits(),
            "Explicit parameters match no named curve"
        ),
    }
    found
}

/// All registry entries equivalent to `target`, in registry order.
///
/// More than one result means the curve is known under several identifiers.
pub fn match_all<'r>(
    registry: &'r CurveRegistry,
    target: &CurveParameters,
) -> Vec<&'r RegistryEntry> {
    registry
        .entries()
        .iter()
        .filter(|entry| prefilter(&entry.params, target))
        .filter(|entry| entry.params.is_equivalent(target))
        .collect()
}

/// Cheap rejection by order and cofactor. The equivalence check alone
/// decides a match.
fn prefilter(candidate: &CurveParameters, target: &CurveParameters) -> bool {
    candidate.order().bits() == target.order().bits() && candidate.cofactor() == target.cofactor()
}
