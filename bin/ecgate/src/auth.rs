//! The login decision for public key authentication.

use std::{path::Path, sync::Arc};

use ecgate_keys::{authorized_key::Verdict, AuthorizedKey, CurveRegistry, Fingerprint, KeyInfo};
use eyre::{Context, Result};
use tracing::{info, warn};

const AUDIT: &str = "ecgate::audit";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid public key")]
    InvalidKey(#[from] ecgate_keys::Error),
    #[error("public key not authorized")]
    UnauthorizedPublicKey,
}

/// Decides whether a presented key is the allowed key.
///
/// Cheap to clone; every clone shares the same registry and allowed key.
#[derive(Clone)]
pub struct Authenticator {
    registry: Arc<CurveRegistry>,
    allowed: Arc<AuthorizedKey>,
    fast_path: bool,
}

impl Authenticator {
    pub fn new(registry: Arc<CurveRegistry>, allowed: AuthorizedKey, fast_path: bool) -> Self {
        Self {
            registry,
            allowed: Arc::new(allowed),
            fast_path,
        }
    }

    pub fn load(registry: Arc<CurveRegistry>, allowed_key: &Path, fast_path: bool) -> Result<Self> {
        let content = std::fs::read(allowed_key)
            .wrap_err_with(|| format!("reading allowed key {}", allowed_key.display()))?;
        let allowed = AuthorizedKey::load(&registry, &content)
            .wrap_err_with(|| format!("invalid allowed key {}", allowed_key.display()))?;
        info!(fingerprint = %allowed.fingerprint(), "Loaded allowed key");
        Ok(Self::new(registry, allowed, fast_path))
    }

    /// Whether `user` may log in with `candidate` (PEM or DER).
    ///
    /// Never fails: every problem with the candidate is a denial. Every
    /// attempt is recorded under the `ecgate::audit` target.
    pub fn is_authorized(&self, user: &str, candidate: &[u8]) -> bool {
        let key = match KeyInfo::from_pem_or_der(candidate) {
            Ok(key) => key,
            Err(err) => {
                audit_denied(user, None, &AuthError::InvalidKey(err));
                return false;
            }
        };
        let Verdict {
            fingerprint,
            result,
        } = self.allowed.verify(&self.registry, &key, self.fast_path);

        match check(result) {
            Ok(()) => {
                info!(
                    target: AUDIT,
                    %user,
                    fingerprint = %display_fingerprint(fingerprint),
                    outcome = "accepted",
                    "Public key accepted"
                );
                true
            }
            Err(err) => {
                audit_denied(user, fingerprint, &err);
                false
            }
        }
    }
}

fn check(result: ecgate_keys::Result<bool>) -> Result<(), AuthError> {
    if result? {
        Ok(())
    } else {
        Err(AuthError::UnauthorizedPublicKey)
    }
}

fn audit_denied(user: &str, fingerprint: Option<Fingerprint>, err: &AuthError) {
    let reason = match err {
        AuthError::InvalidKey(inner) => format!("{err}: {inner}"),
        AuthError::UnauthorizedPublicKey => err.to_string(),
    };
    warn!(
        target: AUDIT,
        %user,
        fingerprint = %display_fingerprint(fingerprint),
        outcome = "denied",
        %reason,
        "Public key denied"
    );
}

fn display_fingerprint(fingerprint: Option<Fingerprint>) -> String {
    fingerprint.map_or_else(|| "none".to_owned(), |fp| fp.to_string())
}
