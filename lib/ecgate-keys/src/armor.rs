//! Loading keys from PEM, certificates and raw DER.

use der::{Decode, Encode};
use tracing::debug;
use x509_cert::Certificate;

use crate::{spki::KeyInfo, Error, Result};

const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

impl KeyInfo {
    /// Loads a key from PEM (`PUBLIC KEY` or `CERTIFICATE`) or from a raw
    /// DER `SubjectPublicKeyInfo`.
    pub fn from_pem_or_der(content: &[u8]) -> Result<Self> {
        let trimmed = content.trim_ascii_start();
        if !trimmed.starts_with(b"-----BEGIN ") {
            return Self::parse(content);
        }

        let pem = pem::parse(trimmed)
            .map_err(|err| Error::MalformedEncoding(format!("invalid PEM format: {err}")))?;
        match pem.tag() {
            PUBLIC_KEY_LABEL => Self::parse(pem.contents()),
            CERTIFICATE_LABEL => {
                debug!("Extracting public key from certificate");
                Self::parse(&certificate_spki(pem.contents())?)
            }
            other => Err(Error::UnsupportedPem(other.to_owned())),
        }
    }

    pub fn to_pem(&self) -> Result<String> {
        Ok(pem::encode(&pem::Pem::new(
            PUBLIC_KEY_LABEL,
            self.serialize()?,
        )))
    }
}

/// Extracts the DER `SubjectPublicKeyInfo` from an X.509 certificate.
/// <https://datatracker.ietf.org/doc/html/rfc5280#section-4.1>
///
/// Nothing about the certificate is verified.
pub fn certificate_spki(der: &[u8]) -> Result<Vec<u8>> {
    let certificate = Certificate::from_der(der)?;
    Ok(certificate
        .tbs_certificate
        .subject_public_key_info
        .to_der()?)
}
