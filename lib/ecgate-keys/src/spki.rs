//! `SubjectPublicKeyInfo` for elliptic curve keys.
//!
//! ```text
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!     algorithm         AlgorithmIdentifier,
//!     subjectPublicKey  BIT STRING }
//!
//! AlgorithmIdentifier ::= SEQUENCE {
//!     algorithm   OBJECT IDENTIFIER,   -- id-ecPublicKey
//!     parameters  ECParameters }
//!
//! ECParameters ::= CHOICE {
//!     namedCurve     OBJECT IDENTIFIER,
//!     specifiedCurve SpecifiedECDomain,
//!     implicitlyCA   NULL }             -- not supported
//! ```
//! <https://datatracker.ietf.org/doc/html/rfc5480>, SEC 1 section C.2.

use std::borrow::Cow;

use ::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned, SubjectPublicKeyInfoRef};
use der::{
    asn1::{Any, AnyRef, BitString, ObjectIdentifier, OctetString, Uint},
    Decode, Encode, Sequence, Tag, Tagged,
};
use num_bigint::BigUint;

use crate::{curve::CurveParameters, field::to_fixed_bytes, registry::CurveRegistry, Error, Result};

// ANSI X9.62 1.2.840.10045
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const ID_PRIME_FIELD: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.1.1");
const ID_CHARACTERISTIC_TWO_FIELD: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.1.2");

/// An elliptic curve public key with its domain parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    parameters: DomainParameters,
    public_key: Vec<u8>,
}

/// The domain parameter field: either a reference to a named curve or the
/// parameters spelled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainParameters {
    Named(ObjectIdentifier),
    Explicit(SpecifiedCurve),
}

/// `SpecifiedECDomain` over a prime field. Every field is kept as encoded,
/// so serialization reproduces the input.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct SpecifiedCurve {
    pub version: u64,
    pub field_id: FieldId,
    pub curve: Coefficients,
    /// The generator, as a SEC 1 encoded point.
    pub base: OctetString,
    pub order: Uint,
    pub cofactor: Option<Uint>,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct FieldId {
    pub field_type: ObjectIdentifier,
    /// The prime, for a prime field.
    pub parameters: Any,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct Coefficients {
    pub a: OctetString,
    pub b: OctetString,
    pub seed: Option<BitString>,
}

impl KeyInfo {
    pub fn new(parameters: DomainParameters, public_key: Vec<u8>) -> Self {
        Self {
            parameters,
            public_key,
        }
    }

    /// Parses a DER encoded `SubjectPublicKeyInfo`.
    ///
    /// The point itself is not validated here; that needs the curve.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let info = SubjectPublicKeyInfoRef::from_der(bytes)?;

        let oid = info.algorithm.oid;
        if oid != ID_EC_PUBLIC_KEY {
            return Err(malformed(format!("unsupported key algorithm: {oid}")));
        }
        let Some(parameters) = info.algorithm.parameters else {
            return Err(malformed(format!("missing EC domain parameters")));
        };
        let parameters = DomainParameters::from_any(parameters)?;

        let Some(public_key) = info.subject_public_key.as_bytes() else {
            return Err(malformed(format!("public key is not a whole number of bytes")));
        };

        Ok(Self {
            parameters,
            public_key: public_key.to_vec(),
        })
    }

    /// The DER encoding. Inverse of [`KeyInfo::parse`].
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let info = SubjectPublicKeyInfoOwned {
            algorithm: AlgorithmIdentifierOwned {
                oid: ID_EC_PUBLIC_KEY,
                parameters: Some(self.parameters.to_any()?),
            },
            subject_public_key: BitString::from_bytes(&self.public_key)?,
        };
        Ok(info.to_der()?)
    }

    pub fn parameters(&self) -> &DomainParameters {
        &self.parameters
    }

    /// The SEC 1 encoded public point.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn named_curve(&self) -> Option<&ObjectIdentifier> {
        match &self.parameters {
            DomainParameters::Named(oid) => Some(oid),
            DomainParameters::Explicit(_) => None,
        }
    }

    /// Resolves the domain parameters, looking named curves up in the registry.
    pub fn curve<'r>(&self, registry: &'r CurveRegistry) -> Result<Cow<'r, CurveParameters>> {
        match &self.parameters {
            DomainParameters::Named(oid) => registry
                .lookup_by_identifier(oid)
                .map(Cow::Borrowed)
                .ok_or(Error::UnknownCurve(*oid)),
            DomainParameters::Explicit(curve) => curve.resolve().map(Cow::Owned),
        }
    }
}

impl DomainParameters {
    /// ```text
    /// ECParameters ::= CHOICE {
    ///     namedCurve     OBJECT IDENTIFIER,
    ///     specifiedCurve SpecifiedECDomain,
    ///     implicitlyCA   NULL }
    /// ```
    fn from_any(any: AnyRef<'_>) -> Result<Self> {
        match any.tag() {
            Tag::ObjectIdentifier => Ok(Self::Named(any.decode_as()?)),
            Tag::Sequence => {
                let curve: SpecifiedCurve = any.decode_as()?;
                curve.check()?;
                Ok(Self::Explicit(curve))
            }
            Tag::Null => Err(malformed(format!(
                "implicitlyCA parameters are neither named nor explicit"
            ))),
            tag => Err(malformed(format!("unexpected {tag} in EC parameters"))),
        }
    }

    fn to_any(&self) -> Result<Any> {
        let any = match self {
            Self::Named(oid) => Any::encode_from(oid)?,
            Self::Explicit(curve) => Any::encode_from(curve)?,
        };
        Ok(any)
    }
}

impl SpecifiedCurve {
    /// Spells out `params` in one fixed form: version 1, no seed,
    /// fixed-length coefficients, an uncompressed generator and an explicit
    /// cofactor.
    pub fn from_parameters(params: &CurveParameters) -> Result<Self> {
        let len = params.field_len();
        Ok(Self {
            version: 1,
            field_id: FieldId {
                field_type: ID_PRIME_FIELD,
                parameters: Any::encode_from(&uint(params.prime())?)?,
            },
            curve: Coefficients {
                a: OctetString::new(to_fixed_bytes(params.a(), len))?,
                b: OctetString::new(to_fixed_bytes(params.b(), len))?,
                seed: None,
            },
            base: OctetString::new(params.encode_generator(false))?,
            order: uint(params.order())?,
            cofactor: Some(uint(params.cofactor())?),
        })
    }

    fn check(&self) -> Result<()> {
        if !(1..=3).contains(&self.version) {
            return Err(malformed(format!(
                "unsupported ECParameters version {}",
                self.version
            )));
        }
        let field_type = self.field_id.field_type;
        if field_type == ID_CHARACTERISTIC_TWO_FIELD {
            return Err(malformed(format!(
                "characteristic-two fields are not supported"
            )));
        }
        if field_type != ID_PRIME_FIELD {
            return Err(malformed(format!("unknown field type: {field_type}")));
        }
        self.prime()?;
        Ok(())
    }

    pub fn prime(&self) -> Result<BigUint> {
        let prime: Uint = self.field_id.parameters.decode_as()?;
        Ok(BigUint::from_bytes_be(prime.as_bytes()))
    }

    pub fn order(&self) -> BigUint {
        BigUint::from_bytes_be(self.order.as_bytes())
    }

    pub fn cofactor(&self) -> Option<BigUint> {
        self.cofactor
            .as_ref()
            .map(|cofactor| BigUint::from_bytes_be(cofactor.as_bytes()))
    }

    /// Validates the parameters and decodes the generator.
    pub fn resolve(&self) -> Result<CurveParameters> {
        CurveParameters::from_encoded_generator(
            self.prime()?,
            BigUint::from_bytes_be(self.curve.a.as_bytes()),
            BigUint::from_bytes_be(self.curve.b.as_bytes()),
            self.base.as_bytes(),
            self.order(),
            self.cofactor(),
        )
    }
}

fn uint(value: &BigUint) -> Result<Uint> {
    Ok(Uint::new(&value.to_bytes_be())?)
}

fn malformed(msg: String) -> Error {
    Error::MalformedEncoding(msg)
}
