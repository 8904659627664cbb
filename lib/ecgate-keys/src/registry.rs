//! The catalog of named curves.

use std::fmt::Display;

use der::asn1::ObjectIdentifier;
use hex_literal::hex;

use crate::{curve::CurveParameters, matcher, Result};

/// A named curve: its canonical name and object identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveIdentifier {
    name: &'static str,
    oid: ObjectIdentifier,
}

impl CurveIdentifier {
    pub fn new(name: &'static str, oid: ObjectIdentifier) -> Self {
        Self { name, oid }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }
}

impl Display for CurveIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.oid)
    }
}

#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub id: CurveIdentifier,
    /// Other names the same identifier is known by.
    pub aliases: &'static [&'static str],
    /// The curve name used by SSH, if SSH defines one.
    /// <https://datatracker.ietf.org/doc/html/rfc5656#section-10.1>
    pub ssh_name: Option<&'static str>,
    pub params: CurveParameters,
}

impl RegistryEntry {
    fn has_name(&self, name: &str) -> bool {
        self.id.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// An immutable set of named curves, searched in a stable order.
///
/// Several identifiers may denote equivalent parameters (the same curve
/// standardized by different bodies). Searches by parameters return the
/// first such entry.
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    entries: Vec<RegistryEntry>,
}

impl CurveRegistry {
    /// The NIST, SEC 2, WTLS and Brainpool prime curves.
    pub fn standard() -> Self {
        let entries = STANDARD_CURVES
            .iter()
            .map(|def| RegistryEntry {
                id: CurveIdentifier::new(def.name, def.oid),
                aliases: def.aliases,
                ssh_name: def.ssh_name,
                params: CurveParameters::from_trusted(
                    def.p,
                    def.a,
                    def.b,
                    def.generator,
                    def.n,
                    def.h,
                ),
            })
            .collect();
        Self { entries }
    }

    /// A registry of custom entries. Every entry is validated.
    pub fn with_entries(entries: Vec<RegistryEntry>) -> Result<Self> {
        for entry in &entries {
            entry.params.validate()?;
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn entry_by_identifier(&self, oid: &ObjectIdentifier) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id.oid == *oid)
    }

    pub fn lookup_by_identifier(&self, oid: &ObjectIdentifier) -> Option<&CurveParameters> {
        self.entry_by_identifier(oid).map(|entry| &entry.params)
    }

    /// Looks up a curve by its name or one of its aliases, ignoring case.
    pub fn lookup_by_name(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.has_name(name))
    }

    /// The first identifier whose parameters are equivalent to `params`.
    pub fn lookup_by_parameters(&self, params: &CurveParameters) -> Option<&CurveIdentifier> {
        matcher::match_parameters(self, params).map(|entry| &entry.id)
    }
}

struct CurveDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    oid: ObjectIdentifier,
    ssh_name: Option<&'static str>,
    p: &'static [u8],
    a: &'static [u8],
    b: &'static [u8],
    generator: (&'static [u8], &'static [u8]),
    n: &'static [u8],
    h: u32,
}

// Parameters from SEC 2 (https://www.secg.org/sec2-v2.pdf), the WAP WTLS
// specification and RFC 5639. The order of this table is the search order.
static STANDARD_CURVES: &[CurveDefinition] = &[
    CurveDefinition {
        name: "secp192r1",
        aliases: &["prime192v1", "P-192"],
        oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"),
        ssh_name: None,
        p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        generator: (
            &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
            &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
        ),
        n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        h: 1,
    },
    CurveDefinition {
        name: "secp224r1",
        aliases: &["P-224"],
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.33"),
        ssh_name: None,
        p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        generator: (
            &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
            &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
        ),
        n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        h: 1,
    },
    CurveDefinition {
        name: "wap-wsg-idm-ecid-wtls12",
        aliases: &[],
        oid: ObjectIdentifier::new_unwrap("2.23.43.1.4.12"),
        ssh_name: None,
        p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        generator: (
            &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
            &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
        ),
        n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        h: 1,
    },
    CurveDefinition {
        name: "secp256r1",
        aliases: &["prime256v1", "P-256"],
        oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"),
        ssh_name: Some("nistp256"),
        p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        generator: (
            &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        ),
        n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        h: 1,
    },
    CurveDefinition {
        name: "secp384r1",
        aliases: &["P-384"],
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.34"),
        ssh_name: Some("nistp384"),
        p: &hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
            "ffffffff0000000000000000ffffffff"
        ),
        a: &hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
            "ffffffff0000000000000000fffffffc"
        ),
        b: &hex!(
            "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
            "c656398d8a2ed19d2a85c8edd3ec2aef"
        ),
        generator: (
            &hex!(
                "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
                "5502f25dbf55296c3a545e3872760ab7"
            ),
            &hex!(
                "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
                "0a60b1ce1d7e819d7a431d7c90ea0e5f"
            ),
        ),
        n: &hex!(
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
            "581a0db248b0a77aecec196accc52973"
        ),
        h: 1,
    },
    CurveDefinition {
        name: "secp521r1",
        aliases: &["P-521"],
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.35"),
        ssh_name: Some("nistp521"),
        p: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffff"
        ),
        a: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "fffc"
        ),
        b: &hex!(
            "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1"
            "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50"
            "3f00"
        ),
        generator: (
            &hex!(
                "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
                "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
                "bd66"
            ),
            &hex!(
                "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
                "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
                "6650"
            ),
        ),
        n: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
            "6409"
        ),
        h: 1,
    },
    CurveDefinition {
        name: "secp256k1",
        aliases: &[],
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.10"),
        ssh_name: None,
        p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        a: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
        generator: (
            &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        ),
        n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        h: 1,
    },
    CurveDefinition {
        name: "brainpoolP256r1",
        aliases: &[],
        oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7"),
        ssh_name: None,
        p: &hex!("a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377"),
        a: &hex!("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9"),
        b: &hex!("26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6"),
        generator: (
            &hex!("8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262"),
            &hex!("547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997"),
        ),
        n: &hex!("a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7"),
        h: 1,
    },
    CurveDefinition {
        name: "brainpoolP384r1",
        aliases: &[],
        oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.11"),
        ssh_name: None,
        p: &hex!(
            "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123"
            "acd3a729901d1a71874700133107ec53"
        ),
        a: &hex!(
            "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f"
            "8aa5814a503ad4eb04a8c7dd22ce2826"
        ),
        b: &hex!(
            "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d5"
            "7cb4390295dbc9943ab78696fa504c11"
        ),
        generator: (
            &hex!(
                "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8"
                "e826e03436d646aaef87b2e247d4af1e"
            ),
            &hex!(
                "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff9912928"
                "0e4646217791811142820341263c5315"
            ),
        ),
        n: &hex!(
            "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7"
            "cf3ab6af6b7fc3103b883202e9046565"
        ),
        h: 1,
    },
    CurveDefinition {
        name: "brainpoolP512r1",
        aliases: &[],
        oid: ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.13"),
        ssh_name: None,
        p: &hex!(
            "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330871"
            "7d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3"
        ),
        a: &hex!(
            "7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc"
            "2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca"
        ),
        b: &hex!(
            "3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a7"
            "2bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723"
        ),
        generator: (
            &hex!(
                "81aee4bdd82ed9645a21322e9c4c6a9385ed9f70b5d916c1b43b62eef4d0098e"
                "ff3b1f78e2d0d48d50d1687b93b97d5f7c6d5047406a5e688b352209bcb9f822"
            ),
            &hex!(
                "7dde385d566332ecc0eabfa9cf7822fdf209f70024a57b1aa000c55b881f8111"
                "b2dcde494a5f485e5bca4bd88a2763aed1ca2b2fa8f0540678cd1e0f3ad80892"
            ),
        ),
        n: &hex!(
            "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330870"
            "553e5c414ca92619418661197fac10471db1d381085ddaddb58796829ca90069"
        ),
        h: 1,
    },
];
