//! Arithmetic modulo an odd prime.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Upper bound on the number of candidates tried when looking for a
/// quadratic non-residue. For a prime modulus half of all candidates
/// qualify, so hitting this means the modulus is not prime.
const NON_RESIDUE_SEARCH_LIMIT: u32 = 64;

/// Largest `s` with `2^s | p - 1` for which Tonelli-Shanks is attempted.
/// The work grows with `s²`; the largest among the named curves is P-224
/// with 96.
const MAX_TWO_ADICITY: u64 = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PrimeField {
    p: BigUint,
    byte_len: usize,
}

impl PrimeField {
    /// The caller is responsible for `p` being an odd prime.
    pub(crate) fn new(p: BigUint) -> Self {
        let byte_len = (p.bits() as usize).div_ceil(8);
        Self { p, byte_len }
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Length of a field element in octets, as used by SEC 1 encodings.
    pub(crate) fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub(crate) fn contains(&self, x: &BigUint) -> bool {
        x < &self.p
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.p - (b % &self.p)) % &self.p
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    pub(crate) fn pow(&self, a: &BigUint, exponent: &BigUint) -> BigUint {
        a.modpow(exponent, &self.p)
    }

    /// `x³ + ax + b`, the right hand side of the curve equation.
    pub(crate) fn weierstrass_rhs(&self, x: &BigUint, a: &BigUint, b: &BigUint) -> BigUint {
        let x3 = self.mul(&self.mul(x, x), x);
        self.add(&self.add(&x3, &self.mul(a, x)), b)
    }

    /// A square root of `a`, if there is one.
    ///
    /// Every result is checked, so a non-prime modulus yields `None`
    /// instead of a wrong root.
    pub(crate) fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let a = a % &self.p;
        if a.is_zero() {
            return Some(a);
        }

        let root = if self.p.bit(1) {
            // p ≡ 3 (mod 4)
            let exponent = (&self.p + 1_u32) >> 2_usize;
            self.pow(&a, &exponent)
        } else {
            self.tonelli_shanks(&a)?
        };

        (self.mul(&root, &root) == a).then_some(root)
    }

    fn tonelli_shanks(&self, a: &BigUint) -> Option<BigUint> {
        let one = BigUint::one();
        let p_minus_one = &self.p - 1_u32;

        // p - 1 = q * 2^s with q odd
        let s = p_minus_one.trailing_zeros()?;
        if s > MAX_TWO_ADICITY {
            return None;
        }
        let q = &p_minus_one >> s;

        let euler_exponent = &p_minus_one >> 1_usize;
        if self.pow(a, &euler_exponent) != one {
            return None;
        }

        let z = (2..NON_RESIDUE_SEARCH_LIMIT + 2)
            .map(BigUint::from)
            .find(|z| self.pow(z, &euler_exponent) == p_minus_one)?;

        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(a, &q);
        let mut r = self.pow(a, &((&q + 1_u32) >> 1_usize));

        while t != one {
            let mut i = 0;
            let mut t2i = t.clone();
            while t2i != one {
                t2i = self.mul(&t2i, &t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = self.mul(&b, &b);
            }
            m = i;
            c = self.mul(&b, &b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }

    /// Big-endian encoding left-padded to the field length.
    pub(crate) fn to_fixed_bytes(&self, x: &BigUint) -> Vec<u8> {
        to_fixed_bytes(x, self.byte_len)
    }
}

pub(crate) fn to_fixed_bytes(x: &BigUint, len: usize) -> Vec<u8> {
    let bytes = if x.is_zero() { Vec::new() } else { x.to_bytes_be() };
    let mut out = vec![0; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}
