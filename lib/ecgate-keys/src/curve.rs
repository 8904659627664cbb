//! Short Weierstrass curves `y² = x³ + ax + b` over prime fields and
//! SEC 1 point encodings.
//! <https://www.secg.org/sec1-v2.pdf>

use std::fmt::Debug;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::ConstantTimeEq;

use crate::{field::PrimeField, Error, Result};

/// Largest field accepted for explicit parameters, in bits.
pub const MAX_FIELD_BITS: u64 = 1024;

const TAG_INFINITY: u8 = 0x00;
const TAG_COMPRESSED_EVEN: u8 = 0x02;
const TAG_COMPRESSED_ODD: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_HYBRID_EVEN: u8 = 0x06;
const TAG_HYBRID_ODD: u8 = 0x07;

/// A point in affine coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffinePoint {
    Infinity,
    Finite { x: BigUint, y: BigUint },
}

/// How a point was (or should be) encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    Infinity,
    Compressed,
    Uncompressed,
    Hybrid,
}

impl PointFormat {
    pub fn of_encoding(bytes: &[u8]) -> Option<Self> {
        match bytes.first()? {
            &TAG_INFINITY => Some(Self::Infinity),
            &TAG_COMPRESSED_EVEN | &TAG_COMPRESSED_ODD => Some(Self::Compressed),
            &TAG_UNCOMPRESSED => Some(Self::Uncompressed),
            &TAG_HYBRID_EVEN | &TAG_HYBRID_ODD => Some(Self::Hybrid),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Infinity => "infinity",
            Self::Compressed => "compressed",
            Self::Uncompressed => "uncompressed",
            Self::Hybrid => "hybrid",
        }
    }
}

/// The curve equation, enough to decode and check points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Equation {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
}

impl Equation {
    fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        if p.bits() > MAX_FIELD_BITS {
            return Err(Error::InvalidParameters(format!(
                "field of {} bits is too large",
                p.bits()
            )));
        }
        if p <= BigUint::from(3_u32) || !p.bit(0) {
            return Err(Error::InvalidParameters(format!(
                "field modulus must be an odd prime"
            )));
        }
        let field = PrimeField::new(p);
        if !field.contains(&a) || !field.contains(&b) {
            return Err(Error::InvalidParameters(format!(
                "curve coefficients must be smaller than the field modulus"
            )));
        }

        // 4a³ + 27b² ≠ 0
        let a3 = field.mul(&field.mul(&a, &a), &a);
        let b2 = field.mul(&b, &b);
        let discriminant = field.add(
            &field.mul(&BigUint::from(4_u32), &a3),
            &field.mul(&BigUint::from(27_u32), &b2),
        );
        if discriminant.is_zero() {
            return Err(Error::InvalidParameters(format!("curve is singular")));
        }

        Ok(Self { field, a, b })
    }

    fn contains(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Infinity => true,
            AffinePoint::Finite { x, y } => {
                self.field.contains(x)
                    && self.field.contains(y)
                    && self.field.mul(y, y) == self.field.weierstrass_rhs(x, &self.a, &self.b)
            }
        }
    }

    fn decode_point(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let len = self.field.byte_len();
        let Some((&tag, rest)) = bytes.split_first() else {
            return Err(Error::InvalidPoint(format!("empty point encoding")));
        };

        let point = match tag {
            TAG_INFINITY if rest.is_empty() => AffinePoint::Infinity,
            TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD if rest.len() == len => {
                let x = BigUint::from_bytes_be(rest);
                if !self.field.contains(&x) {
                    return Err(Error::InvalidPoint(format!("x coordinate out of range")));
                }
                let rhs = self.field.weierstrass_rhs(&x, &self.a, &self.b);
                let Some(y) = self.field.sqrt(&rhs) else {
                    return Err(Error::InvalidPoint(format!("x coordinate is not on the curve")));
                };
                let want_odd = tag == TAG_COMPRESSED_ODD;
                let y = if y.bit(0) == want_odd || y.is_zero() {
                    y
                } else {
                    self.field.sub(&BigUint::zero(), &y)
                };
                if y.bit(0) != want_odd {
                    return Err(Error::InvalidPoint(format!("no y coordinate with requested parity")));
                }
                AffinePoint::Finite { x, y }
            }
            TAG_UNCOMPRESSED | TAG_HYBRID_EVEN | TAG_HYBRID_ODD if rest.len() == 2 * len => {
                let (x, y) = rest.split_at(len);
                let (x, y) = (BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));
                if tag != TAG_UNCOMPRESSED && y.bit(0) != (tag == TAG_HYBRID_ODD) {
                    return Err(Error::InvalidPoint(format!(
                        "hybrid encoding tag does not match y parity"
                    )));
                }
                AffinePoint::Finite { x, y }
            }
            _ => {
                return Err(Error::InvalidPoint(format!(
                    "invalid encoding: tag {tag:#04x} with {} bytes for a {len} byte field",
                    rest.len()
                )))
            }
        };

        if !self.contains(&point) {
            return Err(Error::InvalidPoint(format!("point is not on the curve")));
        }
        Ok(point)
    }

    fn encode_point(&self, point: &AffinePoint, compress: bool) -> Vec<u8> {
        match point {
            AffinePoint::Infinity => vec![TAG_INFINITY],
            AffinePoint::Finite { x, y } => {
                let mut out = Vec::with_capacity(1 + 2 * self.field.byte_len());
                if compress {
                    out.push(if y.bit(0) {
                        TAG_COMPRESSED_ODD
                    } else {
                        TAG_COMPRESSED_EVEN
                    });
                    out.extend(self.field.to_fixed_bytes(x));
                } else {
                    out.push(TAG_UNCOMPRESSED);
                    out.extend(self.field.to_fixed_bytes(x));
                    out.extend(self.field.to_fixed_bytes(y));
                }
                out
            }
        }
    }
}

/// Elliptic curve domain parameters: field, coefficients, generator,
/// order and cofactor.
#[derive(Clone, PartialEq, Eq)]
pub struct CurveParameters {
    equation: Equation,
    generator_x: BigUint,
    generator_y: BigUint,
    order: BigUint,
    cofactor: BigUint,
}

impl CurveParameters {
    /// Validates and builds parameters from an encoded generator, which may
    /// use any SEC 1 point format. A missing cofactor is derived from the
    /// Hasse bound.
    pub fn from_encoded_generator(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: &[u8],
        order: BigUint,
        cofactor: Option<BigUint>,
    ) -> Result<Self> {
        let equation = Equation::new(p, a, b)?;
        let AffinePoint::Finite { x, y } = equation
            .decode_point(generator)
            .map_err(|err| Error::InvalidParameters(format!("invalid generator: {err}")))?
        else {
            return Err(Error::InvalidParameters(format!(
                "generator is the point at infinity"
            )));
        };
        if order <= BigUint::one() {
            return Err(Error::InvalidParameters(format!("order must be larger than 1")));
        }

        let cofactor = match cofactor {
            Some(cofactor) if cofactor.is_zero() => {
                return Err(Error::InvalidParameters(format!("cofactor must not be 0")));
            }
            Some(cofactor) => cofactor,
            None => hasse_cofactor(equation.field.modulus(), &order),
        };

        Ok(Self {
            equation,
            generator_x: x,
            generator_y: y,
            order,
            cofactor,
        })
    }

    /// Builds parameters from constants that are known to be valid.
    pub(crate) fn from_trusted(
        p: &[u8],
        a: &[u8],
        b: &[u8],
        (gx, gy): (&[u8], &[u8]),
        order: &[u8],
        cofactor: u32,
    ) -> Self {
        Self {
            equation: Equation {
                field: PrimeField::new(BigUint::from_bytes_be(p)),
                a: BigUint::from_bytes_be(a),
                b: BigUint::from_bytes_be(b),
            },
            generator_x: BigUint::from_bytes_be(gx),
            generator_y: BigUint::from_bytes_be(gy),
            order: BigUint::from_bytes_be(order),
            cofactor: BigUint::from(cofactor),
        }
    }

    pub fn prime(&self) -> &BigUint {
        self.equation.field.modulus()
    }

    pub fn a(&self) -> &BigUint {
        &self.equation.a
    }

    pub fn b(&self) -> &BigUint {
        &self.equation.b
    }

    pub fn generator(&self) -> AffinePoint {
        AffinePoint::Finite {
            x: self.generator_x.clone(),
            y: self.generator_y.clone(),
        }
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    pub fn field_bits(&self) -> u64 {
        self.prime().bits()
    }

    /// Length of an encoded field element in octets.
    pub fn field_len(&self) -> usize {
        self.equation.field.byte_len()
    }

    /// Whether both parameter sets describe the same curve: same order,
    /// cofactor, coefficients and generator.
    pub fn is_equivalent(&self, other: &CurveParameters) -> bool {
        self.order == other.order
            && self.cofactor == other.cofactor
            && self.equation.a == other.equation.a
            && self.equation.b == other.equation.b
            && self.generator_x == other.generator_x
            && self.generator_y == other.generator_y
    }

    /// Checks that the trusted constants actually describe a curve with
    /// the generator on it.
    pub(crate) fn validate(&self) -> Result<()> {
        let equation = Equation::new(
            self.prime().clone(),
            self.equation.a.clone(),
            self.equation.b.clone(),
        )?;
        if !equation.contains(&self.generator()) {
            return Err(Error::InvalidParameters(format!("generator is not on the curve")));
        }
        Ok(())
    }

    /// Decodes a SEC 1 encoded point, checking that it is on this curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<CurvePoint<'_>> {
        let point = self.equation.decode_point(bytes)?;
        Ok(CurvePoint { curve: self, point })
    }

    /// Encodes the generator the same way an explicit parameter set does.
    pub fn encode_generator(&self, compress: bool) -> Vec<u8> {
        self.equation.encode_point(&self.generator(), compress)
    }
}

impl Debug for CurveParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveParameters")
            .field("p", &format_args!("{:x}", self.prime()))
            .field("a", &format_args!("{:x}", self.equation.a))
            .field("b", &format_args!("{:x}", self.equation.b))
            .field("gx", &format_args!("{:x}", self.generator_x))
            .field("gy", &format_args!("{:x}", self.generator_y))
            .field("n", &format_args!("{:x}", self.order))
            .field("h", &format_args!("{}", self.cofactor))
            .finish()
    }
}

/// `⌊(√p + 1)² / n⌋`, the cofactor implied by the Hasse bound.
fn hasse_cofactor(p: &BigUint, order: &BigUint) -> BigUint {
    let root = p.sqrt();
    let bound = p + (root << 1_usize) + 1_u32;
    bound / order
}

/// A point together with the curve it was decoded on.
///
/// Points are only comparable when their curves are equivalent; comparing
/// points of different curves is an error rather than an inequality.
#[derive(Clone)]
pub struct CurvePoint<'c> {
    curve: &'c CurveParameters,
    point: AffinePoint,
}

impl<'c> CurvePoint<'c> {
    pub fn curve(&self) -> &'c CurveParameters {
        self.curve
    }

    pub fn affine(&self) -> &AffinePoint {
        &self.point
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self.point, AffinePoint::Infinity)
    }

    pub fn to_encoded(&self, compress: bool) -> Vec<u8> {
        self.curve.equation.encode_point(&self.point, compress)
    }

    /// Compares affine coordinates in constant time over fixed-length
    /// encodings.
    pub fn ct_eq(&self, other: &CurvePoint<'_>) -> Result<bool> {
        if !self.curve.is_equivalent(other.curve) {
            return Err(Error::CurveMismatch);
        }

        match (&self.point, &other.point) {
            (AffinePoint::Infinity, AffinePoint::Infinity) => Ok(true),
            (AffinePoint::Infinity, _) | (_, AffinePoint::Infinity) => Ok(false),
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                let len = self.curve.field_len().max(other.curve.field_len());
                let mut lhs = crate::field::to_fixed_bytes(x1, len);
                lhs.extend(crate::field::to_fixed_bytes(y1, len));
                let mut rhs = crate::field::to_fixed_bytes(x2, len);
                rhs.extend(crate::field::to_fixed_bytes(y2, len));
                Ok(lhs.ct_eq(&rhs).into())
            }
        }
    }
}

impl Debug for CurvePoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.point {
            AffinePoint::Infinity => f.write_str("CurvePoint(infinity)"),
            AffinePoint::Finite { x, y } => write!(f, "CurvePoint({x:x}, {y:x})"),
        }
    }
}
