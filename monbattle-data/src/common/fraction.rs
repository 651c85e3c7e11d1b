use std::{
    cmp,
    fmt,
    fmt::Display,
    ops::Mul,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
};
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// An exact ratio for the integer math of stat stages, type matchups, and ball bonuses.
///
/// Data files may write a fraction as `"3/2"`, as a whole number, or as a float. Floats are
/// truncated to a multiple of 1/4096.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Creates a new fraction.
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// The numerator of the fraction.
    pub fn numerator(&self) -> u32 {
        self.num
    }

    /// The denominator of the fraction.
    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// Is the fraction whole (i.e., an integer)?
    pub fn is_whole(&self) -> bool {
        self.den == 1
    }

    /// Simplifies the fraction.
    pub fn simplify(&self) -> Self {
        let gcd = self.num.gcd(&self.den);
        if gcd == 0 {
            return *self;
        }
        Self::new(self.num / gcd, self.den / gcd)
    }

    /// Multiplies an integer by the fraction, truncating the result.
    pub fn apply(&self, value: u32) -> u32 {
        (value as u64 * self.num as u64 / self.den as u64) as u32
    }

    fn cross(a: &Self, b: &Self) -> (u64, u64) {
        (
            a.num as u64 * b.den as u64,
            b.num as u64 * a.den as u64,
        )
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<u32> for Fraction {
    fn from(value: u32) -> Self {
        Self::new(value, 1)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::new((value * 4096f64).trunc() as u32, 4096).simplify()
    }
}

impl FromStr for Fraction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((n, d)) => {
                let n = n
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid numerator: {n}"))?;
                let d: u32 = d
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid denominator: {d}"))?;
                if d == 0 {
                    return Err(Error::msg("denominator cannot be zero"));
                }
                Ok(Self::new(n, d))
            }
            None => Ok(Self::from(
                s.trim()
                    .parse::<u32>()
                    .with_context(|| format!("invalid integer: {s}"))?,
            )),
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = Self::cross(self, other);
        a == b
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let (a, b) = Self::cross(self, other);
        a.cmp(&b)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Mul for Fraction {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.num * rhs.num, self.den * rhs.den).simplify()
    }
}

impl Mul<u32> for Fraction {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self::new(self.num * rhs, self.den).simplify()
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_whole() {
            serializer.serialize_u32(self.num)
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer, a float, or a fraction string")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
        Ok(Self::Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v < 0f64 {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(Self::Value::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
