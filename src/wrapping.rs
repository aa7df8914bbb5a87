// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Signed 64-bit wraparound integers computed on top of `BigInt`.

use crate::error::WrapError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Num;
use std::fmt::{Display, Formatter};
use std::ops::Shl;
use std::str::FromStr;

type Word = u64;

/// Reduces `value` modulo 2^64 and reinterprets the result as a signed two's-complement number.
///
/// Only the least significant word of the magnitude survives the reduction. Negative values
/// are the two's complement of their magnitude.
#[inline]
pub fn normalize(value: &BigInt) -> i64 {
    // iter_u64_digits returns lsb first
    let lsb: Word = value.magnitude().iter_u64_digits().next().unwrap_or(0);
    let word = if value.sign() == Sign::Minus {
        lsb.wrapping_neg()
    } else {
        lsb
    };
    word as i64
}

/// An immutable signed 64-bit integer with wraparound semantics.
///
/// Every operation computes the exact result on the arbitrary precision substrate first
/// and wraps it once at the end. In particular [`WrappingInt64::power`] does *not* wrap
/// after each multiplication.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct WrappingInt64 {
    value: i64,
}

impl WrappingInt64 {
    pub const BITS: u32 = Word::BITS;
    /// 2^63 - 1
    pub const MAX: Self = Self { value: i64::MAX };
    /// -2^63
    pub const MIN: Self = Self { value: i64::MIN };
    pub const ZERO: Self = Self { value: 0 };
    pub const ONE: Self = Self { value: 1 };

    /// The modulus 2^64 that all results are reduced by.
    pub fn modulus() -> BigUint {
        BigUint::from(1u32).shl(Self::BITS as usize)
    }

    #[inline]
    pub fn from_big(value: &BigInt) -> Self {
        Self {
            value: normalize(value),
        }
    }

    #[inline]
    pub fn to_i64(self) -> i64 {
        self.value
    }

    #[inline]
    pub fn to_big(self) -> BigInt {
        BigInt::from(self.value)
    }

    pub fn add(self, other: Self) -> Self {
        Self::from_big(&(self.to_big() + other.to_big()))
    }

    pub fn multiply(self, other: Self) -> Self {
        Self::from_big(&(self.to_big() * other.to_big()))
    }

    /// Computes the exact power `self^k` and wraps the result.
    pub fn power(self, k: i64) -> Result<Self, WrapError> {
        let exponent = u32::try_from(k).map_err(|_| WrapError::InvalidExponent(k))?;
        Ok(Self::from_big(&self.to_big().pow(exponent)))
    }
}

impl From<i64> for WrappingInt64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self { value }
    }
}

impl From<u64> for WrappingInt64 {
    fn from(value: u64) -> Self {
        Self {
            value: value as i64,
        }
    }
}

impl FromStr for WrappingInt64 {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BigInt::from_str_radix(s, 10)
            .map(|v| Self::from_big(&v))
            .map_err(|_| WrapError::Parse(s.to_string()))
    }
}

impl Display for WrappingInt64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
