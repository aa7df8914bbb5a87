// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Three ways of evaluating `P(x) = 1 + c[0]*x + c[1]*x^2 + ... + c[n-1]*x^n`
//! under 64-bit wraparound arithmetic.

use crate::error::EvalError;
use crate::wrapping::WrappingInt64;
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// Term by term evaluation. Every `x^(i+1)` is computed exactly and only wrapped afterward,
/// which makes this by far the slowest method for large degrees.
pub fn brute_force(coeffs: &[BigInt], x: WrappingInt64) -> Result<WrappingInt64, EvalError> {
    if coeffs.is_empty() {
        return Err(EvalError::EmptyCoefficients);
    }
    let mut result = WrappingInt64::ZERO;
    for (i, c) in coeffs.iter().enumerate() {
        let x_pow = x.power(i as i64 + 1)?;
        result = result.add(WrappingInt64::from_big(c).multiply(x_pow));
    }
    Ok(result.add(WrappingInt64::ONE))
}

/// Accumulates the powers of `x` incrementally, wrapping after every multiplication.
///
/// Despite the name this is linear, not binary, exponentiation.
pub fn repeated_squaring(
    coeffs: &[BigInt],
    x: WrappingInt64,
) -> Result<WrappingInt64, EvalError> {
    if coeffs.is_empty() {
        return Err(EvalError::EmptyCoefficients);
    }
    let mut result = WrappingInt64::ONE;
    let mut x_power = x;
    for c in coeffs.iter() {
        result = result.add(WrappingInt64::from_big(c).multiply(x_power));
        x_power = x_power.multiply(x);
    }
    Ok(result)
}

/// Horner's rule: `((c[n-1]*x + c[n-2])*x + ... + c[0])*x + 1`.
pub fn horner(coeffs: &[BigInt], x: WrappingInt64) -> Result<WrappingInt64, EvalError> {
    let (last, rest) = coeffs.split_last().ok_or(EvalError::EmptyCoefficients)?;
    let mut result = WrappingInt64::from_big(last);
    for c in rest.iter().rev() {
        result = result.multiply(x).add(WrappingInt64::from_big(c));
    }
    Ok(result.multiply(x).add(WrappingInt64::ONE))
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    BruteForce,
    RepeatedSquaring,
    Horner,
}

impl Method {
    /// All methods in the order in which they are reported.
    pub const ALL: [Method; 3] = [Method::BruteForce, Method::RepeatedSquaring, Method::Horner];

    pub fn name(&self) -> &'static str {
        match self {
            Method::BruteForce => "Brute Force",
            Method::RepeatedSquaring => "Repeated Squaring",
            Method::Horner => "Horner's Rule",
        }
    }

    pub fn evaluate(
        &self,
        coeffs: &[BigInt],
        x: WrappingInt64,
    ) -> Result<WrappingInt64, EvalError> {
        match self {
            Method::BruteForce => brute_force(coeffs, x),
            Method::RepeatedSquaring => repeated_squaring(coeffs, x),
            Method::Horner => horner(coeffs, x),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
