// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::error::EvalError;
use crate::eval::Method;
use crate::instance::Instance;
use crate::wrapping::WrappingInt64;
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result and wall-clock time of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub method: Method,
    pub result: WrappingInt64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, Time: {:.3} milliseconds",
            self.method,
            self.result,
            self.millis()
        )
    }
}

/// Runs a single method and measures how long it takes.
pub fn time_method(
    method: Method,
    coeffs: &[BigInt],
    x: WrappingInt64,
) -> Result<Measurement, EvalError> {
    let start = Instant::now();
    let result = method.evaluate(coeffs, x)?;
    let elapsed = start.elapsed();
    debug!(method = method.name(), %result, ?elapsed, "evaluated");
    Ok(Measurement {
        method,
        result,
        elapsed,
    })
}

/// Evaluates the instance with every method in [`Method::ALL`] order.
pub fn exec_benchmark(instance: &Instance) -> Result<Vec<Measurement>, EvalError> {
    let x = instance.x();
    let measurements = Method::ALL
        .iter()
        .map(|&method| time_method(method, &instance.coeffs, x))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some((first, rest)) = measurements.split_first() {
        for other in rest.iter().filter(|m| m.result != first.result) {
            warn!(
                "{} and {} disagree: {} != {}",
                first.method, other.method, first.result, other.result
            );
        }
    }
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_display() {
        let m = Measurement {
            method: Method::Horner,
            result: WrappingInt64::from(35i64),
            elapsed: Duration::from_micros(1_234_567),
        };
        assert_eq!(format!("{m}"), "Horner's Rule: 35, Time: 1234.567 milliseconds");
    }

    #[test]
    fn test_exec_benchmark_order() {
        let inst = Instance::with_coeffs(1, vec![1.into(), 2.into(), 3.into()], 2.into());
        let ms = exec_benchmark(&inst).unwrap();
        let methods: Vec<_> = ms.iter().map(|m| m.method).collect();
        assert_eq!(methods, Method::ALL);
        assert!(ms.iter().all(|m| m.result.to_i64() == 35));
    }

    #[test]
    fn test_exec_benchmark_empty() {
        let inst = Instance::with_coeffs(1, vec![], 2.into());
        assert_eq!(exec_benchmark(&inst), Err(EvalError::EmptyCoefficients));
    }
}
