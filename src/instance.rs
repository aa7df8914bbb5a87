// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use crate::error::InstanceError;
use crate::parser::parse_ints;
use crate::wrapping::WrappingInt64;
use num_bigint::{BigInt, BigUint, RandBigInt};
use rand::Rng;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// File that the benchmark runner writes to and reads from unless told otherwise.
pub const DEFAULT_FILENAME: &str = "polynomial_data.txt";

/// One benchmark problem: `P(x) = 1 + coeffs[0]*x + ... + coeffs[n-1]*x^n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Degree of the polynomial, always equal to `coeffs.len()`.
    pub n: usize,
    /// Number of decimal digits the evaluation point was drawn with.
    pub d: u32,
    pub coeffs: Vec<BigInt>,
    pub x: BigInt,
}

/// Returns `[1, 2, ..., n]`.
pub fn generate_coefficients(n: usize) -> Vec<BigInt> {
    (1..=n).map(BigInt::from).collect()
}

/// Draws `x` uniformly from `[0, 10^d - 1]`.
pub fn random_point<R: Rng + ?Sized>(d: u32, rng: &mut R) -> BigInt {
    let bound = BigUint::from(10u32).pow(d);
    BigInt::from(rng.gen_biguint_below(&bound))
}

impl Instance {
    /// Creates an instance with coefficients `[1..n]` and a random `d`-digit evaluation point.
    pub fn generate<R: Rng + ?Sized>(n: usize, d: u32, rng: &mut R) -> Self {
        Self::with_coeffs(d, generate_coefficients(n), random_point(d, rng))
    }

    pub fn with_coeffs(d: u32, coeffs: Vec<BigInt>, x: BigInt) -> Self {
        Self {
            n: coeffs.len(),
            d,
            coeffs,
            x,
        }
    }

    /// The evaluation point as seen by the evaluators.
    pub fn x(&self) -> WrappingInt64 {
        WrappingInt64::from_big(&self.x)
    }

    pub fn to_text(&self) -> String {
        let coeffs: Vec<String> = self.coeffs.iter().map(|c| c.to_string()).collect();
        format!("{}\n{}\n{}\n{}\n", self.n, self.d, coeffs.join(" "), self.x)
    }

    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<()> {
        out.write_all(self.to_text().as_bytes())?;
        out.flush()
    }

    pub fn save(&self, filename: impl AsRef<Path>) -> Result<(), InstanceError> {
        let filename = filename.as_ref();
        let file = std::fs::File::create(filename)?;
        self.write_to(std::io::BufWriter::new(file))?;
        debug!(path = %filename.display(), n = self.n, d = self.d, "saved instance");
        Ok(())
    }

    pub fn load(filename: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let filename = filename.as_ref();
        let content = std::fs::read(filename)?;
        let instance = Self::parse(&content)?;
        debug!(path = %filename.display(), n = instance.n, d = instance.d, "loaded instance");
        Ok(instance)
    }

    /// Parses the four line instance format:
    /// degree, digit count, space separated coefficients and the evaluation point.
    pub fn parse(content: &[u8]) -> Result<Self, InstanceError> {
        let mut n: Option<usize> = None;
        let mut d: Option<u32> = None;
        let mut coeffs: Option<Vec<BigInt>> = None;
        let mut x: Option<BigInt> = None;

        // anything after the evaluation point is ignored
        for (line_count, raw) in content.split(|&b| b == b'\n').take(4).enumerate() {
            let line_nr = line_count + 1;
            let line = std::str::from_utf8(raw)
                .map_err(|e| InstanceError::format(line_nr, format!("invalid UTF-8: {e}")))?
                .trim();
            match line_count {
                0 => {
                    let degree = parse_single(line_nr, line, "degree n")?;
                    let degree = usize::try_from(&degree)
                        .ok()
                        .filter(|&v| v > 0)
                        .ok_or_else(|| {
                            InstanceError::format(
                                line_nr,
                                format!("degree n must be a positive integer, got {degree}"),
                            )
                        })?;
                    n = Some(degree);
                }
                1 => {
                    let digits = parse_single(line_nr, line, "digit count d")?;
                    let digits = u32::try_from(&digits).map_err(|_| {
                        InstanceError::format(
                            line_nr,
                            format!("digit count d must be a non-negative integer, got {digits}"),
                        )
                    })?;
                    d = Some(digits);
                }
                2 => {
                    let values = parse_ints(line.as_bytes())
                        .map(|r| {
                            r.map_err(|token| {
                                InstanceError::format(
                                    line_nr,
                                    format!("coefficient {token:?} is not an integer"),
                                )
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    coeffs = Some(values);
                }
                _ => {
                    x = Some(parse_single(line_nr, line, "evaluation point x")?);
                }
            }
        }

        let n = n.ok_or_else(|| missing(1, "degree n"))?;
        let d = d.ok_or_else(|| missing(2, "digit count d"))?;
        let coeffs = coeffs.ok_or_else(|| missing(3, "coefficients"))?;
        let x = x.ok_or_else(|| missing(4, "evaluation point x"))?;
        if coeffs.len() != n {
            return Err(InstanceError::format(
                3,
                format!("expected {n} coefficients, found {}", coeffs.len()),
            ));
        }
        Ok(Self { n, d, coeffs, x })
    }
}

fn missing(line: usize, what: &str) -> InstanceError {
    InstanceError::format(line, format!("missing {what}"))
}

/// A line that must contain exactly one integer.
fn parse_single(line_nr: usize, line: &str, what: &str) -> Result<BigInt, InstanceError> {
    let mut tokens = parse_ints(line.as_bytes());
    match (tokens.next(), tokens.next()) {
        (Some(Ok(value)), None) => Ok(value),
        (None, _) => Err(missing(line_nr, what)),
        (Some(Err(token)), _) => Err(InstanceError::format(
            line_nr,
            format!("{what} {token:?} is not an integer"),
        )),
        (Some(Ok(_)), Some(_)) => Err(InstanceError::format(
            line_nr,
            format!("expected a single value for {what}, found {line:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    fn format_error_line(content: &[u8]) -> usize {
        match Instance::parse(content) {
            Err(InstanceError::Format { line, .. }) => line,
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_coefficients() {
        assert_eq!(generate_coefficients(3), ints(&[1, 2, 3]));
        assert!(generate_coefficients(0).is_empty());
    }

    #[test]
    fn test_random_point_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for d in [1u32, 2, 5, 30] {
            let bound = BigInt::from(10).pow(d);
            for _ in 0..100 {
                let x = random_point(d, &mut rng);
                assert!(x >= BigInt::from(0) && x < bound, "{x} out of range for d={d}");
            }
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let a = Instance::generate(5, 8, &mut StdRng::seed_from_u64(42));
        let b = Instance::generate(5, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.n, 5);
        assert_eq!(a.coeffs, ints(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_text_format() {
        let inst = Instance::with_coeffs(2, ints(&[1, 2, 3]), BigInt::from(42));
        assert_eq!(inst.to_text(), "3\n2\n1 2 3\n42\n");
        assert_eq!(Instance::parse(inst.to_text().as_bytes()).unwrap(), inst);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let inst = Instance::parse(b"  3\n2 \n 1   2 3 \n42\n\n").unwrap();
        assert_eq!(inst.n, 3);
        assert_eq!(inst.d, 2);
        assert_eq!(inst.coeffs, ints(&[1, 2, 3]));
        assert_eq!(inst.x(), WrappingInt64::from(42i64));
    }

    #[test]
    fn test_parse_errors() {
        // non-numeric coefficient
        assert_eq!(format_error_line(b"3\n2\n1 x 3\n42\n"), 3);
        // wrong number of coefficients
        assert_eq!(format_error_line(b"3\n2\n1 2\n42\n"), 3);
        // missing evaluation point
        assert_eq!(format_error_line(b"3\n2\n1 2 3\n"), 4);
        // missing everything
        assert_eq!(format_error_line(b""), 1);
        // degree must be positive
        assert_eq!(format_error_line(b"0\n2\n\n42\n"), 1);
        assert_eq!(format_error_line(b"-3\n2\n1 2 3\n42\n"), 1);
        // two values where one is expected
        assert_eq!(format_error_line(b"3\n2 4\n1 2 3\n42\n"), 2);
        assert_eq!(format_error_line(b"3\n2\n1 2 3\nforty-two\n"), 4);
    }

    #[test]
    fn test_parse_invalid_utf8() {
        assert_eq!(format_error_line(b"3\n2\n1 \xff 3\n42\n"), 3);
        assert_eq!(format_error_line(b"\xfe\n2\n1 2 3\n42\n"), 1);
        // trailing lines are never looked at
        let inst = Instance::parse(b"3\n2\n1 2 3\n42\n\xff\xfe\n").unwrap();
        assert_eq!(inst.coeffs, ints(&[1, 2, 3]));
        assert_eq!(inst.x, BigInt::from(42));
    }

    #[test]
    fn test_format_error_message() {
        let err = Instance::parse(b"3\n2\n1 two 3\n42\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed instance file, line 3: coefficient \"two\" is not an integer"
        );
    }
}
