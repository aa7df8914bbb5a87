mod benchmark;
mod error;
mod eval;
mod instance;
mod parser;
mod wrapping;

pub use benchmark::{Measurement, exec_benchmark, time_method};
pub use error::{EvalError, InstanceError, WrapError};
pub use eval::{Method, brute_force, horner, repeated_squaring};
pub use instance::{DEFAULT_FILENAME, Instance, generate_coefficients, random_point};
pub use parser::parse_ints;
pub use wrapping::{WrappingInt64, normalize};
