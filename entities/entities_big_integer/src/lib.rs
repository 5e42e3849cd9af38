//! Entities Layer: Big Integers
//!
//! Provides an arbitrary precision signed integer over decimal digits:
//! - Construction from native integers, digit sequences, text and files
//! - Rendering in big-endian or little-endian digit order
//! - Total ordering
//! - Negation, addition and subtraction
//!
//! Values are plain owned data with no interior mutability, so distinct
//! instances can be read from any number of threads.

pub mod big;
pub mod builder;
mod digits;
pub mod error;
pub mod order;

pub use big::BigInteger;
pub use builder::BigIntegerBuilder;
pub use error::{BigIntegerError, BigIntegerResult};
pub use order::{DigitOrder, Sign};
