//! Password generation and strength scoring.

pub mod charset;
pub mod denylist;
mod error;
mod generate;
mod policy;
pub mod strength;

pub use error::{GenerateError, PolicyError};
pub use generate::{Generator, MAX_ATTEMPTS, generate};
pub use policy::{MAX_LENGTH, MIN_LENGTH, Policy};
pub use strength::{StrengthReport, Tier, score};
