//! Policy-driven password generation with weak-pattern rejection and
//! entropy-based strength scoring.

pub mod cli;
pub mod pass;
pub mod random;
pub mod settings;
pub mod terminal;
