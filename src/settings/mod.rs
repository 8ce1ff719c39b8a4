//! Saved generation defaults.

mod file;

use crate::pass::Policy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// Policy for a single generation request.
    pub fn policy(&self) -> Policy {
        Policy::new(
            self.pass_length,
            self.include_upper,
            self.include_lower,
            self.include_digits,
            self.include_symbols,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        let policy = Policy::default();
        Self {
            pass_length: policy.length,
            number_of_passwords: 1,
            include_upper: policy.include_upper,
            include_lower: policy.include_lower,
            include_digits: policy.include_digits,
            include_symbols: policy.include_symbols,
        }
    }
}
