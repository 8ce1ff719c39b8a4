//! Composition policy for a single generation request.

use super::charset::{self, CharacterClass};
use super::error::PolicyError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Policy {
    pub fn new(
        length: usize,
        include_upper: bool,
        include_lower: bool,
        include_digits: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            length,
            include_upper,
            include_lower,
            include_digits,
            include_symbols,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.include_upper,
            CharacterClass::Lower => self.include_lower,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    pub fn enabled_count(&self) -> usize {
        charset::enabled(self).len()
    }

    pub fn all_enabled(&self) -> bool {
        self.enabled_count() == CharacterClass::ALL.len()
    }

    /// Length of every password generated under this policy.
    /// Never shorter than one character per enabled class.
    pub fn target_length(&self) -> usize {
        self.length.max(self.enabled_count())
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.enabled_count() == 0 {
            return Err(PolicyError::NoClassEnabled);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(PolicyError::LengthOutOfRange {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(16, true, true, true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert_eq!(Policy::default().validate(), Ok(()));
    }

    #[test]
    fn no_classes_is_rejected() {
        let policy = Policy::new(12, false, false, false, false);
        assert_eq!(policy.validate(), Err(PolicyError::NoClassEnabled));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(Policy::new(8, true, false, false, false).validate().is_ok());
        assert!(Policy::new(50, true, false, false, false).validate().is_ok());
        assert_eq!(
            Policy::new(7, true, false, false, false).validate(),
            Err(PolicyError::LengthOutOfRange { length: 7, min: 8, max: 50 })
        );
        assert!(Policy::new(51, true, false, false, false).validate().is_err());
    }

    #[test]
    fn target_length_covers_every_class() {
        assert_eq!(Policy::new(12, true, true, true, true).target_length(), 12);
        assert_eq!(Policy::new(2, true, true, true, true).target_length(), 4);
    }
}
