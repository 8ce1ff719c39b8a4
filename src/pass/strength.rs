//! Strength scoring.
//!
//! Entropy here is `L * log2(k)` with `k` the number of distinct characters
//! actually present. It is a heuristic for display, not a cryptographic
//! guarantee, and it understates passwords that repeat characters.

use std::collections::HashSet;
use std::fmt;

use super::policy::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Tier {
    /// Bar fill percentage for this tier.
    pub fn weight(self) -> u8 {
        match self {
            Tier::VeryWeak => 20,
            Tier::Weak => 40,
            Tier::Medium => 60,
            Tier::Strong => 80,
            Tier::VeryStrong => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::VeryWeak => "Very Weak",
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
            Tier::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReport {
    pub entropy_bits: f64,
    pub tier: Tier,
}

/// Score `password` as generated under `policy`. Never fails.
pub fn score(password: &str, policy: &Policy) -> StrengthReport {
    let length = password.chars().count();
    let entropy_bits = entropy(password);
    StrengthReport {
        entropy_bits,
        tier: classify(entropy_bits, length, policy),
    }
}

/// `log2(k^L)`, computed as `L * log2(k)` to stay finite.
pub fn entropy(password: &str) -> f64 {
    let distinct = password.chars().collect::<HashSet<_>>().len();
    if distinct == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (distinct as f64).log2()
}

/// First matching tier, strongest first.
pub fn classify(bits: f64, length: usize, policy: &Policy) -> Tier {
    let has_digits_or_symbols = policy.include_digits || policy.include_symbols;
    let has_letters = policy.include_upper || policy.include_lower;

    if bits > 80.0 && length >= 12 && policy.all_enabled() {
        Tier::VeryStrong
    } else if bits > 60.0 && length >= 10 && has_digits_or_symbols && has_letters {
        Tier::Strong
    } else if bits > 40.0 && length >= 8 {
        Tier::Medium
    } else if bits > 20.0 {
        Tier::Weak
    } else {
        Tier::VeryWeak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Generator;
    use crate::random::{ScriptedRand, seeded};

    const ALL: Policy = Policy {
        length: 12,
        include_upper: true,
        include_lower: true,
        include_digits: true,
        include_symbols: true,
    };

    #[test]
    fn empty_password_is_very_weak() {
        let report = score("", &ALL);
        assert_eq!(report.entropy_bits, 0.0);
        assert_eq!(report.tier, Tier::VeryWeak);
    }

    #[test]
    fn single_repeated_char_has_no_entropy() {
        assert_eq!(entropy("aaaaaaaaaaaa"), 0.0);
    }

    #[test]
    fn entropy_counts_distinct_characters() {
        // 8 * log2(4) = 16
        assert_eq!(entropy("abcdabcd"), 16.0);
        // 16 * log2(16) = 64
        assert_eq!(entropy("0123456789abcdef"), 64.0);
    }

    #[test]
    fn score_is_deterministic() {
        let a = score("Xk9!mQ2#vL7p", &ALL);
        let b = score("Xk9!mQ2#vL7p", &ALL);
        assert_eq!(a, b);
    }

    #[test]
    fn tiers_follow_the_table() {
        let digits = Policy::new(8, false, false, true, false);
        let letters = Policy::new(12, true, true, false, false);

        assert_eq!(classify(81.0, 12, &ALL), Tier::VeryStrong);
        // VeryStrong needs every class
        assert_eq!(classify(81.0, 12, &Policy::new(12, true, true, true, false)), Tier::Strong);
        assert_eq!(classify(81.0, 11, &ALL), Tier::Strong);
        // Strong needs digits or symbols
        assert_eq!(classify(61.0, 12, &letters), Tier::Medium);
        assert_eq!(classify(61.0, 9, &ALL), Tier::Medium);
        assert_eq!(classify(41.0, 7, &ALL), Tier::Weak);
        assert_eq!(classify(21.0, 8, &digits), Tier::Weak);
        assert_eq!(classify(20.0, 8, &digits), Tier::VeryWeak);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify(80.0, 20, &ALL), Tier::Strong);
        assert_eq!(classify(60.0, 20, &ALL), Tier::Medium);
        assert_eq!(classify(40.0, 20, &ALL), Tier::Weak);
    }

    #[test]
    fn weights_come_from_tier_alone() {
        let weights: Vec<u8> = [
            Tier::VeryWeak,
            Tier::Weak,
            Tier::Medium,
            Tier::Strong,
            Tier::VeryStrong,
        ]
        .iter()
        .map(|t| t.weight())
        .collect();
        assert_eq!(weights, vec![20, 40, 60, 80, 100]);
        assert_eq!(Tier::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn twelve_char_all_class_password() {
        let script = [5, 17, 2, 9, 31, 0, 44, 13, 8, 71, 26, 3, 60, 11, 29, 40, 7, 19, 1, 52];
        let pass = Generator::new(ScriptedRand::new(&script)).generate(&ALL).unwrap();
        assert_eq!(pass.len(), 12);
        assert!(pass.bytes().any(|c| c.is_ascii_uppercase()));
        assert!(pass.bytes().any(|c| c.is_ascii_lowercase()));
        assert!(pass.bytes().any(|c| c.is_ascii_digit()));
        assert!(pass.bytes().any(|c| !c.is_ascii_alphanumeric()));

        let report = score(&pass, &ALL);
        // At most 12 distinct characters: 12 * log2(12) < 44 bits
        assert!(report.entropy_bits < 44.0);
        assert_eq!(report.tier == Tier::VeryStrong, report.entropy_bits > 80.0);
        assert!(report.tier <= Tier::Medium);
    }

    #[test]
    fn long_all_class_passwords_reach_very_strong() {
        let policy = Policy::new(24, true, true, true, true);
        let mut generator = Generator::new(seeded(9));
        for _ in 0..50 {
            let pass = generator.generate(&policy).unwrap();
            let report = score(&pass, &policy);
            // 24 chars with at least 11 distinct already exceed 80 bits
            if report.entropy_bits > 80.0 {
                assert_eq!(report.tier, Tier::VeryStrong);
            }
        }
        let distinct = "ABCDEFGHIJKLMNOPabcd12!@";
        assert_eq!(score(distinct, &policy).tier, Tier::VeryStrong);
    }

    #[test]
    fn digit_only_passwords_stay_weak() {
        let policy = Policy::new(8, false, false, true, false);
        let mut generator = Generator::new(seeded(5));
        for _ in 0..200 {
            let pass = generator.generate(&policy).unwrap();
            assert_eq!(pass.len(), 8);
            assert!(pass.bytes().all(|c| c.is_ascii_digit()));
            // 8 * log2(8) = 24 at most
            assert!(score(&pass, &policy).tier <= Tier::Weak);
        }
    }
}
