//! Password generation.

use log::{debug, warn};
use zeroize::Zeroize;

use super::charset;
use super::denylist::Denylist;
use super::error::{GenerateError, Result};
use super::policy::Policy;
use crate::random::{RandomSource, SecureRand};

/// Attempts before giving up on finding a candidate free of weak patterns.
pub const MAX_ATTEMPTS: usize = 1000;

/// Generate one password with the OS CSPRNG and the default denylist.
pub fn generate(policy: &Policy) -> Result<String> {
    Generator::new(SecureRand::os()).generate(policy)
}

pub struct Generator<R> {
    rng: R,
    denylist: Denylist,
    max_attempts: usize,
}

impl<R: RandomSource> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            denylist: Denylist::default(),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn source_name(&self) -> &'static str {
        self.rng.name()
    }

    #[cfg(test)]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Generate a password satisfying `policy`.
    ///
    /// The policy is validated before any random draw. Candidates containing a
    /// denylisted pattern are zeroized and rebuilt, up to `max_attempts` times.
    pub fn generate(&mut self, policy: &Policy) -> Result<String> {
        policy.validate()?;

        let classes = charset::enabled(policy);
        let chars = charset::build(policy);
        let length = policy.target_length();
        let mut buf = Vec::with_capacity(length);

        for attempt in 1..=self.max_attempts {
            buf.clear();

            // One pick per enabled class, from that class alone.
            for class in &classes {
                buf.push(random_byte(class.alphabet(), &mut self.rng));
            }
            while buf.len() < length {
                buf.push(random_byte(&chars, &mut self.rng));
            }
            shuffle(&mut buf, &mut self.rng);

            match self.denylist.find(&buf) {
                Some(pattern) => {
                    debug!("attempt {attempt}: candidate matched weak pattern {pattern:?}, retrying");
                    buf.zeroize();
                }
                None => {
                    // Safety: every byte is drawn from an ASCII alphabet
                    return Ok(unsafe { String::from_utf8_unchecked(buf) });
                }
            }
        }

        warn!("gave up after {} attempts", self.max_attempts);
        Err(GenerateError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[inline]
fn random_byte<R: RandomSource>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.below(chars.len())]
}

/// Fisher-Yates: one uniform draw over `0..=i` per position, back to front.
#[inline]
fn shuffle<R: RandomSource>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.below(i + 1);
        chars.swap(i, j);
    }
}
