//! Random one-time security codes.

use rand::Rng;

use crate::application::ports::SecurityCodePort;

/// Smallest six-digit code.
const MIN_CODE: u32 = 100_000;
/// Largest six-digit code.
const MAX_CODE: u32 = 999_999;

/// Generates uniformly distributed six-digit codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecurityCodeGenerator;

impl SecurityCodePort for RandomSecurityCodeGenerator {
    fn generate_code(&self) -> u32 {
        rand::rng().random_range(MIN_CODE..=MAX_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_six_digits() {
        let generator = RandomSecurityCodeGenerator;
        for _ in 0..1_000 {
            let code = generator.generate_code();
            assert_eq!(code.to_string().len(), 6);
        }
    }
}
