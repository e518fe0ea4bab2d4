//! Introductory numeric helpers.

/// Return the greater of two values.
///
/// Ties (and incomparable pairs such as `NaN`) resolve to `a` only when
/// `a >= b` holds, otherwise to `b`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b { a } else { b }
}

/// Classic FizzBuzz for a single number.
///
/// `"FizzBuzz"` for multiples of 15, `"Fizz"` for other multiples of 3,
/// `"Buzz"` for other multiples of 5, else the decimal form of `n`.
#[must_use]
pub fn fizz_buzz(n: u64) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}
