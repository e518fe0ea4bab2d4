//! Tests for the introductory helpers and a minimal mock.

use mockall::automock;
use mockall::predicate::eq;
use proptest::prelude::*;
use storefront::{fizz_buzz, max};
use test_case::test_case;

#[test_case(2, 1, 2 ; "first argument greater")]
#[test_case(1, 2, 2 ; "second argument greater")]
#[test_case(1, 1, 1 ; "arguments equal")]
fn test_max(a: i64, b: i64, expected: i64) {
    assert_eq!(max(a, b), expected);
}

#[test_case(15, "FizzBuzz" ; "divisible by 3 and 5")]
#[test_case(3, "Fizz" ; "only divisible by 3")]
#[test_case(5, "Buzz" ; "only divisible by 5")]
#[test_case(1, "1" ; "divisible by neither")]
fn test_fizz_buzz(n: u64, expected: &str) {
    assert_eq!(fizz_buzz(n), expected);
}

proptest! {
    #[test]
    fn max_is_an_input_and_not_smaller(a in any::<i64>(), b in any::<i64>()) {
        let m = max(a, b);
        prop_assert!(m == a || m == b);
        prop_assert!(m >= a && m >= b);
    }

    #[test]
    fn fizz_buzz_classification(n in 1_u64..1_000_000) {
        let expected = match (n % 3 == 0, n % 5 == 0) {
            (true, true) => "FizzBuzz".to_string(),
            (true, false) => "Fizz".to_string(),
            (false, true) => "Buzz".to_string(),
            (false, false) => n.to_string(),
        };
        prop_assert_eq!(fizz_buzz(n), expected);
    }
}

/// Sends a text message and reports the gateway's reply.
#[automock]
trait TextSender {
    fn send_text(&self, message: &str) -> String;
}

#[test]
fn test_mock_returns_canned_value() {
    let mut sender = MockTextSender::new();
    sender
        .expect_send_text()
        .with(eq("message"))
        .times(1)
        .return_const("ok".to_string());

    let result = sender.send_text("message");

    assert_eq!(result, "ok");
}
