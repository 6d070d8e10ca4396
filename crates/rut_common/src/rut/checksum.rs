//! Modulo-11 check character computation.

/// Weights cycle 2..=7, starting at the least significant digit
const FIRST_WEIGHT: u32 = 2;
const LAST_WEIGHT: u32 = 7;

/// Compute the check character for a digits-only body.
///
/// Returns `None` if `body` contains anything other than ASCII digits.
/// An empty body sums to zero and yields `'0'`.
pub fn expected_check(body: &str) -> Option<char> {
    let mut sum: u32 = 0;
    let mut weight = FIRST_WEIGHT;

    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        // Reduced every step so long bodies cannot overflow
        sum = (sum + digit * weight) % 11;
        weight = if weight == LAST_WEIGHT {
            FIRST_WEIGHT
        } else {
            weight + 1
        };
    }

    Some(check_char(sum))
}

fn check_char(remainder: u32) -> char {
    match remainder {
        0 => '0',
        1 => 'K',
        r => char::from_digit(11 - r, 10).unwrap_or('0'),
    }
}
