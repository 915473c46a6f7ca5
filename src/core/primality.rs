/// Trial division by odd divisors up to `floor(sqrt(n))`.
///
/// The bound is checked as `d <= n / d`, which covers perfect squares
/// exactly and never overflows. Defined for every `i64`; anything below 2
/// is not prime.
#[inline]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slow but obviously correct.
    fn reference_is_prime(n: i64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_reference_set() {
        for n in [0, 1, 2, 3, 4, 17, 18, 97, 100, 7919] {
            assert_eq!(is_prime(n), reference_is_prime(n), "n = {}", n);
        }
    }

    #[test]
    fn test_even_numbers() {
        assert!(is_prime(2));
        for n in (4..2_000).step_by(2) {
            assert!(!is_prime(n), "{} is even", n);
        }
    }

    #[test]
    fn test_odd_perfect_squares() {
        // 3*3, 5*5, 7*7, 97*97: the last divisor tried must reach the root
        for n in [9, 25, 49, 121, 9409] {
            assert!(!is_prime(n), "{} is a perfect square", n);
        }
        assert!(!is_prime(7919 * 7919));
    }

    #[test]
    fn test_negative_and_extremes() {
        assert!(!is_prime(-1));
        assert!(!is_prime(-7));
        assert!(!is_prime(i64::MIN));
        // 2^31 - 1
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn test_matches_reference_below_two_thousand() {
        for n in -5..2_000 {
            assert_eq!(is_prime(n), reference_is_prime(n), "n = {}", n);
        }
    }
}
