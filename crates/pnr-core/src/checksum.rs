//! # Checksum Engine
//!
//! Luhn-style mod 10 over the date and serial digits. Digits are visited
//! left to right from index 0; even indices are doubled and the decimal
//! digits of every resulting value are summed (doubling `7` gives `14`,
//! which contributes `1 + 4`).

/// Doubling digit sum of an ASCII digit string.
///
/// Returns `None` if `digits` contains anything other than ASCII digits.
pub fn luhn_sum(digits: &str) -> Option<u32> {
    digits.bytes().enumerate().try_fold(0u32, |total, (i, b)| {
        if !b.is_ascii_digit() {
            return None;
        }
        let d = u32::from(b - b'0');
        let v = if i % 2 == 0 { d * 2 } else { d };
        Some(total + v / 10 + v % 10)
    })
}

/// True if `digits` (data digits followed by the check digit) sums to 0 mod 10.
pub fn is_valid(digits: &str) -> bool {
    !digits.is_empty() && luhn_sum(digits).is_some_and(|total| total % 10 == 0)
}

/// Compute the check digit for the nine data digits `year‖month‖day‖serial`.
pub fn check_digit(data: &str) -> Option<u8> {
    let total = luhn_sum(data)?;
    // `total % 10` is below 10, so the result always fits a single digit.
    Some(((10 - total % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_numbers() {
        assert!(is_valid("6408233234"));
        assert!(is_valid("6408833231"));
        assert!(is_valid("1006238362"));
    }

    #[test]
    fn known_invalid_numbers() {
        assert!(!is_valid("1122334455"));
        assert!(!is_valid("6408233235"));
        assert!(!is_valid(""));
        assert!(!is_valid("64082332a4"));
    }

    #[test]
    fn doubled_digits_are_digit_summed() {
        // 7*2 = 14 -> 1 + 4 = 5; 3 stays 3.
        assert_eq!(luhn_sum("73"), Some(8));
        // 9*2 = 18 -> 9.
        assert_eq!(luhn_sum("9"), Some(9));
    }

    #[test]
    fn check_digit_matches_known_numbers() {
        assert_eq!(check_digit("640823323"), Some(4));
        assert_eq!(check_digit("640883323"), Some(1));
        assert_eq!(check_digit("100623836"), Some(2));
    }

    #[test]
    fn check_digit_rejects_non_digits() {
        assert_eq!(check_digit("64082332x"), None);
    }
}
