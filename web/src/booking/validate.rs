//! Field validators shared by the booking wizard and the auth forms.

/// Booking-gate phone check: after stripping whitespace and hyphens the
/// remainder must be 9 or more consecutive digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    stripped.len() >= 9 && stripped.chars().all(|c| c.is_ascii_digit())
}

/// Loose email shape check: something before the `@`, a dotted domain after.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.trim().is_empty()
                && domain.contains('.')
                && domain.split('.').all(|part| !part.trim().is_empty())
        }
        None => false,
    }
}

/// Taiwanese mobile number: exactly `09` followed by 8 digits.
pub fn is_valid_tw_mobile(phone: &str) -> bool {
    phone.len() == 10 && phone.starts_with("09") && phone.chars().all(|c| c.is_ascii_digit())
}

/// Registration names must be at least two characters after trimming.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// Per-criterion password strength breakdown used by the register form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordStrength {
    pub fn score(&self) -> u8 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength {
        length: password.chars().count() >= 8,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn phone_with_hyphens_and_nine_digits_is_valid() {
        assert!(is_valid_phone("0912-345-678"));
    }

    #[test]
    fn phone_with_spaces_is_valid() {
        assert!(is_valid_phone("09 1234 5678"));
    }

    #[test]
    fn phone_with_too_few_digits_is_rejected() {
        assert!(!is_valid_phone("091234"));
    }

    #[test]
    fn empty_phone_is_rejected() {
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn phone_with_letters_is_rejected() {
        assert!(!is_valid_phone("0912-345-67a"));
    }

    #[test]
    fn phone_with_plus_prefix_is_rejected() {
        // Only digits may remain once separators are stripped.
        assert!(!is_valid_phone("+886912345678"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn tw_mobile_accepts_exactly_09_plus_eight_digits() {
        assert!(is_valid_tw_mobile("0912345678"));
        assert!(!is_valid_tw_mobile("091234567"));
        assert!(!is_valid_tw_mobile("09123456789"));
        assert!(!is_valid_tw_mobile("0812345678"));
        assert!(!is_valid_tw_mobile("09-12345678"));
    }

    #[test]
    fn name_requires_two_characters_after_trim() {
        assert!(is_valid_name("王小明"));
        assert!(is_valid_name("  小明  "));
        assert!(!is_valid_name("明"));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn password_strength_scores_each_criterion() {
        let weak = password_strength("abc");
        assert_eq!(weak.score(), 1);

        let strong = password_strength("Abcdef1!");
        assert!(strong.length);
        assert!(strong.uppercase);
        assert!(strong.lowercase);
        assert!(strong.number);
        assert!(strong.special);
        assert_eq!(strong.score(), 5);
    }
}
