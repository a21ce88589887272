use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Loose `local@domain.tld` check shared by the booking and newsletter forms.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello@therug.london", true)]
    #[case("a.b+c@example.co.uk", true)]
    #[case("", false)]
    #[case("no-at-sign.com", false)]
    #[case("missing@tld", false)]
    #[case("two@@example.com", false)]
    #[case("spa ce@example.com", false)]
    fn email_shapes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }
}
