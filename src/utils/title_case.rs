//! Display casing for city names.

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// Word boundaries are any non-alphabetic character, so `"new delhi"`
/// becomes `"New Delhi"` and `"port-blair"` becomes `"Port-Blair"`.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(title_case("delhi"), "Delhi");
        assert_eq!(title_case("MUMBAI"), "Mumbai");
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(title_case("new delhi"), "New Delhi");
        assert_eq!(title_case("port-blair"), "Port-Blair");
    }

    #[test]
    fn test_empty() {
        assert_eq!(title_case(""), "");
    }
}
