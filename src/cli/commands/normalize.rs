//! Normalize command handler.

use crate::normalize::normalize_tokens;
use crate::value::OptionValue;

/// Normalizes every argument as one token list.
pub fn normalize_values(values: &[String]) -> String {
    normalize_tokens(&OptionValue::from(values.to_vec()))
}

pub fn print_normalized(values: &[String]) {
    println!("{}", normalize_values(values));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_values_across_arguments() {
        let values = vec![
            "first second".to_string(),
            "third fourth first".to_string(),
        ];
        assert_eq!(normalize_values(&values), "first fourth second third");
    }

    #[test]
    fn test_normalize_values_blank() {
        assert_eq!(normalize_values(&["  ".to_string()]), "");
    }
}
