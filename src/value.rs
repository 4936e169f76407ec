//! value.rs
//!
//! Truthiness and string conversion for untyped JSON values. Field values
//! were authored and stored by a JavaScript front end, and saved scripts
//! were written against its notion of "has a value" and its `String(x)`
//! output, so the resolver follows the same rules.

use serde_json::Value;

/// Returns `false` for `null`, `false`, `0`, and `""`; `true` otherwise.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts a JSON value to its display string.
///
/// ```
/// # use parish_liturgy::value::display;
/// # use serde_json::json;
/// assert_eq!(display(&json!("Ave")), "Ave");
/// assert_eq!(display(&json!(3)), "3");
/// assert_eq!(display(&json!(3.0)), "3");
/// assert_eq!(display(&json!(2.5)), "2.5");
/// assert_eq!(display(&json!(true)), "true");
/// assert_eq!(display(&json!(["a", 1])), "a,1");
/// ```
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_number(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => s.clone(),
        // Arrays join their elements; null entries print as nothing.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// A finite float the way JavaScript's `Number.prototype.toString` prints
/// it: shortest round-trip digits, plain notation from `0.000001` up to
/// `1e21`, and `1e-7` or `1e+21` style outside that range.
fn format_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    // `{:e}` yields the shortest digits, e.g. `-1.25e-7`.
    let sci = format!("{:e}", f.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{}", rest)
        };
        let sign = if n - 1 >= 0 { "+" } else { "-" };
        format!("{}{}e{}{}", first, fraction, sign, (n - 1).abs())
    };

    if f < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// `display(value)` when the value is truthy.
pub fn truthy_display(value: &Value) -> Option<String> {
    if is_truthy(value) {
        Some(display(value))
    } else {
        None
    }
}

/// Borrows a non-empty string.
pub fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_display_objects_and_nulls() {
        assert_eq!(display(&json!({"a": 1})), "[object Object]");
        assert_eq!(display(&json!([null, "x"])), ",x");
        assert_eq!(display(&Value::Null), "null");
    }

    #[test]
    fn test_display_numbers_like_javascript() {
        assert_eq!(display(&json!(0.1)), "0.1");
        assert_eq!(display(&json!(-2.5)), "-2.5");
        assert_eq!(display(&json!(123.456)), "123.456");
        assert_eq!(display(&json!(0.000001)), "0.000001");
        assert_eq!(display(&json!(1e-7)), "1e-7");
        assert_eq!(display(&json!(-1.5e-9)), "-1.5e-9");
        assert_eq!(display(&json!(1e20)), "100000000000000000000");
        assert_eq!(display(&json!(1e21)), "1e+21");
        assert_eq!(display(&json!(1.25e30)), "1.25e+30");
        assert_eq!(display(&json!(-0.0)), "0");
    }

    #[test]
    fn test_truthy_display() {
        assert_eq!(truthy_display(&json!("Lector")).as_deref(), Some("Lector"));
        assert_eq!(truthy_display(&json!(0)), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("x".into())), Some("x"));
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }
}
