use heck::ToTitleCase;
use regex::Regex;

/// Uppercase the first character, leaving the rest unchanged.
pub fn first_letter_upper(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest unchanged.
pub fn first_letter_lower(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Capitalize each word: "hello world" -> "Hello World".
pub fn title_case(input: &str) -> String {
    input.to_title_case()
}

/// Check that a string is a plain decimal number ("-12.5", "0").
pub fn is_decimal_str(input: &str) -> bool {
    let Ok(re) = Regex::new(r"^-?\d+(\.\d+)?$") else {
        return false;
    };
    re.is_match(input) && input.parse::<f64>().is_ok()
}

/// Insert thousands separators into the integer part of a numeric string,
/// preserving sign, fraction, and a trailing percent sign. A lone "-"
/// passes through.
pub fn thousand_separator(input: &str) -> String {
    if input == "-" {
        return input.to_string();
    }

    let (body, percent) = match input.strip_suffix('%') {
        Some(stripped) => (stripped, true),
        None => (input, false),
    };
    let (sign, digits) = match body.strip_prefix('-') {
        Some(stripped) => ("-", stripped),
        None => ("", body),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let count = int_part.chars().count();
    let mut grouped = String::with_capacity(int_part.len() + count / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = format!("{}{}", sign, grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    if percent {
        out.push('%');
    }
    out
}
