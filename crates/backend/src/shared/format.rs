/// Group digits in thousands: `1234567` -> `"1,234,567"`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Response size for the request log, e.g. `"12,480 B"`
pub fn format_size(bytes: usize) -> String {
    format!("{} B", format_number(bytes))
}
