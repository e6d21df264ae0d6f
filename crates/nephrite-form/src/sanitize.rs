/// Restrict raw input for a numeric field to digits and a single decimal
/// point. Runs synchronously on every edit, before the value is stored.
/// Extra decimal points are dropped and their digit groups concatenated:
/// `"1.2.3"` becomes `"1.23"`.
pub fn sanitize_numeric(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            out.push(c);
        }
    }
    out
}
