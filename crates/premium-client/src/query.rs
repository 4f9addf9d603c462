//! Query-string encoding for the three inputs.

use premium_core::InputSet;

/// Encode `inputs` as `age=..&height=..&weight=..`.
///
/// Values are sent raw (no trimming, no numeric check) using
/// `application/x-www-form-urlencoded` rules.
pub fn build_query(inputs: &InputSet) -> String {
    inputs
        .pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", form_encode(key), form_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Form-encode one component: space becomes `+`, alphanumerics and `*-._`
/// pass through, every other UTF-8 byte becomes `%XX`.
pub fn form_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                result.push(b as char);
            }
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{b:02X}")),
        }
    }
    result
}
