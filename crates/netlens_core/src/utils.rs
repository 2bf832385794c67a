#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DisplayValue {
    pub text: String,
    pub decode_failed: bool,
}

/// Formats a raw parameter value for display.
///
/// With `decode` off the raw value is returned untouched. Otherwise values
/// containing `%` are percent-decoded, keeping the raw text when that fails,
/// and then every `+` becomes a space, including a `+` produced by decoding.
pub fn display_parameter_value(raw: &str, decode: bool) -> DisplayValue {
    if !decode {
        return DisplayValue {
            text: raw.to_string(),
            decode_failed: false,
        };
    }
    let mut text = raw.to_string();
    let mut decode_failed = false;
    if raw.contains('%') {
        match percent_decode(raw) {
            Some(decoded) => text = decoded,
            None => decode_failed = true,
        }
    }
    DisplayValue {
        text: text.replace('+', " "),
        decode_failed,
    }
}

/// Strict percent-decoding: a `%` not followed by two hex digits, or bytes
/// that are not valid UTF-8 once decoded, reject the whole value.
pub fn percent_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    urlencoding::decode(raw).ok().map(|decoded| decoded.into_owned())
}
