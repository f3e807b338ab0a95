pub mod call;
pub mod tools;

/// Parse a `key=value` command-line argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument `{s}`: expected key=value"))?;
    if key.is_empty() {
        return Err(format!("invalid argument `{s}`: empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}
