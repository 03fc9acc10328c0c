use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Matches a key token: a run of ASCII letters immediately followed by `:`.
fn key_pattern() -> &'static Regex {
    static KEY: OnceLock<Regex> = OnceLock::new();
    KEY.get_or_init(|| Regex::new("[a-zA-Z]+:").expect("key pattern compiles"))
}

/// Parses terse `key1: value1, key2: value2` input into a field map.
///
/// The value for a key is the text running up to the next key token (or the
/// end of the input), trimmed of surrounding whitespace with a single
/// trailing comma stripped. Text before the first key is discarded. Input
/// with no key tokens yields an empty map, and a duplicate key overwrites
/// the earlier occurrence.
///
/// Values are kept as strings; coercing individual fields to their types is
/// the store's job.
pub fn parse_terse_input(input: &str) -> HashMap<String, String> {
    let re = key_pattern();
    let keys = re.find_iter(input).map(|m| m.as_str());
    let mut values = re.split(input);
    // The segment before the first key carries no field.
    values.next();

    let mut fields = HashMap::new();
    for (key, value) in keys.zip(values) {
        let value = value.trim();
        let value = value.strip_suffix(',').unwrap_or(value).trim_end();
        let key = key.strip_suffix(':').unwrap_or(key);
        fields.insert(key.to_string(), value.to_string());
    }
    fields
}
