//! Small string normalization helpers.

/// Strips a guid-ish identifier down to its ASCII alphanumerics.
///
/// Hyphens, symbols, whitespace, and non-ASCII characters are dropped;
/// surviving characters keep their original order. An empty input cleans to
/// an empty string.
pub fn clean_guid(guid: &str) -> String {
    guid.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Escapes a string for embedding in a single-quoted SQL literal.
///
/// Every `'` becomes `''`. Applied to all free-text fields that reach the
/// generated SQL, regardless of how trusted the source column looks.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}
