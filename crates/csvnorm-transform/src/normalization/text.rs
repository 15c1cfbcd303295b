//! Zip padding and name casing.

/// Minimum width of a normalized zip code.
pub const ZIP_WIDTH: usize = 5;

/// Left-pad a zip code with `0` to [`ZIP_WIDTH`] characters.
///
/// Width is counted in characters, not bytes. Longer values are returned
/// unchanged, never truncated.
pub fn pad_zip(zip: &str) -> String {
    format!("{zip:0>width$}", width = ZIP_WIDTH)
}

/// Uppercase a name using full Unicode case mapping.
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase()
}
