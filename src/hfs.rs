//! POSIX to legacy colon-delimited path conversion.

/// Convert a slash-delimited POSIX path into the colon-delimited notation
/// used by the legacy scripting interface.
///
/// The conversion is purely textual: components are not checked against
/// the filesystem, embedded colons are not escaped, and `.`/`..` segments
/// pass through untouched. `is_directory` only controls whether the result
/// ends with the folder delimiter.
pub fn posix_to_hfs(posix: &str, is_directory: bool) -> String {
    let mut converted = posix.replace('/', ":");
    if is_directory && !converted.ends_with(':') {
        converted.push(':');
    }
    converted
}
