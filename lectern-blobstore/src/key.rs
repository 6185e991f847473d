use lectern_types::Clock;

/// Generates a storage key for an uploaded file: `{unix_millis}.{ext}`.
///
/// The extension is taken from the text after the last `.` in `file_name`.
/// Names without an extension produce a bare `{unix_millis}` key. Two uploads
/// within the same millisecond receive the same key and the later one wins.
pub fn object_key(file_name: &str, clock: &dyn Clock) -> String {
    let millis = clock.now().timestamp_millis();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{millis}.{ext}"),
        _ => millis.to_string(),
    }
}
