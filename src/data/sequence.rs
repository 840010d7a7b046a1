use regex::Regex;

use super::time::time_of_day_to_seconds;
use crate::error::AssembleError;

// ---------------------------------------------------------------------------
// Circular acquisition ordering
// ---------------------------------------------------------------------------

// Timestamp embeddings seen across the archive. Newer files delimit the
// 6-digit code with underscores; some older ones follow it with an `i`
// (intensity channel marker).
const PATTERN_UNDERSCORE: &str = r"_(\d{6})_";
const PATTERN_INTENSITY: &str = r"_(\d{6})i";

/// Order a day's filenames into acquisition order starting at `offset`
/// (a 6-digit `HHMMSS` UTC time).
///
/// Filename times are UTC, but a station's local day begins at a UTC
/// offset. The list is therefore sorted by embedded time and rotated to
/// begin at the first file at or after the offset, with earlier files
/// wrapped to the end. If no file reaches the offset, the sorted order is
/// kept unrotated.
///
/// The embedding pattern is chosen once per file set: if the underscore
/// pattern matches no filename at all, the whole set is retried with the
/// `i`-suffix pattern; if that also matches nothing, the run aborts naming
/// `context_url`. Once a pattern is chosen, files it does not match are
/// silently dropped.
pub fn sequence(
    files: &[String],
    offset: &str,
    context_url: &str,
) -> Result<Vec<String>, AssembleError> {
    let offset_sec = time_of_day_to_seconds(offset)?;
    let mut pairs = extract_times(files, context_url)?;

    // stable sort: equal times keep their listing order
    pairs.sort_by_key(|&(t, _)| t);

    let pivot = pairs
        .iter()
        .position(|&(t, _)| t >= offset_sec)
        .unwrap_or(0);

    let mut ordered = Vec::with_capacity(pairs.len());
    ordered.extend(pairs[pivot..].iter().map(|(_, f)| f.clone()));
    ordered.extend(pairs[..pivot].iter().map(|(_, f)| f.clone()));
    Ok(ordered)
}

/// Extract the embedded time of a single filename, trying both patterns.
///
/// Used by the assembler to recover a file's start-of-recording time after
/// sequencing; returns `None` for names carrying no recognizable code.
pub fn embedded_seconds(file: &str) -> Option<u32> {
    for pattern in [PATTERN_UNDERSCORE, PATTERN_INTENSITY] {
        let re = Regex::new(pattern).expect("hard-coded pattern");
        if let Some(caps) = re.captures(file) {
            if let Ok(t) = time_of_day_to_seconds(&caps[1]) {
                return Some(t);
            }
        }
    }
    None
}

/// Two-stage extraction over the full set: underscore pattern first, then
/// the `i`-suffix pattern, never a per-file mix of the two.
fn extract_times(
    files: &[String],
    context_url: &str,
) -> Result<Vec<(u32, String)>, AssembleError> {
    for pattern in [PATTERN_UNDERSCORE, PATTERN_INTENSITY] {
        let re = Regex::new(pattern).expect("hard-coded pattern");
        let mut pairs = Vec::with_capacity(files.len());
        for file in files {
            if let Some(caps) = re.captures(file) {
                pairs.push((time_of_day_to_seconds(&caps[1])?, file.clone()));
            }
        }
        if !pairs.is_empty() {
            return Ok(pairs);
        }
    }
    Err(AssembleError::NoTimestampPattern {
        url: context_url.to_string(),
    })
}
