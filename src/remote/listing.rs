use anyhow::Result;
use log::debug;
use regex::Regex;
use reqwest::blocking::Client;

use super::{get_text, DayQuery};
use crate::error::AssembleError;

// ---------------------------------------------------------------------------
// Day-directory listings
// ---------------------------------------------------------------------------

/// Fetch the day directory and return absolute URLs of the station's files.
pub fn list_day_files(client: &Client, query: &DayQuery) -> Result<Vec<String>> {
    let url = query.day_url();
    let html = get_text(client, &url)?;
    let files = parse_listing(&html, &url);
    debug!("{} entries listed at {url}", files.len());

    let station_files: Vec<String> = files
        .into_iter()
        .filter(|f| f.contains(&query.station))
        .collect();
    if station_files.is_empty() {
        return Err(AssembleError::NoFiles(format!("station {} at {url}", query.station)).into());
    }
    Ok(station_files)
}

/// Extract `href` targets from an auto-index page and absolutize them.
///
/// Parent/self links and the index's sort links (`?C=...`) are dropped;
/// relative names are joined onto the day URL.
pub fn parse_listing(html: &str, base_url: &str) -> Vec<String> {
    let href_re = Regex::new(r#"href\s*=\s*"([^"]+)""#).expect("hard-coded pattern");
    let base = base_url.trim_end_matches('/');
    href_re
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .filter(|href| href != "../" && href != "./" && !href.starts_with('?'))
        .map(|href| {
            if href.starts_with("http://") || href.starts_with("https://") {
                href
            } else {
                format!("{base}/{}", href.trim_start_matches('/'))
            }
        })
        .collect()
}
