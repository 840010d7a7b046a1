use anyhow::Result;
use log::debug;
use reqwest::blocking::Client;

use super::{get_text, DayQuery};

// ---------------------------------------------------------------------------
// Monthly burst-label tables
// ---------------------------------------------------------------------------
//
// One tab-delimited text file per month lists every announced burst:
// date, time range, burst type, comma-separated observing stations.

/// Fetch the month's table and return this station/day's raw time ranges,
/// in table order.
pub fn fetch_burst_list(client: &Client, query: &DayQuery) -> Result<Vec<String>> {
    let text = get_text(client, &query.burst_list_url())?;
    let ranges = parse_burst_table(&text, &query.date_token(), &query.station);
    debug!(
        "{} burst(s) announced for {} on {}",
        ranges.len(),
        query.station,
        query.date_token()
    );
    Ok(ranges)
}

/// Extract the time-range column of rows matching `date_token` and
/// `station`.
///
/// Rows are skipped silently when blank, comment- or separator-prefixed,
/// shorter than four fields, dated differently, or not listing the station
/// in their comma-separated station field.
pub fn parse_burst_table(text: &str, date_token: &str, station: &str) -> Vec<String> {
    let mut ranges = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            continue;
        }
        let (line_date, time_range, stations) = (fields[0], fields[1], fields[3]);
        if line_date != date_token {
            continue;
        }
        if stations.split(',').any(|s| s.trim() == station) {
            ranges.push(time_range.to_string());
        }
    }
    ranges
}
