//! Remote layer: the e-Callisto archive over HTTP.
//!
//! Three collaborators live here: the per-day directory listing, the
//! `.fit.gz` fetch+decode, and the monthly burst-label table. All requests
//! go through one blocking client; there are no retries — a failed fetch is
//! treated the same as absent data.

use anyhow::{Context, Result};
use reqwest::blocking::Client;

pub mod bursts;
pub mod fits;
pub mod listing;

/// Root of the per-day FITS directories.
pub const ARCHIVE_BASE_URL: &str = "https://soleil.i4ds.ch/solarradio/data/2002-20yy_Callisto";

/// Root of the monthly burst-label tables (2010 onward; earlier years are
/// not published under this scheme).
pub const BURST_LISTS_BASE_URL: &str =
    "https://soleil.i4ds.ch/solarradio/data/BurstLists/2010-yyyy_Monstein";

/// One (station, calendar day) archive query.
#[derive(Debug, Clone)]
pub struct DayQuery {
    pub station: String,
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DayQuery {
    /// URL of the day's published FITS directory.
    pub fn day_url(&self) -> String {
        format!(
            "{ARCHIVE_BASE_URL}/{:04}/{:02}/{:02}/",
            self.year, self.month, self.day
        )
    }

    /// URL of the month's burst-label table.
    pub fn burst_list_url(&self) -> String {
        format!(
            "{BURST_LISTS_BASE_URL}/{:04}/e-CALLISTO_{:04}_{:02}.txt",
            self.year, self.year, self.month
        )
    }

    /// `yyyymmdd` as it appears in the table's date column.
    pub fn date_token(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Build the blocking client shared by all archive requests.
pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("callisto-day/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")
}

pub(crate) fn get_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("GET {url}"))?;
    response.text().with_context(|| format!("reading body of {url}"))
}

pub(crate) fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("GET {url}"))?;
    let body = response
        .bytes()
        .with_context(|| format!("reading body of {url}"))?;
    Ok(body.to_vec())
}
