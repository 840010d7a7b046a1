use clap::Parser;

// ---------------------------------------------------------------------------
// Command-line surface
// ---------------------------------------------------------------------------

/// Assemble one station's full calendar day of e-Callisto recordings into a
/// single spectrogram, optionally aligning the day's announced bursts onto
/// sample indices.
#[derive(Parser, Debug)]
#[command(name = "callisto-day", version, about)]
pub struct Args {
    /// Observatory station name as it appears in filenames (e.g. GERMANY-DLR)
    pub station: String,

    /// Four-digit year (e.g. 2025)
    pub year: u16,

    /// Month (1-12)
    pub month: u8,

    /// Day of month (1-31)
    pub day: u8,

    /// UTC time of the local day's first recording, HHMMSS
    #[arg(default_value = "000000", value_parser = parse_start_time)]
    pub start_time: String,

    /// Also fetch the month's burst list, align it, and save the index
    /// ranges next to the spectrogram
    #[arg(long)]
    pub save_burst_labels: bool,
}

fn parse_start_time(s: &str) -> Result<String, String> {
    if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not a 6-digit HHMMSS time"))
    }
}
