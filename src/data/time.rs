use crate::error::AssembleError;

// ---------------------------------------------------------------------------
// Time tokens: filename codes and burst-label endpoints
// ---------------------------------------------------------------------------

/// Decode a 6-digit `HHMMSS` filename code into seconds since midnight.
pub fn time_of_day_to_seconds(code: &str) -> Result<u32, AssembleError> {
    let malformed = || AssembleError::MalformedTime(code.to_string());
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let h: u32 = code[0..2].parse().map_err(|_| malformed())?;
    let m: u32 = code[2..4].parse().map_err(|_| malformed())?;
    let s: u32 = code[4..6].parse().map_err(|_| malformed())?;
    Ok(h * 3600 + m * 60 + s)
}

/// Convert one interval endpoint into seconds since midnight.
///
/// The burst tables use both `HH:MM` and `HH:MM:SS`; the two-field form
/// implies zero seconds.
pub fn endpoint_to_seconds(token: &str) -> Result<u32, AssembleError> {
    let fields: Vec<u32> = token
        .split(':')
        .map(|f| f.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| AssembleError::MalformedTime(token.to_string()))?;
    match fields.as_slice() {
        [h, m] => Ok(h * 3600 + m * 60),
        [h, m, s] => Ok(h * 3600 + m * 60 + s),
        _ => Err(AssembleError::MalformedTime(token.to_string())),
    }
}

/// Split a raw burst label (`"HH:MM-HH:MM"` or `"HH:MM:SS-HH:MM:SS"`) into
/// start/end seconds since midnight.
pub fn parse_interval(raw: &str) -> Result<(u32, u32), AssembleError> {
    let mut endpoints = raw.splitn(2, '-');
    match (endpoints.next(), endpoints.next()) {
        (Some(start), Some(end)) => Ok((endpoint_to_seconds(start)?, endpoint_to_seconds(end)?)),
        _ => Err(AssembleError::MalformedTime(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hhmmss_codes() {
        assert_eq!(time_of_day_to_seconds("000000").unwrap(), 0);
        assert_eq!(time_of_day_to_seconds("093000").unwrap(), 9 * 3600 + 30 * 60);
        assert_eq!(time_of_day_to_seconds("235959").unwrap(), 86399);
    }

    #[test]
    fn rejects_bad_codes() {
        assert!(time_of_day_to_seconds("0930").is_err());
        assert!(time_of_day_to_seconds("09h000").is_err());
        assert!(time_of_day_to_seconds("0930001").is_err());
    }

    #[test]
    fn two_field_endpoint_implies_zero_seconds() {
        assert_eq!(endpoint_to_seconds("09:30").unwrap(), 9 * 3600 + 30 * 60);
        assert_eq!(
            endpoint_to_seconds("09:30:15").unwrap(),
            9 * 3600 + 30 * 60 + 15
        );
    }

    #[test]
    fn endpoint_rejects_wrong_field_counts() {
        assert!(endpoint_to_seconds("09").is_err());
        assert!(endpoint_to_seconds("09:30:15:00").is_err());
        assert!(endpoint_to_seconds("ab:cd").is_err());
    }

    #[test]
    fn parses_interval_labels() {
        assert_eq!(parse_interval("09:00-09:15").unwrap(), (32400, 32400 + 900));
        assert_eq!(
            parse_interval("09:00:30-09:01:00").unwrap(),
            (32430, 32460)
        );
        assert!(parse_interval("09:00").is_err());
    }
}
