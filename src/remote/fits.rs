use std::io::Read;

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use ndarray::Array2;
use reqwest::blocking::Client;

use super::get_bytes;
use crate::data::assemble::SpectrogramSource;
use crate::data::model::Spectrogram;

// ---------------------------------------------------------------------------
// Compressed FITS fetch + decode
// ---------------------------------------------------------------------------
//
// The archive publishes one gzipped FITS file per ~15 minute recording.
// Only the primary HDU matters: a 2D big-endian image with NAXIS1 time
// samples per NAXIS2 frequency channels, frequency stored descending.

const RECORD_LEN: usize = 2880;
const CARD_LEN: usize = 80;

/// HTTP-backed fetch+decode collaborator for the assembler.
pub struct HttpFitsSource<'a> {
    client: &'a Client,
}

impl<'a> HttpFitsSource<'a> {
    pub fn new(client: &'a Client) -> Self {
        HttpFitsSource { client }
    }
}

impl SpectrogramSource for HttpFitsSource<'_> {
    fn fetch(&self, url: &str) -> Result<Spectrogram> {
        let compressed = get_bytes(self.client, url)?;
        let mut raw = Vec::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut raw)
            .with_context(|| format!("decompressing {url}"))?;
        decode_fits(&raw).with_context(|| format!("decoding {url}"))
    }
}

/// Header keywords needed to interpret the primary HDU.
#[derive(Debug)]
struct PrimaryHeader {
    bitpix: i32,
    naxis: usize,
    naxis1: usize,
    naxis2: usize,
    bscale: f64,
    bzero: f64,
}

/// Decode the primary HDU of an uncompressed FITS byte stream into a
/// (frequency, time) array of physical values (`BZERO + BSCALE * stored`).
pub fn decode_fits(raw: &[u8]) -> Result<Array2<f32>> {
    let (header, data_start) = parse_header(raw)?;
    if header.naxis != 2 {
        bail!("expected a 2D image, got NAXIS={}", header.naxis);
    }
    let (n_time, n_freq) = (header.naxis1, header.naxis2);
    let n = n_time
        .checked_mul(n_freq)
        .context("image dimensions overflow")?;
    let bytes_per_value = header.bitpix.unsigned_abs() as usize / 8;
    let data = raw
        .get(data_start..data_start + n * bytes_per_value)
        .context("truncated FITS data")?;

    let mut values = Vec::with_capacity(n);
    match header.bitpix {
        8 => values.extend(data.iter().map(|&b| f64::from(b))),
        16 => values.extend(
            data.chunks_exact(2)
                .map(|c| f64::from(i16::from_be_bytes([c[0], c[1]]))),
        ),
        32 => values.extend(
            data.chunks_exact(4)
                .map(|c| f64::from(i32::from_be_bytes([c[0], c[1], c[2], c[3]]))),
        ),
        -32 => values.extend(
            data.chunks_exact(4)
                .map(|c| f64::from(f32::from_be_bytes([c[0], c[1], c[2], c[3]]))),
        ),
        -64 => values.extend(data.chunks_exact(8).map(|c| {
            f64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]])
        })),
        other => bail!("unsupported BITPIX {other}"),
    }

    let scaled: Vec<f32> = values
        .into_iter()
        .map(|v| (header.bzero + header.bscale * v) as f32)
        .collect();

    // NAXIS1 varies fastest, i.e. row-major (frequency, time)
    Array2::from_shape_vec((n_freq, n_time), scaled).context("shaping FITS image")
}

/// Walk the 2880-byte header records up to and including the one holding
/// `END`; data begins at the returned offset.
fn parse_header(raw: &[u8]) -> Result<(PrimaryHeader, usize)> {
    let mut header = PrimaryHeader {
        bitpix: 0,
        naxis: 0,
        naxis1: 0,
        naxis2: 0,
        bscale: 1.0,
        bzero: 0.0,
    };
    let mut offset = 0;
    let mut seen_end = false;

    while !seen_end {
        let record = raw
            .get(offset..offset + RECORD_LEN)
            .context("truncated FITS header")?;
        for card in record.chunks(CARD_LEN) {
            let card = std::str::from_utf8(card).unwrap_or("");
            let keyword = card.get(..8).unwrap_or("").trim_end();
            if keyword == "END" {
                seen_end = true;
                break;
            }
            let Some(value) = card_value(card) else {
                continue;
            };
            match keyword {
                "SIMPLE" => {
                    if value != "T" {
                        bail!("not a standard FITS file");
                    }
                }
                "BITPIX" => header.bitpix = value.parse().context("BITPIX")?,
                "NAXIS" => header.naxis = value.parse().context("NAXIS")?,
                "NAXIS1" => header.naxis1 = value.parse().context("NAXIS1")?,
                "NAXIS2" => header.naxis2 = value.parse().context("NAXIS2")?,
                "BSCALE" => header.bscale = value.parse().context("BSCALE")?,
                "BZERO" => header.bzero = value.parse().context("BZERO")?,
                _ => {}
            }
        }
        offset += RECORD_LEN;
    }
    Ok((header, offset))
}

/// Value field of an 80-char card, with any trailing comment stripped.
/// Cards without the `= ` value indicator carry no value.
fn card_value(card: &str) -> Option<&str> {
    if card.get(8..10)? != "= " {
        return None;
    }
    let rest = &card[10..];
    Some(rest.split('/').next().unwrap_or(rest).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(text: &str) -> Vec<u8> {
        let mut c = text.as_bytes().to_vec();
        c.resize(CARD_LEN, b' ');
        c
    }

    /// Minimal primary HDU: 16-bit 3×4 image (3 freq rows, 4 time samples).
    fn sample_fits() -> Vec<u8> {
        let mut bytes = Vec::new();
        for text in [
            "SIMPLE  =                    T",
            "BITPIX  =                   16",
            "NAXIS   =                    2",
            "NAXIS1  =                    4",
            "NAXIS2  =                    3",
            "BSCALE  =                  1.0 / default scaling",
            "BZERO   =                  0.0",
            "END",
        ] {
            bytes.extend(card(text));
        }
        bytes.resize(RECORD_LEN, b' ');
        for v in 0i16..12 {
            bytes.extend(v.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_a_16_bit_image_in_row_major_order() {
        let arr = decode_fits(&sample_fits()).unwrap();
        assert_eq!(arr.dim(), (3, 4));
        assert_eq!(arr[(0, 0)], 0.0);
        assert_eq!(arr[(0, 3)], 3.0);
        assert_eq!(arr[(2, 0)], 8.0);
        assert_eq!(arr[(2, 3)], 11.0);
    }

    #[test]
    fn applies_bscale_and_bzero() {
        let mut bytes = Vec::new();
        for text in [
            "SIMPLE  =                    T",
            "BITPIX  =                    8",
            "NAXIS   =                    2",
            "NAXIS1  =                    2",
            "NAXIS2  =                    1",
            "BSCALE  =                  0.5",
            "BZERO   =                 10.0",
            "END",
        ] {
            bytes.extend(card(text));
        }
        bytes.resize(RECORD_LEN, b' ');
        bytes.extend([0u8, 4u8]);
        let arr = decode_fits(&bytes).unwrap();
        assert_eq!(arr[(0, 0)], 10.0);
        assert_eq!(arr[(0, 1)], 12.0);
    }

    #[test]
    fn truncated_data_is_an_error() {
        let mut bytes = sample_fits();
        bytes.truncate(RECORD_LEN + 10); // only 5 of 12 values present
        assert!(decode_fits(&bytes).is_err());
    }

    #[test]
    fn missing_end_keyword_is_an_error() {
        let mut bytes = card("SIMPLE  =                    T");
        bytes.resize(RECORD_LEN, b' ');
        assert!(decode_fits(&bytes).is_err());
    }

    #[test]
    fn non_2d_images_are_rejected() {
        let mut bytes = Vec::new();
        for text in [
            "SIMPLE  =                    T",
            "BITPIX  =                    8",
            "NAXIS   =                    1",
            "NAXIS1  =                    4",
            "END",
        ] {
            bytes.extend(card(text));
        }
        bytes.resize(RECORD_LEN, b' ');
        bytes.extend([0u8; 4]);
        assert!(decode_fits(&bytes).is_err());
    }
}
