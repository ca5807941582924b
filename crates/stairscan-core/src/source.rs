//! Loading chart text from disk.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::scan::ChartScan;

/// Read a chart file and decode it to text.
///
/// A byte order mark wins over the configured encoding. Undecodable bytes are
/// an error rather than being replaced, so a wrong encoding never produces a
/// silently mangled chart.
pub fn read_chart<P: AsRef<Path>>(path: P, config: &ScanConfig) -> Result<String> {
    let path = path.as_ref();
    let encoding = config.text_encoding()?;
    let bytes = fs::read(path).map_err(|e| Error::unreadable(path, e))?;
    let text = decode(&bytes, encoding).map_err(|e| Error::unreadable(path, e))?;
    debug!(
        "Read chart {} ({} bytes, {} lines)",
        path.display(),
        bytes.len(),
        text.lines().count()
    );
    Ok(text)
}

/// Open a chart file for scanning.
///
/// All reading happens up front: if this returns `Ok`, the scan itself
/// cannot fail.
pub fn scan_file<P: AsRef<Path>>(path: P, config: &ScanConfig) -> Result<ChartScan> {
    let text = read_chart(path, config)?;
    Ok(ChartScan::new(text, config.resync))
}

fn decode(bytes: &[u8], configured: &'static Encoding) -> io::Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => {
            if encoding != configured {
                warn!(
                    "Byte order mark says {}, ignoring configured {}",
                    encoding.name(),
                    configured.name()
                );
            }
            (encoding, &bytes[bom_length..])
        }
        None => (configured, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("chart is not valid {}", encoding.name()),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let text = decode("#TITLE:Song;\n1000\n".as_bytes(), encoding_rs::UTF_8).unwrap();
        assert_eq!(text, "#TITLE:Song;\n1000\n");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"#TITLE:Song;");
        let text = decode(&bytes, encoding_rs::UTF_8).unwrap();
        assert_eq!(text, "#TITLE:Song;");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode(&[0x23, 0xFF, 0xFE, 0x41], encoding_rs::UTF_8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_decode_shift_jis() {
        // "譜面" in Shift-JIS
        let bytes = [0x95, 0x88, 0x96, 0xCA];
        let text = decode(&bytes, encoding_rs::SHIFT_JIS).unwrap();
        assert_eq!(text, "譜面");
    }
}
