//! Access point directory
//!
//! Read-only view of the scan results the console browses. Records are
//! copied out of the scanner as-is, so SSID bytes are not trusted to be
//! terminated or printable.

use wardeck_display::text::{format_line, LineText};

/// SSID field width
pub const SSID_LEN: usize = 32;

/// Maximum number of scan results kept
pub const MAX_APS: usize = 32;

/// One discovered access point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApRecord {
    pub ssid: [u8; SSID_LEN],
    pub rssi: i8,
    pub channel: u8,
    pub authmode: u8,
    pub bssid: [u8; 6],
}

impl ApRecord {
    /// Build a record, copying at most 32 SSID bytes
    pub fn new(ssid: &[u8], rssi: i8, channel: u8, authmode: u8, bssid: [u8; 6]) -> Self {
        let mut field = [0u8; SSID_LEN];
        let len = ssid.len().min(SSID_LEN);
        field[..len].copy_from_slice(&ssid[..len]);
        Self {
            ssid: field,
            rssi,
            channel,
            authmode,
            bssid,
        }
    }

    /// SSID as display text
    ///
    /// Stops at the first NUL or after 32 bytes. Bytes outside 32..=127
    /// become `'?'`.
    pub fn ssid_text(&self) -> LineText {
        let mut text = LineText::new();
        for &b in self.ssid.iter().take_while(|&&b| b != 0) {
            let ch = if (32..=127).contains(&b) { b as char } else { '?' };
            if text.push(ch).is_err() {
                break;
            }
        }
        text
    }

    /// BSSID as `xx:xx:xx:xx:xx:xx`
    pub fn bssid_text(&self) -> LineText {
        let b = &self.bssid;
        format_line(format_args!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        ))
    }
}

/// Scan results container used by the firmware
pub type ScanResults = heapless::Vec<ApRecord, MAX_APS>;

/// Indexed access to discovered networks
pub trait ApDirectory {
    fn count(&self) -> usize;
    fn record_at(&self, index: usize) -> Option<&ApRecord>;
}

impl ApDirectory for [ApRecord] {
    fn count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> Option<&ApRecord> {
        self.get(index)
    }
}

impl<const N: usize> ApDirectory for heapless::Vec<ApRecord, N> {
    fn count(&self) -> usize {
        self.len()
    }

    fn record_at(&self, index: usize) -> Option<&ApRecord> {
        self.get(index)
    }
}

/// Log every record, numbered from 1
pub fn log_scan_results<A: ApDirectory + ?Sized>(aps: &A) {
    info!("--- Scan results: {} AP(s) ---", aps.count());
    for i in 0..aps.count() {
        let Some(r) = aps.record_at(i) else {
            continue;
        };
        let ssid = r.ssid_text();
        let bssid = r.bssid_text();
        info!(
            "{}: SSID='{}' RSSI={} CH={} AUTH={} BSSID={}",
            i + 1,
            ssid.as_str(),
            r.rssi,
            r.channel,
            r.authmode,
            bssid.as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ssid: &[u8]) -> ApRecord {
        ApRecord::new(ssid, -40, 6, 3, [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01])
    }

    #[test]
    fn test_ssid_stops_at_nul() {
        assert_eq!(record(b"home\0junk").ssid_text().as_str(), "home");
    }

    #[test]
    fn test_ssid_unterminated_full_width() {
        let r = record(&[b'x'; 40]);
        assert_eq!(r.ssid_text().len(), SSID_LEN);
    }

    #[test]
    fn test_ssid_non_printable() {
        assert_eq!(record(b"caf\xc3\xa9\x07").ssid_text().as_str(), "caf???");
    }

    #[test]
    fn test_bssid_text() {
        assert_eq!(record(b"a").bssid_text().as_str(), "de:ad:be:ef:00:01");
    }

    #[test]
    fn test_directory_impls() {
        let table = [record(b"one"), record(b"two")];
        let dir: &[ApRecord] = &table;
        assert_eq!(dir.count(), 2);
        assert_eq!(dir.record_at(1).unwrap().ssid_text().as_str(), "two");
        assert!(dir.record_at(2).is_none());

        let mut results = ScanResults::new();
        results.push(record(b"three")).unwrap();
        assert_eq!(results.count(), 1);
        log_scan_results(&results);
    }
}
