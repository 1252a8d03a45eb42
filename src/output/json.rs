// Fri Jan 16 2026 - Alex

use crate::engine::{MatchEvent, ScanOutcome, ScanStats, ScanStatus};
use crate::memory::{Address, ByteOrder, MemoryRange};
use crate::output::annotation::{Annotation, AnnotationLog, Bookmark};
use crate::signature::{ElementWidth, SignatureKind};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetInfo {
    pub name: String,
    pub format: String,
    pub byte_order: ByteOrder,
    pub bounds: MemoryRange,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub address: Address,
    pub end: Address,
    pub name: String,
    pub algorithm: String,
    pub kind: SignatureKind,
    pub width: ElementWidth,
    pub elements: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_addresses: Vec<Address>,
}

impl From<&MatchEvent> for MatchRecord {
    fn from(event: &MatchEvent) -> Self {
        Self {
            address: event.address,
            end: event.end(),
            name: event.name().to_string(),
            algorithm: event.algorithm().to_string(),
            kind: event.kind,
            width: event.signature.width(),
            elements: event.signature.len(),
            sub_addresses: event.sub_addresses.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub version: String,
    pub generated_at: u64,
    pub target: TargetInfo,
    pub range: MemoryRange,
    pub status: ScanStatus,
    pub cursor: Address,
    pub stats: ScanStats,
    pub matches: Vec<MatchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<Bookmark>>,
}

impl JsonReport {
    pub fn new(target: TargetInfo, range: MemoryRange, outcome: &ScanOutcome, events: &[MatchEvent]) -> Self {
        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at,
            target,
            range,
            status: outcome.status,
            cursor: outcome.cursor,
            stats: outcome.stats,
            matches: events.iter().map(MatchRecord::from).collect(),
            annotations: None,
            bookmarks: None,
        }
    }

    pub fn with_annotations(mut self, log: &AnnotationLog) -> Self {
        self.annotations = Some(log.annotations().cloned().collect());
        self.bookmarks = Some(log.bookmarks().to_vec());
        self
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, OutputError> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<(), OutputError> {
        let text = self.to_json(pretty)?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Signature;
    use serde_json::Value;
    use std::sync::Arc;

    fn sample() -> (ScanOutcome, Vec<MatchEvent>) {
        let sig = Arc::new(
            Signature::new("TEA_DELTA", "TEA", SignatureKind::Dense, ElementWidth::W4, ByteOrder::Little, vec![0x9E3779B9])
                .unwrap(),
        );
        let events = vec![MatchEvent::dense(Address::new(0x2000), sig)];
        let outcome = ScanOutcome {
            status: ScanStatus::Completed,
            matches: 1,
            cursor: Address::new(0x3000),
            stats: ScanStats { addresses_visited: 0x1000, dense_matches: 1, ..Default::default() },
        };
        (outcome, events)
    }

    fn target() -> TargetInfo {
        TargetInfo {
            name: "image.bin".to_string(),
            format: "raw".to_string(),
            byte_order: ByteOrder::Little,
            bounds: MemoryRange::from_start_size(Address::new(0x2000), 0x1000),
        }
    }

    #[test]
    fn test_report_shape() {
        let (outcome, events) = sample();
        let report = JsonReport::new(target(), target().bounds, &outcome, &events);
        let value: Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();

        assert_eq!(value["status"], "completed");
        assert_eq!(value["cursor"], "0x3000");
        assert_eq!(value["target"]["byte_order"], "little");
        assert_eq!(value["matches"][0]["name"], "TEA_DELTA");
        assert_eq!(value["matches"][0]["kind"], "dense");
        assert_eq!(value["matches"][0]["end"], "0x2004");
        assert!(value["matches"][0].get("sub_addresses").is_none());
        assert!(value.get("annotations").is_none());
    }

    #[test]
    fn test_report_with_annotations() {
        let (outcome, events) = sample();
        let mut log = AnnotationLog::new();
        log.annotate(&events[0]);
        let report = JsonReport::new(target(), target().bounds, &outcome, &events).with_annotations(&log);
        let value: Value = serde_json::from_str(&report.to_json(true).unwrap()).unwrap();

        assert_eq!(value["annotations"][0]["name"], "TEA_DELTA");
        assert_eq!(value["annotations"][0]["item"]["type"], "array");
        assert_eq!(value["bookmarks"][0]["description"], "Crypto: TEA");
    }

    #[test]
    fn test_write_to_file() {
        let (outcome, events) = sample();
        let path = std::env::temp_dir().join(format!("css_report_{}.json", std::process::id()));
        JsonReport::new(target(), target().bounds, &outcome, &events)
            .write_to_file(&path, true)
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(text.contains("\"TEA_DELTA\""));
    }
}
