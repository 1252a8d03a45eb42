// Fri Jan 16 2026 - Alex

use crate::engine::{MatchEvent, ScanOutcome};
use crate::signature::{DuplicateSignature, Signature, SignatureDatabase};
use colored::{Color, Colorize};
use indexmap::IndexMap;
use itertools::Itertools;
use std::sync::Arc;

const RULE: &str = "================================================================================";

/// Plain or coloured text summaries of scans and signature sets.
pub struct ReportGenerator {
    use_color: bool,
    include_header: bool,
    max_items_per_group: Option<usize>,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            use_color: true,
            include_header: true,
            max_items_per_group: None,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.use_color = color;
        self
    }

    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items_per_group = Some(max);
        self
    }

    /// Scan summary with matches grouped by algorithm in order of first appearance.
    pub fn scan_summary(&self, target: &str, outcome: &ScanOutcome, events: &[MatchEvent]) -> String {
        let mut report = String::new();

        if self.include_header {
            report.push_str(RULE);
            report.push('\n');
            report.push_str(&format!("Crypto signature scan: {}\n", target));
            report.push_str(RULE);
            report.push('\n');
        }

        let status = if outcome.is_completed() {
            self.paint("completed", Color::Green)
        } else {
            self.paint(&format!("cancelled at {}", outcome.cursor), Color::Yellow)
        };
        report.push_str(&format!("Status: {}\n", status));
        report.push_str(&format!(
            "Visited: {}  Unreadable: {}  Dense: {}  Sparse: {}\n",
            outcome.stats.addresses_visited,
            outcome.stats.unreadable_addresses,
            outcome.stats.dense_matches,
            outcome.stats.sparse_matches,
        ));

        let mut groups: IndexMap<&str, Vec<&MatchEvent>> = IndexMap::new();
        for event in events {
            groups.entry(event.algorithm()).or_default().push(event);
        }

        for (algorithm, group) in &groups {
            report.push('\n');
            report.push_str(&format!("{} ({})\n", self.heading(algorithm), group.len()));
            for event in self.limit(group) {
                report.push_str(&self.match_line(event));
                report.push('\n');
            }
            if let Some(hidden) = self.hidden_count(group.len()) {
                report.push_str(&format!("  ... {} more\n", hidden));
            }
        }

        if groups.is_empty() {
            report.push_str("\nNo signatures found\n");
        }

        report
    }

    /// Every signature in the database grouped by algorithm.
    pub fn signature_listing(&self, database: &SignatureDatabase) -> String {
        let groups = database
            .iter()
            .fold(IndexMap::<&str, Vec<&Arc<Signature>>>::new(), |mut map, sig| {
                map.entry(sig.algorithm()).or_default().push(sig);
                map
            });

        let mut report = String::new();
        if self.include_header {
            report.push_str(&format!(
                "{} signatures ({} dense, {} sparse) across {} algorithms\n",
                database.len(),
                database.dense().len(),
                database.sparse().len(),
                database.algorithms().len(),
            ));
        }

        for (algorithm, signatures) in &groups {
            report.push_str(&format!("{}\n", self.heading(algorithm)));
            for sig in signatures {
                report.push_str(&format!(
                    "  {:<28} {:<6} {:>4} x {}\n",
                    self.paint(sig.name(), Color::Cyan),
                    sig.kind(),
                    sig.len(),
                    sig.width().item_name(),
                ));
            }
        }
        report
    }

    pub fn duplicate_listing(&self, duplicates: &[DuplicateSignature]) -> String {
        if duplicates.is_empty() {
            return format!("{}\n", self.paint("No duplicate signatures", Color::Green));
        }
        duplicates
            .iter()
            .map(|d| {
                format!(
                    "{} {} signature {} repeats the bytes of {}\n",
                    self.paint("[!]", Color::Red),
                    d.kind,
                    self.paint(&d.duplicate, Color::Yellow),
                    d.first,
                )
            })
            .collect()
    }

    fn match_line(&self, event: &MatchEvent) -> String {
        let sig = &event.signature;
        let address = self.paint(&event.address.to_string(), Color::Cyan);
        if event.is_dense() {
            format!("  {} {} [{} x {}]", address, sig.name(), sig.len(), sig.width().item_name())
        } else {
            let subs = event.sub_addresses.iter().map(|a| a.to_string()).join(", ");
            format!("  {} {} [sparse: {}]", address, sig.name(), subs)
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn limit<'a>(&self, group: &'a [&'a MatchEvent]) -> &'a [&'a MatchEvent] {
        match self.max_items_per_group {
            Some(max) if group.len() > max => &group[..max],
            _ => group,
        }
    }

    fn hidden_count(&self, len: usize) -> Option<usize> {
        self.max_items_per_group.filter(|&max| len > max).map(|max| len - max)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ScanStats, ScanStatus};
    use crate::memory::{Address, ByteOrder};
    use crate::signature::{ElementWidth, SignatureKind};

    fn sig(name: &str, algorithm: &str, kind: SignatureKind) -> Arc<Signature> {
        Arc::new(Signature::new(name, algorithm, kind, ElementWidth::W4, ByteOrder::Little, vec![7, 8]).unwrap())
    }

    fn outcome(status: ScanStatus) -> ScanOutcome {
        ScanOutcome {
            status,
            matches: 3,
            cursor: Address::new(0x5000),
            stats: ScanStats::default(),
        }
    }

    #[test]
    fn test_scan_summary_groups_by_algorithm() {
        let events = vec![
            MatchEvent::dense(Address::new(0x10), sig("SHA256_K", "SHA256", SignatureKind::Dense)),
            MatchEvent::dense(Address::new(0x20), sig("MD5_T", "MD5", SignatureKind::Dense)),
            MatchEvent::sparse(
                Address::new(0x30),
                sig("SHA256_H0", "SHA256", SignatureKind::Sparse),
                vec![Address::new(0x30), Address::new(0x40)],
            ),
        ];
        let text = ReportGenerator::new()
            .with_color(false)
            .scan_summary("a.out", &outcome(ScanStatus::Completed), &events);

        let sha = text.find("SHA256 (2)").unwrap();
        let md5 = text.find("MD5 (1)").unwrap();
        assert!(sha < md5);
        assert!(text.contains("0x00000010 SHA256_K [2 x dword]"));
        assert!(text.contains("[sparse: 0x00000030, 0x00000040]"));
        assert!(text.contains("Status: completed"));
    }

    #[test]
    fn test_scan_summary_cancelled_and_limited() {
        let events: Vec<_> = (0..5)
            .map(|i| MatchEvent::dense(Address::new(i * 0x10), sig("K", "X", SignatureKind::Dense)))
            .collect();
        let text = ReportGenerator::new()
            .with_color(false)
            .with_header(false)
            .with_max_items(2)
            .scan_summary("a.out", &outcome(ScanStatus::Cancelled), &events);

        assert!(text.contains("cancelled at 0x00005000"));
        assert!(text.contains("... 3 more"));
        assert!(!text.contains(RULE));
    }

    #[test]
    fn test_signature_listing() {
        let db = SignatureDatabase::new(vec![
            Signature::new("A", "Alpha", SignatureKind::Dense, ElementWidth::W8, ByteOrder::Little, vec![1]).unwrap(),
            Signature::new("B", "Beta", SignatureKind::Sparse, ElementWidth::W4, ByteOrder::Little, vec![2]).unwrap(),
        ]);
        let text = ReportGenerator::new().with_color(false).signature_listing(&db);
        assert!(text.starts_with("2 signatures (1 dense, 1 sparse) across 2 algorithms"));
        assert!(text.contains("qword"));
    }

    #[test]
    fn test_duplicate_listing() {
        let generator = ReportGenerator::new().with_color(false);
        assert_eq!(generator.duplicate_listing(&[]), "No duplicate signatures\n");
        let text = generator.duplicate_listing(&[DuplicateSignature {
            kind: SignatureKind::Dense,
            first: "A".to_string(),
            duplicate: "B".to_string(),
        }]);
        assert_eq!(text, "[!] dense signature B repeats the bytes of A\n");
    }
}
