// Tue Jan 13 2026 - Alex

use crate::memory::Address;
use crate::signature::{Signature, SignatureKind};
use serde::Serialize;
use std::sync::Arc;

/// One detected signature occurrence.
///
/// `sub_addresses` is empty for dense matches. For sparse matches it holds one
/// address per element, anchor first, strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub address: Address,
    pub signature: Arc<Signature>,
    pub kind: SignatureKind,
    pub sub_addresses: Vec<Address>,
}

impl MatchEvent {
    pub fn dense(address: Address, signature: Arc<Signature>) -> Self {
        Self {
            address,
            signature,
            kind: SignatureKind::Dense,
            sub_addresses: Vec::new(),
        }
    }

    pub fn sparse(address: Address, signature: Arc<Signature>, sub_addresses: Vec<Address>) -> Self {
        Self {
            address,
            signature,
            kind: SignatureKind::Sparse,
            sub_addresses,
        }
    }

    pub fn is_dense(&self) -> bool {
        self.kind == SignatureKind::Dense
    }

    pub fn name(&self) -> &str {
        self.signature.name()
    }

    pub fn algorithm(&self) -> &str {
        self.signature.algorithm()
    }

    /// Exclusive end of the bytes this match covers.
    pub fn end(&self) -> Address {
        match self.sub_addresses.last() {
            Some(last) if !self.is_dense() => last.saturating_add(self.signature.width().bytes() as u64),
            _ => self.address.saturating_add(self.signature.byte_len() as u64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub addresses_visited: u64,
    pub unreadable_addresses: u64,
    pub dense_attempts: u64,
    pub sparse_attempts: u64,
    pub dense_matches: u64,
    pub sparse_matches: u64,
}

impl ScanStats {
    pub fn merge(&mut self, other: &ScanStats) {
        self.addresses_visited += other.addresses_visited;
        self.unreadable_addresses += other.unreadable_addresses;
        self.dense_attempts += other.dense_attempts;
        self.sparse_attempts += other.sparse_attempts;
        self.dense_matches += other.dense_matches;
        self.sparse_matches += other.sparse_matches;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub status: ScanStatus,
    pub matches: usize,
    /// First address the scan did not visit; the range end once completed.
    pub cursor: Address,
    pub stats: ScanStats,
}

impl ScanOutcome {
    pub fn is_completed(&self) -> bool {
        self.status == ScanStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::ByteOrder;
    use crate::signature::ElementWidth;

    #[test]
    fn test_end_of_dense_and_sparse() {
        let sig = Arc::new(
            Signature::new("S", "x", SignatureKind::Sparse, ElementWidth::W4, ByteOrder::Little, vec![1, 2]).unwrap(),
        );
        let dense = MatchEvent::dense(Address::new(0x100), Arc::clone(&sig));
        assert_eq!(dense.end(), Address::new(0x108));
        let sparse = MatchEvent::sparse(Address::new(0x100), sig, vec![Address::new(0x100), Address::new(0x140)]);
        assert_eq!(sparse.end(), Address::new(0x144));
    }

    #[test]
    fn test_stats_merge() {
        let mut a = ScanStats { addresses_visited: 10, dense_matches: 1, ..Default::default() };
        a.merge(&ScanStats { addresses_visited: 5, unreadable_addresses: 2, ..Default::default() });
        assert_eq!(a.addresses_visited, 15);
        assert_eq!(a.unreadable_addresses, 2);
        assert_eq!(a.dense_matches, 1);
    }
}
