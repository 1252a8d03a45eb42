// Wed Jan 14 2026 - Alex

use crate::memory::ByteOrder;
use crate::signature::builtin::{self, BuiltinEntry, Values};
use crate::signature::{ElementWidth, Signature, SignatureError, SignatureKind};
use ahash::AHashMap;
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

static BUILTIN_LE: Lazy<Arc<SignatureDatabase>> =
    Lazy::new(|| Arc::new(SignatureDatabase::from_builtin(ByteOrder::Little)));
static BUILTIN_BE: Lazy<Arc<SignatureDatabase>> =
    Lazy::new(|| Arc::new(SignatureDatabase::from_builtin(ByteOrder::Big)));

/// Two signatures in one partition that serialize to the same bytes. The later one
/// can never be reported while first-match-wins is in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSignature {
    pub kind: SignatureKind,
    pub first: String,
    pub duplicate: String,
}

/// Immutable signature set, partitioned into dense and sparse lists that keep their
/// insertion order, with a first-byte index over each partition.
#[derive(Debug)]
pub struct SignatureDatabase {
    dense: Vec<Arc<Signature>>,
    sparse: Vec<Arc<Signature>>,
    dense_index: Vec<Vec<usize>>,
    sparse_index: Vec<Vec<usize>>,
    duplicates: Vec<DuplicateSignature>,
}

impl SignatureDatabase {
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self::from_shared(signatures.into_iter().map(Arc::new).collect())
    }

    fn from_shared(signatures: Vec<Arc<Signature>>) -> Self {
        let (dense, sparse): (Vec<_>, Vec<_>) = signatures
            .into_iter()
            .partition(|s| s.kind() == SignatureKind::Dense);

        let mut duplicates = find_duplicates(&dense, SignatureKind::Dense);
        duplicates.extend(find_duplicates(&sparse, SignatureKind::Sparse));
        for dup in &duplicates {
            log::warn!(
                "{} signature '{}' has the same bytes as '{}' and will never be reported first",
                dup.kind,
                dup.duplicate,
                dup.first
            );
        }

        Self {
            dense_index: build_index(&dense),
            sparse_index: build_index(&sparse),
            dense,
            sparse,
            duplicates,
        }
    }

    /// The compiled-in tables serialized for an image of the given byte order.
    pub fn builtin(order: ByteOrder) -> Arc<SignatureDatabase> {
        match order {
            ByteOrder::Little => Arc::clone(&BUILTIN_LE),
            ByteOrder::Big => Arc::clone(&BUILTIN_BE),
        }
    }

    fn from_builtin(order: ByteOrder) -> Self {
        let signatures = builtin::DENSE
            .iter()
            .chain(builtin::SPARSE.iter())
            .filter_map(|entry| match entry_to_signature(entry, order) {
                Ok(sig) => Some(sig),
                Err(e) => {
                    log::error!("Skipping built-in signature {}: {}", entry.name, e);
                    None
                }
            })
            .collect();
        Self::new(signatures)
    }

    /// Parses a JSON array of signature definitions. Definitions without a
    /// `byte_order` take `image_order`.
    pub fn from_json_str(json: &str, image_order: ByteOrder) -> Result<Self, SignatureError> {
        let defs: Vec<SignatureDef> = serde_json::from_str(json)?;
        let signatures = defs
            .into_iter()
            .map(|def| def.into_signature(image_order))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(signatures))
    }

    pub fn load_json<P: AsRef<Path>>(path: P, image_order: ByteOrder) -> Result<Self, SignatureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content, image_order)
    }

    /// A new database holding this one's signatures followed by `other`'s.
    pub fn merge(&self, other: &SignatureDatabase) -> Self {
        let all = self
            .dense
            .iter()
            .chain(other.dense.iter())
            .chain(self.sparse.iter())
            .chain(other.sparse.iter())
            .cloned()
            .collect();
        Self::from_shared(all)
    }

    pub fn candidates_for(&self, first_byte: u8, kind: SignatureKind) -> impl Iterator<Item = &Arc<Signature>> + '_ {
        let (list, index) = match kind {
            SignatureKind::Dense => (&self.dense, &self.dense_index),
            SignatureKind::Sparse => (&self.sparse, &self.sparse_index),
        };
        index[first_byte as usize].iter().map(move |&i| &list[i])
    }

    pub fn has_candidates(&self, first_byte: u8) -> bool {
        !self.dense_index[first_byte as usize].is_empty() || !self.sparse_index[first_byte as usize].is_empty()
    }

    pub fn dense(&self) -> &[Arc<Signature>] {
        &self.dense
    }

    pub fn sparse(&self) -> &[Arc<Signature>] {
        &self.sparse
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Signature>> {
        self.dense.iter().chain(self.sparse.iter())
    }

    pub fn len(&self) -> usize {
        self.dense.len() + self.sparse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First signature with this name, dense before sparse.
    pub fn get(&self, name: &str) -> Option<&Arc<Signature>> {
        self.iter().find(|s| s.name() == name)
    }

    pub fn get_kind(&self, name: &str, kind: SignatureKind) -> Option<&Arc<Signature>> {
        let list = match kind {
            SignatureKind::Dense => &self.dense,
            SignatureKind::Sparse => &self.sparse,
        };
        list.iter().find(|s| s.name() == name)
    }

    pub fn algorithms(&self) -> Vec<&str> {
        self.iter().map(|s| s.algorithm()).unique().collect()
    }

    pub fn duplicates(&self) -> &[DuplicateSignature] {
        &self.duplicates
    }
}

fn build_index(list: &[Arc<Signature>]) -> Vec<Vec<usize>> {
    let mut index = vec![Vec::new(); 256];
    for (i, sig) in list.iter().enumerate() {
        index[sig.first_byte() as usize].push(i);
    }
    index
}

fn find_duplicates(list: &[Arc<Signature>], kind: SignatureKind) -> Vec<DuplicateSignature> {
    let mut seen: AHashMap<&[u8], &str> = AHashMap::with_capacity(list.len());
    let mut duplicates = Vec::new();
    for sig in list {
        match seen.get(sig.bytes()) {
            Some(first) => duplicates.push(DuplicateSignature {
                kind,
                first: first.to_string(),
                duplicate: sig.name().to_string(),
            }),
            None => {
                seen.insert(sig.bytes(), sig.name());
            }
        }
    }
    duplicates
}

fn entry_to_signature(entry: &BuiltinEntry, order: ByteOrder) -> Result<Signature, SignatureError> {
    match entry.values {
        Values::Numbers(width, values) => Signature::new(
            entry.name,
            entry.algorithm,
            entry.kind,
            width,
            order,
            values.to_vec(),
        ),
        Values::Text(text) => Signature::text(entry.name, entry.algorithm, entry.kind, text),
    }
}

#[derive(Debug, Deserialize)]
struct SignatureDef {
    name: String,
    algorithm: String,
    #[serde(default = "default_kind")]
    kind: SignatureKind,
    #[serde(default)]
    byte_order: Option<ByteOrder>,
    #[serde(default)]
    width: Option<ElementWidth>,
    #[serde(default)]
    elements: Option<Vec<ElementValue>>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ElementValue {
    Number(u64),
    Literal(String),
}

fn default_kind() -> SignatureKind {
    SignatureKind::Dense
}

impl SignatureDef {
    fn into_signature(self, image_order: ByteOrder) -> Result<Signature, SignatureError> {
        match (self.elements, self.text) {
            (Some(elements), _) => {
                let values = elements
                    .into_iter()
                    .map(|v| v.parse(&self.name))
                    .collect::<Result<Vec<_>, _>>()?;
                Signature::new(
                    self.name,
                    self.algorithm,
                    self.kind,
                    self.width.unwrap_or(ElementWidth::W4),
                    self.byte_order.unwrap_or(image_order),
                    values,
                )
            }
            (None, Some(text)) => Signature::text(self.name, self.algorithm, self.kind, &text),
            (None, None) => Err(SignatureError::MissingValues(self.name)),
        }
    }
}

impl ElementValue {
    fn parse(self, name: &str) -> Result<u64, SignatureError> {
        match self {
            ElementValue::Number(n) => Ok(n),
            ElementValue::Literal(text) => {
                let trimmed = text.trim();
                let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
                    Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
                    None => trimmed.parse::<u64>(),
                };
                parsed.map_err(|_| SignatureError::InvalidElement {
                    name: name.to_string(),
                    text,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dword(name: &str, kind: SignatureKind, values: &[u64]) -> Signature {
        Signature::new(name, "test", kind, ElementWidth::W4, ByteOrder::Little, values.to_vec()).unwrap()
    }

    #[test]
    fn test_partitions_keep_order() {
        let db = SignatureDatabase::new(vec![
            dword("a", SignatureKind::Sparse, &[1, 2]),
            dword("b", SignatureKind::Dense, &[3]),
            dword("c", SignatureKind::Sparse, &[4]),
        ]);
        let sparse: Vec<_> = db.sparse().iter().map(|s| s.name()).collect();
        assert_eq!(sparse, ["a", "c"]);
        assert_eq!(db.dense().len(), 1);
        assert_eq!(db.len(), 3);
    }

    #[test]
    fn test_first_byte_index() {
        let db = SignatureDatabase::new(vec![
            dword("x", SignatureKind::Dense, &[0x11223344]),
            dword("y", SignatureKind::Dense, &[0x55667744]),
            dword("z", SignatureKind::Sparse, &[0x44]),
        ]);
        let dense: Vec<_> = db.candidates_for(0x44, SignatureKind::Dense).map(|s| s.name()).collect();
        assert_eq!(dense, ["x", "y"]);
        assert_eq!(db.candidates_for(0x44, SignatureKind::Sparse).count(), 1);
        assert_eq!(db.candidates_for(0x11, SignatureKind::Dense).count(), 0);
        assert!(!db.has_candidates(0x11));
    }

    #[test]
    fn test_duplicates_are_reported_not_fatal() {
        let db = SignatureDatabase::new(vec![
            dword("first", SignatureKind::Dense, &[7, 8]),
            dword("second", SignatureKind::Dense, &[7, 8]),
            dword("sparse", SignatureKind::Sparse, &[7, 8]),
        ]);
        assert_eq!(db.len(), 3);
        assert_eq!(
            db.duplicates(),
            &[DuplicateSignature {
                kind: SignatureKind::Dense,
                first: "first".to_string(),
                duplicate: "second".to_string(),
            }]
        );
    }

    #[test]
    fn test_builtin_tables() {
        let db = SignatureDatabase::builtin(ByteOrder::Little);
        assert!(db.duplicates().is_empty());
        assert!(db.sparse().len() > 40);

        let sha1 = db.get_kind("SHA1_H0", SignatureKind::Dense).unwrap();
        assert_eq!(&sha1.bytes()[..4], &[0x01, 0x23, 0x45, 0x67]);
        assert_eq!(db.candidates_for(0x01, SignatureKind::Dense).next().unwrap().name(), "SHA1_H0");

        let be = SignatureDatabase::builtin(ByteOrder::Big);
        assert_eq!(be.get("TEA_DELTA").unwrap().first_byte(), 0x9E);
        assert_eq!(be.get("SALSA20_SIGMA").unwrap().bytes(), b"expand 32-byte k");
        assert!(Arc::ptr_eq(&be, &SignatureDatabase::builtin(ByteOrder::Big)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "K1", "algorithm": "Custom", "width": 4, "elements": ["0xDEADBEEF", 16]},
            {"name": "K2", "algorithm": "Custom", "kind": "sparse", "width": 2,
             "byte_order": "big", "elements": [258, "0x0304"]},
            {"name": "K3", "algorithm": "Text", "text": "magic"}
        ]"#;
        let db = SignatureDatabase::from_json_str(json, ByteOrder::Little).unwrap();
        assert_eq!(db.get("K1").unwrap().bytes(), &[0xEF, 0xBE, 0xAD, 0xDE, 0x10, 0, 0, 0]);
        let k2 = db.get("K2").unwrap();
        assert_eq!(k2.kind(), SignatureKind::Sparse);
        assert_eq!(k2.bytes(), &[0x01, 0x02, 0x03, 0x04]);
        assert!(db.get("K3").unwrap().is_text());
        assert_eq!(db.algorithms(), ["Custom", "Text"]);
    }

    #[test]
    fn test_from_json_errors() {
        let bad = r#"[{"name": "B", "algorithm": "x", "elements": ["0xZZ"]}]"#;
        assert!(matches!(
            SignatureDatabase::from_json_str(bad, ByteOrder::Little),
            Err(SignatureError::InvalidElement { .. })
        ));
        let missing = r#"[{"name": "M", "algorithm": "x"}]"#;
        assert!(matches!(
            SignatureDatabase::from_json_str(missing, ByteOrder::Little),
            Err(SignatureError::MissingValues(_))
        ));
        let width = r#"[{"name": "W", "algorithm": "x", "width": 3, "elements": [1]}]"#;
        assert!(matches!(
            SignatureDatabase::from_json_str(width, ByteOrder::Little),
            Err(SignatureError::Json(_))
        ));
    }

    #[test]
    fn test_merge_appends() {
        let base = SignatureDatabase::new(vec![dword("a", SignatureKind::Dense, &[1])]);
        let extra = SignatureDatabase::new(vec![dword("b", SignatureKind::Dense, &[1])]);
        let merged = base.merge(&extra);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.duplicates().len(), 1);
        assert_eq!(merged.dense()[1].name(), "b");
    }
}
