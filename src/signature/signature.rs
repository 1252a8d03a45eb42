// Tue Jan 13 2026 - Alex

use crate::memory::ByteOrder;
use crate::signature::{ElementWidth, SignatureError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    /// All elements form one contiguous run.
    Dense,
    /// Elements appear in order within a bounded window after the first one.
    Sparse,
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureKind::Dense => write!(f, "dense"),
            SignatureKind::Sparse => write!(f, "sparse"),
        }
    }
}

/// A known constant array. Immutable once built; the serialized form is computed
/// at construction and is what both matchers compare against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    algorithm: String,
    kind: SignatureKind,
    width: ElementWidth,
    byte_order: ByteOrder,
    elements: Vec<u64>,
    bytes: Vec<u8>,
    is_text: bool,
}

impl Signature {
    pub fn new(
        name: impl Into<String>,
        algorithm: impl Into<String>,
        kind: SignatureKind,
        width: ElementWidth,
        byte_order: ByteOrder,
        elements: Vec<u64>,
    ) -> Result<Self, SignatureError> {
        let name = name.into();
        if elements.is_empty() {
            return Err(SignatureError::Empty(name));
        }
        if let Some((index, &value)) = elements.iter().enumerate().find(|(_, v)| !width.fits(**v)) {
            return Err(SignatureError::ValueTooWide {
                name,
                index,
                value,
                width: width.bytes(),
            });
        }

        let mut bytes = Vec::with_capacity(elements.len() * width.bytes());
        for &value in &elements {
            width.encode(value, byte_order, &mut bytes);
        }

        Ok(Self {
            name,
            algorithm: algorithm.into(),
            kind,
            width,
            byte_order,
            elements,
            bytes,
            is_text: false,
        })
    }

    /// A character-string constant, one byte per element.
    pub fn text(
        name: impl Into<String>,
        algorithm: impl Into<String>,
        kind: SignatureKind,
        text: &str,
    ) -> Result<Self, SignatureError> {
        let elements = text.bytes().map(u64::from).collect();
        let mut signature = Self::new(name, algorithm, kind, ElementWidth::W1, ByteOrder::Big, elements)?;
        signature.is_text = true;
        Ok(signature)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn kind(&self) -> SignatureKind {
        self.kind
    }

    pub fn width(&self) -> ElementWidth {
        self.width
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }

    /// First byte the image holds when this signature is present: the low byte of
    /// the first element for little endian, the high byte for big endian.
    pub fn first_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// Serialized bytes of element `index`.
    pub fn element_bytes(&self, index: usize) -> &[u8] {
        let w = self.width.bytes();
        &self.bytes[index * w..(index + 1) * w]
    }

    pub fn chunks(&self) -> std::slice::Chunks<'_, u8> {
        self.bytes.chunks(self.width.bytes())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} x {} bytes, {}, {})",
            self.name,
            self.algorithm,
            self.elements.len(),
            self.width,
            self.byte_order,
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_byte_follows_byte_order() {
        let le = Signature::new("T", "TEA", SignatureKind::Dense, ElementWidth::W4, ByteOrder::Little, vec![0x9E3779B9]).unwrap();
        let be = Signature::new("T", "TEA", SignatureKind::Dense, ElementWidth::W4, ByteOrder::Big, vec![0x9E3779B9]).unwrap();
        assert_eq!(le.first_byte(), 0xB9);
        assert_eq!(be.first_byte(), 0x9E);
    }

    #[test]
    fn test_rejects_bad_definitions() {
        assert!(matches!(
            Signature::new("E", "x", SignatureKind::Dense, ElementWidth::W4, ByteOrder::Little, vec![]),
            Err(SignatureError::Empty(_))
        ));
        assert!(matches!(
            Signature::new("W", "x", SignatureKind::Dense, ElementWidth::W2, ByteOrder::Little, vec![1, 0x10000]),
            Err(SignatureError::ValueTooWide { index: 1, .. })
        ));
    }

    #[test]
    fn test_element_bytes() {
        let sig = Signature::new("S", "x", SignatureKind::Sparse, ElementWidth::W2, ByteOrder::Little, vec![0x0102, 0x0304]).unwrap();
        assert_eq!(sig.element_bytes(1), &[0x04, 0x03]);
        assert_eq!(sig.chunks().count(), 2);
        assert_eq!(sig.byte_len(), 4);
    }

    #[test]
    fn test_text_signature() {
        let sig = Signature::text("sigma", "Salsa20", SignatureKind::Dense, "expand 32-byte k").unwrap();
        assert!(sig.is_text());
        assert_eq!(sig.bytes(), b"expand 32-byte k");
        assert_eq!(sig.first_byte(), b'e');
    }
}
