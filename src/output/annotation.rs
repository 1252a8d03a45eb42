// Fri Jan 16 2026 - Alex

use crate::engine::{MatchEvent, MatchSink};
use crate::memory::Address;
use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

pub const BOOKMARK_PREFIX: &str = "Crypto: ";

/// How the bytes under a dense match are typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataItem {
    Array { item: &'static str, count: usize },
    StringLiteral { len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<DataItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub address: Address,
    pub description: String,
}

/// Records what a disassembler would be told about each match: typed regions,
/// names, comments and bookmarks.
#[derive(Debug, Default)]
pub struct AnnotationLog {
    entries: BTreeMap<Address, Annotation>,
    names: AHashMap<String, Address>,
    bookmarks: Vec<Bookmark>,
}

impl AnnotationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotate(&mut self, event: &MatchEvent) {
        let signature = &event.signature;
        self.set_bookmark(event.address, signature.algorithm());

        if event.is_dense() {
            let item = if signature.is_text() {
                DataItem::StringLiteral { len: signature.byte_len() }
            } else {
                DataItem::Array {
                    item: signature.width().item_name(),
                    count: signature.len(),
                }
            };
            self.set_item(event.address, item);
            self.set_name(event.address, signature.name());
            self.add_comment(event.address, signature.name());
        } else {
            for &address in &event.sub_addresses {
                self.add_comment(address, signature.name());
            }
        }
    }

    /// Appends `text` to the comment at `address` on its own line, unless the
    /// comment already contains it.
    pub fn add_comment(&mut self, address: Address, text: &str) {
        let entry = self.entry(address);
        if let Some(existing) = &mut entry.comment {
            if !existing.contains(text) {
                existing.push('\n');
                existing.push_str(text);
            }
            return;
        }
        entry.comment = Some(text.to_string());
    }

    /// Names `address`, adding a `_N` suffix when another address owns the name.
    /// Returns the name actually applied.
    pub fn set_name(&mut self, address: Address, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while let Some(&owner) = self.names.get(&candidate) {
            if owner == address {
                return candidate;
            }
            candidate = format!("{}_{}", name, suffix);
            suffix += 1;
        }

        let entry = self.entries.entry(address).or_insert_with(|| Annotation {
            address,
            ..Default::default()
        });
        if let Some(previous) = entry.name.replace(candidate.clone()) {
            self.names.remove(&previous);
        }
        self.names.insert(candidate.clone(), address);
        candidate
    }

    pub fn set_item(&mut self, address: Address, item: DataItem) {
        self.entry(address).item = Some(item);
    }

    /// Reuses a crypto bookmark already placed at `address`, otherwise takes a new slot.
    pub fn set_bookmark(&mut self, address: Address, algorithm: &str) {
        let description = format!("{}{}", BOOKMARK_PREFIX, algorithm);
        let existing = self
            .bookmarks
            .iter_mut()
            .find(|b| b.address == address && b.description.starts_with(BOOKMARK_PREFIX));
        match existing {
            Some(bookmark) => bookmark.description = description,
            None => self.bookmarks.push(Bookmark { address, description }),
        }
    }

    pub fn get(&self, address: Address) -> Option<&Annotation> {
        self.entries.get(&address)
    }

    pub fn address_of(&self, name: &str) -> Option<Address> {
        self.names.get(name).copied()
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.values()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.bookmarks.is_empty()
    }

    fn entry(&mut self, address: Address) -> &mut Annotation {
        self.entries.entry(address).or_insert_with(|| Annotation {
            address,
            ..Default::default()
        })
    }
}

impl MatchSink for AnnotationLog {
    fn on_match(&mut self, event: MatchEvent) {
        self.annotate(&event);
    }
}
