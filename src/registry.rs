//! The label registry that backs name compression.
//!
//! DNS messages avoid repeating domain names by replacing a name’s tail
//! with a two-byte pointer to an earlier occurrence in the same message.
//! The registry remembers, for every literal label the decoder has seen,
//! the full label suffix beginning at that label’s byte offset, so a
//! later pointer can be answered without re-reading the buffer.

use std::collections::HashMap;

use log::*;

use crate::strings::Labels;
use crate::wire::WireError;


/// The per-decode memo of label suffixes, keyed by absolute byte offset.
///
/// Entries are only ever created for labels read at literal positions
/// whose whole name has been decoded, so a pointer can only refer
/// backwards, to a name that already resolved. Forward references,
/// references into the middle of a label, and references to another
/// pointer octet all fail lookup, which is what keeps pointer chasing
/// loop-free.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    suffixes: HashMap<u16, Labels>,
}

impl LabelRegistry {

    /// Creates an empty registry for a fresh decode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the label suffix starting at the given absolute offset.
    pub fn resolve(&self, target: u16) -> Result<&Labels, WireError> {
        match self.suffixes.get(&target) {
            Some(labels) => {
                trace!("Resolved pointer to offset {} -> {}", target, labels);
                Ok(labels)
            }
            None => {
                warn!("Pointer to offset {} matches no known label", target);
                Err(WireError::UnresolvedPointer { target })
            }
        }
    }

    /// Records the suffix that starts at the given offset. Later entries
    /// for the same offset are ignored; the first one wins.
    pub(crate) fn insert(&mut self, offset: u16, suffix: Labels) {
        self.suffixes.entry(offset).or_insert(suffix);
    }

    /// The number of registered suffixes.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }
}
