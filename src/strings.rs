//! Reading domain names from the DNS wire protocol.

use std::convert::TryFrom;
use std::fmt;

use log::*;

use crate::wire::{Decoder, WireError};


/// Domain names in the DNS protocol are encoded as **Labels**, which are
/// segments of ASCII characters prefixed by their length. When written
/// out, each segment is followed by a dot.
///
/// Labels are stored leaf-first, in the order they appear on the wire:
/// `www.example.com` is the sequence `[www, example, com]`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone)]
pub struct Labels {
    segments: Vec<(u8, String)>,
}

/// The longest a single label can be on the wire. Length octets with
/// either of the top two bits set mean something other than a length.
const MAX_LABEL_LENGTH: u8 = 63;

/// The longest a whole name can be in its uncompressed wire form,
/// counting every length prefix and the terminating root byte.
const MAX_NAME_LENGTH: usize = 255;

/// The highest offset a compression pointer can express (14 bits).
const MAX_POINTER_TARGET: u16 = 0b_0011_1111_1111_1111;

#[cfg(feature = "with_idna")]
fn label_to_ascii(label: &str) -> Result<String, unic_idna::Errors> {
    let flags = unic_idna::Flags { use_std3_ascii_rules: false, transitional_processing: false, verify_dns_length: true };
    unic_idna::to_ascii(label, flags)
}

#[cfg(not(feature = "with_idna"))]
fn label_to_ascii(label: &str) -> Result<String, ()> {
    Ok(label.to_owned())
}

impl Labels {

    /// Creates a new empty set of labels, which represent the root of the
    /// DNS as a domain with no name.
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Encodes the given input string as labels. If any segment is too
    /// long, returns that segment as an error.
    pub fn encode(input: &str) -> Result<Self, &str> {
        let mut segments = Vec::new();

        for label in input.split('.') {
            if label.is_empty() {
                continue;
            }

            let label_idn = label_to_ascii(label)
                    .map_err(|e| {
                        warn!("Could not encode label {:?}: {:?}", label, e);
                        label
                    })?;

            match u8::try_from(label_idn.len()) {
                Ok(length) => {
                    segments.push((length, label_idn));
                }
                Err(e) => {
                    warn!("Could not encode label {:?}: {}", label, e);
                    return Err(label);
                }
            }
        }

        Ok(Self { segments })
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns a new set of labels concatenating two names.
    pub fn extend(&self, other: &Self) -> Self {
        let mut segments = self.segments.clone();
        segments.extend_from_slice(&other.segments);
        Self { segments }
    }

    /// The number of bytes this name occupies in its uncompressed wire
    /// form: every label preceded by its length octet, then the root byte.
    pub fn wire_length(&self) -> usize {
        self.segments.iter().map(|(length, _)| 1 + usize::from(*length)).sum::<usize>() + 1
    }

    /// Appends one decoded segment.
    pub(crate) fn push(&mut self, length: u8, segment: String) {
        self.segments.push((length, segment));
    }

    /// The labels from the given segment onwards, as their own name.
    pub(crate) fn suffix(&self, start: usize) -> Self {
        Self { segments: self.segments[start ..].to_vec() }
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, segment) in &self.segments {
            write!(f, "{}.", segment)?;
        }

        Ok(())
    }
}


/// An extension for [`Decoder`] that enables reading compressed domain
/// names from DNS packets.
pub(crate) trait ReadLabels {

    /// Read and expand a compressed domain name. Returns the name and the
    /// number of wire bytes it occupied at this position — a compression
    /// pointer counts as its own two bytes, not as its expansion.
    fn read_labels(&mut self) -> Result<(Labels, u16), WireError>;
}

impl ReadLabels for Decoder<'_> {

    #[cfg_attr(feature = "with_mutagen", ::mutagen::mutate)]
    fn read_labels(&mut self) -> Result<(Labels, u16), WireError> {
        let mut labels = Labels::root();
        let mut literal_starts = Vec::new();
        let mut bytes_read = 0_u16;

        loop {
            let offset = self.cursor.position();
            let byte = self.read_u8()?;
            bytes_read += 1;

            if byte == 0 {
                break;
            }

            match byte & 0b_1100_0000 {
                0b_0000_0000 => {
                    if byte > MAX_LABEL_LENGTH {
                        // the mask already rules this out
                        return Err(WireError::LabelTooLong { length: byte });
                    }

                    let text = self.cursor.take(usize::from(byte))?;
                    bytes_read += u16::from(byte);

                    let segment = String::from_utf8_lossy(text).to_string();
                    trace!("Read label -> {:?}", segment);

                    literal_starts.push((offset, labels.len()));
                    labels.push(byte, segment);

                    if labels.wire_length() > MAX_NAME_LENGTH {
                        warn!("Name exceeds {} bytes", MAX_NAME_LENGTH);
                        return Err(WireError::NameTooLong { length: labels.wire_length() });
                    }
                }
                0b_1100_0000 => {
                    let second = self.read_u8()?;
                    bytes_read += 1;

                    let target = u16::from_be_bytes([ byte & 0b_0011_1111, second ]);
                    trace!("Following pointer to offset {}", target);

                    let suffix = self.registry.resolve(target)?.clone();
                    labels = labels.extend(&suffix);

                    if labels.wire_length() > MAX_NAME_LENGTH {
                        warn!("Name exceeds {} bytes after expansion", MAX_NAME_LENGTH);
                        return Err(WireError::NameTooLong { length: labels.wire_length() });
                    }

                    // a pointer is always the last element of a name
                    break;
                }
                _ => {
                    warn!("Label octet {:#04x} is neither a length nor a pointer", byte);
                    return Err(WireError::InvalidLabelType { byte });
                }
            }
        }

        // Only now that the whole name has resolved does each literal
        // label register the suffix that starts at its offset. A pointer
        // to a name still being decoded therefore fails lookup, which is
        // what rules out pointer cycles.
        for (offset, segment) in literal_starts {
            match u16::try_from(offset) {
                Ok(offset) if offset <= MAX_POINTER_TARGET => {
                    self.registry.insert(offset, labels.suffix(segment));
                }
                _ => {
                    // no pointer can reach this far into the buffer
                }
            }
        }

        Ok((labels, bytes_read))
    }
}
