//! Parsing the DNS wire protocol.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ByteOrder};
use log::*;

use crate::cursor::Cursor;
use crate::record::Record;
use crate::registry::LabelRegistry;
use crate::strings::{Labels, ReadLabels};
use crate::types::*;


/// The state that lives for exactly one message decode: the cursor over
/// the buffer, the label registry that answers compression pointers, and
/// the four section counts read from the header.
///
/// The decoder also carries the field-level readers that every record
/// payload is assembled from. Each reads a determinate number of bytes
/// and fails with [`WireError::Incomplete`] if the buffer runs out.
#[derive(Debug)]
pub struct Decoder<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) registry: LabelRegistry,
    pub(crate) counts: SectionCounts,
}

/// How many records the header claims each section holds.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct SectionCounts {

    /// The number of question records (QDCOUNT).
    pub queries: u16,

    /// The number of answer records (ANCOUNT).
    pub answers: u16,

    /// The number of authority records (NSCOUNT).
    pub authorities: u16,

    /// The number of additional records (ARCOUNT).
    pub additionals: u16,
}

impl<'a> Decoder<'a> {

    /// Creates a decoder positioned at the start of the given buffer,
    /// with an empty label registry.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
            registry: LabelRegistry::new(),
            counts: SectionCounts::default(),
        }
    }

    /// The cursor’s current absolute offset.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// The section counts read from the header, all zero before then.
    pub fn counts(&self) -> SectionCounts {
        self.counts
    }

    /// Reads one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.cursor.take(1)?[0])
    }

    /// Reads a big-endian unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(BigEndian::read_u16(self.cursor.take(2)?))
    }

    /// Reads a big-endian unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(BigEndian::read_u32(self.cursor.take(4)?))
    }

    /// Reads four octets as an IPv4 address, in network order.
    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr, WireError> {
        Ok(Ipv4Addr::from(BigEndian::read_u32(self.cursor.take(4)?)))
    }

    /// Reads eight big-endian 16-bit groups as an IPv6 address.
    pub fn read_ipv6(&mut self) -> Result<Ipv6Addr, WireError> {
        let mut groups = [0_u16; 8];
        BigEndian::read_u16_into(self.cursor.take(16)?, &mut groups);
        Ok(Ipv6Addr::from(groups))
    }

    /// Reads a character-string: one length byte, then that many bytes.
    pub fn read_character_string(&mut self) -> Result<Box<[u8]>, WireError> {
        let length = self.read_u8()?;
        trace!("Read character-string length -> {:?}", length);
        Ok(Box::from(self.cursor.take(usize::from(length))?))
    }

    /// Reads an opaque run of exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, WireError> {
        Ok(self.cursor.take(count)?.to_vec())
    }
}


impl Message {

    /// Decodes the given buffer as one complete DNS message.
    ///
    /// The whole buffer must be consumed: a message that ends early fails
    /// with [`WireError::Incomplete`], and one with bytes to spare fails
    /// with [`WireError::TrailingGarbage`]. The first error encountered
    /// wins, and any partially-decoded state is discarded with it.
    #[cfg_attr(all(test, feature = "with_mutagen"), ::mutagen::mutate)]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        info!("Decoding message of {} bytes", bytes.len());
        trace!("Bytes -> {:?}", bytes);
        let mut c = Decoder::new(bytes);

        let transaction_id = c.read_u16()?;
        trace!("Read txid -> {:?}", transaction_id);

        let flags = Flags::from_u16(c.read_u16()?);
        trace!("Read flags -> {:#?}", flags);

        let counts = SectionCounts {
            queries:      c.read_u16()?,
            answers:      c.read_u16()?,
            authorities:  c.read_u16()?,
            additionals:  c.read_u16()?,
        };
        c.counts = counts;

        let mut queries = Vec::new();
        debug!("Reading {}x query", counts.queries);
        for _ in 0 .. counts.queries {
            let (qname, _) = c.read_labels()?;
            queries.push(Query::from_bytes(qname, &mut c)?);
        }

        let mut answers = Vec::new();
        debug!("Reading {}x answer", counts.answers);
        for _ in 0 .. counts.answers {
            let (qname, _) = c.read_labels()?;
            answers.push(Answer::from_bytes(qname, &mut c)?);
        }

        let mut authorities = Vec::new();
        debug!("Reading {}x authority record", counts.authorities);
        for _ in 0 .. counts.authorities {
            let (qname, _) = c.read_labels()?;
            authorities.push(Answer::from_bytes(qname, &mut c)?);
        }

        let mut additionals = Vec::new();
        debug!("Reading {}x additional record", counts.additionals);
        for _ in 0 .. counts.additionals {
            let (qname, _) = c.read_labels()?;
            additionals.push(Answer::from_bytes(qname, &mut c)?);
        }

        if c.remaining() > 0 {
            warn!("{} bytes remain after the final section", c.remaining());
            return Err(WireError::TrailingGarbage { remaining: c.remaining() });
        }

        Ok(Self { transaction_id, flags, queries, answers, authorities, additionals })
    }
}


impl Query {

    /// Reads the four-byte trailer that follows a question’s name.
    #[cfg_attr(all(test, feature = "with_mutagen"), ::mutagen::mutate)]
    fn from_bytes(qname: Labels, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let qtype = c.read_u16()?;
        trace!("Read qtype -> {:?}", qtype);

        let qclass = QClass::from_u16(c.read_u16()?);
        trace!("Read qclass -> {:?}", qclass);

        Ok(Self { qtype, qclass, qname })
    }
}


impl Answer {

    /// Reads the ten-byte trailer that follows a resource record’s name,
    /// then the payload it declares. The payload must account for every
    /// one of its stated bytes.
    #[cfg_attr(all(test, feature = "with_mutagen"), ::mutagen::mutate)]
    fn from_bytes(qname: Labels, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let qtype = c.read_u16()?;
        trace!("Read qtype -> {:?}", qtype);

        let qclass = QClass::from_u16(c.read_u16()?);
        trace!("Read qclass -> {:?}", qclass);

        let ttl = c.read_u32()?;
        trace!("Read TTL -> {:?}", ttl);

        let stated_length = c.read_u16()?;
        trace!("Read record length -> {:?}", stated_length);

        let start = c.position();
        let record = Record::from_bytes(qtype, stated_length, c)?;

        let consumed_length = c.position() - start;
        if consumed_length != usize::from(stated_length) {
            warn!("Record stated {} bytes but its payload took {}", stated_length, consumed_length);
            return Err(WireError::RdataLengthMismatch { stated_length, consumed_length });
        }

        Ok(Self { qclass, qname, record, ttl })
    }
}


impl Record {

    /// Reads the payload of a record of the given type, which has already
    /// been read, along with its stated length.
    #[cfg_attr(all(test, feature = "with_mutagen"), ::mutagen::mutate)]
    fn from_bytes(qtype: TypeInt, stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        use crate::record::*;

        macro_rules! try_record {
            ($record:tt) => {
                if $record::RR_TYPE == qtype {
                    info!("Parsing {} record (type {}, len {})", $record::NAME, qtype, stated_length);
                    return Wire::read(stated_length, c).map(Self::$record)
                }
            }
        }

        // Try all the records, one type at a time, returning early if the
        // type number matches.
        try_record!(A);
        try_record!(AAAA);
        try_record!(CAA);
        try_record!(CNAME);
        try_record!(HINFO);
        try_record!(MX);
        try_record!(NS);
        try_record!(PTR);
        try_record!(SOA);
        try_record!(SRV);
        try_record!(TXT);

        // Otherwise, the payload is as opaque to us as it is to the wire:
        // exactly the stated number of bytes.
        let bytes = c.read_bytes(usize::from(stated_length))?;

        let type_number = UnknownQtype::from(qtype);
        Ok(Self::Other { type_number, bytes })
    }
}


impl QClass {
    fn from_u16(uu: u16) -> Self {
        match uu {
            0x0001 => Self::IN,
            0x0003 => Self::CH,
            0x0004 => Self::HS,
                 _ => Self::Other(uu),
        }
    }
}


/// Determines the record type number to signify a record with the given name.
pub fn find_qtype_number(record_type: &str) -> Option<TypeInt> {
    use crate::record::*;

    macro_rules! try_record {
        ($record:tt) => {
            if $record::NAME == record_type {
                return Some($record::RR_TYPE);
            }
        }
    }

    try_record!(A);
    try_record!(AAAA);
    try_record!(CAA);
    try_record!(CNAME);
    try_record!(HINFO);
    try_record!(MX);
    try_record!(NS);
    try_record!(PTR);
    try_record!(SOA);
    try_record!(SRV);
    try_record!(TXT);

    None
}


impl Flags {

    /// The set of flags that represents a query packet.
    pub fn query() -> Self {
        Self::from_u16(0b_0000_0001_0000_0000)
    }

    /// The set of flags that represents a successful response.
    pub fn standard_response() -> Self {
        Self::from_u16(0b_1000_0001_1000_0000)
    }

    /// Extracts the flags from the given two-byte number.
    pub fn from_u16(bits: u16) -> Self {
        let has_bit = |bit| { bits & bit == bit };

        Self {
            response:               has_bit(0b_1000_0000_0000_0000),
            opcode:                 Opcode::from_bits((bits.to_be_bytes()[0] & 0b_0111_1000) >> 3),
            authoritative:          has_bit(0b_0000_0100_0000_0000),
            truncated:              has_bit(0b_0000_0010_0000_0000),
            recursion_desired:      has_bit(0b_0000_0001_0000_0000),
            recursion_available:    has_bit(0b_0000_0000_1000_0000),
            // (the Z bits are reserved)       0b_0000_0000_0111_0000
            error_code:             ErrorCode::from_bits(bits & 0b_1111),
        }
    }
}


impl Opcode {

    /// Extracts the opcode from this four-bit number, which should have
    /// been extracted from the packet and shifted to be in the range 0–15.
    fn from_bits(bits: u8) -> Self {
        if bits == 0 {
            Self::Query
        }
        else {
            assert!(bits <= 15, "bits {:#08b} out of range", bits);
            Self::Other(bits)
        }
    }
}


impl ErrorCode {

    /// Extracts the rcode from the last four bits of the flags field.
    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => None,
            1 => Some(Self::FormatError),
            2 => Some(Self::ServerFailure),
            3 => Some(Self::NXDomain),
            4 => Some(Self::NotImplemented),
            5 => Some(Self::QueryRefused),
           16 => Some(Self::BadVersion),
            n => Some(Self::Other(n)),
        }
    }
}


/// Trait for decoding DNS record structures from bytes read over the wire.
pub trait Wire: Sized {

    /// This record’s type as a string, such as `"A"` or `"CNAME"`.
    const NAME: &'static str;

    /// The number signifying that a record is of this type.
    /// See <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>
    const RR_TYPE: u16;

    /// Read this record’s payload from the decoder. The stated length is
    /// the record’s declared rdata size; only payloads without an
    /// intrinsic width (opaque runs, trailing values) should consume by
    /// it, but fixed-width payloads must verify it.
    fn read(stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError>;
}


/// Helper macro to get the qtype number of a record type at compile-time.
///
/// # Examples
///
/// ```
/// use dns_wire::{qtype, record::MX};
///
/// assert_eq!(15, qtype!(MX));
/// ```
#[macro_export]
macro_rules! qtype {
    ($type:ty) => {
        <$type as $crate::Wire>::RR_TYPE
    }
}


/// Something that can go wrong decoding a message.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum WireError {

    /// The decoder needed to read past the end of the buffer. Almost all
    /// the time, this means the message was truncated in transit.
    Incomplete,

    /// Bytes remained in the buffer after every section the header
    /// declared had been decoded. Contains the number of surplus bytes.
    TrailingGarbage {

        /// How many bytes were left over.
        remaining: usize,
    },

    /// A label octet’s top two bits were `01` or `10`, patterns no DNS
    /// revision has assigned a meaning.
    InvalidLabelType {

        /// The offending octet.
        byte: u8,
    },

    /// A compression pointer referred to an offset where no label is
    /// known to start: ahead of the read position, into the middle of a
    /// label, at another pointer octet, or outside the buffer entirely.
    UnresolvedPointer {

        /// The absolute offset the pointer named.
        target: u16,
    },

    /// A name’s uncompressed wire form, counting every length prefix and
    /// the terminating root byte, exceeded 255 bytes.
    NameTooLong {

        /// The length the name had reached when it was rejected.
        length: usize,
    },

    /// A literal label claimed a length over 63 bytes. The label-type
    /// check already excludes this, but the invariant is enforced on its
    /// own account too.
    LabelTooLong {

        /// The claimed label length.
        length: u8,
    },

    /// A record’s payload accounted for a different number of bytes than
    /// the record declared.
    ///
    /// There are two ways, in general, to read arbitrary-length data from
    /// a stream of bytes: length-prefixed (read the length, then read
    /// that many bytes) or sentinel-terminated (keep reading bytes until
    /// a certain value appears, usually zero). The DNS protocol uses
    /// both: each record’s size is specified up-front in the packet, but
    /// inside the record there exist domain names that must be read until
    /// their terminator. When the two disagree, the record is malformed,
    /// and whichever of the length or the contents is the “wrong” one
    /// cannot be known from this side of the wire.
    RdataLengthMismatch {

        /// The length of the record’s data, as specified in the packet.
        stated_length: u16,

        /// The number of bytes the payload decoders actually took.
        consumed_length: usize,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => {
                write!(f, "unexpected end of message")
            }
            Self::TrailingGarbage { remaining } => {
                write!(f, "{} bytes remain after the final section", remaining)
            }
            Self::InvalidLabelType { byte } => {
                write!(f, "label octet {:#04x} has an invalid type", byte)
            }
            Self::UnresolvedPointer { target } => {
                write!(f, "compression pointer to offset {} matches no label", target)
            }
            Self::NameTooLong { length } => {
                write!(f, "name of {} bytes exceeds the 255-byte limit", length)
            }
            Self::LabelTooLong { length } => {
                write!(f, "label of {} bytes exceeds the 63-byte limit", length)
            }
            Self::RdataLengthMismatch { stated_length, consumed_length } => {
                write!(f, "record stated {} bytes but its payload took {}", stated_length, consumed_length)
            }
        }
    }
}

impl std::error::Error for WireError {
}
