//! The structures that make up a decoded DNS message.
//!
//! A message is a header followed by four ordered record sections. The
//! header carries a transaction ID, a word of flags, and the lengths of
//! the sections; the sections hold question records and resource records.

use crate::record::Record;
use crate::strings::Labels;


/// A DNS message decoded from a byte buffer.
#[derive(PartialEq, Debug, Clone)]
pub struct Message {

    /// The transaction ID, used to pair up requests and responses.
    pub transaction_id: u16,

    /// The flags that accompany every DNS packet.
    pub flags: Flags,

    /// The question section.
    pub queries: Vec<Query>,

    /// The answer section.
    pub answers: Vec<Answer>,

    /// The authoritative nameservers section.
    pub authorities: Vec<Answer>,

    /// The additional records section.
    pub additionals: Vec<Answer>,
}


/// A DNS question record.
#[derive(PartialEq, Debug, Clone)]
pub struct Query {

    /// The domain name being queried.
    pub qname: Labels,

    /// The class number.
    pub qclass: QClass,

    /// The type number.
    pub qtype: TypeInt,
}


/// A DNS resource record, as found in the answer, authority, and
/// additional sections.
#[derive(PartialEq, Debug, Clone)]
pub struct Answer {

    /// The domain name this record concerns.
    pub qname: Labels,

    /// This record’s class.
    pub qclass: QClass,

    /// The time-to-live duration, in seconds.
    pub ttl: u32,

    /// The typed payload contained in this record.
    pub record: Record,
}


/// A DNS record class. Of these, the only one that’s in regular use
/// anymore is the Internet class.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum QClass {

    /// The **Internet** class.
    IN,

    /// The **Chaosnet** class.
    CH,

    /// The **Hesiod** class.
    HS,

    /// A class number that does not map to any known class.
    Other(u16),
}


/// The number representing a record type, such as `1` for an **A** record,
/// or `15` for an **MX** record.
pub type TypeInt = u16;


/// The flags that accompany every DNS packet.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Flags {

    /// Whether this packet is a response packet.
    pub response: bool,

    /// The operation being performed.
    pub opcode: Opcode,

    /// In a response, whether the server is providing authoritative DNS responses.
    pub authoritative: bool,

    /// In a response, whether this message has been truncated by the transport.
    pub truncated: bool,

    /// In a query, whether the server may query other nameservers
    /// recursively. It is up to the server whether it will actually do this.
    pub recursion_desired: bool,

    /// In a response, whether the server allows recursive query support.
    pub recursion_available: bool,

    /// In a response, a code indicating an error if one occurred.
    pub error_code: Option<ErrorCode>,
}


/// A number representing the operation being performed.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Opcode {

    /// A standard query.
    Query,

    /// Some other operation; the number is in the range 1–15.
    Other(u8),
}


/// A code indicating an error in a response.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum ErrorCode {

    /// The server was unable to interpret the query.
    FormatError,

    /// There was a problem with the server.
    ServerFailure,

    /// The domain name referenced in the query does not exist.
    NXDomain,

    /// The server does not support one of the requested features.
    NotImplemented,

    /// The server was able to interpret the query, but refused to fulfil it.
    QueryRefused,

    /// The server did not accept the EDNS version, or failed to verify a
    /// signature.
    BadVersion,

    /// An error code we don’t know what it is.
    Other(u16),
}
