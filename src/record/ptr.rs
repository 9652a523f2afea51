use crate::strings::{Labels, ReadLabels};
use crate::wire::*;


/// A **PTR** record, which holds a _pointer_ to a canonical name. This is
/// most often used for reverse DNS lookups.
///
/// # References
///
/// - [RFC 1035 §3.3.12](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct PTR {

    /// The canonical name contained in the record.
    pub cname: Labels,
}

impl Wire for PTR {
    const NAME: &'static str = "PTR";
    const RR_TYPE: u16 = 12;

    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let (cname, _) = c.read_labels()?;
        Ok(Self { cname })
    }
}
