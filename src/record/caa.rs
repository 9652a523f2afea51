use log::*;

use crate::wire::*;


/// A **CAA** record. These allow domain names to specify which Certificate
/// Authorities are allowed to issue certificates for the domain.
///
/// # References
///
/// - [RFC 6844](https://tools.ietf.org/html/rfc6844) — DNS Certification
///   Authority Authorization Resource Record (January 2013)
#[derive(PartialEq, Debug, Clone)]
pub struct CAA {

    /// Whether this record is marked as “critical” or not.
    pub critical: bool,

    /// The “tag” part of the CAA record.
    pub tag: String,

    /// The “value” part of the CAA record.
    pub value: String,
}

impl Wire for CAA {
    const NAME: &'static str = "CAA";
    const RR_TYPE: u16 = 257;

    #[cfg_attr(feature = "with_mutagen", ::mutagen::mutate)]
    fn read(stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let flags = c.read_u8()?;
        trace!("Parsed flags -> {:#010b}", flags);

        let tag = c.read_character_string()?;
        trace!("Parsed tag -> {:?}", String::from_utf8_lossy(&tag));

        // the value is whatever of the record the tag leaves behind
        let value_length = usize::from(stated_length)
                .saturating_sub(tag.len())
                .saturating_sub(2);
        let value = c.read_bytes(value_length)?;
        trace!("Parsed value -> {:?}", String::from_utf8_lossy(&value));

        Ok(Self {
            critical: flags & 0b_1000_0000 == 0b_1000_0000,
            tag: String::from_utf8_lossy(&tag).to_string(),
            value: String::from_utf8_lossy(&value).to_string(),
        })
    }
}
