use log::*;

use crate::wire::*;


/// A **TXT** record, which holds arbitrary descriptive text.
///
/// # Encoding
///
/// The text encoding is not specified, but this crate treats it as UTF-8.
/// Invalid bytes are turned into the replacement character.
///
/// # References
///
/// - [RFC 1035 §3.3.14](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct TXT {

    /// The message contained in the record.
    pub message: String,
}

impl Wire for TXT {
    const NAME: &'static str = "TXT";
    const RR_TYPE: u16 = 16;

    #[cfg_attr(feature = "with_mutagen", ::mutagen::mutate)]
    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let buf = c.read_character_string()?;

        let message = String::from_utf8_lossy(&buf).to_string();
        trace!("Parsed message -> {:?}", message);

        Ok(Self { message })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x06,  // message length
            0x74, 0x78, 0x74, 0x20, 0x6d, 0x65,  // message
        ];

        assert_eq!(TXT::read(7, &mut Decoder::new(buf)).unwrap(),
                   TXT {
                       message: String::from("txt me"),
                   });
    }

    #[test]
    fn message_ends_abruptly() {
        let buf = &[
            0x06,  // message length
            0x74, 0x78,  // and nowhere near six bytes of message
        ];

        assert_eq!(TXT::read(7, &mut Decoder::new(buf)),
                   Err(WireError::Incomplete));
    }

    #[test]
    fn record_empty() {
        assert_eq!(TXT::read(0, &mut Decoder::new(&[])),
                   Err(WireError::Incomplete));
    }
}
