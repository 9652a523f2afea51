use log::*;

use crate::wire::*;


/// A **HINFO** _(host information)_ record, which contains the CPU and OS
/// information about a host.
///
/// It also gets used as the response for an `ANY` query, if it is blocked.
///
/// # References
///
/// - [RFC 1035 §3.3.2](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
/// - [RFC 8482 §6](https://tools.ietf.org/html/rfc8482#section-6) — Providing
///   Minimal-Sized Responses to DNS Queries That Have QTYPE=ANY (January 2019)
#[derive(PartialEq, Debug, Clone)]
pub struct HINFO {

    /// The CPU field, specifying the CPU type.
    pub cpu: Box<[u8]>,

    /// The OS field, specifying the operating system.
    pub os: Box<[u8]>,
}

impl Wire for HINFO {
    const NAME: &'static str = "HINFO";
    const RR_TYPE: u16 = 13;

    #[cfg_attr(feature = "with_mutagen", ::mutagen::mutate)]
    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let cpu = c.read_character_string()?;
        trace!("Parsed CPU -> {:?}", String::from_utf8_lossy(&cpu));

        let os = c.read_character_string()?;
        trace!("Parsed OS -> {:?}", String::from_utf8_lossy(&os));

        Ok(Self { cpu, os })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x0e,  // cpu length
            0x73, 0x6f, 0x6d, 0x65, 0x2d, 0x6b, 0x69, 0x6e, 0x64, 0x61, 0x2d,
            0x63, 0x70, 0x75,  // cpu
            0x0d,  // os length
            0x73, 0x6f, 0x6d, 0x65, 0x2d, 0x6b, 0x69, 0x6e, 0x64, 0x61, 0x2d,
            0x6f, 0x73,  // os
        ];

        assert_eq!(HINFO::read(29, &mut Decoder::new(buf)).unwrap(),
                   HINFO {
                       cpu: Box::new(*b"some-kinda-cpu"),
                       os: Box::new(*b"some-kinda-os"),
                   });
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x14, 0x0A, 0x0B, 0x0C,  // a CPU that never finishes
        ];

        assert_eq!(HINFO::read(23, &mut Decoder::new(buf)),
                   Err(WireError::Incomplete));
    }

    #[test]
    fn record_empty() {
        assert_eq!(HINFO::read(0, &mut Decoder::new(&[])),
                   Err(WireError::Incomplete));
    }
}
