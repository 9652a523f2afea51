use std::net::Ipv6Addr;

use log::*;

use crate::wire::*;


/// A **AAAA** record, which contains an `Ipv6Address`.
///
/// # References
///
/// - [RFC 3596](https://tools.ietf.org/html/rfc3596) — DNS Extensions to
///   Support IP Version 6 (October 2003)
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct AAAA {

    /// The IPv6 address contained in the packet.
    pub address: Ipv6Addr,
}

impl Wire for AAAA {
    const NAME: &'static str = "AAAA";
    const RR_TYPE: u16 = 28;

    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let address = c.read_ipv6()?;
        trace!("Parsed IPv6 address -> {:?}", address);

        Ok(Self { address })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x26, 0x06, 0x28, 0x00, 0x02, 0x20, 0x00, 0x01,
            0x02, 0x48, 0x18, 0x93, 0x25, 0xc8, 0x19, 0x46,  // IPv6 address
        ];

        assert_eq!(AAAA::read(16, &mut Decoder::new(buf)).unwrap(),
                   AAAA { address: Ipv6Addr::new(0x2606, 0x2800, 0x0220, 0x0001,
                                                 0x0248, 0x1893, 0x25c8, 0x1946) });
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x05, 0x05, 0x05, 0x05, 0x05,  // Five sixteenths of an address
        ];

        assert_eq!(AAAA::read(16, &mut Decoder::new(buf)),
                   Err(WireError::Incomplete));
    }

    #[test]
    fn record_empty() {
        assert_eq!(AAAA::read(0, &mut Decoder::new(&[])),
                   Err(WireError::Incomplete));
    }
}
