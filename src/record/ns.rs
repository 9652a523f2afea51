use crate::strings::{Labels, ReadLabels};
use crate::wire::*;


/// A **NS** _(name server)_ record, which is used to point domains to name
/// servers.
///
/// # References
///
/// - [RFC 1035 §3.3.11](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct NS {

    /// The domain name of the nameserver.
    pub nameserver: Labels,
}

impl Wire for NS {
    const NAME: &'static str = "NS";
    const RR_TYPE: u16 = 2;

    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let (nameserver, _) = c.read_labels()?;
        Ok(Self { nameserver })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x01, 0x61, 0x0c, 0x67, 0x74, 0x6c, 0x64, 0x2d, 0x73, 0x65,
            0x72, 0x76, 0x65, 0x72, 0x73, 0x03, 0x6e, 0x65, 0x74, 0x00,  // nameserver
        ];

        assert_eq!(NS::read(20, &mut Decoder::new(buf)).unwrap(),
                   NS {
                       nameserver: Labels::encode("a.gtld-servers.net").unwrap(),
                   });
    }

    #[test]
    fn record_empty() {
        assert_eq!(NS::read(0, &mut Decoder::new(&[])),
                   Err(WireError::Incomplete));
    }
}
