use crate::strings::{Labels, ReadLabels};
use crate::wire::*;


/// A **CNAME** _(canonical name)_ record, which aliases one domain to another.
///
/// # References
///
/// - [RFC 1035 §3.3.1](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct CNAME {

    /// The domain name that this CNAME record is responding with.
    pub domain: Labels,
}

impl Wire for CNAME {
    const NAME: &'static str = "CNAME";
    const RR_TYPE: u16 = 5;

    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let (domain, _) = c.read_labels()?;
        Ok(Self { domain })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65, 0x00,  // domain
        ];

        assert_eq!(CNAME::read(10, &mut Decoder::new(buf)).unwrap(),
                   CNAME {
                       domain: Labels::encode("bsago.me").unwrap(),
                   });
    }

    #[test]
    fn record_empty() {
        assert_eq!(CNAME::read(0, &mut Decoder::new(&[])),
                   Err(WireError::Incomplete));
    }
}
