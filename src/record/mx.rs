use log::*;

use crate::strings::{Labels, ReadLabels};
use crate::wire::*;


/// An **MX** _(mail exchange)_ record, which contains the hostnames for mail
/// servers that handle mail sent to the domain.
///
/// # References
///
/// - [RFC 1035 §3.3.9](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct MX {

    /// The preference that clients should give to this MX record amongst
    /// all that get returned.
    pub preference: u16,

    /// The domain name of the mail exchange server.
    pub exchange: Labels,
}

impl Wire for MX {
    const NAME: &'static str = "MX";
    const RR_TYPE: u16 = 15;

    #[cfg_attr(feature = "with_mutagen", ::mutagen::mutate)]
    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let preference = c.read_u16()?;
        trace!("Parsed preference -> {:?}", preference);

        let (exchange, _) = c.read_labels()?;
        trace!("Parsed exchange -> {}", exchange);

        Ok(Self { preference, exchange })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x00, 0x0A,  // preference
            0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65, 0x00,  // exchange
        ];

        assert_eq!(MX::read(12, &mut Decoder::new(buf)).unwrap(),
                   MX {
                       preference: 10,
                       exchange: Labels::encode("bsago.me").unwrap(),
                   });
    }

    #[test]
    fn record_empty() {
        assert_eq!(MX::read(0, &mut Decoder::new(&[])),
                   Err(WireError::Incomplete));
    }
}
