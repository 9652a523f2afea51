use std::net::Ipv4Addr;

use log::*;

use crate::wire::*;


/// An **A** record type, which contains an `Ipv4Address`.
///
/// # References
///
/// - [RFC 1035 §3.4.1](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct A {

    /// The IPv4 address contained in the packet.
    pub address: Ipv4Addr,
}

impl Wire for A {
    const NAME: &'static str = "A";
    const RR_TYPE: u16 = 1;

    #[cfg_attr(feature = "with_mutagen", ::mutagen::mutate)]
    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let address = c.read_ipv4()?;
        trace!("Parsed IPv4 address -> {:?}", address);

        Ok(Self { address })
    }
}
