use log::*;

use crate::strings::{Labels, ReadLabels};
use crate::wire::*;


/// A **SRV** record, which contains a hostname as well as a port number,
/// for specifying the location of services more precisely.
///
/// # References
///
/// - [RFC 2782](https://tools.ietf.org/html/rfc2782) — A DNS RR for
///   specifying the location of services (February 2000)
#[derive(PartialEq, Debug, Clone)]
pub struct SRV {

    /// The priority of this host among all that get returned. Lower values
    /// are higher priority.
    pub priority: u16,

    /// A weight to choose among results with the same priority. Higher
    /// values are higher priority.
    pub weight: u16,

    /// The port the service is serving on.
    pub port: u16,

    /// The hostname of the machine the service is running on.
    pub target: Labels,
}

impl Wire for SRV {
    const NAME: &'static str = "SRV";
    const RR_TYPE: u16 = 33;

    fn read(_stated_length: u16, c: &mut Decoder<'_>) -> Result<Self, WireError> {
        let priority = c.read_u16()?;
        let weight   = c.read_u16()?;
        let port     = c.read_u16()?;
        trace!("Parsed priority {:?}, weight {:?}, port {:?}", priority, weight, port);

        let (target, _) = c.read_labels()?;
        trace!("Parsed target -> {}", target);

        Ok(Self { priority, weight, port, target })
    }
}
