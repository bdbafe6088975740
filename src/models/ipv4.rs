//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] network type used for all subnet arithmetic: host
//! counts, offsets inside a network and cutting an address down to the start
//! of a smaller subnet.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Errors raised by the network arithmetic in this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Input is not in `address/mask` form
    #[error("Invalid address/mask: {0}")]
    InvalidFormat(String),
    /// Address part does not parse as dotted-decimal IPv4
    #[error("Invalid address {0}")]
    InvalidAddress(String),
    /// Mask part is not a number
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),
    /// Mask is wider than 32 bits
    #[error("Network length is too long: {0}")]
    MaskTooLong(u8),
    /// Offset lies past the last address of the network
    #[error("Offset {offset} is outside of {network} ({count} addresses)")]
    OffsetOutOfRange {
        offset: u64,
        network: Ipv4,
        count: u64,
    },
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use random_private_ipv4::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, NetworkError> {
    if len > MAX_LENGTH {
        Err(NetworkError::MaskTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, NetworkError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, NetworkError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Start of the smallest `len` wide network holding `addr`.
pub fn network_start(addr: Ipv4Addr, len: u8) -> Result<Ipv4, NetworkError> {
    Ipv4::with_mask(cut_addr(addr, len)?, len)
}

/// IPv4 address with CIDR notation support.
///
/// The address is kept as given; [`Ipv4::lo`] yields the aligned network
/// address. Fields are private so the mask is always within 0-32.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl FromStr for Ipv4 {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, NetworkError> {
        let addr_cidr = addr_cidr.trim();
        match addr_cidr.split_once('/') {
            Some((addr, mask)) if !mask.contains('/') => {
                let mask: u8 = mask
                    .parse()
                    .map_err(|_| NetworkError::InvalidMask(mask.to_string()))?;
                Ipv4::from_parts(addr, mask)
            }
            _ => Err(NetworkError::InvalidFormat(addr_cidr.to_string())),
        }
    }

    /// Create a new [`Ipv4`] from a dotted-decimal address and a mask length.
    pub fn from_parts(addr: &str, mask: u8) -> Result<Ipv4, NetworkError> {
        let addr: Ipv4Addr = addr
            .trim()
            .parse()
            .map_err(|_| NetworkError::InvalidAddress(addr.to_string()))?;
        Ipv4::with_mask(addr, mask)
    }

    /// Create a new [`Ipv4`] from an address and a mask length.
    pub fn with_mask(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, NetworkError> {
        if mask > MAX_LENGTH {
            return Err(NetworkError::MaskTooLong(mask));
        }
        Ok(Ipv4 { addr, mask })
    }

    // caller guarantees mask <= MAX_LENGTH
    pub(crate) const fn from_trusted(addr: Ipv4Addr, mask: u8) -> Ipv4 {
        Ipv4 { addr, mask }
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The subnet mask length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Total number of addresses, network and broadcast included.
    pub fn count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Address `offset` steps after the network address.
    pub fn address_in_network(&self, offset: u64) -> Result<Ipv4Addr, NetworkError> {
        let count = self.count();
        if offset >= count {
            return Err(NetworkError::OffsetOutOfRange {
                offset,
                network: *self,
                count,
            });
        }
        // offset < count <= 2^32 and lo is aligned, so the sum fits in u32
        let bits = u32::from(self.lo()) as u64 + offset;
        Ok(Ipv4Addr::from(bits as u32))
    }

    /// Smallest `len` wide network containing this address.
    pub fn cut_to(&self, len: u8) -> Result<Ipv4, NetworkError> {
        network_start(self.addr, len)
    }

    /// True when all of `other` lies inside this network.
    pub fn contains(&self, other: &Ipv4) -> bool {
        other.mask >= self.mask && self.lo() <= other.lo() && other.hi() <= self.hi()
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.netmask())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    // mask <= MAX_LENGTH holds for every constructed value
    fn netmask(&self) -> u32 {
        let right_len = MAX_LENGTH - self.mask;
        ((u32::MAX as u64 >> right_len) << right_len) as u32
    }

    /// True when the address has no host bits set.
    pub fn is_aligned(&self) -> bool {
        self.lo() == self.addr
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
