//! Domain models for private network generation.
//!
//! This module contains the value types the generator works with:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`PrivateClass`] - the three RFC1918 blocks
//! - [`parse_mask_bits`] - validation of textual mask widths

mod ipv4;
mod mask_bits;
mod private_class;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, network_start, Ipv4, NetworkError, MAX_LENGTH,
};
pub(crate) use mask_bits::narrow_mask_bits;
pub use mask_bits::{parse_integer, parse_mask_bits};
pub use private_class::PrivateClass;
