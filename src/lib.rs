//! Random IPv4 subnets and host addresses inside the RFC1918 private blocks.
//!
//! ```
//! use random_private_ipv4::{PrivateClass, PrivateNetworkGenerator};
//!
//! let mut generator = PrivateNetworkGenerator::seeded(1);
//! let subnet = generator.random_network(PrivateClass::C, 24).unwrap();
//! assert!(PrivateClass::C.network().contains(&subnet));
//! ```

pub mod error;
pub mod generator;
pub mod models;

pub use error::{Error, Result};
pub use generator::{
    network_mask_bits, network_start_address, random_ip, random_network, PrivateNetworkGenerator,
};
pub use models::{parse_integer, parse_mask_bits, Ipv4, NetworkError, PrivateClass};
