//! Random private subnets and host addresses.
//!
//! [`PrivateNetworkGenerator`] owns its random source so callers (and tests)
//! decide where the entropy comes from. The free functions at the bottom of
//! this module are one-shot shortcuts backed by [`rand::thread_rng`].

use crate::error::{Error, Result};
use crate::models::{narrow_mask_bits, network_start, parse_integer, Ipv4, PrivateClass};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::Ipv4Addr;

/// Generates random subnets and hosts inside the RFC1918 blocks.
#[derive(Debug, Clone)]
pub struct PrivateNetworkGenerator<R> {
    rng: R,
}

impl PrivateNetworkGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Generator yielding the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for PrivateNetworkGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> PrivateNetworkGenerator<R> {
    pub fn new(rng: R) -> Self {
        PrivateNetworkGenerator { rng }
    }

    /// Random subnet of `mask_bits` width inside the block of `class`.
    ///
    /// The result is aligned to `mask_bits` and lies entirely inside the class
    /// block. When `mask_bits` equals the class mask there is only one such
    /// subnet, the block itself, and no randomness is used.
    ///
    /// # Errors
    /// [`Error::InvalidMaskBits`] if `mask_bits` is above 32 or below the
    /// class mask.
    pub fn random_network(&mut self, class: PrivateClass, mask_bits: u8) -> Result<Ipv4> {
        let mask_bits = check_mask_bits(class, i64::from(mask_bits))?;

        let block = class.network();
        if mask_bits == class.mask_bits() {
            log::debug!("random_network({class}, {mask_bits}): single subnet {block}");
            return Ok(block);
        }

        let host = self.random_ip_in(&block)?;
        let subnet = network_start(host, mask_bits)?;
        log::debug!("random_network({class}, {mask_bits}): host {host} -> {subnet}");
        Ok(subnet)
    }

    /// Same as [`Self::random_network`] for untyped input, returns `"addr/bits"`.
    ///
    /// The class is checked before the mask bits. Any integer below the class
    /// mask, negatives included, is reported against the class minimum.
    pub fn random_network_str(&mut self, class: &str, bits: &str) -> Result<String> {
        let class: PrivateClass = class.parse()?;
        let mask_bits = check_mask_bits(class, parse_integer(bits)?)?;
        Ok(self.random_network(class, mask_bits)?.to_string())
    }

    /// Random host address in `network`/`mask_bits`.
    ///
    /// Any network is accepted, not only private ones. Fails if the network
    /// does not parse, see [`Self::random_ip_in`] for the host range.
    pub fn random_ip(&mut self, network: &str, mask_bits: u8) -> Result<Ipv4Addr> {
        let net = Ipv4::from_parts(network, mask_bits)?;
        self.random_ip_in(&net)
    }

    /// Random host address in `net`, never its network or broadcast address.
    ///
    /// The offset is drawn uniformly from `1..=count-2`. Networks with fewer
    /// than 3 addresses (/31, /32) fail with [`Error::HostRangeTooSmall`].
    pub fn random_ip_in(&mut self, net: &Ipv4) -> Result<Ipv4Addr> {
        let count = net.count();
        if count < 3 {
            return Err(Error::HostRangeTooSmall {
                network: net.to_string(),
                count,
            });
        }
        let offset = self.rng.gen_range(1..=count - 2);
        log::trace!("random_ip_in({net}): offset {offset} of {count}");
        Ok(net.address_in_network(offset)?)
    }

    /// First address of the class block.
    pub fn network_start_address(&self, class: PrivateClass) -> Ipv4Addr {
        class.start_address()
    }

    /// Mask width of the class block.
    pub fn network_mask_bits(&self, class: PrivateClass) -> u8 {
        class.mask_bits()
    }
}

// lower bound is the class mask, upper bound 32
fn check_mask_bits(class: PrivateClass, bits: i64) -> Result<u8> {
    let min_mask_bits = class.mask_bits();
    if bits < i64::from(min_mask_bits) {
        return Err(Error::InvalidMaskBits(format!(
            "A class {class} network has at least {min_mask_bits} mask bits."
        )));
    }
    narrow_mask_bits(bits)
}

/// [`PrivateNetworkGenerator::random_network`] using the thread-local RNG.
pub fn random_network(class: PrivateClass, mask_bits: u8) -> Result<Ipv4> {
    PrivateNetworkGenerator::new(rand::thread_rng()).random_network(class, mask_bits)
}

/// [`PrivateNetworkGenerator::random_ip`] using the thread-local RNG.
pub fn random_ip(network: &str, mask_bits: u8) -> Result<Ipv4Addr> {
    PrivateNetworkGenerator::new(rand::thread_rng()).random_ip(network, mask_bits)
}

pub fn network_start_address(class: PrivateClass) -> Ipv4Addr {
    class.start_address()
}

pub fn network_mask_bits(class: PrivateClass) -> u8 {
    class.mask_bits()
}
