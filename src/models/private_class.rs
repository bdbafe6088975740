//! The three RFC1918 private address blocks.

use super::Ipv4;
use crate::error::Error;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Private IPv4 class, one per reserved block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrivateClass {
    /// 10.0.0.0/8
    A,
    /// 172.16.0.0/12
    B,
    /// 192.168.0.0/16
    C,
}

impl PrivateClass {
    pub const ALL: [PrivateClass; 3] = [PrivateClass::A, PrivateClass::B, PrivateClass::C];

    /// First address of the class block.
    pub fn start_address(self) -> Ipv4Addr {
        match self {
            PrivateClass::A => Ipv4Addr::new(10, 0, 0, 0),
            PrivateClass::B => Ipv4Addr::new(172, 16, 0, 0),
            PrivateClass::C => Ipv4Addr::new(192, 168, 0, 0),
        }
    }

    /// Prefix length of the class block, the smallest mask a subnet may use.
    pub fn mask_bits(self) -> u8 {
        match self {
            PrivateClass::A => 8,
            PrivateClass::B => 12,
            PrivateClass::C => 16,
        }
    }

    /// The whole reserved block as a network.
    pub fn network(self) -> Ipv4 {
        Ipv4::from_trusted(self.start_address(), self.mask_bits())
    }

    fn letter(self) -> &'static str {
        match self {
            PrivateClass::A => "A",
            PrivateClass::B => "B",
            PrivateClass::C => "C",
        }
    }
}

impl FromStr for PrivateClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(PrivateClass::A),
            "B" => Ok(PrivateClass::B),
            "C" => Ok(PrivateClass::C),
            _ => Err(Error::InvalidClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for PrivateClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

impl Serialize for PrivateClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.letter())
    }
}

impl<'de> Deserialize<'de> for PrivateClass {
    fn deserialize<D>(deserializer: D) -> Result<PrivateClass, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_table() {
        assert_eq!(PrivateClass::A.start_address(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(PrivateClass::A.mask_bits(), 8);
        assert_eq!(
            PrivateClass::B.start_address(),
            Ipv4Addr::new(172, 16, 0, 0)
        );
        assert_eq!(PrivateClass::B.mask_bits(), 12);
        assert_eq!(
            PrivateClass::C.start_address(),
            Ipv4Addr::new(192, 168, 0, 0)
        );
        assert_eq!(PrivateClass::C.mask_bits(), 16);
    }

    #[test]
    fn test_class_network_is_aligned() {
        for class in PrivateClass::ALL {
            let net = class.network();
            assert!(net.is_aligned(), "{class} block {net} not aligned");
        }
        assert_eq!(PrivateClass::B.network().to_string(), "172.16.0.0/12");
        assert_eq!(
            PrivateClass::B.network().hi(),
            Ipv4Addr::new(172, 31, 255, 255)
        );
    }

    #[test]
    fn test_parse_class() {
        assert_eq!("A".parse::<PrivateClass>().unwrap(), PrivateClass::A);
        assert_eq!("C".parse::<PrivateClass>().unwrap(), PrivateClass::C);
        assert_eq!(
            "D".parse::<PrivateClass>(),
            Err(Error::InvalidClass("D".to_string()))
        );
        // the letter is matched exactly
        assert!("a".parse::<PrivateClass>().is_err());
        assert!(" B".parse::<PrivateClass>().is_err());
        assert!("".parse::<PrivateClass>().is_err());
    }

    #[test]
    fn test_serde_letter() {
        assert_eq!(serde_json::to_string(&PrivateClass::B).unwrap(), "\"B\"");
        let class: PrivateClass = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(class, PrivateClass::C);
        assert!(serde_json::from_str::<PrivateClass>("\"X\"").is_err());
    }
}
