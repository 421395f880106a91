// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::ModelsError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

/// Size of an address, in bytes
pub const ADDRESS_SIZE_BYTES: usize = 32;

/// Text prefix of an address
pub const ADDRESS_PREFIX: char = 'A';

/// Identifier of an account.
///
/// Serialized (and displayed) as its prefix followed by the base58check encoding of the raw bytes.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Address(pub [u8; ADDRESS_SIZE_BYTES]);

impl Address {
    /// Computes an address by hashing arbitrary data.
    ///
    /// # Example
    ///  ```
    /// # use appcall_models::address::Address;
    /// let addr = Address::compute_from(b"hello world");
    /// assert_eq!(addr, Address::compute_from(b"hello world"));
    /// ```
    pub fn compute_from(data: &[u8]) -> Self {
        Address(*blake3::hash(data).as_bytes())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            ADDRESS_PREFIX,
            bs58::encode(self.0).with_check().into_string()
        )
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Address {
    type Err = ModelsError;

    /// ## Example
    /// ```rust
    /// # use appcall_models::address::Address;
    /// # use std::str::FromStr;
    /// let addr = Address::compute_from(b"hello world");
    /// let parsed = Address::from_str(&addr.to_string()).unwrap();
    /// assert_eq!(addr, parsed);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(prefix) if prefix == ADDRESS_PREFIX => {
                let data = chars.collect::<String>();
                let decoded = bs58::decode(data)
                    .with_check(None)
                    .into_vec()
                    .map_err(|err| ModelsError::AddressParseError(err.to_string()))?;
                let bytes: [u8; ADDRESS_SIZE_BYTES] = decoded.try_into().map_err(|_| {
                    ModelsError::AddressParseError(format!(
                        "expected {} bytes",
                        ADDRESS_SIZE_BYTES
                    ))
                })?;
                Ok(Address(bytes))
            }
            _ => Err(ModelsError::AddressParseError(format!(
                "missing {} prefix",
                ADDRESS_PREFIX
            ))),
        }
    }
}
