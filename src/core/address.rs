//! Account addresses.
//!
//! Players are identified by the 20-byte account address the host ledger
//! attributes actions and deposits to. The all-zero address is the "unset"
//! sentinel the read surface reports for an empty player slot.

use serde::{Deserialize, Serialize};

/// 20-byte account address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The empty-slot sentinel.
    pub const ZERO: Address = Address([0; 20]);

    /// Create an address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Address with every byte set to `byte`. Handy for fixtures.
    ///
    /// ```
    /// use bg_escrow::core::Address;
    ///
    /// let alice = Address::repeat_byte(0xaa);
    /// assert!(!alice.is_zero());
    /// assert_eq!(Address::repeat_byte(0), Address::ZERO);
    /// ```
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; 20])
    }

    /// Whether this is the empty-slot sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}
