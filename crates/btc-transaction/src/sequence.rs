//! Sequence and locktime encoders.
//!
//! Turn a timelock or replace-by-fee request into the raw 4-byte fields
//! carried by inputs and transactions, or into the integer pushed ahead
//! of CHECKSEQUENCEVERIFY / CHECKLOCKTIMEVERIFY in a script.

use crate::constants::{
    ABSOLUTE_TIMELOCK_SEQUENCE, LOCKTIME_THRESHOLD, REPLACE_BY_FEE_SEQUENCE,
    SEQUENCE_LOCKTIME_TYPE_FLAG,
};
use crate::TransactionError;

/// A validated relative timelock: 1..=65535 blocks or 512-second units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelativeTimelock {
    units: u16,
    is_block_height: bool,
}

impl RelativeTimelock {
    /// Create a relative timelock.
    ///
    /// # Arguments
    /// * `units` - Number of blocks, or of 512-second intervals.
    /// * `is_block_height` - `true` to count blocks, `false` to count time.
    ///
    /// # Returns
    /// `OutOfRange` unless `1 <= units <= 65535`.
    pub fn new(units: u32, is_block_height: bool) -> Result<Self, TransactionError> {
        match u16::try_from(units) {
            Ok(units) if units >= 1 => Ok(RelativeTimelock {
                units,
                is_block_height,
            }),
            _ => Err(TransactionError::OutOfRange(format!(
                "relative timelock units must be in [1, 65535], got {}",
                units
            ))),
        }
    }

    pub fn units(&self) -> u16 {
        self.units
    }

    pub fn is_block_height(&self) -> bool {
        self.is_block_height
    }

    fn to_u32(self) -> u32 {
        let flag = if self.is_block_height {
            0
        } else {
            SEQUENCE_LOCKTIME_TYPE_FLAG
        };
        flag | u32::from(self.units)
    }
}

/// What an input's sequence field should signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sequence {
    /// Keep the transaction locktime enforced (0xFFFFFFFE).
    AbsoluteTimelockEnable,
    /// Signal replace-by-fee (0x00000001).
    ReplaceByFeeEnable,
    /// Relative timelock on the spent output.
    RelativeTimelock(RelativeTimelock),
}

impl Sequence {
    /// Shorthand for `Sequence::RelativeTimelock(RelativeTimelock::new(..)?)`.
    pub fn relative(units: u32, is_block_height: bool) -> Result<Self, TransactionError> {
        Ok(Sequence::RelativeTimelock(RelativeTimelock::new(
            units,
            is_block_height,
        )?))
    }

    /// The 32-bit sequence value.
    ///
    /// For relative timelocks the disable bit (31) is clear, bit 22 is set
    /// for time-based locks and the low 16 bits carry the units.
    pub fn to_u32(&self) -> u32 {
        match self {
            Sequence::AbsoluteTimelockEnable => ABSOLUTE_TIMELOCK_SEQUENCE,
            Sequence::ReplaceByFeeEnable => REPLACE_BY_FEE_SEQUENCE,
            Sequence::RelativeTimelock(rel) => rel.to_u32(),
        }
    }

    /// The little-endian bytes placed in an input's sequence field.
    pub fn for_input_sequence(&self) -> [u8; 4] {
        self.to_u32().to_le_bytes()
    }

    /// The integer to push ahead of CHECKSEQUENCEVERIFY.
    ///
    /// # Returns
    /// `InvalidUsage` for `ReplaceByFeeEnable`, which has no script form.
    pub fn for_script(&self) -> Result<u32, TransactionError> {
        match self {
            Sequence::ReplaceByFeeEnable => Err(TransactionError::InvalidUsage(
                "replace-by-fee sequence has no script representation".to_string(),
            )),
            other => Ok(other.to_u32()),
        }
    }
}

impl From<RelativeTimelock> for Sequence {
    fn from(rel: RelativeTimelock) -> Self {
        Sequence::RelativeTimelock(rel)
    }
}

/// A transaction locktime: a block height below 500,000,000, otherwise a
/// UNIX timestamp. Any `u32` is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Locktime(pub u32);

impl Locktime {
    pub fn new(value: u32) -> Self {
        Locktime(value)
    }

    /// The little-endian bytes of the transaction locktime field.
    pub fn for_transaction(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// The integer to push ahead of CHECKLOCKTIMEVERIFY.
    pub fn for_script(&self) -> u32 {
        self.0
    }

    pub fn is_block_height(&self) -> bool {
        self.0 < LOCKTIME_THRESHOLD
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Locktime {
    fn from(value: u32) -> Self {
        Locktime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sequences() {
        assert_eq!(
            Sequence::AbsoluteTimelockEnable.for_input_sequence(),
            [0xfe, 0xff, 0xff, 0xff]
        );
        assert_eq!(
            Sequence::ReplaceByFeeEnable.for_input_sequence(),
            [0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_relative_block_height() {
        let seq = Sequence::relative(144, true).unwrap();
        assert_eq!(seq.to_u32(), 144);
        assert_eq!(seq.for_input_sequence(), [0x90, 0x00, 0x00, 0x00]);
        assert_eq!(seq.for_script().unwrap(), 144);
    }

    #[test]
    fn test_relative_time_sets_type_flag() {
        let seq = Sequence::relative(0xFFFF, false).unwrap();
        assert_eq!(seq.to_u32(), 0x0040_FFFF);
        assert_eq!(seq.for_input_sequence(), [0xff, 0xff, 0x40, 0x00]);
        assert_eq!(seq.for_script().unwrap(), 0x0040_FFFF);
        // disable bit stays clear
        assert_eq!(seq.to_u32() & 0x8000_0000, 0);
    }

    #[test]
    fn test_relative_units_bounds() {
        assert!(matches!(
            RelativeTimelock::new(0, true),
            Err(TransactionError::OutOfRange(_))
        ));
        assert!(matches!(
            RelativeTimelock::new(65536, false),
            Err(TransactionError::OutOfRange(_))
        ));
        let rel = RelativeTimelock::new(1, false).unwrap();
        assert_eq!(rel.units(), 1);
        assert!(!rel.is_block_height());
    }

    #[test]
    fn test_rbf_for_script_is_invalid_usage() {
        assert!(matches!(
            Sequence::ReplaceByFeeEnable.for_script(),
            Err(TransactionError::InvalidUsage(_))
        ));
        assert_eq!(
            Sequence::AbsoluteTimelockEnable.for_script().unwrap(),
            0xFFFF_FFFE
        );
    }

    #[test]
    fn test_locktime() {
        let lt = Locktime::new(0x0102_0304);
        assert_eq!(lt.for_transaction(), [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(lt.for_script(), 0x0102_0304);
        assert!(lt.is_block_height());
        assert!(!Locktime(1_700_000_000).is_block_height());
        assert_eq!(Locktime::default().for_transaction(), [0; 4]);
        assert_eq!(Locktime(u32::MAX).for_transaction(), [0xff; 4]);
    }
}
