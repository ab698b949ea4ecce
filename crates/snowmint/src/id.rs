use core::fmt;

/// The custom epoch: 2023-01-01T00:00:00Z, in milliseconds since the Unix
/// epoch.
///
/// All timestamp-delta fields are measured from this origin, which keeps the
/// 41-bit field (and the zero sign bit) usable until roughly 2092.
pub const EPOCH_MILLIS: i64 = 1_672_531_200_000;

/// A bit-packed 64-bit Snowflake identifier.
///
/// Layout, most-significant to least-significant: 1 sign bit (always zero),
/// 41 bits of millisecond timestamp-delta from [`EPOCH_MILLIS`], 10 bits of
/// machine id, 12 bits of sequence.
///
/// The raw `i64` ordering matches generation order for IDs minted by a single
/// generator, so these sort correctly as plain integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SnowflakeId(i64);

/// The decomposed view of a [`SnowflakeId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdParts {
    /// Mint time in milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
    /// The 10-bit machine id of the minting process.
    pub machine_id: i64,
    /// The 12-bit per-millisecond sequence number.
    pub sequence: i64,
}

impl SnowflakeId {
    /// Bits in the timestamp-delta field.
    pub const TIMESTAMP_BITS: u32 = 41;
    /// Bits in the machine-id field.
    pub const MACHINE_ID_BITS: u32 = 10;
    /// Bits in the sequence field.
    pub const SEQUENCE_BITS: u32 = 12;

    /// Largest encodable timestamp-delta (`2^41 - 1` milliseconds).
    pub const MAX_TIMESTAMP: i64 = (1 << Self::TIMESTAMP_BITS) - 1;
    /// Largest valid machine id (1023).
    pub const MAX_MACHINE_ID: i64 = (1 << Self::MACHINE_ID_BITS) - 1;
    /// Largest sequence value within one millisecond (4095).
    pub const MAX_SEQUENCE: i64 = (1 << Self::SEQUENCE_BITS) - 1;

    pub(crate) const MACHINE_ID_SHIFT: u32 = Self::SEQUENCE_BITS;
    pub(crate) const TIMESTAMP_SHIFT: u32 = Self::SEQUENCE_BITS + Self::MACHINE_ID_BITS;

    /// Composes an ID from a Unix-millisecond timestamp, a machine id, and a
    /// sequence number.
    ///
    /// The timestamp is stored relative to [`EPOCH_MILLIS`]. Fields are not
    /// range-checked here; the generator only ever passes in-range values.
    pub(crate) const fn from_parts(timestamp_millis: i64, machine_id: i64, sequence: i64) -> Self {
        Self(
            ((timestamp_millis - EPOCH_MILLIS) << Self::TIMESTAMP_SHIFT)
                | (machine_id << Self::MACHINE_ID_SHIFT)
                | sequence,
        )
    }

    /// Wraps a raw integer as a [`SnowflakeId`].
    ///
    /// No validation is performed; decomposing an integer that was not
    /// produced by this scheme yields best-effort garbage.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation.
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    /// Mint time in milliseconds since the Unix epoch.
    pub const fn timestamp_millis(self) -> i64 {
        (self.0 >> Self::TIMESTAMP_SHIFT) + EPOCH_MILLIS
    }

    /// The machine id encoded in this ID.
    pub const fn machine_id(self) -> i64 {
        (self.0 >> Self::MACHINE_ID_SHIFT) & Self::MAX_MACHINE_ID
    }

    /// The per-millisecond sequence number encoded in this ID.
    pub const fn sequence(self) -> i64 {
        self.0 & Self::MAX_SEQUENCE
    }

    /// Decomposes a raw integer into its [`IdParts`].
    ///
    /// Pure and stateless. The input is accepted without validation; it is
    /// the caller's responsibility to only pass IDs minted by this scheme.
    pub const fn parse(raw: i64) -> IdParts {
        Self::from_raw(raw).parts()
    }

    /// Decomposes this ID into its [`IdParts`].
    pub const fn parts(self) -> IdParts {
        IdParts {
            timestamp_millis: self.timestamp_millis(),
            machine_id: self.machine_id(),
            sequence: self.sequence(),
        }
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl From<i64> for SnowflakeId {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}
