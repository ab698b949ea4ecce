use crate::id::SnowflakeId;

/// A result type that defaults its error to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `snowmint` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The supplied machine id does not fit the 10-bit field.
    ///
    /// Raised at construction time; no generator is produced. Supply a value
    /// in `0..=1023` or derive one from host identity instead.
    #[error("machine id must be between 0 and {max}, got {machine_id}", max = SnowflakeId::MAX_MACHINE_ID)]
    InvalidMachineId { machine_id: i64 },

    /// The wall clock reported a time earlier than the last timestamp this
    /// generator minted an ID for, typically after an NTP correction or a VM
    /// migration.
    ///
    /// The generator refuses to mint and leaves its state untouched. A
    /// backwards jump may persist for an unbounded time, so waiting it out
    /// here could stall callers indefinitely; the caller decides whether to
    /// retry, reject the current operation, or alert an operator.
    #[error("clock moved backwards; refusing to generate an id for {backwards_ms} ms")]
    ClockMovedBackwards { backwards_ms: i64 },
}
