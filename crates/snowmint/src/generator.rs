use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::id::{IdParts, SnowflakeId};
use crate::machine::derive_machine_id;
use crate::time::{Clock, WallClock};

/// Mutable generator state, guarded by a single mutex so concurrent callers
/// observe a linearizable sequence of (timestamp, sequence) pairs.
struct MintState {
    /// Last Unix-millisecond value an ID was minted for; -1 before the first
    /// mint.
    last_timestamp: i64,
    /// Counter within `last_timestamp`'s millisecond.
    sequence: i64,
}

/// A thread-safe Snowflake ID generator.
///
/// Mints unique, strictly increasing [`SnowflakeId`]s for a fixed machine id.
/// Safe to share across threads behind an `Arc` (or by reference from scoped
/// threads); every mint serializes on an internal lock.
///
/// Construct one instance per process at startup and pass it explicitly to
/// every caller that needs identifiers. The machine id is immutable for the
/// generator's lifetime.
///
/// # Example
/// ```
/// use snowmint::SnowflakeGenerator;
///
/// let generator = SnowflakeGenerator::new(3)?;
/// let a = generator.next_id()?;
/// let b = generator.next_id()?;
/// assert!(b > a);
/// # Ok::<(), snowmint::Error>(())
/// ```
pub struct SnowflakeGenerator<C = WallClock>
where
    C: Clock,
{
    machine_id: i64,
    state: Mutex<MintState>,
    clock: C,
}

impl SnowflakeGenerator<WallClock> {
    /// Creates a generator with an explicit machine id, minting against the
    /// system wall clock.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMachineId`] if `machine_id` is outside
    /// `0..=1023`.
    pub fn new(machine_id: i64) -> Result<Self> {
        Self::with_clock(machine_id, WallClock)
    }

    /// Creates a generator whose machine id is derived from host identity
    /// (hostname and process id, hashed and reduced modulo 1024), with a
    /// random fallback when no hostname is available.
    ///
    /// Prefer [`Self::new`] with an operationally assigned machine id when
    /// fleet-wide uniqueness matters; see [`derive_machine_id`].
    pub fn from_host_identity() -> Self {
        let machine_id = derive_machine_id();
        debug!(machine_id, "starting snowflake generator");
        Self {
            machine_id,
            state: Mutex::new(MintState {
                last_timestamp: -1,
                sequence: 0,
            }),
            clock: WallClock,
        }
    }
}

impl<C> SnowflakeGenerator<C>
where
    C: Clock,
{
    /// Creates a generator with an explicit machine id and a caller-supplied
    /// [`Clock`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidMachineId`] if `machine_id` is outside
    /// `0..=1023`.
    pub fn with_clock(machine_id: i64, clock: C) -> Result<Self> {
        if !(0..=SnowflakeId::MAX_MACHINE_ID).contains(&machine_id) {
            return Err(Error::InvalidMachineId { machine_id });
        }
        Ok(Self {
            machine_id,
            state: Mutex::new(MintState {
                last_timestamp: -1,
                sequence: 0,
            }),
            clock,
        })
    }

    /// The machine id encoded into every ID this generator mints.
    pub const fn machine_id(&self) -> i64 {
        self.machine_id
    }

    /// Mints the next unique ID.
    ///
    /// The returned ID is strictly greater than every ID previously returned
    /// by this instance, provided the wall clock has not regressed. Within a
    /// millisecond, IDs are disambiguated by the 12-bit sequence counter; when
    /// the counter overflows (4096 IDs in one millisecond), the call spins
    /// until the clock advances, so it may block for slightly over one
    /// millisecond in that rare case. There is no other blocking and no I/O.
    ///
    /// # Errors
    /// Returns [`Error::ClockMovedBackwards`] when the clock reads earlier
    /// than the last mint, carrying the regression magnitude in milliseconds.
    /// The failed call leaves the generator state untouched; the caller
    /// decides whether to retry, abort, or escalate.
    #[instrument(level = "trace", skip(self), err)]
    pub fn next_id(&self) -> Result<SnowflakeId> {
        let mut state = self.state.lock();
        let mut timestamp = self.clock.now_millis();

        if timestamp < state.last_timestamp {
            let backwards_ms = state.last_timestamp - timestamp;
            warn!(backwards_ms, "clock moved backwards, refusing to mint");
            return Err(Error::ClockMovedBackwards { backwards_ms });
        }

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SnowflakeId::MAX_SEQUENCE;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond. The wrap already
                // left the counter at 0, which becomes the first slot of the
                // next millisecond once the clock advances.
                timestamp = self.wait_until_next_millis(state.last_timestamp);
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = timestamp;

        Ok(SnowflakeId::from_parts(
            timestamp,
            self.machine_id,
            state.sequence,
        ))
    }

    /// Decomposes a raw ID into its [`IdParts`].
    ///
    /// Stateless; equivalent to [`SnowflakeId::parse`]. Accepts any integer
    /// without validation.
    pub fn parse_id(&self, id: i64) -> IdParts {
        SnowflakeId::parse(id)
    }

    /// Spins until the clock reads strictly past `last_timestamp`.
    ///
    /// Sub-millisecond wait at worst, so spinning is cheap; after a bounded
    /// number of spins the thread yields between re-reads to avoid pegging a
    /// core if the clock stalls.
    fn wait_until_next_millis(&self, last_timestamp: i64) -> i64 {
        let mut spins = 0u32;
        loop {
            let timestamp = self.clock.now_millis();
            if timestamp > last_timestamp {
                return timestamp;
            }
            if spins < 2_000 {
                spins += 1;
                core::hint::spin_loop();
            } else {
                std::thread::yield_now();
            }
        }
    }
}
