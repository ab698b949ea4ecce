//! Distributed Snowflake ID generation.
//!
//! A [`SnowflakeGenerator`] mints unique, strictly increasing 64-bit integer
//! identifiers without any cross-process coordination, provided each process
//! is assigned a distinct machine id. Every ID packs three fields into a
//! signed 64-bit integer, most-significant first:
//!
//! | Field           | Bits | Range       | Meaning                                  |
//! |-----------------|------|-------------|------------------------------------------|
//! | timestamp-delta | 41   | 0..2^41 - 1 | milliseconds since 2023-01-01T00:00:00Z  |
//! | machine-id      | 10   | 0..1023     | the generating process/node              |
//! | sequence        | 12   | 0..4095     | per-millisecond counter on that machine  |
//!
//! The sign bit stays zero for roughly 69.7 years after the epoch, so every
//! generated ID is a valid positive `i64` primary key.
//!
//! # Example
//!
//! ```
//! use snowmint::{SnowflakeGenerator, SnowflakeId};
//!
//! let generator = SnowflakeGenerator::new(7)?;
//!
//! let id = generator.next_id()?;
//! assert!(id.to_raw() > 0);
//! assert_eq!(id.machine_id(), 7);
//!
//! let parts = SnowflakeId::parse(id.to_raw());
//! assert_eq!(parts.machine_id, 7);
//! # Ok::<(), snowmint::Error>(())
//! ```
//!
//! Create one generator per process (or per logical machine-id assignment) at
//! startup and pass it to every caller that needs identifiers. Uniqueness
//! across a fleet depends entirely on distinct machine-id assignment, which is
//! an operational invariant the generator cannot enforce.

mod error;
mod generator;
mod id;
mod machine;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::machine::*;
pub use crate::time::*;
