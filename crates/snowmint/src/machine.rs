use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::debug;

use crate::id::SnowflakeId;

/// Derives a machine id in `0..=1023` from host identity.
///
/// Hashes the hostname together with the process id and reduces the digest
/// modulo 1024, so a given process keeps the same machine id across calls and
/// distinct hosts land on distinct ids with high probability. The hostname is
/// read from the `HOSTNAME` (or `HOST`) environment variable, the most
/// reliable source in containerized deployments.
///
/// When no hostname is available, falls back to a uniformly random value.
/// The fallback trades determinism for availability; collisions across a
/// fleet then become possible, which is why operators should prefer explicit
/// machine-id assignment via [`SnowflakeGenerator::new`].
///
/// [`SnowflakeGenerator::new`]: crate::SnowflakeGenerator::new
pub fn derive_machine_id() -> i64 {
    match hostname() {
        Some(host) => {
            let mut hasher = DefaultHasher::new();
            host.hash(&mut hasher);
            std::process::id().hash(&mut hasher);
            let machine_id = (hasher.finish() % (SnowflakeId::MAX_MACHINE_ID as u64 + 1)) as i64;
            debug!(%host, machine_id, "derived machine id from host identity");
            machine_id
        }
        None => {
            let machine_id = rand::rng().random_range(0..=SnowflakeId::MAX_MACHINE_ID);
            debug!(machine_id, "no host identity available, using random machine id");
            machine_id
        }
    }
}

fn hostname() -> Option<String> {
    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("HOST"))
        .ok()
        .filter(|host| !host.is_empty())
}
