//! PointId generation.
//!
//! A PointId packs a machine fingerprint, a millisecond timestamp, the
//! process id, an in-process counter and network-derived bytes into a
//! 32-byte buffer and renders it as dashed uppercase hex:
//!
//! ```text
//! XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXXXXXX
//! ```
//!
//! Uniqueness is best effort. There is no collision detection and the value
//! is not a security token.

pub mod buffer;
pub mod config;
pub mod format;
pub mod generator;
pub mod id;

use std::sync::OnceLock;

use tracing::debug;

pub use buffer::{BUFFER_LEN, Fields, pack, unpack};
pub use config::Config;
pub use format::{FORMATTED_LEN, format_buffer, is_well_formed};
pub use generator::Generator;
pub use id::PointId;

static DEFAULT_GENERATOR: OnceLock<Generator> = OnceLock::new();

/// The process-wide generator used by [`new_point_id`] and
/// [`new_point_id_blocking`]. Created on first use with [`Config::default`].
pub fn default_generator() -> &'static Generator {
    DEFAULT_GENERATOR.get_or_init(Generator::default)
}

/// Generates a new PointId string. Never fails.
pub async fn new_point_id() -> String {
    default_generator().next_id().await.to_string()
}

/// Blocking variant of [`new_point_id`].
///
/// Drives the lookup on a private current-thread runtime. When called from
/// inside a runtime, that private runtime runs on a scoped worker thread so
/// the caller's runtime is never re-entered.
pub fn new_point_id_blocking() -> String {
    let generator = default_generator();
    if tokio::runtime::Handle::try_current().is_err() {
        return generate_blocking(generator);
    }

    std::thread::scope(|s| s.spawn(|| generate_blocking(generator)).join())
        .unwrap_or_else(|_| {
            debug!("lookup worker panicked, skipping public IP lookup");
            generator.next_id_offline().to_string()
        })
}

fn generate_blocking(generator: &Generator) -> String {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(generator.next_id()).to_string(),
        Err(e) => {
            debug!(error = %e, "runtime unavailable, skipping public IP lookup");
            generator.next_id_offline().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_generator_output_is_well_formed() {
        let a = new_point_id().await;
        let b = new_point_id().await;
        assert!(is_well_formed(&a), "malformed id: {a}");
        assert!(is_well_formed(&b), "malformed id: {b}");
        assert_ne!(a, b);
    }

    #[test]
    fn blocking_output_is_well_formed() {
        let id = new_point_id_blocking();
        assert!(is_well_formed(&id), "malformed id: {id}");
        assert_eq!(id.len(), FORMATTED_LEN);
    }

    #[tokio::test]
    async fn blocking_works_inside_a_runtime() {
        let a = new_point_id_blocking();
        let b = new_point_id_blocking();
        assert!(is_well_formed(&a), "malformed id: {a}");
        assert!(is_well_formed(&b), "malformed id: {b}");
        assert_ne!(a, b);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_works_on_a_worker_thread() {
        let id = tokio::spawn(async { new_point_id_blocking() }).await.unwrap();
        assert!(is_well_formed(&id), "malformed id: {id}");
    }
}
