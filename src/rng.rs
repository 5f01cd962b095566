//! Process-wide shuffle source.
//!
//! [`crate::options::shuffle`] and [`crate::options::Shuffle::new`] draw from
//! a single ChaCha8 generator shared by the whole process. It is seeded lazily
//! on first use and can be replaced at any time with [`reseed`], which is how
//! tests get reproducible shuffles without threading a generator through.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "std")]
struct SharedRng(std::sync::Mutex<Option<ChaCha8Rng>>);

#[cfg(feature = "std")]
impl SharedRng {
    const fn new() -> Self {
        Self(std::sync::Mutex::new(None))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ChaCha8Rng>> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
struct SharedRng(spin::Mutex<Option<ChaCha8Rng>>);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
impl SharedRng {
    const fn new() -> Self {
        Self(spin::Mutex::new(None))
    }

    fn lock(&self) -> spin::MutexGuard<'_, Option<ChaCha8Rng>> {
        self.0.lock()
    }
}

static SHUFFLE_RNG: SharedRng = SharedRng::new();

/// Seed used when the shared source is first touched.
#[cfg(feature = "std")]
fn startup_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

/// Seed used when the shared source is first touched.
///
/// There is no clock without `std`; call [`reseed`] for varied shuffles.
#[cfg(not(feature = "std"))]
const fn startup_seed() -> u64 {
    0
}

/// Replaces the shared shuffle source with one seeded from `seed`.
///
/// Every shuffle drawn from the shared source after this call is fully
/// determined by `seed` and the sequence of shuffles performed.
///
/// ```
/// use cardeck::{deck, options::shuffle, rng};
///
/// rng::reseed(7);
/// let first = shuffle(deck::new());
/// rng::reseed(7);
/// assert_eq!(first, shuffle(deck::new()));
/// ```
pub fn reseed(seed: u64) {
    *SHUFFLE_RNG.lock() = Some(ChaCha8Rng::seed_from_u64(seed));
    tracing::trace!(seed, "reseeded shared shuffle source");
}

/// Runs `f` with exclusive access to the shared source, seeding it first if
/// nothing has drawn from it yet.
pub(crate) fn with_shared<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut guard = SHUFFLE_RNG.lock();
    let rng = guard.get_or_insert_with(|| ChaCha8Rng::seed_from_u64(startup_seed()));
    f(rng)
}
