//! Live profile registry.
//!
//! A process-wide counter of profiles that currently exist. Every profile
//! holds a [`Registration`] for its whole lifetime: acquiring one increments
//! the counter and dropping it decrements the counter, so
//! `count() == number of live profiles` holds however a profile is created
//! or destroyed.
//!
//! The counter starts at zero when the process starts and has no reset.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide registry used by profiles unless told otherwise
static LIVE_PROFILES: Registry = Registry::new();

/// The global registry
pub fn global() -> &'static Registry {
    &LIVE_PROFILES
}

/// Number of live profiles registered with the global registry
pub fn live_profiles() -> usize {
    LIVE_PROFILES.count()
}

/// Counter of live profile instances
#[derive(Debug, Default)]
pub struct Registry {
    live: AtomicUsize,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            live: AtomicUsize::new(0),
        }
    }

    /// Record that a profile was created
    pub fn on_create(&self) {
        let now = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Profile registered ({} live)", now);
    }

    /// Record that a profile was destroyed
    ///
    /// Calls without a matching `on_create` are ignored rather than wrapping.
    pub fn on_destroy(&self) {
        let previous = self
            .live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));

        match previous {
            Ok(n) => tracing::debug!("Profile unregistered ({} live)", n - 1),
            Err(_) => tracing::warn!("Profile unregistered with no live profiles"),
        }
    }

    /// Current number of live profiles
    pub fn count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Register a new instance, returning the guard that unregisters it
    pub fn register(&'static self) -> Registration {
        self.on_create();
        Registration { registry: self }
    }
}

/// Guard tying one live profile to a registry
///
/// Dropping the guard calls [`Registry::on_destroy`].
#[derive(Debug)]
pub struct Registration {
    registry: &'static Registry,
}

impl Registration {
    pub fn registry(&self) -> &'static Registry {
        self.registry
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.on_destroy();
    }
}
