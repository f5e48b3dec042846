//! One-shot initialization guard
//!
//! The registry's storage can outlive its code (proxy-style upgrades), so
//! setup runs through an explicit guarded routine instead of a
//! constructor: the flag flips exactly once per registry instance and
//! every state-dependent entry point checks it.

use crate::error::RegistryError;

#[derive(Debug, Default)]
pub struct Lifecycle {
    initialized: bool,
}

impl Lifecycle {
    /// Flip the initialization flag. Fails with `AlreadyInitialized` on any
    /// call after the first, leaving the flag set.
    pub fn initialize(&mut self) -> Result<(), RegistryError> {
        if self.initialized {
            return Err(RegistryError::AlreadyInitialized);
        }
        self.initialized = true;
        Ok(())
    }

    /// Fails with `NotInitialized` until `initialize` has succeeded.
    pub fn ensure_initialized(&self) -> Result<(), RegistryError> {
        if self.initialized {
            Ok(())
        } else {
            Err(RegistryError::NotInitialized)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let guard = Lifecycle::default();
        assert!(!guard.is_initialized());
        assert_eq!(
            guard.ensure_initialized(),
            Err(RegistryError::NotInitialized)
        );
    }

    #[test]
    fn initializes_exactly_once() {
        let mut guard = Lifecycle::default();
        assert!(guard.initialize().is_ok());
        assert!(guard.ensure_initialized().is_ok());

        assert_eq!(guard.initialize(), Err(RegistryError::AlreadyInitialized));
        // The failed re-initialization leaves the flag set
        assert!(guard.is_initialized());
    }
}
