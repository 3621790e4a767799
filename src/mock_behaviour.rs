//! This module provides ways to tweak storage backends, so that they can return errors on some tests

use crate::error::StorageError;

/// This stores some behaviour tweaks, that describe how a backend will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    // From the KeyValueStore trait
    pub get_behaviour: (u32, u32),
    pub set_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            get_behaviour: (0, n_fails),
            set_behaviour: (0, n_fails),
        }
    }

    /// Writes will fail `n_fails` times, after `n_successes` successful writes
    pub fn fail_writes_after(n_successes: u32, n_fails: u32) -> Self {
        Self {
            set_behaviour: (n_successes, n_fails),
            ..Self::default()
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_get(&mut self) -> Result<(), StorageError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.get_behaviour, "get")
    }
    pub fn can_set(&mut self) -> Result<(), StorageError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.set_behaviour, "set")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), StorageError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(StorageError::Mocked(format!("{} ({:?})", descr, value)))
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mock_behaviour() {
        let mut ok = MockBehaviour::new();
        assert!(ok.can_get().is_ok());
        assert!(ok.can_get().is_ok());
        assert!(ok.can_set().is_ok());
        assert!(ok.can_set().is_ok());

        let mut now = MockBehaviour::fail_now(2);
        assert!(now.can_get().is_err());
        assert!(now.can_set().is_err());
        assert!(now.can_set().is_err());
        assert!(now.can_get().is_err());
        assert!(now.can_get().is_ok());
        assert!(now.can_set().is_ok());

        let mut custom = MockBehaviour::fail_writes_after(1, 2);
        assert!(custom.can_get().is_ok());
        assert!(custom.can_set().is_ok());
        assert!(custom.can_set().is_err());
        assert!(custom.can_set().is_err());
        assert!(custom.can_set().is_ok());

        let mut suspended = MockBehaviour::fail_now(1);
        suspended.suspend();
        assert!(suspended.can_set().is_ok());
        suspended.resume();
        assert!(suspended.can_set().is_err());
    }
}
