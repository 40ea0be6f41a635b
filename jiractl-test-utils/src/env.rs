//! Environment variable save/restore for tests.

use std::env;

/// RAII guard that saves an environment variable on creation and restores it
/// on drop. Tests can freely `set`/`remove` the variable in between.
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Create a guard for the named environment variable
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the guarded variable to the given value
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the guarded variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    unsafe {
      match &self.original {
        Some(value) => env::set_var(&self.name, value),
        None => env::remove_var(&self.name),
      }
    }
  }
}
