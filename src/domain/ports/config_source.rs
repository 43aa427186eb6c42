//! Configuration source port.
//!
//! Actions never read process-global state directly. They receive a
//! [`ConfigSource`] at construction time, which keeps them deterministic
//! under test and lets hosts resolve values from wherever they keep them.

use std::fmt::Debug;

/// Read-only key/value configuration lookup.
pub trait ConfigSource: Send + Sync + Debug {
    /// Short name of the source, used in log events.
    fn name(&self) -> &'static str;

    /// Look up a value. Unset keys yield `None`; empty values are returned as-is.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a value, treating an empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}
