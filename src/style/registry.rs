use std::cell::RefCell;
use std::collections::BTreeMap;

/// Idempotent keyframe/style-fragment registry.
///
/// Replaces ad-hoc global stylesheet injection: `ensure` registers a fragment
/// once per distinct animation name and never duplicates. Release is a
/// non-goal; registered styles are page-lifetime.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    entries: RefCell<BTreeMap<String, String>>,
}

impl StyleRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `body` under `name` unless already present. Returns `true`
    /// when this call inserted the fragment.
    pub fn ensure(&self, name: impl Into<String>, body: impl Into<String>) -> bool {
        let mut entries = self.entries.borrow_mut();
        let name = name.into();
        if entries.contains_key(&name) {
            return false;
        }
        entries.insert(name, body.into());
        true
    }

    /// Fragment registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.entries.borrow().get(name).cloned()
    }

    /// Registered `(name, body)` pairs in name order.
    pub fn fragments(&self) -> Vec<(String, String)> {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of registered fragments.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the registry holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

thread_local! {
    static GLOBAL: StyleRegistry = StyleRegistry::new();
}

impl StyleRegistry {
    /// Run `f` against the process-wide registry.
    pub fn with_global<R>(f: impl FnOnce(&StyleRegistry) -> R) -> R {
        GLOBAL.with(f)
    }
}
