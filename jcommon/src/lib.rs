//! Shared utilities for the jacquard workspace crates.
//!
//! ```rust
//! use jcommon::{BoxFuture, Registry};
//!
//! fn char_count<'a>(value: &'a str) -> BoxFuture<'a, usize> {
//!     Box::pin(async move { value.chars().count() })
//! }
//!
//! let mut registry = Registry::new();
//! registry.insert("alpha".to_string(), 1_u32);
//!
//! let _future = char_count("hello");
//! assert_eq!(registry.get("alpha"), Some(&1));
//! ```

pub mod future {
    //! Shared async future aliases.

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod registry {
    //! Ordered registry map wrapper used by runtime registries.
    //!
    //! Entries iterate in key order, so snapshots taken from a registry are
    //! stable across identical registrations.
    //!
    //! ```rust
    //! use jcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("beta".to_string(), 2_u32);
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! let values: Vec<u32> = registry.values().copied().collect();
    //! assert_eq!(values, vec![1, 2]);
    //! ```

    use std::borrow::Borrow;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: BTreeMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Ord,
    {
        fn default() -> Self {
            Self {
                items: BTreeMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Ord,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Ord + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Ord + ?Sized,
        {
            self.items.remove(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Ord + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.items.values()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use future::BoxFuture;
pub use registry::Registry;

#[cfg(test)]
mod tests {
    use super::Registry;

    #[test]
    fn registry_basic_lifecycle() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert("alpha".to_string(), 1_u32);
        assert_eq!(registry.get("alpha"), Some(&1));
        assert!(registry.contains_key("alpha"));
        assert_eq!(registry.len(), 1);

        let removed = registry.remove("alpha");
        assert_eq!(removed, Some(1));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_insert_replaces_and_returns_prior_value() {
        let mut registry = Registry::new();
        assert_eq!(registry.insert("key".to_string(), 1_u32), None);
        assert_eq!(registry.insert("key".to_string(), 2_u32), Some(1));
        assert_eq!(registry.get("key"), Some(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_values_iterate_in_key_order() {
        let mut registry = Registry::new();
        registry.insert("gamma".to_string(), 3_u32);
        registry.insert("alpha".to_string(), 1_u32);
        registry.insert("beta".to_string(), 2_u32);

        let values: Vec<u32> = registry.values().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
