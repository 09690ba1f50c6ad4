//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use cambcommon::{MetadataMap, Registry, SessionId, TraceId};
//!
//! let session = SessionId::from("session-1");
//! let trace = TraceId::new("trace-1");
//! let mut metadata = MetadataMap::new();
//! metadata.insert("tenant".to_string(), "acme".to_string());
//!
//! let mut registry = Registry::new();
//! registry.insert("camb_tts".to_string(), 1_u8);
//!
//! assert_eq!(session.as_str(), "session-1");
//! assert_eq!(trace.to_string(), "trace-1");
//! assert_eq!(registry.keys().next().map(String::as_str), Some("camb_tts"));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use cambcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Shared metadata and cross-crate identifier newtypes.
    //!
    //! ```rust
    //! use cambcommon::{MetadataMap, SessionId, TraceId};
    //!
    //! let session = SessionId::new("session-42");
    //! let trace = TraceId::from("trace-42");
    //! let mut metadata = MetadataMap::new();
    //! metadata.insert("env".to_string(), "test".to_string());
    //!
    //! assert_eq!(session.to_string(), "session-42");
    //! assert_eq!(trace.as_str(), "trace-42");
    //! ```

    use std::collections::HashMap;

    pub type MetadataMap = HashMap<String, String>;

    macro_rules! string_id {
        ($(#[$meta:meta])* $name:ident) => {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name(String);

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_owned())
                }
            }
        };
    }

    string_id!(
        /// Host conversation or agent session a tool call belongs to.
        SessionId
    );
    string_id!(
        /// Correlation id propagated into tracing fields.
        TraceId
    );
}

pub mod registry {
    //! Insertion-ordered registry map used by tool registries.
    //!
    //! Iteration follows first-insertion order; re-inserting an existing key
    //! replaces the value in place.
    //!
    //! ```rust
    //! use cambcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("beta".to_string(), 2_u32);
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![2, 1]);
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        index: HashMap<K, usize>,
        entries: Vec<(K, V)>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                index: HashMap::new(),
                entries: Vec::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash + Clone,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            if let Some(&position) = self.index.get(&key) {
                return Some(std::mem::replace(&mut self.entries[position].1, value));
            }

            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
            None
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.index
                .get(key)
                .map(|&position| &self.entries[position].1)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            let position = self.index.remove(key)?;
            let (_, value) = self.entries.remove(position);

            for slot in self.index.values_mut() {
                if *slot > position {
                    *slot -= 1;
                }
            }

            Some(value)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.index.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.entries.iter().map(|(key, _)| key)
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.entries.iter().map(|(_, value)| value)
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }
}

pub use context::{MetadataMap, SessionId, TraceId};
pub use future::BoxFuture;
pub use registry::Registry;
