//! Explicitly created, explicitly destroyed global instances.
//!
//! A [`Singleton`] is declared as a `static` and starts out empty. The
//! instance exists only between [`create`](Singleton::create) and
//! [`destroy`](Singleton::destroy); [`get`](Singleton::get) returns `None`
//! outside that window.
//!
//! ```rust
//! use slotkit_util::Singleton;
//!
//! struct Registry {
//!     name: &'static str,
//! }
//!
//! static REGISTRY: Singleton<Registry> = Singleton::new();
//!
//! assert!(REGISTRY.get().is_none());
//! REGISTRY.create(|| Registry { name: "main" });
//! assert_eq!(REGISTRY.get().map(|r| r.name), Some("main"));
//! assert!(REGISTRY.destroy());
//! assert!(REGISTRY.get().is_none());
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

/// Holder for at most one shared instance of `T`.
pub struct Singleton<T> {
    instance: Mutex<Option<Arc<T>>>,
}

impl<T> Singleton<T> {
    /// An empty holder. Usable in `static` position.
    pub const fn new() -> Self {
        Self {
            instance: Mutex::new(None),
        }
    }

    /// Create the instance with `init` unless one already exists.
    ///
    /// Returns the live instance either way. `init` runs only when the
    /// holder was empty.
    pub fn create(&self, init: impl FnOnce() -> T) -> Arc<T> {
        let mut guard = self.lock();
        let instance = guard.get_or_insert_with(|| {
            tracing::debug!(ty = std::any::type_name::<T>(), "singleton created");
            Arc::new(init())
        });
        Arc::clone(instance)
    }

    /// Drop the held instance, reporting whether there was one.
    ///
    /// Handles obtained earlier from [`get`](Self::get) or
    /// [`create`](Self::create) stay valid until they are dropped.
    pub fn destroy(&self) -> bool {
        let destroyed = self.lock().take().is_some();
        if destroyed {
            tracing::debug!(ty = std::any::type_name::<T>(), "singleton destroyed");
        }
        destroyed
    }

    /// The live instance, or `None` before create / after destroy.
    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().clone()
    }

    /// Whether an instance currently exists.
    pub fn is_created(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        // The guarded value is a plain Option; a panic elsewhere cannot
        // leave it half-updated.
        self.instance
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn get_before_create_is_none() {
        let holder: Singleton<u32> = Singleton::new();
        assert!(holder.get().is_none());
        assert!(!holder.is_created());
    }

    #[test]
    fn create_is_idempotent() {
        let holder = Singleton::new();
        let calls = AtomicUsize::new(0);
        let first = holder.create(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            7
        });
        let second = holder.create(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            8
        });
        assert_eq!(*first, 7);
        assert_eq!(*second, 7);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn destroy_then_recreate() {
        let holder = Singleton::new();
        assert!(!holder.destroy());
        holder.create(|| "one");
        assert!(holder.destroy());
        assert!(!holder.is_created());
        holder.create(|| "two");
        assert_eq!(holder.get().as_deref(), Some(&"two"));
    }

    #[test]
    fn outstanding_handle_outlives_destroy() {
        let holder = Singleton::new();
        let handle = holder.create(|| String::from("kept"));
        holder.destroy();
        assert_eq!(handle.as_str(), "kept");
        assert_eq!(Arc::strong_count(&handle), 1);
    }

    #[test]
    fn works_as_static() {
        static COUNTER: Singleton<AtomicUsize> = Singleton::new();
        COUNTER.create(|| AtomicUsize::new(0));
        if let Some(counter) = COUNTER.get() {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        assert_eq!(
            COUNTER.get().map(|c| c.load(Ordering::Relaxed)),
            Some(1)
        );
        COUNTER.destroy();
    }

    #[test]
    fn survives_poisoned_lock() {
        let holder = Arc::new(Singleton::new());
        holder.create(|| 1u8);
        let poisoner = Arc::clone(&holder);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.instance.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert_eq!(holder.get().as_deref(), Some(&1));
        assert!(holder.destroy());
    }
}
