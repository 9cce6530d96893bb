//! Running layers keyed by name.
//!
//! Each entry is a shared slot so handles handed out to JS can observe a
//! cancel. Launching a name that is already running returns its slot; after
//! a cancel the name is free and the next launch builds a fresh runtime.

use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared cell holding a running layer; `None` once cancelled.
pub type LayerSlot<T> = Rc<RefCell<Option<T>>>;

pub struct LayerRegistry<T> {
    slots: FnvHashMap<String, LayerSlot<T>>,
}

impl<T> Default for LayerRegistry<T> {
    fn default() -> Self {
        Self {
            slots: FnvHashMap::default(),
        }
    }
}

impl<T> LayerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot of the running layer `name`, or a new one filled by `build`.
    /// The flag is true when `build` ran.
    pub fn get_or_launch<E>(
        &mut self,
        name: &str,
        build: impl FnOnce() -> Result<T, E>,
    ) -> Result<(LayerSlot<T>, bool), E> {
        if let Some(slot) = self.slots.get(name).filter(|s| s.borrow().is_some()) {
            return Ok((slot.clone(), false));
        }
        let slot: LayerSlot<T> = Rc::new(RefCell::new(Some(build()?)));
        self.slots.insert(name.to_string(), slot.clone());
        Ok((slot, true))
    }

    /// Empty `slot` and forget `name` if it still maps to that slot. The
    /// runtime is handed back so the caller drops it outside any borrow.
    pub fn cancel(&mut self, name: &str, slot: &LayerSlot<T>) -> Option<T> {
        let runtime = slot.borrow_mut().take();
        if self.slots.get(name).is_some_and(|s| Rc::ptr_eq(s, slot)) {
            self.slots.remove(name);
        }
        runtime
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|s| s.borrow().is_some())
    }

    /// Run `f` against the running layer `name`.
    pub fn with_running<R>(&self, name: &str, f: impl FnOnce(&T) -> R) -> Option<R> {
        let slot = self.slots.get(name)?;
        let runtime = slot.borrow();
        runtime.as_ref().map(f)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_slot_cancel_keeps_newer_entry() {
        let mut reg: LayerRegistry<u32> = LayerRegistry::new();
        let (old, _) = reg.get_or_launch("a", || Ok::<_, ()>(1)).unwrap();
        assert_eq!(reg.cancel("a", &old), Some(1));
        let (new, fresh) = reg.get_or_launch("a", || Ok::<_, ()>(2)).unwrap();
        assert!(fresh);

        // cancelling the old handle again must not touch the relaunched layer
        assert_eq!(reg.cancel("a", &old), None);
        assert!(reg.is_running("a"));
        assert_eq!(*new.borrow(), Some(2));
    }

    #[test]
    fn failed_build_registers_nothing() {
        let mut reg: LayerRegistry<u32> = LayerRegistry::new();
        let err = reg.get_or_launch("a", || Err("boom")).unwrap_err();
        assert_eq!(err, "boom");
        assert!(reg.is_empty());
        assert!(!reg.is_running("a"));
    }
}
