use std::cell::Cell;
use std::fmt;

use tracing::trace;

/// Change notification invoked with the normalized value a setter proposes.
pub type ChangeCallback<T> = Box<dyn Fn(T)>;

/// Reads the current value of an externally owned slot.
pub(crate) type Getter<T> = Box<dyn Fn() -> T>;

enum Source<T> {
    Owned(Cell<T>),
    External(Getter<T>),
}

/// One piece of picker state, owned by the picker or by the embedding application.
///
/// The mode is fixed at construction. Reads go to the cell or the getter; a proposed
/// change writes the cell only when owned, and always reaches the callback.
pub(crate) struct Slot<T: Copy> {
    name:      &'static str,
    source:    Source<T>,
    on_change: Option<ChangeCallback<T>>,
}

impl<T: Copy + fmt::Debug> Slot<T> {
    pub(crate) const fn owned(
        name: &'static str,
        initial: T,
        on_change: Option<ChangeCallback<T>>,
    ) -> Self {
        Self {
            name,
            source: Source::Owned(Cell::new(initial)),
            on_change,
        }
    }

    pub(crate) const fn external(
        name: &'static str,
        getter: Getter<T>,
        on_change: Option<ChangeCallback<T>>,
    ) -> Self {
        Self {
            name,
            source: Source::External(getter),
            on_change,
        }
    }

    pub(crate) const fn is_controlled(&self) -> bool {
        matches!(self.source, Source::External(_))
    }

    pub(crate) fn get(&self) -> T {
        match &self.source {
            Source::Owned(cell) => cell.get(),
            Source::External(getter) => getter(),
        }
    }

    /// No borrow is held while the callback runs, so it may call back into the picker.
    pub(crate) fn propose(&self, next: T) {
        if let Source::Owned(cell) = &self.source {
            cell.set(next);
        }
        trace!(
            slot = self.name,
            value = ?next,
            controlled = self.is_controlled(),
            "slot change proposed"
        );
        if let Some(on_change) = &self.on_change {
            on_change(next);
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("controlled", &self.is_controlled())
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_owned_slot_stores_and_notifies() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let slot = Slot::owned("count", 1, Some(Box::new(move |v| sink.set(v))));

        assert!(!slot.is_controlled());
        slot.propose(5);
        assert_eq!(slot.get(), 5);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_external_slot_only_notifies() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let slot = Slot::external("count", Box::new(|| 1), Some(Box::new(move |v| sink.set(v))));

        assert!(slot.is_controlled());
        slot.propose(5);
        assert_eq!(slot.get(), 1);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_external_slot_reads_live_source() {
        let backing = Rc::new(Cell::new(1));
        let read = Rc::clone(&backing);
        let write = Rc::clone(&backing);
        let slot = Slot::external(
            "count",
            Box::new(move || read.get()),
            Some(Box::new(move |v| write.set(v))),
        );

        slot.propose(7);
        assert_eq!(slot.get(), 7);
    }
}
