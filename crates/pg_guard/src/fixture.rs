//! Pointees that count their drops.

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared drop counter of the pointees it creates.
#[derive(Clone, Default)]
pub(crate) struct Drops(Rc<Cell<usize>>);

impl Drops {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pointee(&self, id: u32) -> Pointee {
        Pointee {
            id,
            drops: Some(self.clone()),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

#[derive(Default)]
pub(crate) struct Pointee {
    pub(crate) id: u32,
    drops: Option<Drops>,
}

impl Pointee {
    pub(crate) fn new(id: u32) -> Self {
        Self { id, drops: None }
    }
}

impl Drop for Pointee {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.0.set(drops.0.get() + 1);
        }
    }
}
