#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

/// Shared tallies of how many [`Tracked`] values have been created and dropped.
#[derive(Debug, Default, Clone)]
pub struct Lifecycle {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl Lifecycle {
    pub fn new() -> Lifecycle {
        Lifecycle::default()
    }

    /// Creates a new value tied to this tally, counting it as constructed.
    pub fn track(&self, id: usize) -> Tracked {
        self.created.set(self.created.get() + 1);
        Tracked {
            id,
            life: self.clone(),
            panic_on_drop: false,
        }
    }

    /// Like [`Lifecycle::track`], but the value panics after being counted as dropped.
    pub fn track_panicking(&self, id: usize) -> Tracked {
        let mut tracked = self.track(id);
        tracked.panic_on_drop = true;
        tracked
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    pub fn alive(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value with observable construction and destruction.
#[derive(Debug)]
pub struct Tracked {
    pub id: usize,
    life: Lifecycle,
    panic_on_drop: bool,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.life.track(self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.life.dropped.set(self.life.dropped.get() + 1);
        if self.panic_on_drop {
            panic!("dropped tracked value {}", self.id);
        }
    }
}
