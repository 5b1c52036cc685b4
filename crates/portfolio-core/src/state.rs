//! Single-writer / multi-reader value cells.
//!
//! The frame loop and the tween ticker run as separate tasks on one thread.
//! Each shared field has exactly one producer holding a `StateWriter` and any
//! number of consumers holding `StateReader`s. Which task observes a write
//! first is unspecified.

use std::cell::Cell;
use std::rc::Rc;

/// Create a cell holding `initial` and return its only writer plus a reader.
pub fn state_cell<T: Copy>(initial: T) -> (StateWriter<T>, StateReader<T>) {
    let inner = Rc::new(Cell::new(initial));
    (
        StateWriter {
            inner: inner.clone(),
        },
        StateReader { inner },
    )
}

/// Write half. Deliberately not `Clone`.
#[derive(Debug)]
pub struct StateWriter<T: Copy> {
    inner: Rc<Cell<T>>,
}

impl<T: Copy> StateWriter<T> {
    pub fn set(&mut self, value: T) {
        self.inner.set(value);
    }

    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn reader(&self) -> StateReader<T> {
        StateReader {
            inner: self.inner.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StateReader<T: Copy> {
    inner: Rc<Cell<T>>,
}

impl<T: Copy> StateReader<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }
}
