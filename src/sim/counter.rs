//! Shared mutable counter cells for score, difficulty and elapsed time.

use std::cell::Cell;
use std::rc::Rc;

/// A numeric cell shared by reference between its producer (the world) and
/// its consumer (the HUD), so the consumer always observes current values
/// without a callback. Cloning produces another handle to the same cell.
///
/// Deliberately `Rc<Cell<_>>` rather than an atomic: all tick state is
/// confined to the single simulation thread.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    cell: Rc<Cell<i64>>,
}

impl Counter {
    pub fn new(value: i64) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    pub fn value(&self) -> i64 {
        self.cell.get()
    }

    pub fn set(&self, value: i64) {
        self.cell.set(value);
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.inc_by(1);
    }

    /// Increment by an arbitrary signed amount.
    pub fn inc_by(&self, amount: i64) {
        self.cell.set(self.cell.get() + amount);
    }

    /// Decrement by 1.
    pub fn dec(&self) {
        self.dec_by(1);
    }

    /// Decrement by an arbitrary signed amount.
    pub fn dec_by(&self, amount: i64) {
        self.cell.set(self.cell.get() - amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inc_dec() {
        let c = Counter::new(0);
        c.inc();
        c.inc_by(10);
        c.dec();
        c.dec_by(3);
        assert_eq!(c.value(), 7);
    }

    #[test]
    fn test_negative_amounts() {
        let c = Counter::new(5);
        c.inc_by(-5);
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn test_shared_handle_observes_writes() {
        let producer = Counter::new(0);
        let consumer = producer.clone();
        producer.inc_by(42);
        assert_eq!(consumer.value(), 42);
        consumer.set(0);
        assert_eq!(producer.value(), 0);
    }
}
