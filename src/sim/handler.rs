//! Ordered owning collection that drives its members through the loop.

use crate::platform::Surface;
use crate::sim::{Loopable, TickInput};

/// Owns a dynamic list of loopable items and updates/renders all of them in
/// insertion order each tick. Removing an item from the handler is the only
/// destruction path for owned items other than clearing the whole handler.
#[derive(Debug, Default)]
pub struct Handler<T> {
    items: Vec<T>,
}

impl<T> Handler<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Keep only the items matching the predicate, preserving order.
    pub fn retain(&mut self, pred: impl FnMut(&T) -> bool) {
        self.items.retain(pred);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }
}

impl<T: Loopable> Loopable for Handler<T> {
    fn update(&mut self, input: &TickInput) {
        for item in &mut self.items {
            item.update(input);
        }
    }

    fn render(&self, gfx: &mut dyn Surface) {
        for item in &self.items {
            item.render(gfx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Surface;

    struct Probe {
        id: u32,
        ticks: u32,
    }

    impl Loopable for Probe {
        fn update(&mut self, _input: &TickInput) {
            self.ticks += 1;
        }

        fn render(&self, _gfx: &mut dyn Surface) {}
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut handler = Handler::new();
        for id in 0..5 {
            handler.add(Probe { id, ticks: 0 });
        }
        let ids: Vec<u32> = handler.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_update_visits_all() {
        let mut handler = Handler::new();
        for id in 0..3 {
            handler.add(Probe { id, ticks: 0 });
        }
        handler.update(&TickInput::default());
        handler.update(&TickInput::default());
        assert!(handler.iter().all(|p| p.ticks == 2));
    }

    #[test]
    fn test_remove_and_retain() {
        let mut handler = Handler::new();
        for id in 0..4 {
            handler.add(Probe { id, ticks: 0 });
        }
        let removed = handler.remove(1).map(|p| p.id);
        assert_eq!(removed, Some(1));
        assert_eq!(handler.remove(10).map(|p| p.id), None);

        handler.retain(|p| p.id != 3);
        let ids: Vec<u32> = handler.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_clear() {
        let mut handler = Handler::new();
        handler.add(Probe { id: 0, ticks: 0 });
        handler.clear();
        assert!(handler.is_empty());
        assert_eq!(handler.len(), 0);
    }
}
