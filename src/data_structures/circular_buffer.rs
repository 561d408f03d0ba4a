//! Fixed-capacity ring buffer with overwrite-oldest semantics.
//!
//! Logical indices always run from the oldest element (`0`) to the newest
//! (`len() - 1`), independent of where the elements physically sit in storage.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
pub struct CircularBuffer<T> {
    capacity: usize,
    data: Vec<T>,
    // physical index of the oldest element
    start: usize,
}

impl<T> CircularBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            data: Vec::with_capacity(capacity),
            start: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Appends `value` as the newest element, evicting the oldest once full.
    pub fn add(&mut self, value: T) {
        if self.capacity == 0 {
            log::warn!("you tried to add to a CircularBuffer with zero capacity");
            return;
        }
        if self.data.len() < self.capacity {
            self.data.push(value);
        } else {
            self.data[self.start] = value;
            self.start = (self.start + 1) % self.capacity;
        }
    }

    /// Drops the newest element, if any.
    pub fn remove(&mut self) -> Option<T> {
        if self.start != 0 {
            self.data.rotate_left(self.start);
            self.start = 0;
        }
        self.data.pop()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.start = 0;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.physical(index).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.physical(index).map(|i| &mut self.data[i])
    }

    /// Oldest element.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Newest element.
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len().checked_sub(1) {
            Some(i) => self.get_mut(i),
            None => None,
        }
    }

    /// Iterates oldest to newest. Reverse it for newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        (0..self.len()).map(move |i| &self.data[(self.start + i) % self.data.len()])
    }

    fn physical(&self, index: usize) -> Option<usize> {
        if index >= self.data.len() {
            return None;
        }
        Some((self.start + index) % self.data.len())
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index {} out of range for CircularBuffer with len {}",
                index,
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for CircularBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "index {} out of range for CircularBuffer with len {}",
                index, len
            ),
        }
    }
}
