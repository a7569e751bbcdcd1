//! Accumulate-then-freeze construction of a [`Stream`].

use crate::stream::Stream;

/// An append-only buffer that is moved into a [`Stream`] by [`StreamBuilder::build`].
#[derive(Debug, Clone)]
pub struct StreamBuilder<T> {
    elements: Vec<T>,
}

impl<T> StreamBuilder<T> {
    pub fn new() -> StreamBuilder<T> {
        StreamBuilder {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> StreamBuilder<T> {
        StreamBuilder {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Appends an element.
    pub fn accept(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Appends an element and returns the builder for chaining.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.accept(value);
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Freezes the accumulated elements into a stream, in insertion order.
    pub fn build(self) -> Stream<T> {
        Stream::of(self.elements)
    }
}

impl<T> Default for StreamBuilder<T> {
    fn default() -> Self {
        StreamBuilder::new()
    }
}

impl<T> Extend<T> for StreamBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}
