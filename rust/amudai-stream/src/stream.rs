//! The eager, in-memory stream container.

use std::{cmp::Ordering, hash::Hash};

use ahash::AHashSet;
use amudai_common::{Result, StdErrorBoxed};

use crate::{
    close::CloseHandlers,
    collector::Collector,
    config::ExecutionMode,
    ordering::{ComparatorSort, first_extremum, natural_order},
    transform,
};

/// An ordered, in-memory sequence of elements supporting chained aggregate
/// operations.
///
/// Evaluation is eager. Every intermediate operation (`filter`, `map`,
/// `sorted`, `peek`, ...) consumes the stream, fully materializes its result
/// and returns a new stream that exclusively owns its elements. The registered
/// close handlers and the execution mode are carried into the returned stream.
///
/// Terminal operations (`count`, `reduce`, `collect`, `for_each`, ...) borrow
/// the stream, so it can be queried repeatedly and closed afterwards.
#[derive(Debug)]
pub struct Stream<T> {
    elements: Vec<T>,
    handlers: CloseHandlers,
    mode: ExecutionMode,
}

impl<T> Stream<T> {
    /// Creates an empty stream.
    pub fn empty() -> Stream<T> {
        Stream::of(Vec::new())
    }

    /// Creates a stream owning the given elements, in the given order.
    pub fn of(elements: impl Into<Vec<T>>) -> Stream<T> {
        Stream {
            elements: elements.into(),
            handlers: CloseHandlers::new(),
            mode: ExecutionMode::default(),
        }
    }

    /// Creates a stream containing a single element.
    pub fn of_single(element: T) -> Stream<T> {
        Stream::of(vec![element])
    }

    /// Replaces the elements with `f(elements)`, keeping the close handlers and
    /// the execution mode.
    pub(crate) fn map_elements<R, F>(self, f: F) -> Stream<R>
    where
        F: FnOnce(Vec<T>) -> Vec<R>,
    {
        Stream {
            elements: f(self.elements),
            handlers: self.handlers,
            mode: self.mode,
        }
    }

    /// Splits the stream into its elements and a stream of `R` with no
    /// elements that carries the handlers and the mode.
    pub(crate) fn into_parts<R>(self) -> (Vec<T>, Stream<R>) {
        let Stream {
            elements,
            handlers,
            mode,
        } = self;
        let shell = Stream {
            elements: Vec::new(),
            handlers,
            mode,
        };
        (elements, shell)
    }

    pub(crate) fn extend_from(&mut self, other: Stream<T>) {
        self.elements.extend(other.elements);
        self.handlers.append(other.handlers);
    }

    /// Returns the number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in the current order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the stream and returns its elements.
    ///
    /// Registered close handlers are dropped without being run.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a snapshot of the elements, in the current order.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Returns the first element, or `None` if the stream is empty.
    pub fn find_first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Same as [`Stream::find_first`]; there is no unordered execution.
    pub fn find_any(&self) -> Option<&T> {
        self.find_first()
    }

    /// Applies `f` to every element, in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(f);
    }

    /// Same as [`Stream::for_each`].
    pub fn for_each_ordered<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.for_each(f);
    }

    /// Runs `f` on every element and returns the same sequence.
    ///
    /// Unlike lazy streams, where the action is deferred until the elements are
    /// consumed downstream, `f` runs immediately, before `peek` returns.
    pub fn peek<F>(self, f: F) -> Stream<T>
    where
        F: FnMut(&T),
    {
        self.for_each(f);
        self
    }

    /// Returns `true` if any element satisfies `predicate`. Stops at the first
    /// match.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate` (vacuously `true`
    /// for an empty stream). Stops at the first element that does not.
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`. Stops at the first
    /// element that does.
    pub fn none_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.all_match(|e| !predicate(e))
    }

    /// Keeps only the elements satisfying `predicate`, in order.
    pub fn filter<P>(mut self, predicate: P) -> Stream<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
        self
    }

    /// Keeps at most the first `max_size` elements.
    pub fn limit(mut self, max_size: usize) -> Stream<T> {
        self.elements.truncate(max_size);
        self
    }

    /// Discards the first `n` elements. Skipping at least as many elements as
    /// the stream holds leaves it empty.
    pub fn skip(mut self, n: usize) -> Stream<T> {
        if n >= self.elements.len() {
            self.elements.clear();
        } else {
            self.elements.drain(..n);
        }
        self
    }

    /// Returns the minimum element according to `comparator`, or `None` if the
    /// stream is empty. Among equal minima the first one in encounter order is
    /// returned.
    pub fn min<F>(&self, comparator: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        first_extremum(&self.elements, comparator, Ordering::Less)
    }

    /// Returns the maximum element according to `comparator`, or `None` if the
    /// stream is empty. Among equal maxima the first one in encounter order is
    /// returned.
    pub fn max<F>(&self, comparator: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        first_extremum(&self.elements, comparator, Ordering::Greater)
    }

    /// Sorts the elements according to `comparator` and returns the stream.
    ///
    /// The backing storage is reordered in place; no copy of the elements is
    /// made. The sort is stable.
    pub fn sorted<F>(mut self, comparator: F) -> Stream<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort(comparator);
        self
    }

    /// Sorts the elements of this stream in place according to `comparator`.
    ///
    /// Subsequent operations on this stream observe the new order.
    pub fn sort<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        log::trace!("sorting {} element(s)", self.elements.len());
        ComparatorSort::new(&mut self.elements, comparator).sort();
    }

    /// Concatenates two streams: all elements of `first`, then all elements of
    /// `second`. The result runs the close handlers of `first`, then those of
    /// `second`, and keeps the execution mode of `first`.
    pub fn concat(mut first: Stream<T>, second: Stream<T>) -> Stream<T> {
        first.extend_from(second);
        first
    }

    /// Replaces every element with the result of `mapper`.
    pub fn map<R, F>(self, mapper: F) -> Stream<R>
    where
        F: FnMut(T) -> R,
    {
        transform::map(self, mapper)
    }

    /// Replaces every element with the elements of the stream produced by
    /// `mapper`, in order.
    pub fn flat_map<R, F>(self, mapper: F) -> Stream<R>
    where
        F: FnMut(T) -> Stream<R>,
    {
        transform::flat_map(self, mapper)
    }

    pub fn map_to_int<F>(self, mapper: F) -> Stream<i32>
    where
        F: FnMut(T) -> i32,
    {
        transform::map_to_int(self, mapper)
    }

    pub fn map_to_long<F>(self, mapper: F) -> Stream<i64>
    where
        F: FnMut(T) -> i64,
    {
        transform::map_to_long(self, mapper)
    }

    pub fn map_to_float<F>(self, mapper: F) -> Stream<f64>
    where
        F: FnMut(T) -> f64,
    {
        transform::map_to_float(self, mapper)
    }

    pub fn flat_map_to_int<F>(self, mapper: F) -> Stream<i32>
    where
        F: FnMut(T) -> Stream<i32>,
    {
        transform::flat_map_to_int(self, mapper)
    }

    pub fn flat_map_to_long<F>(self, mapper: F) -> Stream<i64>
    where
        F: FnMut(T) -> Stream<i64>,
    {
        transform::flat_map_to_long(self, mapper)
    }

    pub fn flat_map_to_double<F>(self, mapper: F) -> Stream<f64>
    where
        F: FnMut(T) -> Stream<f64>,
    {
        transform::flat_map_to_double(self, mapper)
    }

    /// Folds the elements without a seed.
    ///
    /// Returns `None` for an empty stream and the only element for a single
    /// element stream. Otherwise folds left in encounter order, calling
    /// `accumulator(running, next)`.
    pub fn reduce<F>(&self, accumulator: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let (first, rest) = self.elements.split_first()?;
        Some(rest.iter().fold(first.clone(), accumulator))
    }

    /// Folds the elements starting from `identity`. Returns `identity`
    /// unchanged for an empty stream.
    pub fn reduce_with_identity<F>(&self, identity: T, accumulator: F) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        self.elements.iter().fold(identity, accumulator)
    }

    /// Folds the elements into a value of type `U` starting from `identity`.
    ///
    /// `combiner` merges two partial results. Execution is always sequential,
    /// so it is never invoked, even when the stream is flagged parallel.
    pub fn reduce_with_identity_and_combiner<U, F, C>(
        &self,
        identity: U,
        accumulator: F,
        _combiner: C,
    ) -> U
    where
        F: FnMut(U, &T) -> U,
        C: FnMut(U, U) -> U,
    {
        self.elements.iter().fold(identity, accumulator)
    }

    /// Performs a mutable reduction: `supplier` creates the result and
    /// `accumulator(element, &mut result)` is called for every element, in
    /// order.
    ///
    /// `combiner` merges two partial results; it is never invoked under
    /// sequential execution.
    pub fn collect<R, S, A, C>(&self, supplier: S, mut accumulator: A, _combiner: C) -> R
    where
        S: FnOnce() -> R,
        A: FnMut(&T, &mut R),
        C: FnMut(&mut R, R) -> Result<()>,
    {
        let mut result = supplier();
        for element in &self.elements {
            accumulator(element, &mut result);
        }
        result
    }

    /// Performs a mutable reduction described by `collector`.
    pub fn collect_with<C>(&self, collector: &C) -> C::Output
    where
        C: Collector<T> + ?Sized,
    {
        self.collect(
            || collector.supply(),
            |element, result| collector.accumulate(element, result),
            |left, right| collector.combine(left, right),
        )
    }

    /// Registers a handler to be run by [`Stream::close`].
    ///
    /// Handlers accumulate across calls and run in registration order. A
    /// handler reports a recoverable failure by returning `Err`.
    pub fn on_close<F, E>(mut self, handler: F) -> Stream<T>
    where
        F: FnOnce() -> std::result::Result<(), E> + 'static,
        E: Into<StdErrorBoxed>,
    {
        self.handlers.push(handler);
        self
    }

    /// Returns the number of registered close handlers.
    pub fn close_handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Closes the stream, running every registered close handler in
    /// registration order.
    ///
    /// All handlers run even if some of them fail. The returned error carries
    /// every failure (see [`amudai_common::MultiError`]); with a single failure
    /// its message is that failure's message, with more than one it is
    /// `multiple errors: <msg1>, <msg2>, `.
    ///
    /// # Panics
    ///
    /// A panic raised by a handler propagates immediately; the handlers
    /// registered after it do not run.
    pub fn close(self) -> Result<()> {
        self.handlers.run()
    }

    /// Flags the stream as parallel. Execution is unaffected.
    pub fn parallel(mut self) -> Stream<T> {
        self.mode = self.mode.with_parallel(true);
        self
    }

    /// Flags the stream as sequential.
    pub fn sequential(mut self) -> Stream<T> {
        self.mode = self.mode.with_parallel(false);
        self
    }

    /// Flags the encounter order as insignificant. Execution is unaffected.
    pub fn unordered(mut self) -> Stream<T> {
        self.mode = self.mode.with_ordered(false);
        self
    }

    /// Returns whether the most recently set flag requested parallel execution.
    pub fn is_parallel(&self) -> bool {
        self.mode.is_parallel()
    }

    pub fn is_ordered(&self) -> bool {
        self.mode.is_ordered()
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

impl<T: Ord> Stream<T> {
    /// Sorts the elements according to their natural order.
    pub fn sorted_natural(self) -> Stream<T> {
        self.sorted(natural_order)
    }
}

impl<T: Eq + Hash> Stream<T> {
    /// Removes duplicate elements.
    ///
    /// The current implementation keeps the first occurrence of each element in
    /// encounter order; callers should not depend on the resulting order.
    pub fn distinct(mut self) -> Stream<T> {
        let before = self.elements.len();
        let keep = {
            let mut seen = AHashSet::with_capacity(before);
            self.elements
                .iter()
                .map(|e| seen.insert(e))
                .collect::<Vec<_>>()
        };
        let mut keep = keep.into_iter();
        self.elements.retain(|_| keep.next().unwrap_or(false));
        log::trace!("distinct: {before} -> {} element(s)", self.elements.len());
        self
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(elements: Vec<T>) -> Self {
        Stream::of(elements)
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
