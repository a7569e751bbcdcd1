//! Mutable reduction protocol used by [`Stream::collect_with`](crate::Stream::collect_with).

use amudai_common::{Error, Result};

/// A mutable reduction: a result factory, an accumulation step, and a merge
/// step for two partial results.
///
/// `Stream::collect_with(&collector)` is exactly
/// `stream.collect(|| collector.supply(), |e, r| collector.accumulate(e, r),
/// |l, r| collector.combine(l, r))`.
pub trait Collector<T> {
    /// The mutable result container.
    type Output;

    /// Creates a new, empty result.
    fn supply(&self) -> Self::Output;

    /// Folds `element` into `result` by mutating it.
    fn accumulate(&self, element: &T, result: &mut Self::Output);

    /// Merges `right` into `left`.
    ///
    /// Only a parallel execution would need this, so the default reports
    /// [`amudai_common::ErrorKind::NotImplemented`] rather than producing a
    /// wrong result.
    fn combine(&self, left: &mut Self::Output, right: Self::Output) -> Result<()> {
        let _ = (left, right);
        Err(Error::not_implemented("Collector::combine"))
    }
}

/// A [`Collector`] assembled from three functions.
pub struct FnCollector<S, A, C> {
    supplier: S,
    accumulator: A,
    combiner: C,
}

impl<S, A, C> FnCollector<S, A, C> {
    pub fn new(supplier: S, accumulator: A, combiner: C) -> Self {
        FnCollector {
            supplier,
            accumulator,
            combiner,
        }
    }
}

impl<T, R, S, A, C> Collector<T> for FnCollector<S, A, C>
where
    S: Fn() -> R,
    A: Fn(&T, &mut R),
    C: Fn(&mut R, R) -> Result<()>,
{
    type Output = R;

    fn supply(&self) -> R {
        (self.supplier)()
    }

    fn accumulate(&self, element: &T, result: &mut R) {
        (self.accumulator)(element, result)
    }

    fn combine(&self, left: &mut R, right: R) -> Result<()> {
        (self.combiner)(left, right)
    }
}

/// Collects clones of the elements into a `Vec`, in encounter order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVec;

impl<T: Clone> Collector<T> for ToVec {
    type Output = Vec<T>;

    fn supply(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, element: &T, result: &mut Vec<T>) {
        result.push(element.clone());
    }

    fn combine(&self, left: &mut Vec<T>, mut right: Vec<T>) -> Result<()> {
        left.append(&mut right);
        Ok(())
    }
}
