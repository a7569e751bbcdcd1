//! Element-type changing transformations.
//!
//! These are the free-function forms of [`Stream::map`] and [`Stream::flat_map`]
//! and their numeric specializations. Each one consumes the source stream,
//! fully materializes the result, and carries the close handlers and execution
//! mode of the source into the returned stream.

use crate::stream::Stream;

/// Returns a stream of the results of applying `mapper` to every element of
/// `stream`, in order.
pub fn map<T, R, F>(stream: Stream<T>, mapper: F) -> Stream<R>
where
    F: FnMut(T) -> R,
{
    stream.map_elements(|elements| elements.into_iter().map(mapper).collect())
}

/// Returns a stream of the elements of every stream produced by `mapper`,
/// concatenated in outer order, then inner order.
///
/// Close handlers registered on the produced streams are appended, in order,
/// after the handlers of `stream`.
pub fn flat_map<T, R, F>(stream: Stream<T>, mut mapper: F) -> Stream<R>
where
    F: FnMut(T) -> Stream<R>,
{
    let (elements, mut result) = stream.into_parts();
    for element in elements {
        result.extend_from(mapper(element));
    }
    result
}

pub fn map_to_int<T, F>(stream: Stream<T>, mapper: F) -> Stream<i32>
where
    F: FnMut(T) -> i32,
{
    map(stream, mapper)
}

pub fn map_to_long<T, F>(stream: Stream<T>, mapper: F) -> Stream<i64>
where
    F: FnMut(T) -> i64,
{
    map(stream, mapper)
}

pub fn map_to_float<T, F>(stream: Stream<T>, mapper: F) -> Stream<f64>
where
    F: FnMut(T) -> f64,
{
    map(stream, mapper)
}

pub fn flat_map_to_int<T, F>(stream: Stream<T>, mapper: F) -> Stream<i32>
where
    F: FnMut(T) -> Stream<i32>,
{
    flat_map(stream, mapper)
}

pub fn flat_map_to_long<T, F>(stream: Stream<T>, mapper: F) -> Stream<i64>
where
    F: FnMut(T) -> Stream<i64>,
{
    flat_map(stream, mapper)
}

pub fn flat_map_to_double<T, F>(stream: Stream<T>, mapper: F) -> Stream<f64>
where
    F: FnMut(T) -> Stream<f64>,
{
    flat_map(stream, mapper)
}

/// Free-function form of [`Stream::concat`].
pub fn concat<T>(first: Stream<T>, second: Stream<T>) -> Stream<T> {
    Stream::concat(first, second)
}
