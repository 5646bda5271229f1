use std::{
    iter::{Copied, FusedIterator, Zip},
    slice,
};

use crate::Id;

/// Iterator over `(Id, &T)` pairs in storage order.
///
/// Created by [`IdVec::iter_with_ids`](crate::IdVec::iter_with_ids).
#[derive(Debug)]
pub struct IterWithIds<'a, T> {
    inner: Zip<Copied<slice::Iter<'a, Id>>, slice::Iter<'a, T>>,
}

impl<T> Clone for IterWithIds<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> IterWithIds<'a, T> {
    pub(crate) fn new(ids: &'a [Id], data: &'a [T]) -> Self {
        debug_assert_eq!(ids.len(), data.len());
        Self {
            inner: ids.iter().copied().zip(data.iter()),
        }
    }
}

impl<'a, T> Iterator for IterWithIds<'a, T> {
    type Item = (Id, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterWithIds<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterWithIds<'_, T> {}
impl<T> FusedIterator for IterWithIds<'_, T> {}

/// Iterator over `(Id, &mut T)` pairs in storage order.
///
/// Created by [`IdVec::iter_with_ids_mut`](crate::IdVec::iter_with_ids_mut).
#[derive(Debug)]
pub struct IterWithIdsMut<'a, T> {
    inner: Zip<Copied<slice::Iter<'a, Id>>, slice::IterMut<'a, T>>,
}

impl<'a, T> IterWithIdsMut<'a, T> {
    pub(crate) fn new(ids: &'a [Id], data: &'a mut [T]) -> Self {
        debug_assert_eq!(ids.len(), data.len());
        Self {
            inner: ids.iter().copied().zip(data.iter_mut()),
        }
    }
}

impl<'a, T> Iterator for IterWithIdsMut<'a, T> {
    type Item = (Id, &'a mut T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterWithIdsMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterWithIdsMut<'_, T> {}
impl<T> FusedIterator for IterWithIdsMut<'_, T> {}
