use std::{
    iter,
    ops::{Index, IndexMut},
    slice, vec,
};

use log::{debug, trace};

use crate::{Error, Id, InvalidCause, IterWithIds, IterWithIdsMut, Result, VACANT};

/// Densely packed vector addressed through stable identifiers.
///
/// Elements live contiguously in insertion order until a removal moves the
/// last element into the freed slot. Identifiers survive those moves,
/// positions do not.
///
/// Two access tiers are offered:
/// - checked: [`get`](Self::get), [`get_mut`](Self::get_mut),
///   [`valid`](Self::valid) and [`try_remove`](Self::try_remove) verify
///   liveness in O(1) and report why an id was rejected.
/// - trusted: [`remove`](Self::remove), [`position_of`](Self::position_of),
///   [`id_at`](Self::id_at), [`element_at`](Self::element_at) and indexing
///   skip the liveness check. Callers guard them with `valid` first.
#[derive(Debug, Clone)]
pub struct IdVec<T> {
    data: Vec<T>,
    id_to_pos: Vec<usize>,
    pos_to_id: Vec<Id>,
    free: Vec<Id>,
}

impl<T> Default for IdVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdVec<T> {
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            id_to_pos: Vec::new(),
            pos_to_id: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            id_to_pos: Vec::with_capacity(capacity),
            pos_to_id: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Reserves room for at least `capacity` elements in total.
    ///
    /// Unlike `Vec::reserve` the argument is a total, not an increment, so
    /// calls below the current length are no-ops. Identifiers waiting in the
    /// free pool are reused before new ones are allocated, so the identifier
    /// map only grows by what they can't cover.
    pub fn reserve(&mut self, capacity: usize) {
        let additional = capacity.saturating_sub(self.data.len());
        self.data.reserve(additional);
        self.pos_to_id.reserve(additional);
        self.id_to_pos
            .reserve(additional.saturating_sub(self.free.len()));
    }

    /// Stores `value` and returns the identifier it can be reached through.
    pub fn insert(&mut self, value: T) -> Id {
        self.insert_with(|_| value)
    }

    /// Builds the value in place from the identifier it will be stored under.
    ///
    /// Nothing is modified if `f` panics.
    pub fn insert_with<F>(&mut self, f: F) -> Id
    where
        F: FnOnce(Id) -> T,
    {
        let id = self.next_id();
        let value = f(id);

        let pos = self.data.len();
        self.data.push(value);
        self.bind_next_id(pos);
        self.pos_to_id.push(id);

        id
    }

    /// Identifier the next insertion will receive.
    #[inline]
    fn next_id(&self) -> Id {
        self.free
            .last()
            .copied()
            .unwrap_or_else(|| Id::from_index(self.id_to_pos.len()))
    }

    /// Binds `pos` to the id returned by `next_id`, popping the free pool
    /// first (LIFO) and growing the map otherwise.
    #[inline]
    fn bind_next_id(&mut self, pos: usize) {
        match self.free.pop() {
            Some(id) => self.id_to_pos[raw_index(id)] = pos,
            None => self.id_to_pos.push(pos),
        }
    }

    /// Removes the element behind `id` and returns it.
    ///
    /// The last element is moved into the vacated position, its identifier
    /// keeps pointing at it. `id` goes to the top of the free pool. Once the
    /// store is empty every bookkeeping structure is reset, so ids are
    /// allocated from zero again.
    ///
    /// No liveness check is done in release builds: `id` must be live.
    ///
    /// # Panics
    /// If `id` was never issued, or is free and its slot lies past the end of
    /// storage. A free `id` is caught by a debug assertion.
    pub fn remove(&mut self, id: Id) -> T {
        debug_assert!(self.valid(id), "tried to remove id {id} which is not live");

        let index = raw_index(id);
        let removed_pos = self.id_to_pos[index];

        let value = self.data.swap_remove(removed_pos);
        self.pos_to_id.swap_remove(removed_pos);

        if let Some(&moved_id) = self.pos_to_id.get(removed_pos) {
            trace!(
                "relocated id {moved_id} from {} to {removed_pos}",
                self.data.len()
            );
            self.id_to_pos[raw_index(moved_id)] = removed_pos;
        }

        self.id_to_pos[index] = VACANT;
        self.free.push(id);

        if self.data.is_empty() {
            debug!(
                "storage drained, resetting {} ids and {} free slots",
                self.id_to_pos.len(),
                self.free.len()
            );
            self.reset();
        }

        value
    }

    /// Checked counterpart of [`remove`](Self::remove).
    pub fn try_remove(&mut self, id: Id) -> Result<T> {
        self.check(id)?;
        Ok(self.remove(id))
    }

    /// Resolves `id` to its storage position, or explains why it can't.
    #[inline]
    fn check(&self, id: Id) -> Result<usize> {
        let Some(&pos) = id.as_usize().and_then(|index| self.id_to_pos.get(index)) else {
            return Err(Error::InvalidId {
                id,
                cause: InvalidCause::OutOfBounds,
            });
        };

        if pos == VACANT {
            return Err(Error::InvalidId {
                id,
                cause: InvalidCause::Removed,
            });
        }

        Ok(pos)
    }

    pub fn get(&self, id: Id) -> Result<&T> {
        let pos = self.check(id)?;
        Ok(&self.data[pos])
    }

    pub fn get_mut(&mut self, id: Id) -> Result<&mut T> {
        let pos = self.check(id)?;
        Ok(&mut self.data[pos])
    }

    /// Returns `true` if `id` currently refers to an element.
    ///
    /// Agrees with [`get`](Self::get) for every input, negative ones included.
    #[inline]
    pub fn valid(&self, id: Id) -> bool {
        self.check(id).is_ok()
    }

    /// Storage position of a live `id`, unchecked.
    #[inline]
    pub fn position_of(&self, id: Id) -> usize {
        debug_assert!(self.valid(id), "position_of on id {id} which is not live");
        self.id_to_pos[raw_index(id)]
    }

    /// Identifier owning storage position `pos`.
    #[inline]
    pub fn id_at(&self, pos: usize) -> Id {
        self.pos_to_id[pos]
    }

    #[inline]
    pub fn element_at(&self, pos: usize) -> &T {
        &self.data[pos]
    }

    #[inline]
    pub fn element_at_mut(&mut self, pos: usize) -> &mut T {
        &mut self.data[pos]
    }

    /// Drops every element and forgets every identifier.
    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.data.len());
        self.reset();
    }

    fn reset(&mut self) {
        self.data.clear();
        self.id_to_pos.clear();
        self.pos_to_id.clear();
        self.free.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Number of released identifiers waiting to be reissued.
    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// One past the highest identifier issued since the last reset.
    #[inline]
    pub fn id_bound(&self) -> usize {
        self.id_to_pos.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Live identifiers, in storage order.
    #[inline]
    pub fn ids(&self) -> &[Id] {
        &self.pos_to_id
    }

    #[inline]
    pub fn iter_ids(&self) -> iter::Copied<slice::Iter<'_, Id>> {
        self.pos_to_id.iter().copied()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn iter_with_ids(&self) -> IterWithIds<'_, T> {
        IterWithIds::new(&self.pos_to_id, &self.data)
    }

    pub fn iter_with_ids_mut(&mut self) -> IterWithIdsMut<'_, T> {
        IterWithIdsMut::new(&self.pos_to_id, &mut self.data)
    }

    /// Panics if the index maps disagree with storage.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        assert_eq!(self.data.len(), self.pos_to_id.len());

        for (pos, &id) in self.pos_to_id.iter().enumerate() {
            let index = id
                .as_usize()
                .unwrap_or_else(|| panic!("negative id {id} at position {pos}"));
            assert_eq!(self.id_to_pos[index], pos, "id {id} not mapped back to {pos}");
        }

        for &id in &self.free {
            assert_eq!(self.id_to_pos[raw_index(id)], VACANT, "free id {id} still mapped");
        }

        let vacant = self.id_to_pos.iter().filter(|&&pos| pos == VACANT).count();
        assert_eq!(vacant, self.free.len(), "free pool out of sync with id map");
        assert_eq!(self.id_to_pos.len(), self.data.len() + self.free.len());

        if self.data.is_empty() {
            assert!(self.id_to_pos.is_empty() && self.free.is_empty());
        }
    }
}

/// Map index of an id the caller vouches for.
///
/// Negative ids wrap to huge values and fail the slice bounds check.
#[inline(always)]
fn raw_index(id: Id) -> usize {
    id.get() as usize
}

impl<T> Index<Id> for IdVec<T> {
    type Output = T;

    /// Trusted lookup, see [`IdVec::position_of`].
    #[inline]
    fn index(&self, id: Id) -> &Self::Output {
        &self.data[self.position_of(id)]
    }
}

impl<T> IndexMut<Id> for IdVec<T> {
    #[inline]
    fn index_mut(&mut self, id: Id) -> &mut Self::Output {
        let pos = self.position_of(id);
        &mut self.data[pos]
    }
}

impl<T> FromIterator<T> for IdVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for IdVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len() + iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for IdVec<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IdVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut IdVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
