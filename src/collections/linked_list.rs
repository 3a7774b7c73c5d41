use core::iter::FusedIterator;
use core::marker::PhantomData;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "no-std", not(test)))] {
        use alloc::vec::Vec;
    } else {
        use std::vec::Vec;
    }
}

use super::equality::{Equals, NaturalEq};

pub type ListResult<T> = Result<T, ListError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("index {index} out of bounds for list of length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("list is empty")]
    Empty,
    #[error("value does not exist in list")]
    ValueNotFound,
}

/// an unbounded doubly-linked list.
///
/// nodes are stored in an arena owned by the list and refer to their
/// neighbours by slot index, so the backward links never own anything. slots
/// freed by removals are reused by later insertions.
///
/// the arena never shrinks on removal: it keeps as many slots as the list's
/// peak length until [`clear`](Self::clear) releases them all.
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    /// the most recently vacated slot, if any
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    /// the number of occupied slots
    len: usize,
}

/// a node in the list
struct LinkedListNode<T> {
    prev: Option<usize>,
    data: T,
    next: Option<usize>,
}

/// a slot in the arena, either holding a node or threaded onto the free list
enum Slot<T> {
    Occupied(LinkedListNode<T>),
    Vacant { next_free: Option<usize> },
}

impl<T> LinkedList<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// get the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// returns true if the length of the list is 0
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// push a value to the front of this list, making it the new head
    pub fn push_front(&mut self, data: T) {
        let old_head = self.head;
        let idx = self.alloc(LinkedListNode {
            prev: None,
            data,
            next: old_head,
        });

        match old_head {
            Some(head) => self.node_mut(head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// push a value to the back of this list, making it the new tail
    pub fn push_back(&mut self, data: T) {
        let old_tail = self.tail;
        let idx = self.alloc(LinkedListNode {
            prev: old_tail,
            data,
            next: None,
        });

        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// insert `data` so that it becomes the element at `index`.
    ///
    /// inserting at `0` or at `len()` is the same as [`push_front`] or
    /// [`push_back`]; anything past `len()` is out of bounds and leaves the
    /// list untouched.
    ///
    /// [`push_front`]: Self::push_front
    /// [`push_back`]: Self::push_back
    pub fn insert(&mut self, index: usize, data: T) -> ListResult<()> {
        if index > self.len {
            return Err(ListError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(data);
            return Ok(());
        }
        if index == self.len {
            self.push_back(data);
            return Ok(());
        }

        // Before: (prev) <-> (next)
        // After: (prev) <-> (new) <-> (next)
        let prev = self.node_index_at(index - 1);
        let Some(next) = self.node(prev).next else {
            unreachable!("only the tail has no next node, and we are not inserting at the tail");
        };
        let idx = self.alloc(LinkedListNode {
            prev: Some(prev),
            data,
            next: Some(next),
        });
        self.node_mut(prev).next = Some(idx);
        self.node_mut(next).prev = Some(idx);
        self.len += 1;

        tracing::trace!(index, slot = idx, len = self.len, "spliced node into list");
        Ok(())
    }

    /// borrow the value at the head of the list
    pub fn front(&self) -> ListResult<&T> {
        let head = self.head.ok_or(ListError::Empty)?;
        Ok(&self.node(head).data)
    }

    /// mutably borrow the value at the head of the list
    pub fn front_mut(&mut self) -> ListResult<&mut T> {
        let head = self.head.ok_or(ListError::Empty)?;
        Ok(&mut self.node_mut(head).data)
    }

    /// borrow the value at the tail of the list
    pub fn back(&self) -> ListResult<&T> {
        let tail = self.tail.ok_or(ListError::Empty)?;
        Ok(&self.node(tail).data)
    }

    /// mutably borrow the value at the tail of the list
    pub fn back_mut(&mut self) -> ListResult<&mut T> {
        let tail = self.tail.ok_or(ListError::Empty)?;
        Ok(&mut self.node_mut(tail).data)
    }

    /// borrow the value at `index`, counting from the head
    pub fn get(&self, index: usize) -> ListResult<&T> {
        self.check_index(index)?;
        let idx = self.node_index_at(index);
        Ok(&self.node(idx).data)
    }

    /// mutably borrow the value at `index`, counting from the head
    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut T> {
        self.check_index(index)?;
        let idx = self.node_index_at(index);
        Ok(&mut self.node_mut(idx).data)
    }

    /// the index of the first element equal to `value`, scanning from the
    /// head, or `None` if there is no such element
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_by(value, NaturalEq)
    }

    /// like [`index_of`](Self::index_of), comparing with `eq` instead of
    /// `PartialEq`
    pub fn index_of_by<E: Equals<T>>(&self, value: &T, eq: E) -> Option<usize> {
        self.iter().position(|data| eq.equals(data, value))
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn contains_by<E: Equals<T>>(&self, value: &T, eq: E) -> bool {
        self.index_of_by(value, eq).is_some()
    }

    /// remove the head of the list, returning its value
    pub fn pop_front(&mut self) -> ListResult<T> {
        let head = self.head.ok_or(ListError::Empty)?;
        Ok(self.unlink(head))
    }

    /// remove the tail of the list, returning its value
    pub fn pop_back(&mut self) -> ListResult<T> {
        let tail = self.tail.ok_or(ListError::Empty)?;
        Ok(self.unlink(tail))
    }

    /// remove the first element equal to `value`, returning it
    pub fn remove(&mut self, value: &T) -> ListResult<T>
    where
        T: PartialEq,
    {
        self.remove_by(value, NaturalEq)
    }

    /// like [`remove`](Self::remove), comparing with `eq` instead of
    /// `PartialEq`
    pub fn remove_by<E: Equals<T>>(&mut self, value: &T, eq: E) -> ListResult<T> {
        let mut curr = self.head;
        while let Some(idx) = curr {
            let node = self.node(idx);
            let next = node.next;
            if eq.equals(&node.data, value) {
                return Ok(self.unlink(idx));
            }
            curr = next;
        }

        Err(ListError::ValueNotFound)
    }

    /// remove the element at `index`, returning its value
    pub fn remove_at(&mut self, index: usize) -> ListResult<T> {
        self.check_index(index)?;

        if index == 0 {
            return self.pop_front();
        }
        if index == self.len - 1 {
            return self.pop_back();
        }

        let idx = self.node_index_at(index);
        let data = self.unlink(idx);
        tracing::trace!(index, slot = idx, len = self.len, "unlinked node from list");
        Ok(data)
    }

    /// drop every element, leaving the list empty
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing list");
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// append every value yielded by `values` to the back of the list, in order
    pub fn push_back_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for data in values {
            self.push_back(data);
        }
        self
    }

    /// return an immutable iterator for this list, head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ll: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// return a mutable iterator for this list, head to tail
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            slots: self.slots.as_mut_ptr(),
            curr: self.head,
            remaining: self.len,
            _ll: PhantomData,
        }
    }

    fn check_index(&self, index: usize) -> ListResult<()> {
        if index >= self.len {
            Err(ListError::OutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// find the slot of the node at `index`, walking from whichever end is
    /// closer. `index` must be less than `len`.
    fn node_index_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        let (start, steps, forward) = if index <= self.len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, self.len - 1 - index, false)
        };

        let Some(mut curr) = start else {
            unreachable!("non-empty list must have a head and a tail");
        };
        for _ in 0..steps {
            let node = self.node(curr);
            let link = if forward { node.next } else { node.prev };
            match link {
                Some(idx) => curr = idx,
                None => unreachable!("walked off the end of the list"),
            }
        }
        curr
    }

    /// store `node` in a vacant slot, growing the arena if there is none
    fn alloc(&mut self, node: LinkedListNode<T>) -> usize {
        match self.free {
            Some(idx) => {
                let slot = core::mem::replace(&mut self.slots[idx], Slot::Occupied(node));
                match slot {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// remove the node in slot `idx` from the chain, relinking its neighbours
    /// and releasing the slot
    fn unlink(&mut self, idx: usize) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let node = match core::mem::replace(&mut self.slots[idx], vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("unlinking a vacant slot"),
        };
        self.free = Some(idx);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;

        node.data
    }

    fn node(&self, idx: usize) -> &LinkedListNode<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("links never point at vacant slots"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut LinkedListNode<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("links never point at vacant slots"),
        }
    }

    /// walk the list in both directions, panicking if any structural
    /// invariant does not hold
    #[cfg(test)]
    fn assert_invariants(&self) {
        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.len, 0, "empty list must have len 0"),
            (Some(head), Some(tail)) => {
                assert!(self.node(head).prev.is_none(), "head must not have a prev");
                assert!(self.node(tail).next.is_none(), "tail must not have a next");
                if self.len == 1 {
                    assert_eq!(head, tail, "single element list must have head == tail");
                }
            }
            (head, tail) => panic!("head ({head:?}) and tail ({tail:?}) disagree"),
        }

        let mut forward = 0;
        let mut prev = None;
        let mut curr = self.head;
        while let Some(idx) = curr {
            let node = self.node(idx);
            assert_eq!(node.prev, prev, "broken back link at slot {idx}");
            forward += 1;
            prev = Some(idx);
            curr = node.next;
        }
        assert_eq!(prev, self.tail, "walking forward must end at the tail");
        assert_eq!(forward, self.len);

        let mut backward = 0;
        let mut curr = self.tail;
        while let Some(idx) = curr {
            backward += 1;
            curr = self.node(idx).prev;
        }
        assert_eq!(backward, self.len);

        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        assert_eq!(occupied, self.len, "every occupied slot must be linked");
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ll = Self::new();
        ll.push_back_all(iter);
        ll
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ll: self }
    }
}

/// a borrowing iterator over a [`LinkedList`], created by
/// [`LinkedList::iter`]
pub struct Iter<'a, T> {
    ll: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    /// the number of nodes between `front` and `back`, inclusive
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let ll = self.ll;
        let node = ll.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let ll = self.ll;
        let node = ll.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// a mutable iterator over a [`LinkedList`], created by
/// [`LinkedList::iter_mut`]
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    curr: Option<usize>,
    remaining: usize,
    _ll: PhantomData<&'a mut LinkedList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.curr?;

        // Safety: `slots` came from the list's arena, which we hold a unique
        // borrow of for `'a`, and `idx` is a linked slot so it is in bounds.
        // every node is reachable exactly once by following `next`, so no two
        // references we hand out alias.
        let slot = unsafe { &mut *self.slots.add(idx) };
        match slot {
            Slot::Occupied(node) => {
                self.curr = node.next;
                self.remaining -= 1;
                Some(&mut node.data)
            }
            Slot::Vacant { .. } => unreachable!("links never point at vacant slots"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

// Safety: `IterMut` behaves like a `&mut [T]` into the arena, handing out
// disjoint `&mut T`s, so it may cross threads whenever such a borrow could.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// an owning iterator over a [`LinkedList`], popping from either end
pub struct IntoIter<T> {
    ll: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ll.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ll.len(), Some(self.ll.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ll.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}



// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use std::collections::VecDeque;

    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_derive::Arbitrary;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};
    use rand::Rng;

    use super::*;

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            failure_persistence: None,
            .. Config::default()
        })]

        #[test]
        fn linked_list_state_machine_test(
            sequential
            1..200
            =>
            LinkedList<u32>
        );
    }

    /// The possible transitions of the state machine.
    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        PushBack(u32),
        PopBack,
        Insert(usize, u32),
        RemoveAt(usize),
        /// remove a value that may or may not be present
        Remove(u32),
        Clear,
    }

    pub struct LinkedListStateMachine;

    impl ReferenceStateMachine for LinkedListStateMachine {
        type State = VecDeque<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(VecDeque::new()).boxed()
        }

        fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
            // indices may land one or two past the end so that the out of
            // bounds paths get exercised too. values are kept small so that
            // duplicates and successful removes are common.
            let len = state.len();
            prop_oneof![
                1 => Just(Transition::PopFront),
                2 => (0..16u32).prop_map(Transition::PushFront),
                1 => Just(Transition::PopBack),
                2 => (0..16u32).prop_map(Transition::PushBack),
                3 => (0..len + 2, 0..16u32).prop_map(|(i, v)| Transition::Insert(i, v)),
                1 => (0..len + 2).prop_map(Transition::RemoveAt),
                1 => (0..16u32).prop_map(Transition::Remove),
                1 => Just(Transition::Clear),
            ]
            .boxed()
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match transition {
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::PushFront(value) => state.push_front(*value),
                Transition::PopBack => {
                    state.pop_back();
                }
                Transition::PushBack(value) => state.push_back(*value),
                Transition::Insert(index, value) => {
                    if *index <= state.len() {
                        state.insert(*index, *value);
                    }
                }
                Transition::RemoveAt(index) => {
                    state.remove(*index);
                }
                Transition::Remove(value) => {
                    if let Some(index) = state.iter().position(|v| v == value) {
                        state.remove(index);
                    }
                }
                Transition::Clear => state.clear(),
            }
            state
        }
    }

    impl StateMachineTest for LinkedList<u32> {
        type SystemUnderTest = Self;
        type Reference = LinkedListStateMachine;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            Self::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            let before = state.len();
            match transition {
                Transition::PushFront(value) => state.push_front(value),
                Transition::PopFront => match state.pop_front() {
                    Ok(_) => assert_eq!(state.len(), before - 1),
                    Err(e) => assert_eq!(e, ListError::Empty),
                },
                Transition::PushBack(value) => state.push_back(value),
                Transition::PopBack => match state.pop_back() {
                    Ok(_) => assert_eq!(state.len(), before - 1),
                    Err(e) => assert_eq!(e, ListError::Empty),
                },
                Transition::Insert(index, value) => {
                    let res = state.insert(index, value);
                    if index <= before {
                        assert_eq!(res, Ok(()));
                        assert_eq!(state.get(index), Ok(&value));
                    } else {
                        assert_eq!(res, Err(ListError::OutOfBounds { index, len: before }));
                    }
                }
                Transition::RemoveAt(index) => {
                    let res = state.remove_at(index);
                    if index < before {
                        assert!(res.is_ok());
                    } else {
                        assert_eq!(res, Err(ListError::OutOfBounds { index, len: before }));
                    }
                }
                Transition::Remove(value) => match state.remove(&value) {
                    Ok(removed) => assert_eq!(removed, value),
                    Err(e) => assert_eq!(e, ListError::ValueNotFound),
                },
                Transition::Clear => state.clear(),
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            state.assert_invariants();
            assert_eq!(state.len(), ref_state.len());
            assert!(state.iter().eq(ref_state.iter()));
            assert!(state.iter().rev().eq(ref_state.iter().rev()));
            for (i, value) in ref_state.iter().enumerate() {
                assert_eq!(state.get(i), Ok(value));
                assert_eq!(state.index_of(value), ref_state.iter().position(|v| v == value));
            }
        }
    }

    #[derive(Arbitrary, Debug)]
    enum Operation {
        PushFront(u32),
        PushBack(u32),
        Remove,
        Find,
        Iterate,
    }

    fn get_random(reference: &VecDeque<u32>) -> Option<u32> {
        if reference.is_empty() {
            return None;
        }

        let index_to_get = rand::thread_rng().gen_range(0..reference.len());
        reference.get(index_to_get).copied()
    }

    proptest! {
        #[test]
        fn longform(ops in vec(any::<Operation>(), 512)) {
            let mut reference = VecDeque::new();
            let mut ll = LinkedList::new();

            for op in ops.iter() {
                match op {
                    Operation::PushFront(i) => {
                        reference.push_front(*i);
                        ll.push_front(*i);
                    }
                    Operation::PushBack(i) => {
                        reference.push_back(*i);
                        ll.push_back(*i);
                    }
                    Operation::Remove => {
                        if let Some(to_remove) = get_random(&reference) {
                            let index = reference.iter().position(|v| *v == to_remove).unwrap();
                            reference.remove(index);
                            prop_assert_eq!(ll.remove(&to_remove), Ok(to_remove));
                        }
                    }
                    Operation::Find => {
                        if let Some(to_find) = get_random(&reference) {
                            let index = reference.iter().position(|v| *v == to_find);
                            prop_assert_eq!(ll.index_of(&to_find), index);
                            prop_assert!(ll.contains(&to_find));
                        }
                    }
                    Operation::Iterate => {
                        let mut ref_iter = reference.iter();
                        let mut ll_iter = ll.iter();
                        loop {
                            match (ref_iter.next(), ll_iter.next()) {
                                (Some(ref_next), Some(ll_next)) => prop_assert_eq!(ref_next, ll_next),
                                (Some(ref_next), None) => panic!("Reference iter returned: {:?} but list iter returned None", ref_next),
                                (None, Some(ll_next)) => panic!("List iter returned: {:?} but reference iter returned None", ll_next),
                                (None, None) => break,
                            }
                        }
                    }
                }
            }
            ll.assert_invariants();
        }

        #[test]
        fn push_back_all_round_trips(values in vec(any::<i64>(), 0..64)) {
            let mut ll = LinkedList::new();
            ll.push_back_all(values.clone());
            prop_assert_eq!(ll.len(), values.len());
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(ll.get(i), Ok(value));
            }
            let round_tripped: Vec<i64> = ll.into_iter().collect();
            prop_assert_eq!(round_tripped, values);
        }
    }
}
