use core::iter::FusedIterator;
use core::mem::MaybeUninit;

/// a fixed-capacity FIFO buffer that never refuses a write.
///
/// once `N` elements are live, every [`enqueue`](Self::enqueue) evicts the
/// oldest element to make room for the new one. empty reads return `None`.
pub struct CircularBuffer<T, const N: usize> {
    inner: [MaybeUninit<T>; N],
    /// the slot the next enqueued element is written to
    writer: usize,
    /// the slot holding the oldest live element
    reader: usize,
    in_use: usize,
}

impl<T, const N: usize> CircularBuffer<T, N> {
    const NONZERO_CAPACITY: () = assert!(N >= 1, "CircularBuffer capacity must be at least 1");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;

        Self {
            // Safety: an array of `MaybeUninit`s is valid uninitialized. no
            // slot is read until the writer has passed over it, and `in_use`
            // starts at 0 so every slot begins outside the live region.
            inner: unsafe { MaybeUninit::uninit().assume_init() },
            writer: 0,
            reader: 0,
            in_use: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.in_use
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn free_space(&self) -> usize {
        N - self.in_use
    }

    pub fn is_empty(&self) -> bool {
        self.in_use == 0
    }

    pub fn is_full(&self) -> bool {
        self.in_use == N
    }

    /// write `data` behind the newest element.
    ///
    /// if the buffer is already full the oldest element is evicted first and
    /// handed back; callers that only want bounded history can ignore it.
    pub fn enqueue(&mut self, data: T) -> Option<T> {
        let evicted = if self.in_use == N {
            // a full buffer has its reader and writer on the same slot
            debug_assert_eq!(self.reader, self.writer);
            let t = core::mem::replace(&mut self.inner[self.reader], MaybeUninit::uninit());
            self.reader = Self::advance(self.reader);
            tracing::trace!(capacity = N, "buffer full, evicting oldest element");
            // Safety : the buffer is full so every slot, including the one
            // under the reader, holds a live value
            Some(unsafe { t.assume_init() })
        } else {
            self.in_use += 1;
            None
        };

        self.inner[self.writer].write(data);
        self.writer = Self::advance(self.writer);

        evicted
    }

    /// remove and return the oldest element
    pub fn dequeue(&mut self) -> Option<T> {
        if self.in_use == 0 {
            return None;
        }
        let t = core::mem::replace(&mut self.inner[self.reader], MaybeUninit::uninit());
        // Safety : if the buffer isn't empty, the reader is on the oldest
        // value the writer has already written
        let t = unsafe { t.assume_init() };
        self.in_use -= 1;
        self.reader = Self::advance(self.reader);
        Some(t)
    }

    /// borrow the oldest element
    pub fn peek_front(&self) -> Option<&T> {
        if self.in_use == 0 {
            return None;
        }
        // Safety : if the buffer isn't empty, the reader is on the oldest
        // value the writer has already written
        Some(unsafe { self.inner[self.reader].assume_init_ref() })
    }

    /// borrow the most recently enqueued element
    pub fn peek_back(&self) -> Option<&T> {
        if self.in_use == 0 {
            return None;
        }
        let newest = if self.writer == 0 { N - 1 } else { self.writer - 1 };
        // Safety : the slot just behind the writer is the last one written, and
        // it is still live because the buffer isn't empty
        Some(unsafe { self.inner[newest].assume_init_ref() })
    }

    /// drop every live element and reset the cursors
    pub fn clear(&mut self) {
        tracing::trace!(len = self.in_use, capacity = N, "clearing buffer");
        while self.dequeue().is_some() {}
        self.reader = 0;
        self.writer = 0;
    }

    /// iterate over the live elements, oldest first
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            rb: self,
            front: 0,
            back: self.in_use,
        }
    }

    fn advance(cursor: usize) -> usize {
        if cursor + 1 >= N {
            0
        } else {
            cursor + 1
        }
    }

    /// borrow the live element `offset` places after the oldest one
    fn get(&self, offset: usize) -> &T {
        debug_assert!(offset < self.in_use);
        let idx = (self.reader + offset) % N;
        // Safety : `offset` is within the live region, which only contains
        // written values
        unsafe { self.inner[idx].assume_init_ref() }
    }
}

impl<T, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for CircularBuffer<T, N> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for CircularBuffer<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Extend<T> for CircularBuffer<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.enqueue(data);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a CircularBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// an iterator over the live elements of a [`CircularBuffer`], oldest first
pub struct Iter<'a, T, const N: usize> {
    rb: &'a CircularBuffer<T, N>,
    /// offsets from the reader, `front..back` are still to be yielded
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let t = self.rb.get(self.front);
        self.front += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.rb.get(self.back))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::test_utils::trace_init;

    #[derive(Clone, Debug, PartialEq)]
    struct MyTestStruct {
        i: i32,
        name: &'static str,
    }

    #[test]
    fn capacity_returns_const_size() {
        const N: usize = 8;
        let rb = CircularBuffer::<u32, N>::new();
        assert_eq!(rb.capacity(), N);
        assert_eq!(rb.free_space(), N);
    }

    #[test]
    fn peek_on_empty_buffer_returns_none() {
        let rb = CircularBuffer::<u32, 4>::new();
        assert_eq!(rb.peek_front(), None);
        assert_eq!(rb.peek_back(), None);
    }

    #[test]
    fn dequeue_on_empty_buffer_returns_none() {
        let mut rb = CircularBuffer::<u32, 4>::new();
        assert_eq!(rb.dequeue(), None);
    }

    #[test]
    fn new_buffer_is_empty() {
        let rb = CircularBuffer::<u32, 4>::default();
        assert!(rb.is_empty());
        assert!(!rb.is_full());
        assert_eq!(rb.len(), 0);
    }

    #[test]
    fn enqueue_increases_len() {
        let mut rb = CircularBuffer::<u32, 4>::new();
        assert_eq!(rb.enqueue(1), None);
        assert_eq!(rb.len(), 1);
        assert_eq!(rb.enqueue(2), None);
        assert_eq!(rb.len(), 2);
        assert_eq!(rb.enqueue(3), None);
        assert_eq!(rb.len(), 3);
        assert_eq!(rb.free_space(), 1);
    }

    #[test]
    fn dequeue_decreases_len() {
        let mut rb = CircularBuffer::<u32, 4>::new();
        rb.extend([1, 2, 3]);
        assert_eq!(rb.dequeue(), Some(1));
        assert_eq!(rb.len(), 2);
        assert_eq!(rb.dequeue(), Some(2));
        assert_eq!(rb.len(), 1);
        assert_eq!(rb.dequeue(), Some(3));
        assert_eq!(rb.len(), 0);
    }

    #[test]
    fn enqueue_then_dequeue_leaves_buffer_empty() {
        let mut rb = CircularBuffer::<u32, 4>::new();
        rb.enqueue(11);
        assert_eq!(rb.dequeue(), Some(11));
        assert!(rb.is_empty());
        assert_eq!(rb.dequeue(), None);
    }

    #[test]
    fn peek_doesnt_remove_entries_and_keeps_len_same() {
        let mut rb = CircularBuffer::<u32, 8>::new();
        rb.enqueue(73);
        rb.enqueue(42);
        assert_eq!(rb.peek_front(), Some(&73));
        assert_eq!(rb.peek_back(), Some(&42));
        assert_eq!(rb.len(), 2);
        assert_eq!(rb.peek_front(), Some(&73));
        assert_eq!(rb.peek_back(), Some(&42));
        assert_eq!(rb.len(), 2);
    }

    #[test]
    fn enqueue_when_full_evicts_oldest() {
        let _trace = trace_init();
        let mut rb = CircularBuffer::<u32, 4>::new();
        for i in 1..=4 {
            assert_eq!(rb.enqueue(i), None);
        }
        assert!(rb.is_full());
        assert_eq!(rb.enqueue(5), Some(1));
        assert_eq!(rb.len(), 4);
        assert_eq!(rb.peek_front(), Some(&2));
        assert_eq!(rb.peek_back(), Some(&5));
    }

    #[test]
    fn peek_back_wraps_around() {
        let mut rb = CircularBuffer::<u32, 4>::new();
        rb.extend(1..=8);
        // the writer has wrapped back to slot 0, so the newest is in slot 3
        assert_eq!(rb.writer, 0);
        assert_eq!(rb.peek_back(), Some(&8));
        assert_eq!(rb.peek_front(), Some(&5));
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn capacity_of_one_keeps_only_newest() {
        let mut rb = CircularBuffer::<u32, 1>::new();
        assert_eq!(rb.enqueue(1), None);
        assert_eq!(rb.enqueue(2), Some(1));
        assert_eq!(rb.peek_front(), Some(&2));
        assert_eq!(rb.peek_back(), Some(&2));
        assert_eq!(rb.dequeue(), Some(2));
        assert_eq!(rb.dequeue(), None);
    }

    #[test]
    fn clear_resets_buffer() {
        let _trace = trace_init();
        let mut rb = CircularBuffer::<u32, 4>::new();
        rb.extend(1..=6);
        rb.clear();
        assert!(rb.is_empty());
        assert_eq!(rb.peek_front(), None);
        assert_eq!(rb.peek_back(), None);
        assert_eq!((rb.reader, rb.writer), (0, 0));

        rb.enqueue(9);
        assert_eq!(rb.peek_front(), Some(&9));
        assert_eq!(rb.peek_back(), Some(&9));
    }

    #[test]
    fn iter_yields_oldest_to_newest() {
        let mut rb = CircularBuffer::<u32, 4>::new();
        rb.extend([1, 2, 3]);
        rb.dequeue();
        rb.extend([4, 5]);
        let values: Vec<_> = rb.iter().copied().collect();
        assert_eq!(values, vec![2, 3, 4, 5]);
        let reversed: Vec<_> = (&rb).into_iter().rev().copied().collect();
        assert_eq!(reversed, vec![5, 4, 3, 2]);
        assert_eq!(format!("{rb:?}"), "[2, 3, 4, 5]");
    }

    #[test]
    fn values_are_dropped_exactly_once() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut rb = CircularBuffer::<_, 3>::new();
        for _ in 0..5 {
            rb.enqueue(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 4);

        rb.dequeue();
        assert_eq!(Rc::strong_count(&tracker), 3);

        rb.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);

        rb.enqueue(Rc::clone(&tracker));
        rb.enqueue(Rc::clone(&tracker));
        drop(rb);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn smoke_test() {
        let mut rb = CircularBuffer::<MyTestStruct, 3>::new();
        let ms1 = MyTestStruct {
            i: 1,
            name: "peter",
        };
        let ms2 = MyTestStruct {
            i: 2,
            name: "paul",
        };
        let ms3 = MyTestStruct {
            i: 3,
            name: "mary",
        };
        let ms4 = MyTestStruct { i: 4, name: "john" };
        rb.enqueue(ms1.clone());
        rb.enqueue(ms2.clone());
        rb.enqueue(ms3.clone());
        assert_eq!(rb.enqueue(ms4.clone()), Some(ms1.clone()));

        assert_eq!(rb.peek_front().expect("failed to peek"), &ms2);
        assert_eq!(rb.dequeue().expect("failed to dequeue"), ms2);

        assert_eq!(rb.enqueue(ms1.clone()), None);

        assert_eq!(rb.dequeue().expect("failed to dequeue"), ms3);
        assert_eq!(rb.dequeue().expect("failed to dequeue"), ms4);
        assert_eq!(rb.dequeue().expect("failed to dequeue"), ms1);
        assert_eq!(rb.dequeue(), None);
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use std::collections::VecDeque;

    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest_derive::Arbitrary;

    use super::*;

    const CAPACITY: usize = 5;

    #[derive(Arbitrary, Clone, Debug)]
    enum Operation {
        #[proptest(weight = 3)]
        Enqueue(u8),
        Dequeue,
        Peek,
        Iterate,
        #[proptest(skip)]
        Clear,
    }

    proptest! {
        #[test]
        fn matches_evicting_vec_deque(
            ops in vec(any::<Operation>(), 0..256),
            clear_at in proptest::option::of(0..256usize)
        ) {
            let mut reference = VecDeque::with_capacity(CAPACITY);
            let mut rb = CircularBuffer::<u8, CAPACITY>::new();

            for (i, op) in ops.iter().enumerate() {
                let op = if clear_at == Some(i) { &Operation::Clear } else { op };
                match op {
                    Operation::Enqueue(v) => {
                        let expected = if reference.len() == CAPACITY {
                            reference.pop_front()
                        } else {
                            None
                        };
                        reference.push_back(*v);
                        prop_assert_eq!(rb.enqueue(*v), expected);
                    }
                    Operation::Dequeue => {
                        prop_assert_eq!(rb.dequeue(), reference.pop_front());
                    }
                    Operation::Peek => {
                        prop_assert_eq!(rb.peek_front(), reference.front());
                        prop_assert_eq!(rb.peek_back(), reference.back());
                    }
                    Operation::Iterate => {
                        prop_assert!(rb.iter().eq(reference.iter()));
                    }
                    Operation::Clear => {
                        rb.clear();
                        reference.clear();
                    }
                }
                prop_assert_eq!(rb.len(), reference.len());
                prop_assert!(rb.len() <= CAPACITY);
                prop_assert_eq!(rb.is_empty(), reference.is_empty());
                prop_assert_eq!(rb.is_full(), reference.len() == CAPACITY);
            }
        }
    }
}
