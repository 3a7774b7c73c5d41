use super::equality::Equals;
use super::linked_list::{Iter, LinkedList};

/// a FIFO queue backed by a [`LinkedList`].
///
/// elements enter at the list's head and leave from its tail. unlike the
/// list, reading from an empty queue is not an error: it returns `None`.
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn enqueue(&mut self, data: T) {
        self.list.push_front(data);
    }

    /// remove and return the element that has been queued the longest
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }

    /// the next element [`dequeue`](Self::dequeue) would return
    pub fn peek_front(&self) -> Option<&T> {
        self.list.back().ok()
    }

    /// the most recently enqueued element
    pub fn peek_back(&self) -> Option<&T> {
        self.list.front().ok()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    pub fn contains_by<E: Equals<T>>(&self, value: &T, eq: E) -> bool {
        self.list.contains_by(value, eq)
    }

    /// iterate in the underlying list's order, most recently enqueued first
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.enqueue(data);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_queue_returns_none() {
        let mut queue = Queue::<u32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek_front(), None);
        assert_eq!(queue.peek_back(), None);
    }

    #[test]
    fn dequeue_is_first_in_first_out() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_front_is_oldest_and_peek_back_is_newest() {
        let mut queue = Queue::new();
        queue.enqueue(73);
        assert_eq!(queue.peek_front(), Some(&73));
        assert_eq!(queue.peek_back(), Some(&73));

        queue.enqueue(42);
        assert_eq!(queue.peek_front(), Some(&73));
        assert_eq!(queue.peek_back(), Some(&42));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn contains_and_clear() {
        let mut queue: Queue<_> = ["peter", "paul", "mary"].into_iter().collect();
        assert!(queue.contains(&"paul"));
        assert!(!queue.contains(&"john"));
        assert!(queue.contains_by(&"PAUL", |a: &&str, b: &&str| a.eq_ignore_ascii_case(b)));

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.contains(&"paul"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn iter_yields_newest_first() {
        let queue: Queue<_> = (1..=4).collect();
        let values: Vec<_> = queue.iter().copied().collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
        assert_eq!((&queue).into_iter().count(), 4);
        assert_eq!(format!("{queue:?}"), "Queue { list: [4, 3, 2, 1] }");
    }
}
