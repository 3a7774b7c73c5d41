use super::equality::Equals;
use super::linked_list::{Iter, LinkedList};

/// a LIFO stack backed by a [`LinkedList`], with the top of the stack at the
/// list's tail. popping or peeking an empty stack returns `None`.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
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

    pub fn push(&mut self, data: T) {
        self.list.push_back(data);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }

    /// the element [`pop`](Self::pop) would return
    pub fn peek(&self) -> Option<&T> {
        self.peek_back()
    }

    /// the bottom of the stack
    pub fn peek_front(&self) -> Option<&T> {
        self.list.front().ok()
    }

    /// the top of the stack
    pub fn peek_back(&self) -> Option<&T> {
        self.list.back().ok()
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

    /// iterate from the bottom of the stack to the top
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push(data);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Frame {
        id: u32,
        label: &'static str,
    }

    #[test]
    fn empty_stack_returns_none() {
        let mut stack = Stack::<u32>::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.peek_front(), None);
        assert_eq!(stack.peek_back(), None);
    }

    #[test]
    fn pop_is_last_in_first_out() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop(), Some(3));
        stack.push(4);
        assert_eq!(stack.pop(), Some(4));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_is_top_of_stack() {
        let mut stack = Stack::new();
        stack.push(73);
        stack.push(42);
        assert_eq!(stack.peek(), Some(&42));
        assert_eq!(stack.peek_back(), Some(&42));
        assert_eq!(stack.peek_front(), Some(&73));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn contains_by_custom_equality() {
        let mut stack = Stack::new();
        stack.push(Frame { id: 1, label: "main" });
        stack.push(Frame { id: 2, label: "parse" });

        let probe = Frame { id: 9, label: "parse" };
        assert!(!stack.contains(&probe));
        assert!(stack.contains_by(&probe, |a: &Frame, b: &Frame| a.label == b.label));

        stack.clear();
        assert!(stack.is_empty());
        assert!(!stack.contains_by(&probe, |a: &Frame, b: &Frame| a.label == b.label));
    }

    #[test]
    fn iter_yields_bottom_to_top() {
        let stack: Stack<_> = (1..=4).collect();
        let values: Vec<_> = stack.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!((&stack).into_iter().rev().next(), Some(&4));
        assert_eq!(format!("{stack:?}"), "Stack { list: [1, 2, 3, 4] }");
    }
}
