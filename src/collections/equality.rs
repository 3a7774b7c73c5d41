/// a comparator used by value-based lookups, such as
/// [`LinkedList::index_of_by`](super::LinkedList::index_of_by)
///
/// any `Fn(&T, &T) -> bool` closure is an `Equals<T>`, so callers can supply
/// structural equality for types whose `PartialEq` is not what they want (or
/// that have no `PartialEq` at all)
pub trait Equals<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equals<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// the default comparator, deferring to `T`'s `PartialEq`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<T: PartialEq + ?Sized> Equals<T> for NaturalEq {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn natural_eq_uses_partial_eq() {
        assert!(NaturalEq.equals(&73, &73));
        assert!(!NaturalEq.equals(&73, &42));
        assert!(NaturalEq.equals("peter", "peter"));
    }

    #[test]
    fn closures_are_comparators() {
        let same_x = |a: &Point, b: &Point| a.x == b.x;
        let a = Point { x: 1, y: 2 };
        let b = Point { x: 1, y: 3 };
        let c = Point { x: 2, y: 2 };
        assert!(same_x.equals(&a, &b));
        assert!(!same_x.equals(&a, &c));
        assert_eq!(a.y, c.y);
    }
}
