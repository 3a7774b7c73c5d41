pub mod circular_buffer;
pub mod equality;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use circular_buffer::CircularBuffer;
pub use equality::{Equals, NaturalEq};
pub use linked_list::{LinkedList, ListError, ListResult};
pub use queue::Queue;
pub use stack::Stack;
