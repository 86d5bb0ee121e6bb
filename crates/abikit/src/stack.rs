//! Lockable LIFO token stack

use parking_lot::Mutex;

use crate::AbiError;

/// Last-in-first-out stack of tokens.
///
/// All operations take `&self`; an internal lock makes a single stack
/// safe to share between threads.
#[derive(Debug)]
pub struct TokenStack<T> {
    items: Mutex<Vec<T>>,
}

impl<T> TokenStack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Build a stack whose successive pops yield `items` in their original order
    pub fn from_ordered(items: Vec<T>) -> Self {
        let stack = Self::new();
        for item in items.into_iter().rev() {
            stack.push(item);
        }
        stack
    }

    /// Push onto the top
    pub fn push(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Pop from the top; an empty stack is an error
    pub fn pop(&self) -> Result<T, AbiError> {
        self.items.lock().pop().ok_or(AbiError::StackUnderflow)
    }

    /// Number of tokens left
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T> Default for TokenStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_push_pop_lifo() {
        let stack = TokenStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_is_error() {
        let stack: TokenStack<String> = TokenStack::new();
        assert!(matches!(stack.pop(), Err(AbiError::StackUnderflow)));
        // Still an error on repeat, never a default value
        assert!(matches!(stack.pop(), Err(AbiError::StackUnderflow)));
    }

    #[test]
    fn test_from_ordered_pops_in_order() {
        let stack = TokenStack::from_ordered(vec!["a", "b", "c"]);
        assert_eq!(stack.pop().unwrap(), "a");
        assert_eq!(stack.pop().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "c");
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_shared_between_threads() {
        let stack = Arc::new(TokenStack::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let stack = Arc::clone(&stack);
                thread::spawn(move || {
                    for i in 0..100 {
                        stack.push(t * 100 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stack.len(), 400);

        let mut popped = Vec::new();
        while let Ok(v) = stack.pop() {
            popped.push(v);
        }
        popped.sort_unstable();
        assert_eq!(popped, (0..400).collect::<Vec<_>>());
    }
}
