//! # Fixed-capacity ring buffer.
//!
//! [`RingBuffer`] keeps the most recent `capacity` elements. Pushing into a
//! full buffer overwrites (and returns) the oldest element.
//!
//! Every pushed element gets a monotonically increasing sequence number,
//! starting at 0, so callers can address "the element pushed as #n" for as
//! long as it is retained.
//!
//! ## Rules
//! - Logical index `0` is the oldest retained element, `len - 1` the newest.
//! - Out-of-range access returns [`RingError::OutOfRange`]; it never panics.
//!
//! ```text
//! capacity = 3, pushed a b c d
//!   storage: [d b c]   head ─► b
//!   get(0) = b, get(2) = d
//!   seq:     b=1 c=2 d=3  (a=0 overwritten)
//! ```

use std::collections::VecDeque;

use crate::error::RingError;

/// Circular buffer overwriting its oldest element when full.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
    pushed: u64,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// # Errors
    /// [`RingError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
            pushed: 0,
        })
    }

    /// Appends `item`, returning the evicted oldest element if the buffer was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.buf.len() == self.capacity {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(item);
        self.pushed += 1;
        evicted
    }

    /// Element at logical index `index` (0 = oldest).
    ///
    /// # Errors
    /// [`RingError::OutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, RingError> {
        self.buf.get(index).ok_or(RingError::OutOfRange {
            index: index as u64,
            len: self.buf.len(),
        })
    }

    /// Element that was pushed with sequence number `seq`.
    ///
    /// # Errors
    /// [`RingError::OutOfRange`] if it was overwritten or not pushed yet.
    pub fn get_by_seq(&self, seq: u64) -> Result<&T, RingError> {
        let out_of_range = RingError::OutOfRange {
            index: seq,
            len: self.buf.len(),
        };
        if seq < self.first_seq() || seq >= self.pushed {
            return Err(out_of_range);
        }
        let offset = usize::try_from(seq - self.first_seq()).map_err(|_| out_of_range)?;
        self.buf.get(offset).ok_or(out_of_range)
    }

    /// Sequence number of the oldest retained element.
    #[must_use]
    pub fn first_seq(&self) -> u64 {
        self.pushed - self.buf.len() as u64
    }

    /// Total number of elements ever pushed.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Oldest retained element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.buf.front()
    }

    /// Newest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Drops all elements. Sequence numbering continues where it left off.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(RingBuffer::<u8>::new(0).unwrap_err(), RingError::ZeroCapacity);
    }

    #[test]
    fn test_push_overwrites_oldest() {
        let mut r = RingBuffer::new(3).unwrap();
        assert_eq!(r.push('a'), None);
        assert_eq!(r.push('b'), None);
        assert_eq!(r.push('c'), None);
        assert!(r.is_full());
        assert_eq!(r.push('d'), Some('a'));

        assert_eq!(r.iter().copied().collect::<String>(), "bcd");
        assert_eq!(r.first(), Some(&'b'));
        assert_eq!(r.last(), Some(&'d'));
        assert_eq!(r.get(2), Ok(&'d'));
    }

    #[test]
    fn test_get_out_of_range() {
        let mut r = RingBuffer::new(4).unwrap();
        r.push(10);
        r.push(20);
        assert_eq!(r.get(2), Err(RingError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_sequence_addressing() {
        let mut r = RingBuffer::new(2).unwrap();
        for v in 0..5 {
            r.push(v * 10);
        }
        assert_eq!(r.pushed(), 5);
        assert_eq!(r.first_seq(), 3);
        assert_eq!(r.get_by_seq(3), Ok(&30));
        assert_eq!(r.get_by_seq(4), Ok(&40));
        assert!(r.get_by_seq(2).is_err());
        assert!(r.get_by_seq(5).is_err());

        r.clear();
        assert!(r.is_empty());
        assert_eq!(r.first_seq(), 5);
        r.push(50);
        assert_eq!(r.get_by_seq(5), Ok(&50));
    }
}
