//! Sliding-window storage
//!
//! # Example
//!
//! ```
//! use kurtstream::window::RingBuffer;
//!
//! let mut window = RingBuffer::new(50).unwrap();
//!
//! for tick in 0..120 {
//!     window.insert(tick as f64);
//! }
//!
//! assert!(window.is_full());
//! assert_eq!(window.oldest(), Some(&70.0));
//! ```

mod ring;

pub use ring::RingBuffer;
