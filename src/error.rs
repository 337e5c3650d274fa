use core::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The logical size of the heap is larger than the slice that holds it.
    InvalidSize { size: usize, len: usize },

    /// The element at `child` is greater than the element at `parent`.
    /// Both are 1-based heap positions.
    HeapOrderViolated { parent: usize, child: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidSize { size, len } => write!(
                f,
                "heap size {} exceeds the length of the backing slice ({})",
                size, len
            ),
            Error::HeapOrderViolated { parent, child } => write!(
                f,
                "heap order violated: position {} is greater than its parent at position {}",
                child, parent
            ),
        }
    }
}

impl std::error::Error for Error {}
