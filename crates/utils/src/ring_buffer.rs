use std::fmt;

/// Fixed capacity buffer that overwrites the oldest value once it is full.
///
/// Only the values pushed so far are visible, the unused slots of the backing
/// array are never returned.
pub struct RingBuffer<T, const N: usize> {
    inner: [T; N],
    idx: usize,
    filled: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Creates an empty buffer using `buff` as backing storage
    pub const fn new(buff: [T; N]) -> Self {
        Self {
            inner: buff,
            idx: 0,
            filled: 0,
        }
    }

    /// Pushes a value, overwriting the oldest one when the buffer is full
    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }

        self.inner[self.idx] = value;
        self.idx = (self.idx + 1) % N;
        self.filled = (self.filled + 1).min(N);
    }

    /// Iterates the stored values from the oldest to the newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let start = if self.filled < N { 0 } else { self.idx };
        (0..self.filled).map(move |i| &self.inner[(start + i) % N])
    }

    /// Last pushed value
    pub fn last(&self) -> Option<&T> {
        if self.filled == 0 {
            return None;
        }

        let idx = if self.idx == 0 { N - 1 } else { self.idx - 1 };
        self.inner.get(idx)
    }

    /// Number of values stored
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Forget every stored value
    pub fn clear(&mut self) {
        self.idx = 0;
        self.filled = 0;
    }
}

impl<const N: usize> RingBuffer<f32, N> {
    /// Mean of the stored values, `None` when empty
    pub fn average(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        Some(self.iter().sum::<f32>() / self.filled as f32)
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N>
where
    T: Default + Copy,
{
    fn default() -> Self {
        Self::new([Default::default(); N])
    }
}

impl<T: Clone, const N: usize> Clone for RingBuffer<T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            idx: self.idx,
            filled: self.filled,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
