use core::fmt;

/// Fixed-capacity text buffer.
///
/// `N` is the capacity in bytes *including* a terminator, so the content holds
/// at most `N - 1` bytes. Longer sources are truncated silently on a UTF-8
/// character boundary. On the wire the content is followed by zero padding up
/// to `N` bytes, which guarantees at least one terminating zero.
#[derive(Clone, Default)]
pub struct BoundedText<const N: usize> {
    text: heapless::String<N>,
}

impl<const N: usize> BoundedText<N> {
    /// Creates an empty text buffer.
    pub const fn new() -> Self {
        Self {
            text: heapless::String::new(),
        }
    }

    /// Maximum content length in bytes (`N - 1`).
    #[inline]
    pub const fn capacity() -> usize {
        N.saturating_sub(1)
    }

    /// Replaces the content with `s`, truncating to [`Self::capacity`].
    ///
    /// Content ends at the first `'\0'` in `s`, as it does on the wire.
    /// Returns true if `s` was kept whole.
    pub fn set(&mut self, s: &str) -> bool {
        let terminated = s.find('\0').map_or(s, |end| &s[..end]);
        let cut = truncation_point(terminated, Self::capacity());
        self.text.clear();
        self.text.push_str(&terminated[..cut]).ok();
        cut == s.len()
    }

    /// Clears the content.
    #[inline]
    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Largest byte index `<= max` that falls on a character boundary of `s`.
fn truncation_point(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}

impl<const N: usize> From<&str> for BoundedText<N> {
    fn from(s: &str) -> Self {
        let mut text = Self::new();
        text.set(s);
        text
    }
}

impl<const N: usize> PartialEq for BoundedText<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for BoundedText<N> {}

impl<const N: usize> PartialEq<&str> for BoundedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> PartialEq<str> for BoundedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialOrd for BoundedText<N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for BoundedText<N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<const N: usize> core::hash::Hash for BoundedText<N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const N: usize> fmt::Debug for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
