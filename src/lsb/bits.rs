use std::fmt;

/// A single byte addressed bit by bit, least significant bit first.
///
/// Index `0` is the least significant bit and index `7` the most significant one,
/// which is the order in which message bits are laid into and read out of carrier bytes.
///
/// # Examples
///
/// ```
/// use lsbs::lsb::Bits;
///
/// let mut bits = Bits::new(b'A');
/// assert!(bits.get(0));
/// assert!(!bits.get(1));
///
/// bits.set(1, true);
/// assert_eq!(u8::from(bits), b'C');
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bits(u8);

impl Bits {
    /// Number of addressable bits.
    pub const LEN: usize = 8;

    /// Creates a new [`Bits`] holding the given byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsbs::lsb::Bits;
    ///
    /// let bits = Bits::new(0b0000_0100);
    /// assert!(bits.get(2));
    /// ```
    #[must_use]
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Bits::LEN`].
    #[must_use]
    pub fn get(self, index: usize) -> bool {
        assert!(index < Self::LEN, "bit index {index} out of range");
        (self.0 >> index) & 1 == 1
    }

    /// Sets the bit at `index` to `bit`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Bits::LEN`].
    pub fn set(&mut self, index: usize, bit: bool) {
        assert!(index < Self::LEN, "bit index {index} out of range");
        self.0 = (self.0 & !(1 << index)) | (u8::from(bit) << index);
    }
}

impl From<u8> for Bits {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Bits> for u8 {
    fn from(value: Bits) -> Self {
        value.0
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits({:#010b})", self.0)
    }
}

impl IntoIterator for Bits {
    type Item = bool;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            bits: self,
            offset: 0,
        }
    }
}

/// Iterator over the bits of a [`Bits`] value, least significant first.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: Bits,
    offset: usize,
}

impl Iterator for Iter {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == Bits::LEN {
            return None;
        }

        let next_offset = self.offset + 1;
        Some(self.bits.get(std::mem::replace(&mut self.offset, next_offset)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Bits::LEN - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}
