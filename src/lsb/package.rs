use crate::{lsb::Bits, Reveal};
use std::slice::ChunksExact;

/// Bytes that may hold a message in their least significant bits.
///
/// Revealing reads the least significant bit of every byte, in order, and packs each run
/// of eight into one output byte, first bit read into the least significant position. The
/// whole package is always read: there is no way to tell where a message ends, so bytes
/// past the concealed message come out as whatever the cover's low bits happened to be.
/// A trailing run of fewer than eight bytes is dropped.
///
/// Revealing never fails.
///
/// # Examples
///
/// Revealing a message of known length:
///
/// ```
/// use lsbs::{lsb, Conceal, Reveal};
///
/// let cover = vec![0x3C; 100];
/// let package = lsb::Carrier::new(&cover).conceal(b"secret")?;
///
/// let revealed = lsb::Package::new(&package).reveal();
///
/// assert_eq!(revealed.len(), 12);
/// assert_eq!(&revealed[..6], b"secret");
/// # Ok::<(), lsbs::CapacityExceeded>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Package<'a> {
    bytes: &'a [u8],
}

impl<'a> Package<'a> {
    /// Creates a new [`Package`] over bytes that may hold a concealed message.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsbs::lsb;
    ///
    /// let bytes = [0u8; 20];
    /// let package = lsb::Package::new(&bytes);
    ///
    /// assert_eq!(package.len(), 2);
    /// ```
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns how many bytes the package reveals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / Bits::LEN
    }

    /// Returns `true` if the package is too short to reveal a single byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the revealed bytes.
    ///
    /// ```
    /// use lsbs::lsb::Package;
    ///
    /// let package = [1, 0, 0, 0, 0, 0, 1, 0, 1, 1];
    /// let mut bytes = Package::new(&package).bytes();
    ///
    /// assert_eq!(bytes.next(), Some(b'A'));
    /// assert_eq!(bytes.next(), None);
    /// ```
    #[must_use]
    pub fn bytes(&self) -> Bytes<'a> {
        Bytes {
            chunks: self.bytes.chunks_exact(Bits::LEN),
        }
    }
}

impl Reveal for Package<'_> {
    fn reveal(self) -> Vec<u8> {
        let revealed: Vec<u8> = self.bytes().collect();

        log::debug!(
            "revealed {} bytes from {} package bytes",
            revealed.len(),
            self.bytes.len()
        );

        revealed
    }
}

/// Iterator over the bytes revealed from a [`Package`].
///
/// Created by [`Package::bytes`].
#[derive(Debug, Clone)]
pub struct Bytes<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;

        let mut byte = Bits::default();
        for (index, package_byte) in chunk.iter().enumerate() {
            byte.set(index, package_byte & 0x01 == 1);
        }

        Some(byte.into())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Bytes<'_> {}

/// Reveals every complete byte hidden in the least significant bits of `carrier`.
///
/// The result has `carrier.len() / 8` bytes. It contains the concealed message, if any,
/// followed by bytes built from the low bits of the rest of the carrier; callers that need
/// only the message must know its length or delimit it themselves.
///
/// # Examples
///
/// ```
/// let mut carrier = lsbs::embed(&[0xFF; 16], b"A")?;
///
/// assert_eq!(lsbs::extract(&carrier), [0x41, 0xFF]);
///
/// // A partial trailing group does not produce a byte.
/// carrier.extend([0x00; 7]);
/// assert_eq!(lsbs::extract(&carrier).len(), 2);
/// # Ok::<(), lsbs::CapacityExceeded>(())
/// ```
#[must_use]
pub fn extract(carrier: &[u8]) -> Vec<u8> {
    Package::new(carrier).reveal()
}
