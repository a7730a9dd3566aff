use crate::{error::CapacityExceeded, lsb::Bits, Conceal};

/// Cover data that can conceal a message in the least significant bits of its bytes.
///
/// Every cover byte holds exactly one message bit, so a cover of `n` bytes can conceal a
/// message of at most `n / 8` bytes. Message bytes are spread over consecutive cover bytes
/// starting at the first one, least significant message bit first; cover bytes past the
/// end of the message are copied as they are.
///
/// The cover itself is borrowed and never modified, [`conceal`][crate::Conceal::conceal]
/// always returns a fresh buffer.
///
/// # Examples
///
/// Concealing a secret message in raw pixel samples:
///
/// ```
/// use lsbs::{lsb, Conceal};
///
/// let cover = vec![0x80; 64];
/// let package = lsb::Carrier::new(&cover).conceal(b"hi!")?;
///
/// assert_eq!(package.len(), cover.len());
/// assert!(package.iter().all(|byte| byte & 0xFE == 0x80));
/// # Ok::<(), lsbs::CapacityExceeded>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Carrier<'a> {
    cover: &'a [u8],
}

impl<'a> Carrier<'a> {
    /// Creates a new [`Carrier`] over the given cover bytes.
    #[must_use]
    pub fn new(cover: &'a [u8]) -> Self {
        Self { cover }
    }

    /// Returns how many message bytes fit in the cover.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cover.len() / Bits::LEN
    }

    /// Returns how many message bits fit in the cover, one per cover byte.
    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.cover.len()
    }
}

impl Conceal for Carrier<'_> {
    type Error = CapacityExceeded;

    fn conceal(self, payload: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let required = payload.len().saturating_mul(Bits::LEN);
        let mut package = self.cover.to_vec();

        if required > self.capacity_bits() {
            log::warn!(
                "message needs {required} bits but the carrier only has {}",
                self.capacity_bits()
            );
            return Err(CapacityExceeded::new(required, package));
        }

        let bits = payload.iter().copied().flat_map(Bits::new);
        for (package_byte, bit) in package.iter_mut().zip(bits) {
            *package_byte = (*package_byte & 0xFE) | u8::from(bit);
        }

        log::debug!(
            "concealed {} bytes in {} of {} carrier bytes",
            payload.len(),
            required,
            package.len()
        );

        Ok(package)
    }
}

/// Conceals `message` in the least significant bits of a copy of `carrier`.
///
/// Bit `j` of message byte `k` replaces the least significant bit of carrier byte
/// `k * 8 + j`. The other seven bits of those bytes, and every carrier byte after the
/// first `message.len() * 8`, are left as they were.
///
/// # Errors
///
/// Returns [`CapacityExceeded`] if `message.len() * 8` is greater than `carrier.len()`.
/// The error owns an unmodified copy of the carrier.
///
/// # Examples
///
/// ```
/// let carrier = [0xFF; 16];
/// let package = lsbs::embed(&carrier, b"A")?;
///
/// assert_eq!(package[..8], [0xFF, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFF, 0xFE]);
/// assert_eq!(package[8..], [0xFF; 8]);
/// # Ok::<(), lsbs::CapacityExceeded>(())
/// ```
pub fn embed(carrier: &[u8], message: &[u8]) -> Result<Vec<u8>, CapacityExceeded> {
    Carrier::new(carrier).conceal(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reports_capacity() {
        let cover = [0u8; 20];
        let carrier = Carrier::new(&cover);

        assert_eq!(carrier.capacity(), 2);
        assert_eq!(carrier.capacity_bits(), 20);
    }

    #[test]
    fn it_touches_only_the_lowest_bit() {
        let cover: Vec<u8> = (0..=255).collect();
        let package = embed(&cover, b"\x00\xFF\x5A\xA5").unwrap();

        for (cover_byte, package_byte) in cover.iter().zip(&package) {
            assert_eq!(cover_byte & 0xFE, package_byte & 0xFE);
        }
        assert_eq!(cover[32..], package[32..]);
    }

    #[test]
    fn it_returns_the_cover_on_overflow() {
        let cover = [7u8; 15];
        let err = embed(&cover, b"ab").unwrap_err();

        assert_eq!(err.required(), 16);
        assert_eq!(err.available(), 15);
        assert_eq!(err.into_carrier(), cover);
    }
}
