//! # LSBS
//!
//! The **LSBS** (**L**east **S**ignificant **B**it **S**teganography) library hides a message
//! in the lowest bit of every byte of some cover data, typically the decoded samples of an
//! image, and reads it back out.
//!
//! ## Codec
//!
//! The [`lsb`] module does the bit work on plain byte slices. [`embed`] and [`extract`] are
//! shorthands for its [`Carrier`][lsb::Carrier] and [`Package`][lsb::Package]:
//!
//! ```
//! let cover = [0xFF; 16];
//!
//! let package = lsbs::embed(&cover, b"A")?;
//! let revealed = lsbs::extract(&package);
//!
//! assert_eq!(revealed, [b'A', 0xFF]);
//! # Ok::<(), lsbs::CapacityExceeded>(())
//! ```
//!
//! ## Images
//!
//! The [`pixels`] module decodes PNG files into raw sample buffers the codec can work on and
//! encodes them back.

pub mod error;
pub mod lsb;
pub mod pixels;

pub use error::{CapacityExceeded, Error, Result};
pub use lsb::{embed, extract};

/// A trait for objects able to conceal steganographic messages, or carriers.
///
/// Carriers are defined by a single required method, [`conceal`][Conceal::conceal],
/// which hides the payload in a copy of the carrier's cover data.
///
/// # Examples
///
/// [`lsb::Carrier`] can be used to conceal secret messages in binary data.
pub trait Conceal {
    /// The error returned when the payload cannot be concealed.
    type Error;

    /// Conceals the payload and returns the resulting package.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the payload does not fit entirely inside the
    /// cover. No partially concealed package is ever returned.
    fn conceal(self, payload: &[u8]) -> std::result::Result<Vec<u8>, Self::Error>;
}

/// A trait for objects able to reveal steganographic messages, or packages.
///
/// Packages are defined by a single required method, [`reveal`][Reveal::reveal],
/// which returns the hidden bytes.
///
/// # Examples
///
/// [`lsb::Package`] can be used to reveal secret messages hidden in binary data.
pub trait Reveal {
    /// Returns every byte hidden in the package.
    ///
    /// It is up to the implementations to establish a format and conditions under which
    /// the hidden message is interpreted. Revealing from data that holds no message is not
    /// an error; the result is simply meaningless.
    fn reveal(self) -> Vec<u8>;
}
