//! Least significant bit implementations of [`Conceal`][crate::Conceal] and
//! [`Reveal`][crate::Reveal].
//!
//! The [`Carrier`] and [`Package`] structures conceal and reveal messages one bit per
//! cover byte, in the lowest bit of each byte.
//!
//! ## Layout
//!
//! Message bit `j` of message byte `k` (bit `0` being the least significant) is stored in
//! the lowest bit of cover byte `k * 8 + j`. Nothing else is stored: there is no length
//! prefix, checksum, or terminator, so a receiver has to know the message length, or agree
//! with the sender on a delimiter, to tell the message apart from the cover bytes after it.
//!
//! The cover is treated as an opaque byte sequence. For images this is the decoded sample
//! buffer (see [`pixels`][crate::pixels]), whose layout and bit depth do not matter here.
//!
//! ## Examples
//!
//! ```
//! use lsbs::{lsb, Conceal, Reveal};
//!
//! let cover: Vec<u8> = (0..=255).collect();
//! let message = b"a very secret message";
//!
//! let carrier = lsb::Carrier::new(&cover);
//! assert!(carrier.capacity() >= message.len());
//!
//! let package = carrier.conceal(message)?;
//! let revealed = lsb::Package::new(&package).reveal();
//!
//! assert_eq!(&revealed[..message.len()], message);
//! # Ok::<(), lsbs::CapacityExceeded>(())
//! ```

mod bits;
mod carrier;
mod package;

pub use bits::{Bits, Iter};
pub use carrier::{embed, Carrier};
pub use package::{extract, Bytes, Package};
