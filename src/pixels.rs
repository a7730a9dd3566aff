//! PNG images as cover data.
//!
//! A [`PixelBuffer`] holds the image data of a PNG exactly as it is stored: no color
//! conversion or expansion takes place. An RGBA image yields four bytes per pixel, a 16-bit
//! grayscale image two big-endian bytes, an indexed image one palette index per pixel, and
//! images below eight bits per sample keep their packed rows. Every one of those bytes is a
//! cover byte for the [`lsb`] codec.
//!
//! Saving writes the same color type, bit depth, palette and transparency back, so the
//! concealed message survives and the file keeps its format. Other ancillary chunks, such
//! as text, are not carried over.
//!
//! [`lsb`]: crate::lsb

use crate::{
    error::{Error, Result},
    lsb::{Carrier, Package},
    Conceal, Reveal,
};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use png::{BitDepth, ColorType};

/// Prefix of the file name [`encoded_path`] derives.
pub const ENCODED_PREFIX: &str = "encoded_";

/// Raw PNG image data together with the layout needed to encode it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    color: ColorType,
    depth: BitDepth,
    palette: Option<Vec<u8>>,
    trns: Option<Vec<u8>>,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer from raw image data laid out as a PNG stores it: rows of packed
    /// samples, each row starting on a byte boundary, 16-bit samples big-endian.
    ///
    /// Indexed images also need a palette, see [`PixelBuffer::with_palette`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCount`] if `samples` does not hold exactly `height` rows of
    /// `width` pixels of the given color type and bit depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsbs::pixels::{BitDepth, ColorType, PixelBuffer};
    ///
    /// let buffer = PixelBuffer::from_raw(4, 2, ColorType::Rgb, BitDepth::Eight, vec![0; 24])?;
    /// assert_eq!(buffer.capacity(), 3);
    ///
    /// // One bit per pixel, so a 4 pixel row still takes a whole byte.
    /// let buffer = PixelBuffer::from_raw(4, 2, ColorType::Grayscale, BitDepth::One, vec![0; 2])?;
    /// assert_eq!(buffer.samples().len(), 2);
    /// # Ok::<(), lsbs::Error>(())
    /// ```
    pub fn from_raw(
        width: u32,
        height: u32,
        color: ColorType,
        depth: BitDepth,
        samples: Vec<u8>,
    ) -> Result<Self> {
        let expected = row_len(width, color, depth) * height as usize;
        if samples.len() != expected {
            return Err(Error::SampleCount {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            color,
            depth,
            palette: None,
            trns: None,
            samples,
        })
    }

    /// Sets the palette, three bytes per entry.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<u8>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Sets the transparency chunk.
    #[must_use]
    pub fn with_trns(mut self, trns: Vec<u8>) -> Self {
        self.trns = Some(trns);
        self
    }

    /// Decodes the PNG at `path` without any transformation of its image data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid PNG.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut decoder = png::Decoder::new(BufReader::new(File::open(path)?));
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info()?;

        let mut samples = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut samples)?;
        samples.truncate(frame.buffer_size());

        let info = reader.info();
        let buffer = Self {
            width: info.width,
            height: info.height,
            color: info.color_type,
            depth: info.bit_depth,
            palette: info.palette.as_ref().map(|palette| palette.to_vec()),
            trns: info.trns.as_ref().map(|trns| trns.to_vec()),
            samples,
        };

        log::info!(
            "loaded {}: width {}, height {}, pixels {}, color {:?}, depth {}, samples {}",
            path.display(),
            buffer.width,
            buffer.height,
            buffer.pixel_count(),
            buffer.color,
            buffer.depth as u8,
            buffer.samples.len()
        );

        Ok(buffer)
    }

    /// Encodes the buffer as a PNG at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written, or the layout cannot be encoded, for
    /// instance an indexed image without a palette.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let writer = BufWriter::new(File::create(path)?);
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(self.color);
        encoder.set_depth(self.depth);
        if let Some(palette) = &self.palette {
            encoder.set_palette(palette.as_slice());
        }
        if let Some(trns) = &self.trns {
            encoder.set_trns(trns.as_slice());
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.samples)?;
        writer.finish()?;

        log::info!("saved {}", path.display());

        Ok(())
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color type as stored in the file.
    #[must_use]
    pub fn color(&self) -> ColorType {
        self.color
    }

    /// Bits per sample, or per palette index for indexed images.
    #[must_use]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Palette entries, three bytes each, if the image has one.
    #[must_use]
    pub fn palette(&self) -> Option<&[u8]> {
        self.palette.as_deref()
    }

    /// The raw image data, which is the cover the codec works on.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consumes the buffer, returning the raw image data.
    #[must_use]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Number of pixels, `width * height`.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns how many message bytes the samples can conceal.
    #[must_use]
    pub fn capacity(&self) -> usize {
        Carrier::new(&self.samples).capacity()
    }

    /// Returns a copy of the buffer with `message` concealed in its samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Capacity`] if the samples are too few for the message.
    pub fn conceal(&self, message: &[u8]) -> Result<Self> {
        let samples = Carrier::new(&self.samples).conceal(message)?;

        Ok(Self {
            width: self.width,
            height: self.height,
            color: self.color,
            depth: self.depth,
            palette: self.palette.clone(),
            trns: self.trns.clone(),
            samples,
        })
    }

    /// Returns every byte hidden in the samples.
    #[must_use]
    pub fn reveal(&self) -> Vec<u8> {
        Package::new(&self.samples).reveal()
    }
}

/// Bytes per row of packed samples.
fn row_len(width: u32, color: ColorType, depth: BitDepth) -> usize {
    let bits = width as usize * color.samples() * depth as usize;
    bits.div_ceil(8)
}

/// Returns where an encoded copy of `input` is written by default: a file in the same
/// directory whose name is the input's name prefixed with [`ENCODED_PREFIX`].
///
/// ```
/// use lsbs::pixels::encoded_path;
/// use std::path::Path;
///
/// assert_eq!(
///     encoded_path(Path::new("images/cat.png")),
///     Path::new("images/encoded_cat.png"),
/// );
/// ```
#[must_use]
pub fn encoded_path(input: &Path) -> PathBuf {
    let mut name = ENCODED_PREFIX.to_owned();
    if let Some(file_name) = input.file_name() {
        name.push_str(&file_name.to_string_lossy());
    }

    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let samples = (0..width * height * 4).map(|i| (i * 7 % 251) as u8).collect();
        PixelBuffer::from_raw(width, height, ColorType::Rgba, BitDepth::Eight, samples).unwrap()
    }

    #[test]
    fn it_checks_sample_count() {
        let err = PixelBuffer::from_raw(2, 2, ColorType::Rgb, BitDepth::Eight, vec![0; 11])
            .unwrap_err();

        assert!(matches!(
            err,
            Error::SampleCount {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn it_keeps_samples_through_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cover.png");

        let buffer = gradient(9, 5);
        buffer.save(&path).unwrap();

        assert_eq!(PixelBuffer::open(&path).unwrap(), buffer);
    }

    #[test]
    fn it_keeps_a_message_through_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.png");

        let message = b"meet me at noon";
        let buffer = gradient(16, 8);
        assert_eq!(buffer.capacity(), 64);

        buffer.conceal(message).unwrap().save(&path).unwrap();

        let revealed = PixelBuffer::open(&path).unwrap().reveal();
        assert_eq!(revealed.len(), 64);
        assert_eq!(&revealed[..message.len()], message);
    }

    #[test]
    fn it_uses_palette_indices_as_cover() {
        let dir = tempdir().unwrap();
        let cover = dir.path().join("indexed.png");
        let package = dir.path().join("encoded_indexed.png");

        let palette = [0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x10, 0x20, 0x30];
        let indices: Vec<u8> = (0..16).map(|i| i % 4).collect();
        {
            let mut encoder = png::Encoder::new(File::create(&cover).unwrap(), 4, 4);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(palette.as_slice());
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&indices).unwrap();
        }

        let buffer = PixelBuffer::open(&cover).unwrap();
        assert_eq!(buffer.color(), ColorType::Indexed);
        assert_eq!(buffer.depth(), BitDepth::Eight);
        assert_eq!(buffer.samples(), indices);
        assert_eq!(buffer.capacity(), 2);

        buffer.conceal(b"hi").unwrap().save(&package).unwrap();

        let reopened = PixelBuffer::open(&package).unwrap();
        assert_eq!(reopened.color(), ColorType::Indexed);
        assert_eq!(reopened.palette(), Some(palette.as_slice()));
        assert_eq!(reopened.reveal(), b"hi");
        for (index, original) in reopened.samples().iter().zip(&indices) {
            assert_eq!(index & 0xFE, original & 0xFE);
        }
    }

    #[test]
    fn it_keeps_packed_rows_below_eight_bits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mono.png");

        // 10 one-bit pixels per row pad out to two bytes.
        let rows = vec![0b1010_1010, 0b1100_0000, 0b0101_0101, 0b0100_0000];
        let buffer =
            PixelBuffer::from_raw(10, 2, ColorType::Grayscale, BitDepth::One, rows.clone()).unwrap();
        buffer.save(&path).unwrap();

        let reopened = PixelBuffer::open(&path).unwrap();
        assert_eq!(reopened.depth(), BitDepth::One);
        assert_eq!(reopened.samples(), rows);
    }

    #[test]
    fn it_keeps_sixteen_bit_samples_big_endian() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deep.png");

        let samples = vec![0x12, 0x34, 0xAB, 0xCD, 0x00, 0x01, 0xFF, 0xFE];
        let buffer =
            PixelBuffer::from_raw(2, 2, ColorType::Grayscale, BitDepth::Sixteen, samples.clone())
                .unwrap();
        buffer.save(&path).unwrap();

        assert_eq!(PixelBuffer::open(&path).unwrap().samples(), samples);
    }

    #[test]
    fn it_keeps_layout_on_conceal() {
        let buffer = gradient(3, 3).with_trns(vec![0, 0, 0, 0, 0, 0]);
        let package = buffer.conceal(b"x").unwrap();

        assert_eq!(package.width(), 3);
        assert_eq!(package.height(), 3);
        assert_eq!(package.color(), ColorType::Rgba);
        assert_eq!(package.depth(), BitDepth::Eight);
        assert_eq!(package.trns, buffer.trns);
        assert_eq!(package.samples().len(), buffer.samples().len());
    }

    #[test]
    fn it_handles_partial_conceal() {
        let buffer = gradient(1, 1);

        match buffer.conceal(b"too long") {
            Err(Error::Capacity(err)) => {
                assert_eq!(err.required(), 64);
                assert_eq!(err.available(), 4);
                assert_eq!(err.carrier(), buffer.samples());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn it_derives_encoded_path_without_directory() {
        assert_eq!(
            encoded_path(Path::new("photo.png")),
            Path::new("encoded_photo.png")
        );
    }
}
