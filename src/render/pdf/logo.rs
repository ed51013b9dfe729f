//! Logo loading and image XObject construction.

use crate::error::{Error, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::GenericImageView;
use lopdf::{dictionary, Document, ObjectId, Stream};
use std::io::Write;
use std::path::Path;

/// A decoded image ready to embed.
#[derive(Debug, Clone)]
pub struct LogoImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    color_space: &'static str,
    filter: &'static str,
    data: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl LogoImage {
    /// Load and decode a logo file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| resource_error(path, e))?;
        Self::from_bytes(&bytes).map_err(|e| resource_error(path, e))
    }

    /// Decode a PNG or JPEG image from memory.
    ///
    /// Baseline RGB and grayscale JPEGs are embedded as-is; everything else
    /// is re-encoded as Flate-compressed RGB with an optional alpha mask.
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, String> {
        let format = image::guess_format(data).map_err(|e| e.to_string())?;
        let decoded = image::load_from_memory(data).map_err(|e| e.to_string())?;
        let (width, height) = decoded.dimensions();

        if format == image::ImageFormat::Jpeg {
            let color_space = match decoded.color() {
                image::ColorType::L8 => Some("DeviceGray"),
                image::ColorType::Rgb8 => Some("DeviceRGB"),
                _ => None,
            };
            if let Some(color_space) = color_space {
                return Ok(Self {
                    width,
                    height,
                    color_space,
                    filter: "DCTDecode",
                    data: data.to_vec(),
                    alpha: None,
                });
            }
        }

        let rgba = decoded.to_rgba8();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        let mut has_alpha = false;
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            if a != 255 {
                has_alpha = true;
            }
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }

        let alpha = if has_alpha {
            Some(deflate(&alpha).map_err(|e| e.to_string())?)
        } else {
            None
        };

        Ok(Self {
            width,
            height,
            color_space: "DeviceRGB",
            filter: "FlateDecode",
            data: deflate(&rgb).map_err(|e| e.to_string())?,
            alpha,
        })
    }

    /// Whether an alpha soft mask will be embedded.
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Add the image (and its soft mask) to the document.
    pub(super) fn embed(&self, doc: &mut Document) -> ObjectId {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(self.width),
            "Height" => i64::from(self.height),
            "ColorSpace" => self.color_space,
            "BitsPerComponent" => 8,
            "Filter" => self.filter,
        };

        if let Some(ref alpha) = self.alpha {
            let mask = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(self.width),
                    "Height" => i64::from(self.height),
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                    "Filter" => "FlateDecode",
                },
                alpha.clone(),
            )
            .with_compression(false);
            let mask_id = doc.add_object(mask);
            dict.set("SMask", mask_id);
        }

        doc.add_object(Stream::new(dict, self.data.clone()).with_compression(false))
    }
}

fn resource_error(path: &Path, reason: impl ToString) -> Error {
    Error::ResourceLoad {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(alpha: u8) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(4, 2, Rgba([200u8, 30, 30, alpha]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_opaque_png() {
        let logo = LogoImage::from_bytes(&png_bytes(255)).unwrap();
        assert_eq!((logo.width, logo.height), (4, 2));
        assert_eq!(logo.filter, "FlateDecode");
        assert!(!logo.has_alpha());
    }

    #[test]
    fn test_decode_translucent_png() {
        let logo = LogoImage::from_bytes(&png_bytes(128)).unwrap();
        assert!(logo.has_alpha());
    }

    #[test]
    fn test_reject_garbage() {
        assert!(LogoImage::from_bytes(b"definitely not an image").is_err());
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let err = LogoImage::load("/nonexistent/logo.png").unwrap_err();
        assert!(matches!(err, Error::ResourceLoad { .. }));
    }
}
