//! Image loading collaborator.
//!
//! The canvas never decodes files itself. Hosts fulfil an
//! [`ImageRequest`](crate::requests::ImageRequest) with any [`ImageLoader`]
//! and hand the result to [`Canvas::finish_image_load`](crate::Canvas::finish_image_load).

use crate::elements::Bitmap;
use image::ImageFormat;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

/// Image loading errors.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image format")]
    UnsupportedFormat,
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Where image bytes come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file picked by the user.
    Path(PathBuf),
    /// Bytes already in memory (drag-and-drop, clipboard, browser file reader).
    Bytes(Vec<u8>),
}

/// Asynchronously turns an image source into a decoded bitmap.
pub trait ImageLoader {
    fn load(&self, source: ImageSource) -> BoxFuture<'_, Result<Bitmap, ImageLoadError>>;
}

/// Loader that reads the source and decodes it with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodingImageLoader;

impl DecodingImageLoader {
    pub fn new() -> Self {
        Self
    }

    /// Sniff the format from the leading bytes.
    ///
    /// Formats the decoder was not built with are unsupported.
    pub fn detect_format(data: &[u8]) -> Result<ImageFormat, ImageLoadError> {
        match image::guess_format(data) {
            Ok(format) if format.reading_enabled() => Ok(format),
            Ok(format) => {
                log::warn!("No decoder for {:?} images", format);
                Err(ImageLoadError::UnsupportedFormat)
            }
            Err(_) => Err(ImageLoadError::UnsupportedFormat),
        }
    }

    /// Decode bytes into a bitmap.
    pub fn decode(data: &[u8]) -> Result<Bitmap, ImageLoadError> {
        let format = Self::detect_format(data)?;
        let decoded = image::load_from_memory_with_format(data, format)?;
        let pixels = decoded.into_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(ImageLoadError::EmptyImage {
                width: pixels.width(),
                height: pixels.height(),
            });
        }
        log::debug!(
            "Decoded {} image ({}x{})",
            format.to_mime_type(),
            pixels.width(),
            pixels.height()
        );
        Ok(Bitmap::from_rgba(pixels))
    }
}

impl ImageLoader for DecodingImageLoader {
    fn load(&self, source: ImageSource) -> BoxFuture<'_, Result<Bitmap, ImageLoadError>> {
        Box::pin(async move {
            let data = match source {
                ImageSource::Path(path) => {
                    log::info!("Loading image from {:?}", path);
                    std::fs::read(&path)?
                }
                ImageSource::Bytes(bytes) => bytes,
            };
            Self::decode(&data)
        })
    }
}
