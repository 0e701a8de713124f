//! Logo image processing collaborator
//!
//! The site can strip a logo's background at runtime through an external
//! segmentation model. No model ships with the site, so the default
//! processor passes images through untouched.

use crate::{ImageError, ImageResult};
use serde::{Deserialize, Serialize};

/// Handle to an image ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedImage {
    /// URL the `<img>` element should load
    pub url: String,
    /// False when `url` is the unprocessed original
    pub processed: bool,
}

impl ProcessedImage {
    pub fn original(source: &str) -> Self {
        Self {
            url: source.to_string(),
            processed: false,
        }
    }
}

/// Turns an image source into a processed image handle
pub trait ImageProcessor {
    fn process(&self, source: &str) -> ImageResult<ProcessedImage>;
}

/// Returns every image unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughProcessor;

impl ImageProcessor for PassthroughProcessor {
    fn process(&self, source: &str) -> ImageResult<ProcessedImage> {
        if source.trim().is_empty() {
            return Err(ImageError::Unsupported("empty image source".into()));
        }
        Ok(ProcessedImage::original(source))
    }
}

/// Process `source`, falling back to the original image on failure
pub fn process_or_original(processor: &dyn ImageProcessor, source: &str) -> ProcessedImage {
    match processor.process(source) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("Failed to process logo {}: {}", source, e);
            ProcessedImage::original(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenModel;

    impl ImageProcessor for BrokenModel {
        fn process(&self, _source: &str) -> ImageResult<ProcessedImage> {
            Err(ImageError::Processing("segmentation model failed to load".into()))
        }
    }

    #[test]
    fn test_passthrough() {
        let image = PassthroughProcessor.process("/assets/weerlo-logo.png").unwrap();
        assert_eq!(image.url, "/assets/weerlo-logo.png");
        assert!(!image.processed);
        assert!(PassthroughProcessor.process("  ").is_err());
    }

    #[test]
    fn test_fallback_to_original() {
        let image = process_or_original(&BrokenModel, "/assets/weerlo-logo.png");
        assert_eq!(image, ProcessedImage::original("/assets/weerlo-logo.png"));
    }
}
