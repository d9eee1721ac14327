// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo preparation for credential labels.
//
// Phone photos of router stickers are usually small, dim, and low-contrast.
// This pass normalizes them before recognition: grayscale conversion,
// percentile contrast stretch, light denoise, Otsu binarization, and an
// upscale for photos below the size the detection model works well at.

use image::{DynamicImage, GrayImage, Luma, imageops::FilterType};
use imageproc::filter::gaussian_blur_f32;
use tracing::{debug, instrument};

/// Denoise strength before thresholding.
const BLUR_SIGMA: f32 = 1.0;

/// Histogram percentiles used as the stretch endpoints.
const STRETCH_LOW_PCT: f64 = 0.02;
const STRETCH_HIGH_PCT: f64 = 0.98;

/// Prepares a credential photo for text recognition.
///
/// Operations consume and return the builder so they chain:
///
/// ```rust
/// use funkwerk_ocr::PhotoPrep;
/// use image::DynamicImage;
///
/// let photo = DynamicImage::new_luma8(640, 480);
/// let prepared = PhotoPrep::from_dynamic(photo).prepare().into_dynamic();
/// ```
pub struct PhotoPrep {
    image: DynamicImage,
}

impl PhotoPrep {
    /// Smallest long-edge size fed to the detection model; smaller photos
    /// are upscaled to this.
    pub const MIN_LONG_EDGE: u32 = 1024;

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// The standard preparation chain for label photos.
    #[instrument(skip(self), fields(width = self.image.width(), height = self.image.height()))]
    pub fn prepare(self) -> Self {
        self.grayscale()
            .stretch_contrast()
            .binarize_otsu()
            .upscale_to_min_long_edge(Self::MIN_LONG_EDGE)
    }

    /// Convert to 8-bit grayscale.
    pub fn grayscale(self) -> Self {
        Self {
            image: DynamicImage::ImageLuma8(self.image.to_luma8()),
        }
    }

    /// Linearly remap intensities so the 2nd..98th percentile band spans the
    /// full 0..255 range. Robust against a few specular highlights, unlike a
    /// min/max stretch.
    pub fn stretch_contrast(self) -> Self {
        let gray = self.image.to_luma8();
        let (low, high) = percentile_band(&gray, STRETCH_LOW_PCT, STRETCH_HIGH_PCT);
        if high <= low {
            // Flat image, nothing to stretch.
            return Self {
                image: DynamicImage::ImageLuma8(gray),
            };
        }

        let range = (high - low) as f32;
        let mut output = gray;
        for pixel in output.pixels_mut() {
            let v = pixel.0[0] as f32;
            let stretched = ((v - low as f32) / range * 255.0).clamp(0.0, 255.0);
            pixel.0[0] = stretched as u8;
        }

        debug!(low, high, "contrast stretched");
        Self {
            image: DynamicImage::ImageLuma8(output),
        }
    }

    /// Denoise, then apply global Otsu thresholding to produce a
    /// black-and-white image.
    pub fn binarize_otsu(self) -> Self {
        let gray = self.image.to_luma8();
        let blurred = gaussian_blur_f32(&gray, BLUR_SIGMA);
        let threshold = otsu_threshold(&blurred);
        debug!(threshold, "Otsu threshold computed");

        let (width, height) = blurred.dimensions();
        let mut output = GrayImage::new(width, height);
        for (x, y, pixel) in blurred.enumerate_pixels() {
            let value = if pixel.0[0] < threshold { 0u8 } else { 255u8 };
            output.put_pixel(x, y, Luma([value]));
        }

        Self {
            image: DynamicImage::ImageLuma8(output),
        }
    }

    /// Upscale so the longer edge is at least `min_long_edge`, preserving
    /// aspect ratio. Photos already large enough pass through untouched.
    pub fn upscale_to_min_long_edge(self, min_long_edge: u32) -> Self {
        let long_edge = self.image.width().max(self.image.height());
        if long_edge == 0 || long_edge >= min_long_edge {
            return self;
        }

        let factor = min_long_edge as f64 / long_edge as f64;
        let width = (self.image.width() as f64 * factor).round() as u32;
        let height = (self.image.height() as f64 * factor).round() as u32;
        debug!(width, height, "upscaling small photo");

        Self {
            image: self.image.resize(width, height, FilterType::CatmullRom),
        }
    }
}

/// Intensity values at the given low/high histogram percentiles.
fn percentile_band(gray: &GrayImage, low_pct: f64, high_pct: f64) -> (u8, u8) {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }
    let total = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return (0, 255);
    }

    let low_target = (total as f64 * low_pct) as u64;
    let high_target = (total as f64 * high_pct) as u64;

    let mut cumulative = 0u64;
    let mut low = 0u8;
    let mut high = 255u8;
    let mut low_found = false;
    for (value, &count) in histogram.iter().enumerate() {
        cumulative += count;
        if !low_found && cumulative > low_target {
            low = value as u8;
            low_found = true;
        }
        if cumulative >= high_target {
            high = value as u8;
            break;
        }
    }
    (low, high)
}

/// Otsu's method: the threshold maximizing between-class variance.
fn otsu_threshold(gray: &GrayImage) -> u8 {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let total = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return 128;
    }

    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut sum_background = 0.0f64;
    let mut weight_background = 0u64;
    let mut best_threshold = 0u8;
    let mut max_variance = 0.0f64;

    for (threshold, &count) in histogram.iter().enumerate() {
        weight_background += count;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0 {
            break;
        }

        sum_background += threshold as f64 * count as f64;
        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_total - sum_background) / weight_foreground as f64;
        let variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if variance > max_variance {
            max_variance = variance;
            best_threshold = threshold as u8;
        }
    }

    best_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Half-dark, half-bright synthetic label.
    fn bimodal_image() -> GrayImage {
        let mut img = GrayImage::from_pixel(64, 64, Luma([40u8]));
        for y in 0..64 {
            for x in 32..64 {
                img.put_pixel(x, y, Luma([210u8]));
            }
        }
        img
    }

    #[test]
    fn otsu_separates_bimodal_histogram() {
        let threshold = otsu_threshold(&bimodal_image());
        assert!(
            (40..=210).contains(&threshold),
            "threshold {threshold} should fall between the two modes"
        );
    }

    #[test]
    fn binarize_produces_pure_black_and_white() {
        let prepared = PhotoPrep::from_dynamic(DynamicImage::ImageLuma8(bimodal_image()))
            .binarize_otsu()
            .into_dynamic();
        for pixel in prepared.to_luma8().pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn stretch_widens_a_narrow_band() {
        let mut img = GrayImage::from_pixel(32, 32, Luma([100u8]));
        for y in 0..32 {
            for x in 16..32 {
                img.put_pixel(x, y, Luma([140u8]));
            }
        }
        let stretched = PhotoPrep::from_dynamic(DynamicImage::ImageLuma8(img))
            .stretch_contrast()
            .into_dynamic()
            .to_luma8();

        let min = stretched.pixels().map(|p| p.0[0]).min().unwrap();
        let max = stretched.pixels().map(|p| p.0[0]).max().unwrap();
        assert!(min < 10, "dark band should be near black, got {min}");
        assert!(max > 245, "bright band should be near white, got {max}");
    }

    #[test]
    fn flat_image_passes_through_stretch() {
        let img = GrayImage::from_pixel(16, 16, Luma([77u8]));
        let out = PhotoPrep::from_dynamic(DynamicImage::ImageLuma8(img))
            .stretch_contrast()
            .into_dynamic()
            .to_luma8();
        assert!(out.pixels().all(|p| p.0[0] == 77));
    }

    #[test]
    fn small_photos_are_upscaled() {
        let img = DynamicImage::new_luma8(200, 100);
        let out = PhotoPrep::from_dynamic(img)
            .upscale_to_min_long_edge(400)
            .into_dynamic();
        assert_eq!(out.width(), 400);
        assert_eq!(out.height(), 200);
    }

    #[test]
    fn large_photos_are_untouched() {
        let img = DynamicImage::new_luma8(2000, 1500);
        let out = PhotoPrep::from_dynamic(img)
            .upscale_to_min_long_edge(1024)
            .into_dynamic();
        assert_eq!((out.width(), out.height()), (2000, 1500));
    }
}
