//! Rating histogram: equal-width bins, rendered as text or as a PNG chart.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use cinedex_core::Collection;

use crate::error::LibError;

/// Number of bins used by the frontends.
pub const DEFAULT_BINS: usize = 10;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BAR_FILL: Rgba<u8> = Rgba([70, 130, 180, 255]);
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const MARGIN: u32 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin the finite ratings into `bins` equal-width buckets spanning
    /// `[min, max]`. The last bucket includes `max`. When every rating is
    /// the same the range is widened to `value ± 0.5`.
    pub fn from_ratings(ratings: &[f64], bins: usize) -> Result<Self, LibError> {
        let values: Vec<f64> = ratings.iter().copied().filter(|r| r.is_finite()).collect();
        if values.is_empty() {
            return Err(LibError::EmptyCollection);
        }
        let bins = bins.max(1);

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let mut result: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            result[idx].count += 1;
        }

        Ok(Self { bins: result })
    }

    /// Histogram of every rated movie in the collection.
    pub fn from_collection(movies: &Collection, bins: usize) -> Result<Self, LibError> {
        let ratings: Vec<f64> = movies.values().filter_map(|m| m.rating).collect();
        Self::from_ratings(&ratings, bins)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// One line per bin: `  7.00 -  7.30 | ####### 3`, the longest bar
    /// being `width` characters.
    pub fn render_text(&self, width: usize) -> Vec<String> {
        let max = self.max_count().max(1);
        self.bins
            .iter()
            .map(|b| {
                let len = b.count * width / max;
                format!(
                    "{:6.2} - {:6.2} | {} {}",
                    b.lower,
                    b.upper,
                    "#".repeat(len),
                    b.count
                )
            })
            .collect()
    }

    /// Draw the histogram as a bar chart with a baseline and left axis.
    ///
    /// Every non-empty bin gets a bar at least one pixel wide, so bins
    /// narrower than a pixel overlap instead of vanishing.
    pub fn to_image(&self, width: u32, height: u32) -> RgbaImage {
        let width = width.max(MARGIN * 2 + 1);
        let height = height.max(MARGIN * 2 + 1);
        let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

        let plot_w = u64::from(width - MARGIN * 2);
        let plot_h = u64::from(height - MARGIN * 2);
        let baseline = height - MARGIN;
        let max = u64::try_from(self.max_count()).unwrap_or(u64::MAX).max(1);
        let bin_count = u64::try_from(self.bins.len()).unwrap_or(u64::MAX).max(1);

        for (i, bin) in self.bins.iter().enumerate() {
            let i = u64::try_from(i).unwrap_or(u64::MAX);
            let count = u64::try_from(bin.count).unwrap_or(u64::MAX);
            // Each quotient is at most plot_w or plot_h, so it fits in u32.
            let x0 = MARGIN + to_u32(plot_w * i / bin_count);
            let x1 = (MARGIN + to_u32(plot_w * (i + 1) / bin_count)).max(x0 + 1);
            let bar_h = to_u32(plot_h.saturating_mul(count) / max);
            if bar_h == 0 {
                continue;
            }
            let y0 = baseline - bar_h;
            fill_rect(&mut img, x0, y0, x1, baseline, BAR_FILL);
            outline_rect(&mut img, x0, y0, x1 - 1, baseline - 1, INK);
        }

        // Axes
        fill_rect(&mut img, MARGIN, baseline, width - MARGIN, baseline + 1, INK);
        fill_rect(&mut img, MARGIN - 1, MARGIN, MARGIN, baseline + 1, INK);

        img
    }

    /// Write the chart to `path` as PNG, whatever the extension.
    pub fn save_png(&self, path: &Path, width: u32, height: u32) -> Result<(), LibError> {
        self.to_image(width, height)
            .save_with_format(path, ImageFormat::Png)?;
        log::debug!("Histogram written to {}", path.display());
        Ok(())
    }
}

fn to_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draw the border of the closed rectangle `[x0, x1] x [y0, y1]`.
fn outline_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    fill_rect(img, x0, y0, x1 + 1, y0 + 1, color);
    fill_rect(img, x0, y1, x1 + 1, y1 + 1, color);
    fill_rect(img, x0, y0, x0 + 1, y1 + 1, color);
    fill_rect(img, x1, y0, x1 + 1, y1 + 1, color);
}

#[cfg(test)]
#[path = "tests/histogram_tests.rs"]
mod tests;
