use crate::models::{Point, PointSet};
use crate::settings::{ThresholdMode, TraceSettings};
use anyhow::Context as _;
use image::GrayImage;
use log::debug;
use rayon::prelude::*;
use std::path::Path;

/// Converts a pixel coordinate into a point coordinate
///
/// Coordinates beyond `i32::MAX` clamp to `i32::MAX`.
fn to_coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Calculates the binarization threshold with Otsu's method
///
/// # Returns
/// The luma value that maximizes the between-class variance of the histogram. Pixels at or
/// below it belong to the dark class. Empty and single-colour images yield 0.
///
/// # Process
/// 1. Build the 8-bit histogram
/// 2. Sweep every threshold, keeping running weights and sums for the dark class
/// 3. Return the first threshold with the largest variance
pub fn otsu_threshold(img: &GrayImage) -> u8 {
    let mut histogram = [0u64; 256];
    for pixel in img.pixels() {
        histogram[usize::from(pixel[0])] += 1;
    }

    let total: u64 = histogram.iter().sum();
    let weighted_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut best_threshold = 0u8;
    let mut max_variance = 0.0;
    let mut background = 0u64;
    let mut weighted_background = 0.0;

    for (value, &count) in histogram.iter().enumerate() {
        background += count;
        weighted_background += value as f64 * count as f64;
        if background == 0 {
            continue;
        }

        let foreground = total - background;
        if foreground == 0 {
            break;
        }

        let mean_background = weighted_background / background as f64;
        let mean_foreground = (weighted_total - weighted_background) / foreground as f64;
        let variance =
            background as f64 * foreground as f64 * (mean_background - mean_foreground).powi(2);

        if variance > max_variance {
            max_variance = variance;
            best_threshold = u8::try_from(value).unwrap_or(u8::MAX);
        }
    }

    best_threshold
}

/// Collects the sampled pixels with luma at or below `threshold`
///
/// Only pixels whose x and y are multiples of `step` are looked at; a step of 0 behaves
/// like 1. Points keep their pixel coordinates. Rows are scanned in parallel.
pub fn dark_pixels(img: &GrayImage, threshold: u8, step: usize) -> PointSet {
    let step = step.max(1);
    let rows: Vec<u32> = (0..img.height()).step_by(step).collect();

    let found: Vec<Point> = rows
        .par_iter()
        .flat_map_iter(|&y| {
            (0..img.width())
                .step_by(step)
                .filter(move |&x| img.get_pixel(x, y)[0] <= threshold)
                .map(move |x| Point::new(to_coord(x), to_coord(y)))
        })
        .collect();

    found.into_iter().collect()
}

/// Extracts the dark points of `img` using the threshold and step from `settings`
pub fn extract_points(img: &GrayImage, settings: &TraceSettings) -> PointSet {
    let threshold = match settings.threshold {
        ThresholdMode::Otsu => otsu_threshold(img),
        ThresholdMode::Fixed(value) => value,
    };

    let points = dark_pixels(img, threshold, settings.effective_step());
    debug!(
        "Found {} dark pixels in {}x{} image (threshold {threshold})",
        points.len(),
        img.width(),
        img.height()
    );
    points
}

/// Loads an image from disk and extracts its dark points
pub fn load_dark_pixels<P: AsRef<Path>>(
    path: P,
    settings: &TraceSettings,
) -> anyhow::Result<PointSet> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_luma8();

    Ok(extract_points(&img, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// 8x8 white canvas with a black 4x4 square at (2, 2)
    fn square_image() -> GrayImage {
        GrayImage::from_fn(8, 8, |x, y| {
            if (2..6).contains(&x) && (2..6).contains(&y) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn otsu_splits_two_levels() {
        let img = GrayImage::from_fn(4, 4, |x, _| if x < 2 { Luma([40]) } else { Luma([200]) });
        let threshold = otsu_threshold(&img);
        assert!((40..200).contains(&threshold));
    }

    #[test]
    fn otsu_on_uniform_image_is_zero() {
        let img = GrayImage::from_pixel(3, 3, Luma([128]));
        assert_eq!(otsu_threshold(&img), 0);
        assert_eq!(otsu_threshold(&GrayImage::new(0, 0)), 0);
    }

    #[test]
    fn dark_pixels_finds_the_square() {
        let points = dark_pixels(&square_image(), 127, 1);
        let expected: PointSet = (2..6)
            .flat_map(|y| (2..6).map(move |x| Point::new(x, y)))
            .collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn dark_pixels_respects_step() {
        let points = dark_pixels(&square_image(), 127, 2);
        let expected: PointSet = [(2, 2), (4, 2), (2, 4), (4, 4)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(points, expected);
        assert_eq!(dark_pixels(&square_image(), 127, 0).len(), 16);
    }

    #[test]
    fn extract_points_uses_settings() {
        init_logger();
        let img = square_image();

        assert_eq!(extract_points(&img, &TraceSettings::default()).len(), 16);

        let everything = TraceSettings::default().with_threshold(ThresholdMode::Fixed(255));
        assert_eq!(extract_points(&img, &everything).len(), 64);
    }

    #[test]
    fn load_dark_pixels_reads_png() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        square_image().save(&path).unwrap();

        let points = load_dark_pixels(&path, &TraceSettings::default()).unwrap();
        assert_eq!(points.len(), 16);
    }

    #[test]
    fn load_dark_pixels_reports_missing_file() {
        let err = load_dark_pixels("/nonexistent/shapeset.png", &TraceSettings::default())
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shapeset.png"));
    }
}
