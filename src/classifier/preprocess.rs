use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use ndarray::Array4;
use std::path::Path;

use super::error::ClassifierError;

/// Edge length in pixels of the square model input.
pub const INPUT_SIZE: u32 = 224;

/// A single-image batch in NHWC layout: `(1, height, width, channel)` with
/// every value scaled into `[0.0, 1.0]`.
pub type ImageTensor = Array4<f32>;

/// Opens and decodes an image file.
///
/// This is the boundary where malformed uploads fail; everything downstream
/// of it operates on an already-decoded image.
///
/// # Errors
/// - `ImageError` if the file cannot be opened or decoded
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, ClassifierError> {
    let path = path.as_ref();
    ImageReader::open(path)
        .map_err(|e| ClassifierError::ImageError(format!("Failed to open {}: {}", path.display(), e)))?
        .decode()
        .map_err(|e| ClassifierError::ImageError(format!("Failed to decode {}: {}", path.display(), e)))
}

/// Converts a decoded image into the model's input tensor.
///
/// The image is converted to RGB, stretched to 224x224 without preserving
/// aspect ratio, and scaled channel-wise from `[0, 255]` bytes to
/// `[0.0, 1.0]` floats. The result always has shape `(1, 224, 224, 3)`.
///
/// Deterministic: the same decoded image always produces the same tensor.
pub fn image_to_tensor(image: &DynamicImage) -> ImageTensor {
    let rgb = image
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
        .to_rgb8();
    Array4::from_shape_fn(
        (1, INPUT_SIZE as usize, INPUT_SIZE as usize, 3),
        |(_, y, x, channel)| f32::from(rgb[(x as u32, y as u32)][channel]) / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid_image(width: u32, height: u32, pixel: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(pixel)))
    }

    #[test]
    fn test_tensor_shape() {
        let tensor = image_to_tensor(&solid_image(640, 480, [10, 20, 30]));
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_tensor_shape_for_tiny_image() {
        let tensor = image_to_tensor(&solid_image(2, 3, [0, 0, 0]));
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_values_scaled_to_unit_range() {
        let gradient = RgbImage::from_fn(300, 200, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        let tensor = image_to_tensor(&DynamicImage::ImageRgb8(gradient));
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_solid_color_preserved() {
        let tensor = image_to_tensor(&solid_image(100, 100, [128, 0, 255]));
        let expected = [128.0 / 255.0, 0.0, 1.0];
        for ((_, _, _, channel), &value) in tensor.indexed_iter() {
            assert!((value - expected[channel]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let gradient = RgbImage::from_fn(123, 77, |x, y| {
            Rgb([(x * 2 % 256) as u8, (y * 3 % 256) as u8, 40])
        });
        let image = DynamicImage::ImageRgb8(gradient);
        assert_eq!(image_to_tensor(&image), image_to_tensor(&image));
    }

    #[test]
    fn test_open_image_missing_file() {
        let result = open_image("definitely/not/a/real/image.png");
        assert!(matches!(result, Err(ClassifierError::ImageError(_))));
    }
}
