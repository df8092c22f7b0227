use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    imageops::{self, FilterType},
    io::Reader,
    DynamicImage, GrayImage, ImageOutputFormat, Luma,
};
use rand::Rng;

use super::errors::SynthesisError;

pub const OUTPUT_SIZE: u32 = 256;
pub const JPEG_QUALITY: u8 = 92;

const NOISE_BASE: u32 = 10;
const IMAGE_WEIGHT: f32 = 0.7;
const NOISE_WEIGHT: f32 = 0.3;
const FOV_RADIUS_RATIO: f32 = 0.48;
const FOV_FEATHER: f32 = 8.0;
const BLUR_SIGMA: f32 = 0.7;

/// Reads `src_path`, derives the synthetic scan and writes it to `out_path`
/// as a JPEG. The decoder is picked from the file contents; the extension is
/// whatever the client named the upload.
pub fn generate_to_file(src_path: &Path, out_path: &Path) -> Result<(), SynthesisError> {
    let src = Reader::open(src_path)?.with_guessed_format()?.decode()?;
    let synthetic = generate_synthetic(&src, &mut rand::thread_rng());

    write_jpeg(&synthetic, out_path)
}

pub fn generate_synthetic<R: Rng + ?Sized>(src: &DynamicImage, rng: &mut R) -> GrayImage {
    let input = imageops::resize(
        &src.to_luma8(),
        OUTPUT_SIZE,
        OUTPUT_SIZE,
        FilterType::CatmullRom,
    );
    let noise = smooth_noise(OUTPUT_SIZE, OUTPUT_SIZE, NOISE_BASE, rng);
    let mask = circular_mask(OUTPUT_SIZE, OUTPUT_SIZE);

    let blended = GrayImage::from_fn(OUTPUT_SIZE, OUTPUT_SIZE, |x, y| {
        let value = IMAGE_WEIGHT * input.get_pixel(x, y)[0] as f32
            + NOISE_WEIGHT * noise.get_pixel(x, y)[0] as f32;
        let masked = value * mask[(y * OUTPUT_SIZE + x) as usize];

        Luma([masked.clamp(0.0, 255.0) as u8])
    });

    autocontrast(&imageops::blur(&blended, BLUR_SIGMA))
}

/// Low frequency noise: a `base`×`base` random field upscaled bicubically.
pub fn smooth_noise<R: Rng + ?Sized>(width: u32, height: u32, base: u32, rng: &mut R) -> GrayImage {
    let small = GrayImage::from_fn(base, base, |_, _| Luma([rng.gen::<u8>()]));

    imageops::resize(&small, width, height, FilterType::CatmullRom)
}

/// Row-major field-of-view weights: 1 inside the circle, a linear ramp down
/// to 0 across the feather band, 0 beyond it.
pub fn circular_mask(width: u32, height: u32) -> Vec<f32> {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = width.min(height) as f32 * FOV_RADIUS_RATIO;

    let mut mask = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let weight = if dist <= radius {
                1.0
            } else if dist < radius + FOV_FEATHER {
                1.0 - (dist - radius) / FOV_FEATHER
            } else {
                0.0
            };
            mask.push(weight);
        }
    }

    mask
}

/// Stretches the occupied intensity range to the full 0..=255.
pub fn autocontrast(img: &GrayImage) -> GrayImage {
    let (min, max) = img
        .pixels()
        .fold((u8::MAX, u8::MIN), |(min, max), p| (min.min(p[0]), max.max(p[0])));

    if max <= min {
        return img.clone();
    }

    let scale = 255.0 / (max - min) as f32;
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let value = (img.get_pixel(x, y)[0] - min) as f32 * scale;
        Luma([value.round().clamp(0.0, 255.0) as u8])
    })
}

pub fn write_jpeg(img: &GrayImage, out_path: &Path) -> Result<(), SynthesisError> {
    let mut writer = BufWriter::new(File::create(out_path)?);
    img.write_to(&mut writer, ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    writer.flush()?;

    Ok(())
}
