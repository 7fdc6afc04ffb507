//! Color display modes applied to rendered pages.

use image::Rgb;
use pdf_engine::Bitmap;

/// Added to the green channel in eye-comfort mode.
pub const EYE_COMFORT_GREEN_OFFSET: i16 = 30;

/// Multiplier for the blue channel in eye-comfort mode.
pub const EYE_COMFORT_BLUE_SCALE: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    #[default]
    Default,
    Night,
    EyeComfort,
}

type PixelFn = fn(Rgb<u8>) -> Rgb<u8>;

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Default, ColorMode::Night, ColorMode::EyeComfort];

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Default => "Default",
            ColorMode::Night => "Night",
            ColorMode::EyeComfort => "Eye comfort",
        }
    }

    /// Fill behind the page, as RGB.
    pub fn background(self) -> [u8; 3] {
        match self {
            ColorMode::Default => [255, 255, 255],
            ColorMode::Night => [0, 0, 0],
            ColorMode::EyeComfort => [220, 238, 209],
        }
    }

    fn pixel_fn(self) -> Option<PixelFn> {
        match self {
            ColorMode::Default => None,
            ColorMode::Night => Some(invert),
            ColorMode::EyeComfort => Some(eye_comfort),
        }
    }
}

fn invert(Rgb([r, g, b]): Rgb<u8>) -> Rgb<u8> {
    Rgb([255 - r, 255 - g, 255 - b])
}

fn eye_comfort(Rgb([r, g, b]): Rgb<u8>) -> Rgb<u8> {
    let green = (i16::from(g) + EYE_COMFORT_GREEN_OFFSET).clamp(0, 255) as u8;
    let blue = (f32::from(b) * EYE_COMFORT_BLUE_SCALE).round().clamp(0.0, 255.0) as u8;
    Rgb([r, green, blue])
}

/// Returns a copy of `bitmap` recolored for `mode`.
pub fn transform(bitmap: &Bitmap, mode: ColorMode) -> Bitmap {
    let mut out = bitmap.clone();
    if let Some(f) = mode.pixel_fn() {
        for pixel in out.pixels_mut() {
            *pixel = f(*pixel);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bitmap() -> Bitmap {
        // every channel value appears at least once
        Bitmap::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            Rgb([v, v.wrapping_mul(7), 255 - v])
        })
    }

    #[test]
    fn default_mode_is_identity() {
        let bitmap = sample_bitmap();

        assert_eq!(transform(&bitmap, ColorMode::Default), bitmap);
    }

    #[test]
    fn night_mode_inverts_each_channel() {
        let bitmap = Bitmap::from_pixel(2, 1, Rgb([0, 128, 255]));
        let out = transform(&bitmap, ColorMode::Night);

        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 127, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([255, 127, 0]));
    }

    #[test]
    fn night_mode_is_self_inverse() {
        let bitmap = sample_bitmap();
        let twice = transform(&transform(&bitmap, ColorMode::Night), ColorMode::Night);

        assert_eq!(twice, bitmap);
    }

    #[test]
    fn eye_comfort_follows_channel_formulas() {
        let bitmap = sample_bitmap();
        let out = transform(&bitmap, ColorMode::EyeComfort);

        for (before, after) in bitmap.pixels().zip(out.pixels()) {
            let [r, g, b] = before.0;
            assert_eq!(after.0[0], r);
            assert_eq!(u16::from(after.0[1]), (u16::from(g) + 30).min(255));
            assert_eq!(after.0[2], (f32::from(b) * 0.85).round() as u8);
        }
    }

    #[test]
    fn eye_comfort_clamps_bright_green() {
        let bitmap = Bitmap::from_pixel(1, 1, Rgb([255, 240, 255]));
        let out = transform(&bitmap, ColorMode::EyeComfort);

        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 255, 217]));
    }

    #[test]
    fn transform_preserves_dimensions_and_source() {
        let bitmap = sample_bitmap();
        let original = bitmap.clone();

        for mode in ColorMode::ALL {
            let out = transform(&bitmap, mode);
            assert_eq!(out.dimensions(), bitmap.dimensions());
        }
        assert_eq!(bitmap, original);
    }

    #[test]
    fn modes_have_distinct_backgrounds() {
        assert_eq!(ColorMode::Default.background(), [255, 255, 255]);
        assert_eq!(ColorMode::Night.background(), [0, 0, 0]);
        assert_eq!(ColorMode::EyeComfort.background(), [220, 238, 209]);
    }
}
