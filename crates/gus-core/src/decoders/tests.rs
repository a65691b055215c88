//! Tests for image decoders

use std::io::Cursor;

use super::*;

fn encode_png(width: u32, height: u32, color: ::png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = ::png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(::png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
    }
    out
}

// ========================================================================
// DecodedImage construction
// ========================================================================

#[test]
fn test_from_rgb8_swaps_to_bgr() {
    let image = DecodedImage::from_rgb8(2, 1, &[10, 20, 30, 40, 50, 60]).unwrap();
    assert_eq!(image.as_bgr(), &[30, 20, 10, 60, 50, 40]);
    assert_eq!(image.pixel(1, 0), [60, 50, 40]);
    assert_eq!(image.to_rgb8(), vec![10, 20, 30, 40, 50, 60]);
}

#[test]
fn test_from_rgba8_drops_alpha_without_blending() {
    // Fully transparent pixel keeps its stored color
    let image = DecodedImage::from_rgba8(1, 1, &[200, 100, 50, 0]).unwrap();
    assert_eq!(image.pixel(0, 0), [50, 100, 200]);
}

#[test]
fn test_from_gray8_replicates_channels() {
    let image = DecodedImage::from_gray8(2, 1, &[7, 9]).unwrap();
    assert_eq!(image.as_bgr(), &[7, 7, 7, 9, 9, 9]);
}

#[test]
fn test_empty_image_rejected() {
    assert!(DecodedImage::from_bgr8(0, 5, vec![]).is_err());
    assert!(DecodedImage::from_bgr8(5, 0, vec![]).is_err());
}

#[test]
fn test_buffer_mismatch_rejected() {
    let result = DecodedImage::from_bgr8(2, 2, vec![0; 11]);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("mismatch"));
}

// ========================================================================
// Format detection
// ========================================================================

#[test]
fn test_format_from_filename() {
    assert_eq!(ImageFormat::from_filename("root.PNG"), Some(ImageFormat::Png));
    assert_eq!(ImageFormat::from_filename("a.b.tif"), Some(ImageFormat::Tiff));
    assert_eq!(ImageFormat::from_filename("scan.TIFF"), Some(ImageFormat::Tiff));
    assert_eq!(ImageFormat::from_filename("x.jpeg"), Some(ImageFormat::Jpeg));
    assert_eq!(ImageFormat::from_filename("x.jpg"), Some(ImageFormat::Jpeg));
    assert_eq!(ImageFormat::from_filename("notes.txt"), None);
    assert_eq!(ImageFormat::from_filename("no_extension"), None);
}

#[test]
fn test_decode_image_unsupported_extension() {
    let result = decode_image("plant.bmp");
    assert!(result.unwrap_err().contains("Unsupported file format"));
}

#[test]
fn test_decode_image_missing_file() {
    let result = decode_image("/definitely/not/here/plant.png");
    assert!(result.unwrap_err().contains("Failed to open"));
}

// ========================================================================
// PNG
// ========================================================================

#[test]
fn test_decode_png_rgb8() {
    let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
    let bytes = encode_png(2, 2, ::png::ColorType::Rgb, &rgb);

    let image = decode_image_from_bytes(&bytes, ImageFormat::Png).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel(0, 0), [0, 0, 255]);
    assert_eq!(image.pixel(1, 0), [0, 255, 0]);
    assert_eq!(image.pixel(0, 1), [255, 0, 0]);
    assert_eq!(image.pixel(1, 1), [30, 20, 10]);
}

#[test]
fn test_decode_png_rgba8_drops_alpha() {
    let rgba = [1, 2, 3, 0, 4, 5, 6, 128];
    let bytes = encode_png(2, 1, ::png::ColorType::Rgba, &rgba);

    let image = decode_image_from_bytes(&bytes, ImageFormat::Png).unwrap();
    assert_eq!(image.as_bgr(), &[3, 2, 1, 6, 5, 4]);
}

#[test]
fn test_decode_png_gray8() {
    let bytes = encode_png(3, 1, ::png::ColorType::Grayscale, &[0, 128, 255]);

    let image = decode_image_from_bytes(&bytes, ImageFormat::Png).unwrap();
    assert_eq!(image.as_bgr(), &[0, 0, 0, 128, 128, 128, 255, 255, 255]);
}

#[test]
fn test_decode_png_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("root.png");
    std::fs::write(&path, encode_png(1, 1, ::png::ColorType::Rgb, &[9, 8, 7])).unwrap();

    let image = decode_image(&path).unwrap();
    assert_eq!(image.pixel(0, 0), [7, 8, 9]);
}

#[test]
fn test_decode_png_garbage() {
    let result = decode_image_from_bytes(b"not a png at all", ImageFormat::Png);
    assert!(result.is_err());
}

// ========================================================================
// TIFF
// ========================================================================

#[test]
fn test_decode_tiff_rgb8() {
    let rgb: Vec<u8> = vec![200, 100, 50, 1, 2, 3];
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut encoder = ::tiff::encoder::TiffEncoder::new(&mut cursor).unwrap();
        encoder
            .write_image::<::tiff::encoder::colortype::RGB8>(2, 1, &rgb)
            .unwrap();
    }

    let image = decode_image_from_bytes(cursor.get_ref(), ImageFormat::Tiff).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 1);
    assert_eq!(image.as_bgr(), &[50, 100, 200, 3, 2, 1]);
}

#[test]
fn test_decode_tiff_gray16_scaled_to_8bit() {
    let gray: Vec<u16> = vec![0, 0x8000, 0xFFFF];
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut encoder = ::tiff::encoder::TiffEncoder::new(&mut cursor).unwrap();
        encoder
            .write_image::<::tiff::encoder::colortype::Gray16>(3, 1, &gray)
            .unwrap();
    }

    let image = decode_image_from_bytes(cursor.get_ref(), ImageFormat::Tiff).unwrap();
    assert_eq!(image.as_bgr(), &[0, 0, 0, 128, 128, 128, 255, 255, 255]);
}

// ========================================================================
// JPEG
// ========================================================================

#[test]
fn test_decode_jpeg_dimensions_and_color() {
    // Solid color survives lossy compression closely
    let rgb: Vec<u8> = [30u8, 60, 200].repeat(16 * 8);
    let buffer = image::RgbImage::from_raw(16, 8, rgb).unwrap();
    let mut cursor = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(buffer)
        .write_to(&mut cursor, image::ImageFormat::Jpeg)
        .unwrap();

    let decoded = decode_image_from_bytes(cursor.get_ref(), ImageFormat::Jpeg).unwrap();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 8);

    let [b, g, r] = decoded.pixel(8, 4);
    assert!((b as i32 - 200).abs() <= 8, "blue channel drifted: {}", b);
    assert!((g as i32 - 60).abs() <= 8, "green channel drifted: {}", g);
    assert!((r as i32 - 30).abs() <= 8, "red channel drifted: {}", r);
}
