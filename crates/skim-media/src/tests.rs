use crate::{resize, trim_wav};
use skim_core::SkimError;
use std::io::Cursor;

fn sample_wav(seconds: f64, sample_rate: u32, channels: u16) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        let frames = (seconds * sample_rate as f64) as u64;
        for i in 0..frames {
            for _ in 0..channels {
                writer.write_sample((i % 128) as i16).unwrap();
            }
        }
        writer.finalize().unwrap();
    }
    bytes
}

fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 0])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

// ========== Audio ==========

#[test]
fn test_trim_wav_basic() {
    let wav = sample_wav(1.0, 8000, 1);
    let trimmed = trim_wav(&wav, 0.25, 0.75).unwrap();
    let reader = hound::WavReader::new(Cursor::new(trimmed.as_slice())).unwrap();
    assert_eq!(reader.duration(), 4000);
    assert_eq!(reader.spec().sample_rate, 8000);
}

#[test]
fn test_trim_wav_stereo() {
    let wav = sample_wav(0.5, 8000, 2);
    let trimmed = trim_wav(&wav, 0.0, 0.25).unwrap();
    let reader = hound::WavReader::new(Cursor::new(trimmed.as_slice())).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.duration(), 2000);
}

#[test]
fn test_trim_wav_end_clamped_to_duration() {
    let wav = sample_wav(0.5, 8000, 1);
    let trimmed = trim_wav(&wav, 0.0, 10.0).unwrap();
    let reader = hound::WavReader::new(Cursor::new(trimmed.as_slice())).unwrap();
    assert_eq!(reader.duration(), 4000);
}

#[test]
fn test_trim_wav_negative_times() {
    let wav = sample_wav(0.5, 8000, 1);
    let err = trim_wav(&wav, -1.0, 0.2).unwrap_err();
    assert!(matches!(err, SkimError::InvalidTrimRange(_)));
}

#[test]
fn test_trim_wav_start_past_end() {
    let wav = sample_wav(0.5, 8000, 1);
    let err = trim_wav(&wav, 2.0, 3.0).unwrap_err();
    assert!(matches!(err, SkimError::InvalidTrimRange(_)));
}

#[test]
fn test_trim_wav_end_before_start() {
    let wav = sample_wav(0.5, 8000, 1);
    let err = trim_wav(&wav, 0.3, 0.1).unwrap_err();
    assert!(matches!(err, SkimError::InvalidTrimRange(_)));
}

#[test]
fn test_trim_wav_not_a_wav() {
    let err = trim_wav(b"definitely not audio", 0.0, 1.0).unwrap_err();
    assert!(matches!(err, SkimError::UnsupportedFormat(_)));
}

// ========== Image ==========

#[test]
fn test_resize_png() {
    let png = sample_png(10, 10);
    let resized = resize(&png, 4, 6).unwrap();
    assert_eq!(resized.extension, "png");
    let img = image::load_from_memory(&resized.data).unwrap();
    assert_eq!(img.width(), 4);
    assert_eq!(img.height(), 6);
}

#[test]
fn test_resize_upscale() {
    let png = sample_png(4, 4);
    let resized = resize(&png, 16, 8).unwrap();
    let img = image::load_from_memory(&resized.data).unwrap();
    assert_eq!((img.width(), img.height()), (16, 8));
}

#[test]
fn test_resize_zero_dimension() {
    let png = sample_png(4, 4);
    assert!(resize(&png, 0, 4).is_err());
    assert!(resize(&png, 4, 0).is_err());
}

#[test]
fn test_resize_garbage_input() {
    let err = resize(b"not an image", 4, 4).unwrap_err();
    assert!(matches!(err, SkimError::UnsupportedFormat(_)));
}
