//! WAV trimming.

use hound::{SampleFormat, WavReader, WavWriter};
use skim_core::{Result, SkimError};
use std::io::Cursor;

/// Cut `[start_secs, end_secs)` out of a WAV file and return it as a new
/// WAV with the same spec.
///
/// Rejects negative times, a start at or past the end of the audio, and
/// `end <= start`. An end past the audio is clamped to its duration.
pub fn trim_wav(bytes: &[u8], start_secs: f64, end_secs: f64) -> Result<Vec<u8>> {
    let mut reader = WavReader::new(Cursor::new(bytes))
        .map_err(|e| SkimError::UnsupportedFormat(format!("not a WAV file: {e}")))?;
    let spec = reader.spec();
    let frames = reader.duration() as u64;
    let duration_secs = frames as f64 / spec.sample_rate as f64;

    if start_secs < 0.0 || end_secs < 0.0 {
        return Err(SkimError::InvalidTrimRange(
            "start and end must be non-negative".into(),
        ));
    }
    if start_secs >= duration_secs {
        return Err(SkimError::InvalidTrimRange(format!(
            "start {start_secs}s is past the end of the audio ({duration_secs:.3}s)"
        )));
    }
    if end_secs <= start_secs {
        return Err(SkimError::InvalidTrimRange(
            "end must be greater than start".into(),
        ));
    }

    let start_frame = (start_secs * spec.sample_rate as f64) as u64;
    let end_frame = ((end_secs * spec.sample_rate as f64) as u64).min(frames);
    let channels = spec.channels as u64;
    let skip = (start_frame * channels) as usize;
    let take = ((end_frame - start_frame) * channels) as usize;

    let mut out = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut out), spec)
            .map_err(|e| SkimError::Media(e.to_string()))?;
        match spec.sample_format {
            SampleFormat::Int => {
                for sample in reader.samples::<i32>().skip(skip).take(take) {
                    let sample = sample.map_err(|e| SkimError::Media(e.to_string()))?;
                    writer
                        .write_sample(sample)
                        .map_err(|e| SkimError::Media(e.to_string()))?;
                }
            }
            SampleFormat::Float => {
                for sample in reader.samples::<f32>().skip(skip).take(take) {
                    let sample = sample.map_err(|e| SkimError::Media(e.to_string()))?;
                    writer
                        .write_sample(sample)
                        .map_err(|e| SkimError::Media(e.to_string()))?;
                }
            }
        }
        writer
            .finalize()
            .map_err(|e| SkimError::Media(e.to_string()))?;
    }

    tracing::debug!(
        start_secs,
        end_secs,
        frames = end_frame - start_frame,
        "trimmed wav"
    );
    Ok(out)
}
