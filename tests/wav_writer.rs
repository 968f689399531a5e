//! Writer for WAV files

use std::path::Path;

use hound::*;

use pd_wavetable_osc::utils::q31_to_f32;
use pd_wavetable_osc::SAMPLE_RATE;

/// Writes Q1.31 sample data as WAV file in 32-bit float format.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    samples: &[i32],
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    let parent = path.parent().unwrap();
    std::fs::create_dir_all(parent).ok();

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).map_err(std::io::Error::other)?;

    for sample in samples.iter().map(|sample| q31_to_f32(*sample)) {
        writer.write_sample(sample).map_err(std::io::Error::other)?;
        writer.write_sample(sample).map_err(std::io::Error::other)?;
    }

    writer.finalize().map_err(std::io::Error::other)
}
