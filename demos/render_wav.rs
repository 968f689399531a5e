//! Renders a shape and LFO sweep of the phase distortion oscillator to a WAV file.

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use pd_wavetable_osc::oscillator::phase_distortion_oscillator::{BlockParameters, Oscillator};
use pd_wavetable_osc::utils::q31_to_f32;
use pd_wavetable_osc::SampleRate;

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;
const DURATION_SECONDS: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let mut osc = Oscillator::with_default_tables(&SampleRate::new(SAMPLE_RATE as f32));
    osc.init();
    osc.note_on();

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    std::fs::create_dir_all("out")?;
    let mut writer = WavWriter::create("out/render_wav.wav", spec)?;

    let num_blocks = DURATION_SECONDS * SAMPLE_RATE as usize / BLOCK_SIZE;
    let half = num_blocks / 2;
    let mut out = [0i32; BLOCK_SIZE];

    log::info!("Rendering {num_blocks} blocks of {BLOCK_SIZE} samples");

    for n in 0..num_blocks {
        // First half sweeps the static offset, second half the LFO rate.
        if n < half {
            osc.set_shape(n as f32 / half as f32);
            osc.set_shift_shape(0.0);
        } else {
            osc.set_shape(0.9);
            osc.set_shift_shape((n - half) as f32 / half as f32);
        }
        osc.set_table_index((n * 4 / num_blocks) as i32);

        let block = BlockParameters {
            pitch: 45 << 8,
            shape_lfo: 0,
        };
        osc.render(&block, &mut out);

        for sample in out {
            writer.write_sample(q31_to_f32(sample) * 0.5)?;
        }
    }

    writer.finalize()?;
    log::info!("Wrote out/render_wav.wav");

    Ok(())
}
