//! Wavetable oscillator with self-modulating phase distortion.
//!
//! Two phase accumulators run side by side. The driver phase advances at the
//! pitch increment and reads the modulator table. The output phase advances at
//! the pitch increment scaled by the soft-clipped modulation index and reads
//! the selected wave table.
//!
//! Parameters:
//! - *shape:* distortion amount, centered at 0.5 (no distortion).
//! - *shift-shape:* LFO rate. Zero turns the LFO off and applies *shape* as a
//!   static offset instead.
//! - *table index:* wave table selection, clamped when a block starts.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use alloc::boxed::Box;

use super::lfo::{lfo_rate_index, Lfo};
use super::modulation::{clipped_modulation_index, modulated_increment, ModulationRouting};
use super::pitch::{note_to_pitch, PitchConverter, PitchTable};
use super::wave_table::{WaveTableStore, NUM_WAVE_TABLES};
use crate::resources::waves::wave_tables;
use crate::utils::clip01;
use crate::utils::fixed::{Phase, Q7_24};
use crate::utils::parameter_interpolator::LinearSmoother;
use crate::SampleRate;

/// Parameters set by the host between blocks.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Distortion amount in the range from `0.0` to `1.0`. Default is `0.0`.
    pub shape: f32,

    /// LFO rate in the range from `0.0` to `1.0`, `0.0` disables the LFO. Default is `0.0`.
    pub shift_shape: f32,

    /// Wave table selection, clamped to the store size at render time. Default is `0`.
    pub table_index: i32,
}

/// Per-block host input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockParameters {
    /// Note number, integer note in the high byte and 1/256 semitone in the low byte.
    pub pitch: u16,

    /// Shape modulation input, valid at the end of the block.
    pub shape_lfo: i32,
}

#[derive(Debug, Clone)]
pub struct Oscillator<'a, const N: usize = NUM_WAVE_TABLES> {
    parameters: Parameters,

    pitch_converter: Box<dyn PitchConverter>,
    wave_tables: &'a WaveTableStore<N>,

    // Oscillator state.
    driver_phase: Phase,
    output_phase: Phase,
    driver_increment: u32,
    lfo: Lfo,

    // Last block's inputs.
    pitch: Q7_24,
    shape_lfo: i32,
}

impl Oscillator<'static> {
    /// Oscillator on the default wave tables with a pitch table for `sample_rate`.
    pub fn with_default_tables(sample_rate: &SampleRate) -> Self {
        Self::new(Box::new(PitchTable::new(sample_rate)), wave_tables())
    }
}

impl<'a, const N: usize> Oscillator<'a, N> {
    pub fn new(
        pitch_converter: Box<dyn PitchConverter>,
        wave_tables: &'a WaveTableStore<N>,
    ) -> Self {
        log::debug!("New oscillator on {N} wave tables");

        Self {
            parameters: Parameters::default(),
            pitch_converter,
            wave_tables,
            driver_phase: Phase::ZERO,
            output_phase: Phase::ZERO,
            driver_increment: 0,
            lfo: Lfo::new(),
            pitch: Q7_24::ZERO,
            shape_lfo: 0,
        }
    }

    /// Resets parameters and state to their power-on values.
    pub fn init(&mut self) {
        self.parameters = Parameters::default();
        self.driver_phase = Phase::ZERO;
        self.output_phase = Phase::ZERO;
        self.driver_increment = 0;
        self.lfo.init();
        self.pitch = Q7_24::ZERO;
        self.shape_lfo = 0;
    }

    /// Restarts both phase accumulators so every note starts on sample 0.
    pub fn note_on(&mut self) {
        self.driver_phase = Phase::ZERO;
        self.output_phase = Phase::ZERO;
    }

    /// Leaves the state untouched, the next `note_on` takes it from here.
    pub fn note_off(&mut self) {}

    pub fn set_shape(&mut self, shape: f32) {
        self.parameters.shape = clip01(shape);
    }

    pub fn set_shift_shape(&mut self, shift_shape: f32) {
        self.parameters.shift_shape = clip01(shift_shape);
    }

    /// Stored as given, clamped when a block starts.
    pub fn set_table_index(&mut self, table_index: i32) {
        self.parameters.table_index = table_index;
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Modulation routing the current parameters produce.
    pub fn routing(&self) -> ModulationRouting {
        ModulationRouting::new(
            self.parameters.shape,
            lfo_rate_index(self.parameters.shift_shape),
        )
    }

    pub fn driver_phase(&self) -> Phase {
        self.driver_phase
    }

    pub fn output_phase(&self) -> Phase {
        self.output_phase
    }

    pub fn driver_increment(&self) -> u32 {
        self.driver_increment
    }

    pub fn lfo(&self) -> &Lfo {
        &self.lfo
    }

    /// Pitch of the last rendered block, in octaves relative to A4.
    pub fn pitch(&self) -> Q7_24 {
        self.pitch
    }

    /// Shape modulation input, ramped across each block and snapped to the
    /// block's target value at its end.
    pub fn shape_lfo(&self) -> i32 {
        self.shape_lfo
    }

    /// Renders one block of Q1.31 samples.
    pub fn render(&mut self, block: &BlockParameters, out: &mut [i32]) {
        if out.is_empty() {
            return;
        }

        let pitch = note_to_pitch(block.pitch);
        let converter_pitch = pitch.to_q15_16();

        let wave_tables = self.wave_tables;
        let table = wave_tables.get(self.parameters.table_index);
        let modulator = wave_tables.modulator();

        let rate_index = lfo_rate_index(self.parameters.shift_shape);
        self.lfo.set_rate(rate_index);

        let routing = ModulationRouting::new(self.parameters.shape, rate_index);
        let offset = routing.static_offset();
        let depth = routing.depth();

        let shape_lfo_modulation =
            LinearSmoother::new(self.shape_lfo, block.shape_lfo, out.len());

        for out_sample in out.iter_mut() {
            *out_sample = table.lookup(self.output_phase).to_q1_31();

            self.driver_increment = self.pitch_converter.convert(converter_pitch);
            self.driver_phase = self.driver_phase.advance(self.driver_increment);

            let lfo = self.lfo.next(depth);
            let index =
                clipped_modulation_index(modulator.lookup(self.driver_phase), offset, lfo);

            self.output_phase = self
                .output_phase
                .advance_signed(modulated_increment(self.driver_increment, index));

            shape_lfo_modulation.update(&mut self.shape_lfo);
        }

        self.shape_lfo = block.shape_lfo;
        self.pitch = pitch;
    }
}
