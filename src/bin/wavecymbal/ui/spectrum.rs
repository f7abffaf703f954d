//! Spectrum analyzer widget
//!
//! Hann-windowed FFT sampled at log-spaced frequencies. The x axis is
//! `log10(Hz)` so the crossover ladder reads evenly.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

const SPECTRUM_BINS: usize = 96;
const MIN_FREQ: f32 = 20.0;
const FLOOR_DB: f64 = -100.0;
/// Per-frame fall of the displayed level, dB.
const FALLOFF_DB: f64 = 1.5;

pub struct SpectrumAnalyzer {
    window: Vec<f32>,
    /// FFT bin for each displayed point
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// (log10 Hz, dB)
    spectrum: Vec<(f64, f64)>,
    /// Normalizes a full-scale sine to 0 dB
    norm: f32,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let buffer_len = buffer_len.max(2);
        let fft = FftPlanner::new().plan_fft_forward(buffer_len);

        let denom = (buffer_len - 1) as f32;
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();
        let norm = 2.0 / window.iter().sum::<f32>();

        let max_freq = (sample_rate / 2.0).min(20_000.0).max(MIN_FREQ * 2.0);
        let ratio = max_freq / MIN_FREQ;
        let last_bin = buffer_len / 2 - 1;

        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f32 / (SPECTRUM_BINS - 1) as f32;
            let freq = MIN_FREQ * ratio.powf(t);
            let index = (freq * buffer_len as f32 / sample_rate).round() as usize;
            bin_indices.push(index.min(last_bin));
            spectrum.push(((freq as f64).log10(), FLOOR_DB));
        }

        Self {
            window,
            bin_indices,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            spectrum,
            norm,
        }
    }

    /// Analyze `buffer`. Ignored unless it is exactly the FFT length.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((bin, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *bin = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for ((_, level), &index) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            let magnitude = (self.scratch[index].norm() * self.norm).max(1e-6);
            let db = (20.0 * (magnitude as f64).log10()).max(FLOOR_DB);
            // Rise instantly, fall slowly.
            *level = db.max(*level - FALLOFF_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let min_x = spectrum.first().map_or(1.3, |(x, _)| *x);
    let max_x = spectrum.last().map_or(4.3, |(x, _)| *x).max(min_x + 0.1);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([min_x, max_x])
                .labels(vec!["20", "200", "2k", "20k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 0.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
