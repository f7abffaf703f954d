//! Status bar - note, source, toggles and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use wave_cymbal::{synth::midi_note_to_frequency, Params};

pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

fn toggle(label: &str, on: bool) -> Span<'static> {
    Span::styled(
        format!("{} ", label),
        Style::default().fg(if on { Color::Green } else { Color::DarkGray }),
    )
}

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    sample_rate: f32,
    pitch: i16,
    held: bool,
    params: &Params,
    stats: &AudioStats,
) {
    let block = Block::default().title(" wavecymbal ").borders(Borders::ALL);

    let line = Line::from(vec![
        Span::styled(
            format!(" note {} ({:.1} Hz)  ", pitch, midi_note_to_frequency(pitch, 0.0)),
            Style::default().fg(if held { Color::Green } else { Color::Cyan }),
        ),
        Span::styled(
            format!("seed {}  ", params.seed),
            Style::default().fg(Color::White),
        ),
        toggle("collide", params.collision),
        toggle("excite", params.excitation),
        toggle("retrig", params.retrigger),
        Span::styled(
            format!(" {:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.3}  RMS: {:.3}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
