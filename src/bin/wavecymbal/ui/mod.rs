//! TUI for wavecymbal
//!
//! Parameter panel on the left, oscilloscope and spectrum on the right.

mod params;
mod spectrum;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;
use tracing::{debug, warn};

use wave_cymbal::{CrossoverType, OscType, Params, SynthMessage};

use params::{render_params, ParamField};
use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size, also the FFT length
pub const VIS_BUFFER_SIZE: usize = 2048;

const LOWEST_PITCH: i16 = 24;
const HIGHEST_PITCH: i16 = 108;

pub struct UiApp {
    msg_tx: Producer<SynthMessage>,
    audio_rx: Consumer<f32>,
    params: Params,
    sample_rate: f32,
    selected: usize,
    pitch: i16,
    next_id: i32,
    held: Option<i32>,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        msg_tx: Producer<SynthMessage>,
        audio_rx: Consumer<f32>,
        params: Params,
        sample_rate: f32,
    ) -> Self {
        Self {
            msg_tx,
            audio_rx,
            params,
            sample_rate,
            selected: 0,
            pitch: 60,
            next_id: 0,
            held: None,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| self.render(frame))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.send(SynthMessage::AllNotesOff);
        Ok(())
    }

    /// Keep the newest VIS_BUFFER_SIZE samples
    fn poll_audio(&mut self) {
        let mut received = 0;
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
            received += 1;
        }
        if received > 0 && self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn send(&mut self, msg: SynthMessage) {
        if self.msg_tx.push(msg).is_err() {
            warn!(?msg, "message queue full, dropping");
        }
    }

    fn push_params(&mut self) {
        let params = self.params;
        self.send(SynthMessage::SetParams(params));
    }

    fn strike(&mut self) {
        if let Some(id) = self.held.take() {
            self.send(SynthMessage::NoteOff { id });
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        debug!(id, pitch = self.pitch, "strike");
        self.send(SynthMessage::NoteOn {
            id,
            pitch: self.pitch,
            tuning: 0.0,
            velocity: 1.0,
        });
        self.held = Some(id);
    }

    fn release(&mut self) {
        if let Some(id) = self.held.take() {
            self.send(SynthMessage::NoteOff { id });
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let fields = ParamField::ALL.len();
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.strike(),
            KeyCode::Enter => self.release(),
            KeyCode::Up => self.selected = (self.selected + fields - 1) % fields,
            KeyCode::Down => self.selected = (self.selected + 1) % fields,
            KeyCode::Left | KeyCode::Right => {
                let steps = if key == KeyCode::Left { -1 } else { 1 };
                ParamField::ALL[self.selected].adjust(&mut self.params, steps);
                self.push_params();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.pitch = (self.pitch + 1).min(HIGHEST_PITCH)
            }
            KeyCode::Char('-') => self.pitch = (self.pitch - 1).max(LOWEST_PITCH),
            KeyCode::Char('c') => {
                self.params.collision = !self.params.collision;
                self.push_params();
            }
            KeyCode::Char('e') => {
                self.params.excitation = !self.params.excitation;
                self.push_params();
            }
            KeyCode::Char('r') => {
                self.params.retrigger = !self.params.retrigger;
                self.push_params();
            }
            KeyCode::Char('m') => {
                self.params.cutoff_map = match self.params.cutoff_map {
                    CrossoverType::Log => CrossoverType::Linear,
                    CrossoverType::Linear => CrossoverType::Log,
                };
                self.push_params();
            }
            KeyCode::Char('o') => {
                let next = (self.params.osc_type.index() + 1) % OscType::ALL.len() as u32;
                self.params.osc_type = OscType::from_index(next);
                self.push_params();
            }
            KeyCode::Char('s') => {
                self.params.seed = self.params.seed.wrapping_add(1);
                self.push_params();
            }
            KeyCode::Char('[') => self.send(SynthMessage::PitchBend { value: 0.0 }),
            KeyCode::Char(']') => self.send(SynthMessage::PitchBend { value: 1.0 }),
            KeyCode::Char('\\') => self.send(SynthMessage::PitchBend { value: 0.5 }),
            KeyCode::Backspace => {
                self.held = None;
                self.send(SynthMessage::AllNotesOff);
                self.send(SynthMessage::Reset);
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(
            frame,
            rows[0],
            self.sample_rate,
            self.pitch,
            self.held.is_some(),
            &self.params,
            &stats,
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(20)])
            .split(rows[1]);

        render_params(frame, body[0], &self.params, self.selected);

        let scopes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body[1]);
        render_waveform(frame, scopes[0], &self.audio_buffer);
        render_spectrum(frame, scopes[1], self.spectrum.data());

        let help = Paragraph::new(
            " [Space] Strike [Enter] Release [↑↓←→] Edit [+/-] Pitch [[ ] \\] Bend \
             [o] Osc [c] Collide [e] Excite [r] Retrig [m] Map [s] Seed [⌫] Reset [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[2]);
    }
}
