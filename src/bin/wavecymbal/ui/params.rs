//! Editable parameter list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use wave_cymbal::Params;

/// Continuous parameters reachable with the arrow keys. Toggles and enums
/// have their own hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Gain,
    Plates,
    Stack,
    Decay,
    Damping,
    MinFrequency,
    MaxFrequency,
    BandpassQ,
    Distance,
    PulsePosition,
    PulseWidth,
    CombFeedback,
    CombTime,
    RandomAmount,
    Smoothness,
}

impl ParamField {
    pub const ALL: [ParamField; 15] = [
        ParamField::Gain,
        ParamField::Plates,
        ParamField::Stack,
        ParamField::Decay,
        ParamField::Damping,
        ParamField::MinFrequency,
        ParamField::MaxFrequency,
        ParamField::BandpassQ,
        ParamField::Distance,
        ParamField::PulsePosition,
        ParamField::PulseWidth,
        ParamField::CombFeedback,
        ParamField::CombTime,
        ParamField::RandomAmount,
        ParamField::Smoothness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Gain => "gain",
            ParamField::Plates => "plates",
            ParamField::Stack => "stack",
            ParamField::Decay => "decay",
            ParamField::Damping => "damping",
            ParamField::MinFrequency => "min freq",
            ParamField::MaxFrequency => "max freq",
            ParamField::BandpassQ => "bandpass q",
            ParamField::Distance => "distance",
            ParamField::PulsePosition => "pulse pos",
            ParamField::PulseWidth => "pulse width",
            ParamField::CombFeedback => "comb fb",
            ParamField::CombTime => "comb time",
            ParamField::RandomAmount => "random",
            ParamField::Smoothness => "smoothness",
        }
    }

    pub fn display(self, params: &Params) -> String {
        match self {
            ParamField::Gain => format!("{:.2}", params.gain),
            ParamField::Plates => format!("{}", params.cymbal_count()),
            ParamField::Stack => format!("{}", params.stack_count()),
            ParamField::Decay => format!("{:.2}", params.decay),
            ParamField::Damping => format!("{:.3}", params.damping),
            ParamField::MinFrequency => format!("{:.0} Hz", params.min_frequency),
            ParamField::MaxFrequency => format!("{:.0} Hz", params.max_frequency),
            ParamField::BandpassQ => format!("{:.2}", params.bandpass_q),
            ParamField::Distance => format!("{:.2}", params.distance),
            ParamField::PulsePosition => format!("{:.2}", params.pulse_position),
            ParamField::PulseWidth => format!("{:.2}", params.pulse_width),
            ParamField::CombFeedback => format!("{:.2}", params.pick_comb_feedback),
            ParamField::CombTime => format!("{:.1} ms", params.pick_comb_time * 1000.0),
            ParamField::RandomAmount => format!("{:.2}", params.random_amount),
            ParamField::Smoothness => format!("{:.0} ms", params.smoothness * 1000.0),
        }
    }

    /// Nudge the field by `steps` increments, clamped to its range.
    pub fn adjust(self, params: &mut Params, steps: i32) {
        let s = steps as f32;
        match self {
            ParamField::Gain => params.gain = (params.gain + 0.05 * s).clamp(0.0, 2.0),
            ParamField::Plates => {
                params.n_cymbal = params
                    .n_cymbal
                    .saturating_add_signed(steps)
                    .min(Params::MAX_N_CYMBAL)
            }
            ParamField::Stack => {
                params.stack = params
                    .stack
                    .saturating_add_signed(steps)
                    .min(Params::MAX_STACK)
            }
            ParamField::Decay => params.decay = (params.decay + 0.25 * s).clamp(0.0, 20.0),
            ParamField::Damping => {
                params.damping = (params.damping + 0.01 * s).clamp(0.0, Params::MAX_DAMPING)
            }
            ParamField::MinFrequency => {
                params.min_frequency = (params.min_frequency * 1.1f32.powf(s)).clamp(20.0, 10_000.0)
            }
            ParamField::MaxFrequency => {
                params.max_frequency = (params.max_frequency * 1.1f32.powf(s)).clamp(20.0, 20_000.0)
            }
            ParamField::BandpassQ => {
                params.bandpass_q = (params.bandpass_q + 0.05 * s).clamp(0.05, 1.0)
            }
            ParamField::Distance => params.distance = (params.distance + 0.1 * s).clamp(0.0, 8.0),
            ParamField::PulsePosition => {
                params.pulse_position = (params.pulse_position + 0.05 * s).clamp(0.0, 1.0)
            }
            ParamField::PulseWidth => {
                params.pulse_width = (params.pulse_width + 0.05 * s).clamp(0.0, 1.0)
            }
            ParamField::CombFeedback => {
                params.pick_comb_feedback = (params.pick_comb_feedback + 0.05 * s).clamp(0.0, 0.99)
            }
            ParamField::CombTime => {
                params.pick_comb_time = (params.pick_comb_time + 0.0005 * s).clamp(0.0001, 0.2)
            }
            ParamField::RandomAmount => {
                params.random_amount = (params.random_amount + 0.05 * s).clamp(0.0, 1.0)
            }
            ParamField::Smoothness => {
                params.smoothness = (params.smoothness + 0.01 * s).clamp(0.0, 1.0)
            }
        }
    }
}

pub fn render_params(frame: &mut Frame, area: Rect, params: &Params, selected: usize) {
    let block = Block::default()
        .title(format!(" {} / {} ", params.osc_type.name(), params.cutoff_map.name()))
        .borders(Borders::ALL);

    let items: Vec<ListItem> = ParamField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<12}", field.label()), style),
                Span::styled(format!("{:>12} ", field.display(params)), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_counts() {
        let mut params = Params::default();
        for _ in 0..10 {
            ParamField::Plates.adjust(&mut params, 1);
        }
        assert_eq!(params.cymbal_count(), 4);
        for _ in 0..10 {
            ParamField::Plates.adjust(&mut params, -1);
        }
        assert_eq!(params.cymbal_count(), 1);
    }

    #[test]
    fn test_adjust_clamps_damping() {
        let mut params = Params::default();
        ParamField::Damping.adjust(&mut params, 1000);
        assert_eq!(params.damping, Params::MAX_DAMPING);
    }
}
