//! Audio stream setup and the real-time callback

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use tracing::{error, info};

use wave_cymbal::{CymbalSynth, EngineConfig, Params, SynthMessage, MAX_BLOCK_SIZE};

use crate::ui::{UiApp, VIS_BUFFER_SIZE};

/// Control messages in flight between the UI and the audio thread.
const MESSAGE_CAPACITY: usize = 256;
/// Block size the smoothers are tuned for. Hosts may call with any size.
const EXPECTED_BLOCK_SIZE: usize = 512;

pub fn run() -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    info!(sample_rate, channels, "opened output device");

    let params = Params::default();
    let (msg_tx, msg_rx) = RingBuffer::<SynthMessage>::new(MESSAGE_CAPACITY);
    let (mut vis_tx, vis_rx) = RingBuffer::<f32>::new(VIS_BUFFER_SIZE * 8);

    let engine = EngineConfig {
        sample_rate,
        block_size: EXPECTED_BLOCK_SIZE,
    };
    let mut synth = CymbalSynth::new(engine, params, msg_rx);
    let mut left = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut right = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            let total_frames = data.len() / channels;
            let mut frames_written = 0;

            while frames_written < total_frames {
                let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                let (l, r) = (&mut left[..frames], &mut right[..frames]);
                synth.render_block(l, r);

                let out = &mut data[frames_written * channels..(frames_written + frames) * channels];
                for (i, frame) in out.chunks_exact_mut(channels).enumerate() {
                    for (ch, sample) in frame.iter_mut().enumerate() {
                        *sample = if ch % 2 == 0 { l[i] } else { r[i] };
                    }
                }

                // Drop samples when the UI falls behind.
                for &sample in l.iter() {
                    if vis_tx.push(sample).is_err() {
                        break;
                    }
                }

                frames_written += frames;
            }
        },
        |err| error!("audio stream error: {}", err),
        None,
    )?;

    stream.play()?;

    let mut terminal = ratatui::init();
    let result = UiApp::new(msg_tx, vis_rx, params, sample_rate).run(&mut terminal);
    ratatui::restore();

    info!("shutting down");
    result
}
