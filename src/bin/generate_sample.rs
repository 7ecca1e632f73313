//! Writes a synthetic timing file in the profiler's export format
//! (`index; milliseconds`, one line per sample) to the viewer's input path.

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

#[allow(dead_code)]
#[path = "../config.rs"]
mod config;

#[cfg(test)]
#[allow(dead_code)]
#[path = "../data/mod.rs"]
mod data;

const SAMPLE_COUNT: usize = 200;
const SEED: u64 = 42;

/// Kernel time model: a fixed cost, a warm-up that decays over the first
/// frames and a spike every 50th frame, plus gaussian jitter.
struct KernelTimeModel {
    base_ms: f64,
    warmup_ms: f64,
    warmup_frames: f64,
    spike_ms: f64,
    spike_every: usize,
    jitter: Normal<f64>,
}

impl KernelTimeModel {
    fn new() -> Result<Self> {
        Ok(KernelTimeModel {
            base_ms: 0.42,
            warmup_ms: 0.35,
            warmup_frames: 12.0,
            spike_ms: 0.6,
            spike_every: 50,
            jitter: Normal::new(0.0, 0.03).context("jitter distribution")?,
        })
    }

    fn time_ms<R: rand::Rng>(&self, frame: usize, rng: &mut R) -> f64 {
        let warmup = self.warmup_ms * (-(frame as f64) / self.warmup_frames).exp();
        let spike = if frame % self.spike_every == self.spike_every - 1 {
            self.spike_ms
        } else {
            0.0
        };
        (self.base_ms + warmup + spike + self.jitter.sample(rng)).max(0.001)
    }
}

/// Write one `frame; time` line per entry of `times`, frames counted from 0.
fn write_samples<W: Write>(out: W, times: &[f64]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(out);

    for (frame, time) in times.iter().enumerate() {
        // Same spacing as the profiler export: "i; value".
        writer
            .write_record([frame.to_string(), format!(" {time}")])
            .with_context(|| format!("writing row {frame}"))?;
    }
    writer.flush().context("flushing output")?;
    Ok(())
}

fn main() -> Result<()> {
    let model = KernelTimeModel::new()?;
    let mut rng = StdRng::seed_from_u64(SEED);
    let times: Vec<f64> = (0..SAMPLE_COUNT)
        .map(|frame| model.time_ms(frame, &mut rng))
        .collect();

    let path = config::INPUT_CSV;
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    write_samples(file, &times)?;

    println!("Wrote {SAMPLE_COUNT} samples to {path}");
    Ok(())
}
