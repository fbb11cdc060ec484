use std::f64::consts::PI;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Scalp electrodes with their dominant rhythm (Hz) and amplitude (μV).
const EEG_CHANNELS: &[(&str, f64, f64)] = &[
    ("Fp1", 6.0, 25.0),
    ("Fp2", 6.0, 25.0),
    ("F3", 10.0, 20.0),
    ("F4", 10.0, 20.0),
    ("C3", 12.0, 15.0),
    ("C4", 12.0, 15.0),
    ("P3", 10.0, 30.0),
    ("P4", 10.0, 30.0),
    ("O1", 10.0, 40.0),
    ("O2", 10.0, 40.0),
];

const SAMPLE_RATE: f64 = 300.0;
const DURATION_S: f64 = 20.0;

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_recording.csv";

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)?;

    // ---- Metadata preamble ----
    writer.write_record(["Device", "Synthetic 10-20 headset"])?;
    writer.write_record(["Subject", "demo"])?;
    let rate = SAMPLE_RATE.to_string();
    writer.write_record(["Sample_Frequency_(Hz)", rate.as_str()])?;
    writer.write_record(["Filter", "none"])?;

    // ---- Header ----
    let mut header: Vec<String> = vec!["Time".to_string()];
    header.extend(EEG_CHANNELS.iter().map(|(name, _, _)| format!("**{name}**")));
    header.extend(
        ["X1:LEOG", "X2:REOG", "CM", "Trigger", "Time_Offset", "ADC_Status", "ADC_Sequence", "Event", "Comments"]
            .iter()
            .map(|s| s.to_string()),
    );
    writer.write_record(&header)?;

    // ---- Rows ----
    let n_samples = (SAMPLE_RATE * DURATION_S) as usize;
    for i in 0..n_samples {
        let t = i as f64 / SAMPLE_RATE;
        let mut row: Vec<String> = vec![format!("{t:.4}")];

        for &(_, freq, amp) in EEG_CHANNELS {
            let v = amp * (2.0 * PI * freq * t).sin() + rng.gauss(0.0, amp * 0.2);
            row.push(format!("{v:.3}"));
        }

        // Ocular channels in mV: slow drift plus a blink every 4 s.
        let blink = if (t % 4.0) < 0.25 { 0.8 } else { 0.0 };
        for sign in [1.0, -1.0] {
            let v = sign * (0.1 * (2.0 * PI * 0.3 * t).sin() + blink) + rng.gauss(0.0, 0.02);
            row.push(format!("{v:.4}"));
        }

        row.push(format!("{:.3}", rng.gauss(0.0, 1.0)));
        let trigger = u8::from(blink > 0.0 && (t % 4.0) < 1.0 / SAMPLE_RATE);
        row.push(trigger.to_string());
        row.push("0".to_string());
        row.push("0".to_string());
        row.push((i % 256).to_string());
        row.push(trigger.to_string());
        row.push(if trigger == 1 { "blink".to_string() } else { String::new() });

        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!(
        "Wrote {n_samples} samples ({} EEG, 2 ocular, 1 reference channels) to {output_path}",
        EEG_CHANNELS.len()
    );
    Ok(())
}
