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
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Nominal per-capita growth rate for the decade containing `year`.
fn decade_growth(year: i32) -> f64 {
    match year {
        ..=1969 => 0.065,
        1970..=1979 => 0.105,
        1980..=1989 => 0.070,
        1990..=1999 => 0.030,
        2000..=2009 => 0.055,
        2010..=2019 => 0.012,
        _ => 0.030,
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "Canada_GDP.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Year", "GDP-Per"])
        .expect("Failed to write header");

    // GDP per capita in current USD, starting from the 1960 value and
    // compounding decade-level growth with year-to-year noise.
    let mut gdp = 2259.25;
    let mut rows = 0u32;
    for year in 1960..=2023 {
        writer
            .write_record([year.to_string(), format!("{gdp:.2}")])
            .expect("Failed to write row");
        rows += 1;

        let growth = decade_growth(year) + rng.gauss(0.0, 0.02);
        gdp *= 1.0 + growth;
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} rows (1960-2023) to {output_path}");
}
