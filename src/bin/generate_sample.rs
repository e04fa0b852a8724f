use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use subio::{build_paths, write_frame, Column, Frame};

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
}

/// Round to cents so the CSV stays readable.
fn cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One transaction table: `id`, `merchant`, `hour`, optionally `amount`.
fn transactions(ids: std::ops::Range<i64>, with_amount: bool, rng: &mut SimpleRng) -> Result<Frame> {
    let merchants = ["grocery", "fuel", "online", "travel"];

    let mut merchant = Vec::new();
    let mut hour = Vec::new();
    let mut amount = Vec::new();
    for _ in ids.clone() {
        let m = (rng.next_u64() % merchants.len() as u64) as usize;
        merchant.push(merchants[m]);
        hour.push((rng.next_u64() % 24) as i64);
        amount.push(cents(5.0 + rng.next_f64() * 250.0 * (m + 1) as f64));
    }

    let mut columns = vec![
        Column::new("id", ids),
        Column::new("merchant", merchant),
        Column::new("hour", hour),
    ];
    if with_amount {
        columns.push(Column::new("amount", amount));
    }
    Frame::new(columns).context("building sample frame")
}

/// Write an input table; these are not submissions, so nothing is printed.
fn write_table(frame: &Frame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_frame(frame, file).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    let paths = build_paths(&root);
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all(&paths.train)
        .with_context(|| format!("creating {}", paths.train.display()))?;

    let train = transactions(0..800, true, &mut rng)?;
    write_table(&train, &paths.train.join("transactions.csv"))?;

    let test = transactions(800..1000, false, &mut rng)?;
    write_table(&test, &paths.test)?;

    let sample = Frame::new(vec![
        Column::new("id", 800..1000i64),
        Column::new("amount", std::iter::repeat(0.0).take(200)),
    ])?;
    write_table(&sample, &paths.sample_submission)?;

    info!(
        "Wrote {} train rows and {} test rows under {}",
        train.num_rows(),
        test.num_rows(),
        root.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table_writes_plain_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.csv");
        let mut rng = SimpleRng::new(7);
        let frame = transactions(0..3, false, &mut rng).unwrap();

        write_table(&frame, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("id,merchant,hour\n0,"), "{text}");
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_write_table_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("test.csv");
        let frame = Frame::new(vec![Column::new("id", [1i64])]).unwrap();

        let err = write_table(&frame, &path).unwrap_err();
        assert!(err.to_string().starts_with("creating "));
    }
}
