use crate::error::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const DELIMITER: &str = ". ";

/// Chooses an index in `[0, len)`.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

pub struct RandomPicker<R>(pub R);

impl RandomPicker<StdRng> {
    pub fn clock_seeded() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();

        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

pub fn read_phrases(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let phrases = parse_phrases(BufReader::new(file))?;
    debug!("Read {} phrases from {}", phrases.len(), path.display());

    Ok(phrases)
}

/// Lines look like `<index>. <phrase>`. Anything without the `". "`
/// delimiter is dropped. Bytes that are not valid UTF-8 are replaced
/// rather than rejected.
pub fn parse_phrases(reader: impl BufRead) -> Result<Vec<String>, Error> {
    let mut phrases = Vec::new();

    for line in reader.split(b'\n') {
        let line = line.map_err(Error::Read)?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((_, phrase)) = line.split_once(DELIMITER) {
            phrases.push(phrase.to_string());
        }
    }

    Ok(phrases)
}

/// # Panics
///
/// If `phrases` is empty.
pub fn select_phrase<'a>(phrases: &'a [String], picker: &mut impl Picker) -> &'a str {
    &phrases[picker.pick(phrases.len())]
}
