use std::io::BufRead;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::{debug, info, warn};

use crate::classify::{classify, BinTable};
use crate::shared::ScoreCell;

/// Reads one score per line into `cell`, skipping blank, malformed and
/// non-UTF-8 lines. Returns how many scores were stored.
pub fn feed_scores<R: BufRead>(mut input: R, cell: &ScoreCell) -> Result<usize> {
    let mut stored = 0;
    let mut buf = Vec::new();
    let mut number = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("Skipping line {}: {}", number, e);
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(score) => {
                cell.store(score);
                stored += 1;
            }
            Err(e) => warn!("Skipping line {}: {:?} ({})", number, line, e),
        }
    }
    Ok(stored)
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub stored: usize,
    pub ticks: usize,
    pub last_step: u32,
    /// Whether the last score fell inside a bin rather than taking the default.
    pub last_matched: bool,
}

/// Feeds scores from `input` on a background thread while the caller's
/// thread polls the shared cell every `interval` and classifies whatever
/// score is current. Stops after the first tick that follows the end of
/// input, so the last score is always seen.
pub fn run<R: BufRead + Send>(
    input: R,
    table: &BinTable<u32>,
    interval: Duration,
) -> Result<Summary> {
    let cell = ScoreCell::default();
    let mut ticks = 0;

    let (stored, last_step, last_matched) = thread::scope(|scope| {
        let producer = scope.spawn(|| feed_scores(input, &cell));

        let (step, matched) = loop {
            let finished = producer.is_finished();
            thread::sleep(interval);

            let score = cell.load();
            let step = classify(score, table);
            let matched = table.classify_bin(score).is_some();
            if !matched {
                debug!("Score {score:.3} outside every bin");
            }
            info!("score {score:.3} -> step {step}");
            ticks += 1;

            if finished {
                break (step, matched);
            }
        };

        let stored = producer
            .join()
            .map_err(|_| anyhow!("score reader panicked"))??;
        Ok::<_, anyhow::Error>((stored, step, matched))
    })?;

    info!("Replayed {} scores over {} ticks", stored, ticks);
    Ok(Summary {
        stored,
        ticks,
        last_step,
        last_matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Bin;
    use std::io::Cursor;

    #[test]
    fn test_feed_skips_bad_lines() {
        let cell = ScoreCell::default();
        let stored = feed_scores(Cursor::new("0.2\n\nnot a score\n  0.9  \n"), &cell).unwrap();
        assert_eq!(stored, 2);
        assert_eq!(cell.load(), 0.9);
    }

    #[test]
    fn test_feed_skips_invalid_utf8() {
        let cell = ScoreCell::default();
        let input: &[u8] = b"0.2\n\xff\xfe\n0.7";
        let stored = feed_scores(Cursor::new(input), &cell).unwrap();
        assert_eq!(stored, 2, "the undecodable line is skipped, not fatal");
        assert_eq!(cell.load(), 0.7);
    }

    #[test]
    fn test_feed_empty_input_leaves_initial_score() {
        let cell = ScoreCell::default();
        assert_eq!(feed_scores(Cursor::new(""), &cell).unwrap(), 0);
        assert_eq!(cell.load(), 0.0);
    }

    #[test]
    fn test_run_ends_on_last_score() {
        let table = BinTable::four_level_steps();
        let summary = run(Cursor::new("0.05\n0.3\n0.85\n"), &table, Duration::from_millis(1)).unwrap();
        assert_eq!(summary.stored, 3);
        assert!(summary.ticks >= 1);
        assert_eq!(summary.last_step, 4, "last tick should see 0.85");
        assert!(summary.last_matched);
    }

    #[test]
    fn test_run_without_input_holds_still() {
        let table = BinTable::two_level_steps();
        let summary = run(Cursor::new(""), &table, Duration::from_millis(1)).unwrap();
        assert_eq!(summary.stored, 0);
        assert_eq!(summary.last_step, 0, "initial score 0 is no movement");
        assert!(!summary.last_matched);
    }

    #[test]
    fn test_run_tells_matched_bin_from_default() {
        // The only bin shares its level with the default.
        let table = BinTable::new(vec![Bin::new(0.0, 1.0, 0)], 0).unwrap();

        let inside = run(Cursor::new("0.5\n"), &table, Duration::from_millis(1)).unwrap();
        assert_eq!(inside.last_step, 0);
        assert!(inside.last_matched, "0.5 lies in (0, 1]");

        let outside = run(Cursor::new("1.5\n"), &table, Duration::from_millis(1)).unwrap();
        assert_eq!(outside.last_step, 0);
        assert!(!outside.last_matched, "1.5 lies outside every bin");
    }
}
