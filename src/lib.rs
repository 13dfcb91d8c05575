use rayon::prelude::*;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const PARALLEL_THRESHOLD: usize = 1000;

fn token_at(bytes: &[u8], i: usize) -> Option<u32> {
    if bytes[i].is_ascii_digit() {
        return Some((bytes[i] - b'0') as u32);
    }

    WORDS
        .iter()
        .position(|word| bytes[i..].starts_with(word.as_bytes()))
        .map(|w| w as u32 + 1)
}

pub fn process_line(line: &str) -> u32 {
    let bytes = line.as_bytes();

    // Zero-width scan: matching a token never advances past the next
    // position, so overlapping words ("oneight") are all seen.
    let mut tokens = (0..bytes.len()).filter_map(|i| token_at(bytes, i));

    match tokens.next() {
        Some(first) => first * 10 + tokens.last().unwrap_or(first),
        None => 0,
    }
}

pub fn calibration_sum(input: impl Iterator<Item = impl Into<String>>) -> u32 {
    input.map(|line| process_line(&line.into())).sum()
}

pub fn calibration_sum_parallel(lines: &[&str]) -> u32 {
    lines.par_iter().map(|line| process_line(line)).sum()
}

pub fn total_calibration(input: &str, parallel: bool) -> u32 {
    let lines: Vec<_> = input.trim().lines().collect();

    if parallel && lines.len() > PARALLEL_THRESHOLD {
        calibration_sum_parallel(&lines)
    } else {
        calibration_sum(lines.into_iter())
    }
}
