#![allow(dead_code)]

use rand::Rng;
use std::io::Write;
use tempfile::NamedTempFile;

/// A random 10-digit local mobile number starting with the trunk `0`.
pub fn random_mobile<R: Rng>(rng: &mut R) -> String {
    let mut number = String::from("0");
    for _ in 0..9 {
        number.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    number
}

/// A random 13-digit national id without separators.
pub fn random_national_id<R: Rng>(rng: &mut R) -> String {
    (0..13)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Inserts hyphens at each canonical group boundary where `mask` has the
/// matching bit set.
pub fn hyphenate(id: &str, mask: u8) -> String {
    let groups = [&id[0..1], &id[1..5], &id[5..10], &id[10..12], &id[12..13]];
    let mut out = String::from(groups[0]);
    for (i, group) in groups[1..].iter().enumerate() {
        if mask & (1 << i) != 0 {
            out.push('-');
        }
        out.push_str(group);
    }
    out
}

pub fn write_csv(rows: &[[&str; 2]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "target,amount").unwrap();
    for [target, amount] in rows {
        writeln!(file, "{target},{amount}").unwrap();
    }
    file.flush().unwrap();
    file
}
