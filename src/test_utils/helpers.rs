use std::{env, fs, path::PathBuf};

use crate::Multiset;

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("nestset_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Parses a fixture literal
///
/// # Panics
///
/// Panics if the literal cannot be parsed
#[allow(clippy::panic)]
pub fn ms(text: &str) -> Multiset {
    match crate::parse(text) {
        Ok(set) => set,
        Err(e) => panic!("invalid fixture {}: {}", text, e),
    }
}
