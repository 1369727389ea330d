// External crates
use rand::Rng;
use std::fs;
use std::path::Path;

// Local modules
use crate::error::DataError;

/// Generate a toy corpus of labeled variable-length sequence files.
///
/// The classification task is the classic toy one: class 0 files hold a
/// linear run of consecutive symbols, class 1 files hold random symbols.
/// Files are written as `sample<i>-<label>.txt` so the loader's filename
/// convention picks the label back up.
///
/// # Arguments
///
/// * `dir` - Output directory, created if missing
/// * `n_files` - Number of files to write (labels alternate 0/1)
/// * `min_len` / `max_len` - Inclusive bounds for the sequence lengths
pub fn generate_toy_corpus(
    dir: &Path,
    n_files: usize,
    min_len: usize,
    max_len: usize,
) -> Result<(), DataError> {
    fs::create_dir_all(dir).map_err(|source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut rng = rand::rng();
    for i in 0..n_files {
        let label = i % 2;
        let len = rng.random_range(min_len..=max_len);

        let content: Vec<u8> = if label == 0 {
            // Linear sequence: consecutive symbols from a random start
            let start = rng.random_range(0..26u8);
            (0..len).map(|j| b'a' + ((start as usize + j) % 26) as u8).collect()
        } else {
            // Random sequence
            (0..len).map(|_| b'a' + rng.random_range(0..26u8)).collect()
        };

        let path = dir.join(format!("sample{:03}-{}.txt", i, label));
        fs::write(&path, &content).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
    }

    log::debug!("Generated {} toy sequence files in {}", n_files, dir.display());
    Ok(())
}
