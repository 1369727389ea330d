// External crates
use std::path::Path;

// Local modules
use crate::error::DataError;
use crate::util::file_utils::{list_sequence_files, parse_label, read_sequence_file};

/// One labeled variable-length sequence, created once at load time and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct CorpusItem {
    /// Unpadded sequence symbols.
    pub content: Vec<u8>,
    /// Integer class id parsed from the filename.
    pub label: usize,
    /// Unpadded length of `content`; always >= 1.
    pub true_length: usize,
}

/// An ordered collection of corpus items plus the two scalars derived from
/// the whole collection.
///
/// `max_length` is the padding length for every dataset built from this
/// corpus, including train/test subsets: it is a property of the full
/// corpus and is never recomputed per subset.
#[derive(Debug, Clone)]
pub struct Corpus {
    items: Vec<CorpusItem>,
    max_length: usize,
    num_classes: usize,
}

impl Corpus {
    pub fn items(&self) -> &[CorpusItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest true length over all items.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// One plus the largest label value observed.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Prefix/suffix split of the stored order, for train/test partitions.
    pub fn split_at(&self, index: usize) -> (&[CorpusItem], &[CorpusItem]) {
        self.items.split_at(index.min(self.items.len()))
    }
}

/// Load a labeled corpus from a directory of `<name>-<label>.txt` files.
///
/// The scan is a single pass: `max_length` and `num_classes` are updated
/// incrementally per file, so the result does not depend on visit order.
///
/// # Arguments
///
/// * `dir` - Directory containing the sequence files
///
/// # Returns
///
/// Returns the corpus, or a `DataError`: `Io` for an unreadable directory
/// or file, `Decode` for non-UTF-8 content, `Parse` for a filename outside
/// the convention, `Config` for an empty directory or an empty file (an
/// empty file would break the `true_length >= 1` invariant the last-output
/// extractor relies on).
pub fn load_corpus(dir: &Path) -> Result<Corpus, DataError> {
    let files = list_sequence_files(dir)?;
    if files.is_empty() {
        return Err(DataError::Config(format!(
            "no sequence files found in {}; max_length and num_classes would be undefined",
            dir.display()
        )));
    }

    let mut items = Vec::with_capacity(files.len());
    let mut max_length = 0;
    let mut num_classes = 0;

    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let label = parse_label(file_name)?;
        let content = read_sequence_file(path)?;

        let true_length = content.len();
        if true_length == 0 {
            return Err(DataError::Config(format!(
                "empty sequence file: {}",
                path.display()
            )));
        }

        if true_length > max_length {
            max_length = true_length;
        }
        if label + 1 > num_classes {
            num_classes = label + 1;
        }

        log::debug!(
            "Loaded {} (label {}, length {})",
            path.display(),
            label,
            true_length
        );
        items.push(CorpusItem {
            content,
            label,
            true_length,
        });
    }

    Ok(Corpus {
        items,
        max_length,
        num_classes,
    })
}
