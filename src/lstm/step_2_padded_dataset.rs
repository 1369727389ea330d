// Local modules
use crate::constants::PAD_SYMBOL;
use crate::error::DataError;
use crate::lstm::step_1_corpus_loader::CorpusItem;

/// A contiguous slice of the dataset served for one training step.
///
/// The three vectors are parallel: matching indices refer to the same
/// original corpus item. A batch is consumed immediately and not retained.
#[derive(Debug, Clone)]
pub struct SequenceBatch {
    /// Padded sequences, each exactly `max_length` symbols.
    pub data: Vec<Vec<u8>>,
    /// Class labels.
    pub labels: Vec<usize>,
    /// Pre-padding lengths, each in `[1, max_length]`.
    pub seq_lengths: Vec<usize>,
}

impl SequenceBatch {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Sequences padded to a fixed length, served as sequential wrap-around
/// batches.
///
/// Padding brings every sequence up to `max_length` so they can be stacked
/// into one tensor; the recorded `seq_lengths` let the model gather each
/// sample's last real timestep afterwards. `max_length` must be the
/// full-corpus maximum even when this dataset wraps a train/test subset.
#[derive(Debug, Clone)]
pub struct PaddedDataset {
    data: Vec<Vec<u8>>,
    labels: Vec<usize>,
    seq_lengths: Vec<usize>,
    max_length: usize,
    batch_id: usize,
}

impl PaddedDataset {
    /// Build a dataset from a slice of corpus items.
    ///
    /// # Arguments
    ///
    /// * `items` - Subset of the corpus (prefix or suffix slice)
    /// * `max_length` - Padding length, fixed by the *full* corpus
    ///
    /// # Returns
    ///
    /// Returns the dataset, or a `Config` error when any item is longer
    /// than `max_length` (which means the caller recomputed the padding
    /// length from a subset instead of the whole corpus).
    pub fn new(items: &[CorpusItem], max_length: usize) -> Result<Self, DataError> {
        let mut data = Vec::with_capacity(items.len());
        let mut labels = Vec::with_capacity(items.len());
        let mut seq_lengths = Vec::with_capacity(items.len());

        for item in items {
            if item.true_length > max_length {
                return Err(DataError::Config(format!(
                    "sequence of length {} exceeds padding length {}",
                    item.true_length, max_length
                )));
            }
            let mut padded = item.content.clone();
            padded.resize(max_length, PAD_SYMBOL);
            data.push(padded);
            labels.push(item.label);
            seq_lengths.push(item.true_length);
        }

        Ok(Self {
            data,
            labels,
            seq_lengths,
            max_length,
            batch_id: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The whole dataset as one batch, for full-set evaluation.
    pub fn full_batch(&self) -> SequenceBatch {
        SequenceBatch {
            data: self.data.clone(),
            labels: self.labels.clone(),
            seq_lengths: self.seq_lengths.clone(),
        }
    }

    /// Return the next batch of data. When the dataset end is reached,
    /// start over.
    ///
    /// The walk is deterministic and sequential: a pass over N items is
    /// exactly ceil(N / batch_size) calls, the last batch being shorter
    /// when batch_size does not divide N. The cursor is reset *before*
    /// slicing on the call after exhaustion, so no element is duplicated
    /// or skipped across passes.
    pub fn next_batch(&mut self, batch_size: usize) -> SequenceBatch {
        if self.batch_id == self.data.len() {
            self.batch_id = 0;
        }
        let end = usize::min(self.batch_id + batch_size, self.data.len());
        let batch = SequenceBatch {
            data: self.data[self.batch_id..end].to_vec(),
            labels: self.labels[self.batch_id..end].to_vec(),
            seq_lengths: self.seq_lengths[self.batch_id..end].to_vec(),
        };
        self.batch_id = end;
        batch
    }
}
