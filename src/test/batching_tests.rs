use crate::constants::PAD_SYMBOL;
use crate::error::DataError;
use crate::lstm::step_1_corpus_loader::CorpusItem;
use crate::lstm::step_2_padded_dataset::PaddedDataset;

// Helper to build items with distinct labels so batch contents are
// identifiable by index
fn items_with_lengths(lengths: &[usize]) -> Vec<CorpusItem> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| CorpusItem {
            content: vec![b'a' + (i as u8); len],
            label: i,
            true_length: len,
        })
        .collect()
}

#[test]
fn test_padding_to_corpus_max_length() {
    let items = items_with_lengths(&[3, 1, 5]);
    let mut dataset = PaddedDataset::new(&items, 5).unwrap();

    let batch = dataset.next_batch(3);
    for (row, &len) in batch.data.iter().zip(batch.seq_lengths.iter()) {
        assert_eq!(row.len(), 5, "every padded row has exactly max_length symbols");
        assert!(row[len..].iter().all(|&s| s == PAD_SYMBOL));
        assert!(row[..len].iter().all(|&s| s != PAD_SYMBOL));
    }
}

#[test]
fn test_padding_uses_full_corpus_max_for_subsets() {
    // A subset whose own maximum (3) is below the corpus-wide maximum (8):
    // the padding length must stay 8
    let items = items_with_lengths(&[3, 2]);
    let mut dataset = PaddedDataset::new(&items, 8).unwrap();

    let batch = dataset.next_batch(2);
    assert!(batch.data.iter().all(|row| row.len() == 8));
}

#[test]
fn test_new_rejects_sequence_longer_than_max_length() {
    let items = items_with_lengths(&[4]);
    let err = PaddedDataset::new(&items, 3).unwrap_err();
    assert!(matches!(err, DataError::Config(_)));
}

#[test]
fn test_next_batch_wraparound() {
    // N=5 items, B=2: calls must return indices [0,1], [2,3], [4], then
    // [0,1] again
    let items = items_with_lengths(&[2, 2, 2, 2, 2]);
    let mut dataset = PaddedDataset::new(&items, 2).unwrap();

    let first = dataset.next_batch(2);
    assert_eq!(first.labels, vec![0, 1]);

    let second = dataset.next_batch(2);
    assert_eq!(second.labels, vec![2, 3]);

    let third = dataset.next_batch(2);
    assert_eq!(third.labels, vec![4], "final batch is shorter, not padded");

    let restarted = dataset.next_batch(2);
    assert_eq!(restarted.labels, first.labels, "restart after exhaustion is idempotent");
    assert_eq!(restarted.data, first.data);
    assert_eq!(restarted.seq_lengths, first.seq_lengths);
}

#[test]
fn test_pass_covers_every_element_exactly_once() {
    let items = items_with_lengths(&[1, 1, 1, 1, 1, 1, 1]);
    let mut dataset = PaddedDataset::new(&items, 1).unwrap();

    // N=7, B=3 -> ceil(7/3) = 3 calls per pass
    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.extend(dataset.next_batch(3).labels);
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6]);

    // The next pass starts over from index 0
    assert_eq!(dataset.next_batch(3).labels, vec![0, 1, 2]);
}

#[test]
fn test_batch_size_exceeding_remaining_items() {
    let items = items_with_lengths(&[1, 1, 1]);
    let mut dataset = PaddedDataset::new(&items, 1).unwrap();

    let batch = dataset.next_batch(10);
    assert_eq!(batch.len(), 3, "oversized request returns the whole remainder");
    assert_eq!(dataset.next_batch(10).labels, vec![0, 1, 2]);
}

#[test]
fn test_parallel_vectors_stay_aligned() {
    let items = items_with_lengths(&[4, 2, 3]);
    let mut dataset = PaddedDataset::new(&items, 4).unwrap();

    let batch = dataset.next_batch(3);
    assert_eq!(batch.data.len(), batch.labels.len());
    assert_eq!(batch.labels.len(), batch.seq_lengths.len());
    for (i, &label) in batch.labels.iter().enumerate() {
        // Label i was built from the item with content byte b'a' + i
        assert_eq!(batch.data[i][0], b'a' + (label as u8));
    }
}

#[test]
fn test_full_batch_matches_dataset() {
    let items = items_with_lengths(&[2, 3]);
    let dataset = PaddedDataset::new(&items, 3).unwrap();

    let full = dataset.full_batch();
    assert_eq!(full.len(), dataset.len());
    assert_eq!(full.seq_lengths, vec![2, 3]);
}
