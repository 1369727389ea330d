// External crates
use anyhow::{bail, Result};
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor};
use rayon::prelude::*;

// Local modules
use crate::lstm::step_2_padded_dataset::SequenceBatch;

/// Convert a padded batch into Burn tensors for the LSTM input.
///
/// Each symbol becomes one timestep with a single raw-valued feature, so
/// the features tensor has shape `[batch_size, max_length, 1]`. Labels
/// become an Int tensor of shape `[batch_size]` for the cross-entropy
/// loss.
///
/// # Arguments
///
/// * `batch` - Batch served by the padded dataset
/// * `max_length` - Corpus-wide padding length (every row has this many timesteps)
/// * `device` - The device to create tensors on
///
/// # Returns
///
/// Returns a tuple of (features_tensor, labels_tensor)
pub fn batch_to_tensors<B: Backend>(
    batch: &SequenceBatch,
    max_length: usize,
    device: &B::Device,
) -> Result<(Tensor<B, 3>, Tensor<B, 1, Int>)> {
    let batch_size = batch.len();
    if batch_size == 0 {
        bail!("cannot build tensors from an empty batch");
    }
    for row in &batch.data {
        if row.len() != max_length {
            bail!(
                "padded row has length {}, expected max_length {}",
                row.len(),
                max_length
            );
        }
    }

    // Pre-allocate the feature buffer and fill in parallel, one chunk per
    // sample.
    let mut features_data = vec![0f32; batch_size * max_length];
    features_data
        .par_chunks_mut(max_length)
        .enumerate()
        .for_each(|(i, chunk)| {
            for (j, symbol) in batch.data[i].iter().enumerate() {
                chunk[j] = *symbol as f32;
            }
        });

    let features: Tensor<B, 3> = Tensor::<B, 1>::from_floats(features_data.as_slice(), device)
        .reshape([batch_size, max_length, 1]);

    let labels_data: Vec<i32> = batch.labels.iter().map(|&l| l as i32).collect();
    let labels: Tensor<B, 1, Int> = Tensor::from_ints(labels_data.as_slice(), device);

    Ok((features, labels))
}

/// Gather, for each sample, the output row of its last real timestep.
///
/// `outputs` has shape `[batch_size, max_length, features]` with one row
/// per sample per timestep; rows beyond a sample's true length are
/// padding-derived and meaningless. The first two axes are flattened and
/// the row at flat index `i * max_length + (seq_lengths[i] - 1)` is
/// gathered for sample `i` with a single vectorized `select`, no
/// per-sample branching.
///
/// # Returns
///
/// Returns a tensor of shape `[batch_size, features]`, or an error when
/// `seq_lengths` disagrees with the batch dimension, contains a zero
/// (timestep -1 does not exist), or exceeds `max_length`.
pub fn select_last_relevant<B: Backend>(
    outputs: Tensor<B, 3>,
    seq_lengths: &[usize],
) -> Result<Tensor<B, 2>> {
    let [batch_size, max_length, features] = outputs.dims();
    if seq_lengths.len() != batch_size {
        bail!(
            "got {} sequence lengths for a batch of {}",
            seq_lengths.len(),
            batch_size
        );
    }

    let mut flat_indices = Vec::with_capacity(batch_size);
    for (i, &len) in seq_lengths.iter().enumerate() {
        if len == 0 {
            bail!("sequence {} has true length 0; the last valid timestep is undefined", i);
        }
        if len > max_length {
            bail!(
                "sequence {} has true length {} but only {} timesteps exist",
                i,
                len,
                max_length
            );
        }
        flat_indices.push((i * max_length + (len - 1)) as i32);
    }

    // The index tensor must live on the same device as the outputs
    let device = outputs.device();
    let indices: Tensor<B, 1, Int> = Tensor::from_ints(flat_indices.as_slice(), &device);
    let gathered = outputs
        .reshape([batch_size * max_length, features])
        .select(0, indices);

    Ok(gathered)
}
