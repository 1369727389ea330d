// External imports
use anyhow::Result;
use burn::nn::loss::CrossEntropyLossConfig;
use burn::optim::{GradientsParams, Optimizer, SgdConfig};
use burn::tensor::{backend::Backend, ElementConversion, Int, Tensor};
use burn_autodiff::Autodiff;
use burn_ndarray::NdArray;

// Internal imports
use super::step_2_padded_dataset::PaddedDataset;
use super::step_3_tensor_preparation::batch_to_tensors;
use super::step_4_lstm_model_arch::SequenceClassifier;
use crate::constants;

type BurnBackend = Autodiff<NdArray<f32>>;

/// Configuration for training the model
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub batch_size: usize,
    /// Total number of training samples to consume (steps * batch_size).
    pub training_iters: usize,
    /// Print loss/accuracy every this many steps.
    pub display_step: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: constants::LEARNING_RATE,
            batch_size: constants::BATCH_SIZE,
            training_iters: constants::TRAINING_ITERS,
            display_step: constants::DISPLAY_STEP,
        }
    }
}

/// Fraction of samples whose argmax prediction matches the target label.
pub fn batch_accuracy<B: Backend>(logits: Tensor<B, 2>, targets: Tensor<B, 1, Int>) -> f64 {
    let predicted: Tensor<B, 1, Int> = logits.argmax(1).squeeze(1);
    let correct = predicted.equal(targets).int().float().mean();
    correct.into_scalar().elem::<f64>()
}

/// Train the LSTM classifier with plain gradient descent.
///
/// Walks the dataset with sequential wrap-around batches and prints
/// loss/accuracy every `display_step` steps, so the console shows the same
/// periodic progress lines as the rest of the pipeline.
///
/// # Arguments
///
/// * `trainset` - Padded training partition (cursor is advanced in place)
/// * `num_classes` - Label cardinality of the *full* corpus
/// * `config` - Training hyperparameters
/// * `device` - The device to train on
///
/// # Returns
///
/// Returns the trained model.
pub fn train_model(
    trainset: &mut PaddedDataset,
    num_classes: usize,
    config: &TrainingConfig,
    device: &<BurnBackend as Backend>::Device,
) -> Result<SequenceClassifier<BurnBackend>> {
    let max_length = trainset.max_length();

    let mut model = SequenceClassifier::<BurnBackend>::new(
        constants::N_INPUT,
        constants::N_HIDDEN,
        num_classes,
        device,
    );

    let mut optimizer = SgdConfig::new().init();
    let loss_fn = CrossEntropyLossConfig::new().init(device);

    let mut step = 1;
    while step * config.batch_size < config.training_iters {
        let batch = trainset.next_batch(config.batch_size);
        let (features, targets) = batch_to_tensors::<BurnBackend>(&batch, max_length, device)?;

        // Forward pass
        let logits = model.forward(features, &batch.seq_lengths)?;
        let loss = loss_fn.forward(logits.clone(), targets.clone());

        if step % config.display_step == 0 {
            let minibatch_loss: f64 = loss.clone().into_scalar().elem();
            let accuracy = batch_accuracy(logits, targets);
            println!(
                "Iter {}, Minibatch Loss= {:.6}, Training Accuracy= {:.5}",
                step * config.batch_size,
                minibatch_loss,
                accuracy
            );
        }

        // Backward pass and optimizer step
        let grads = loss.backward();
        let grads = GradientsParams::from_grads(grads, &model);
        model = optimizer.step(config.learning_rate, model, grads);

        step += 1;
    }
    println!("Optimization Finished!");

    Ok(model)
}

/// Evaluate the model on a full dataset in one forward pass.
///
/// # Returns
///
/// Returns the classification accuracy in [0, 1].
pub fn evaluate_model<B: Backend>(
    model: &SequenceClassifier<B>,
    testset: &PaddedDataset,
    device: &B::Device,
) -> Result<f64> {
    // Return zero for an empty test set
    if testset.is_empty() {
        return Ok(0.0);
    }

    let batch = testset.full_batch();
    let (features, targets) = batch_to_tensors::<B>(&batch, testset.max_length(), device)?;
    let logits = model.forward(features, &batch.seq_lengths)?;

    Ok(batch_accuracy(logits, targets))
}
