// External imports
use anyhow::Result;
use burn::module::Module;
use burn::nn::{Linear, LinearConfig, Lstm, LstmConfig};
use burn::tensor::{backend::Backend, Tensor};

// Internal imports
use crate::lstm::step_3_tensor_preparation::select_last_relevant;

/// LSTM classifier for variable-length sequences.
///
/// The network runs over the full padded length; the dynamic part is the
/// readout, which gathers each sample's output at its last real timestep
/// before the linear projection, so padding timesteps never reach the
/// classification head.
#[derive(Module, Debug)]
pub struct SequenceClassifier<B: Backend> {
    input_size: usize,
    hidden_size: usize,
    num_classes: usize,
    lstm: Lstm<B>,
    output: Linear<B>,
}

impl<B: Backend> SequenceClassifier<B> {
    /// Create a new SequenceClassifier model
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        num_classes: usize,
        device: &B::Device,
    ) -> Self {
        let lstm = LstmConfig::new(input_size, hidden_size, true).init(device);
        let output_config = LinearConfig::new(hidden_size, num_classes);
        let output = output_config.init(device);
        Self {
            input_size,
            hidden_size,
            num_classes,
            lstm,
            output,
        }
    }

    /// Getter for num_classes
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Forward pass: padded sequences to class logits.
    ///
    /// # Arguments
    ///
    /// * `x` - Input tensor of shape [batch_size, max_length, input_size]
    /// * `seq_lengths` - Pre-padding length of each sample, each >= 1
    ///
    /// # Returns
    ///
    /// Returns logits of shape [batch_size, num_classes]
    pub fn forward(&self, x: Tensor<B, 3>, seq_lengths: &[usize]) -> Result<Tensor<B, 2>> {
        // Per-timestep outputs: [batch_size, max_length, hidden_size]
        let (outputs, _state) = self.lstm.forward(x, None);

        // Keep only each sample's last dynamically computed output
        let last = select_last_relevant(outputs, seq_lengths)?;

        Ok(self.output.forward(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::{NdArray, NdArrayDevice};

    #[test]
    fn test_classifier_creation() {
        let device = NdArrayDevice::default();
        let model: SequenceClassifier<NdArray> = SequenceClassifier::new(1, 16, 3, &device);

        // Output layer maps hidden features to class logits: [in_features, out_features]
        assert_eq!(model.output.weight.dims(), [16, 3]);
        assert_eq!(model.num_classes(), 3);
    }

    #[test]
    fn test_classifier_forward_shapes() {
        let device = NdArrayDevice::default();
        let model: SequenceClassifier<NdArray> = SequenceClassifier::new(1, 8, 2, &device);

        let batch_size = 3;
        let max_length = 5;
        let input = Tensor::<NdArray, 3>::ones([batch_size, max_length, 1], &device);

        let logits = model
            .forward(input, &[5, 2, 1])
            .expect("forward should succeed");
        assert_eq!(logits.dims(), [batch_size, 2]);
    }

    #[test]
    fn test_classifier_forward_rejects_zero_length() {
        let device = NdArrayDevice::default();
        let model: SequenceClassifier<NdArray> = SequenceClassifier::new(1, 8, 2, &device);

        let input = Tensor::<NdArray, 3>::ones([2, 4, 1], &device);
        assert!(model.forward(input, &[3, 0]).is_err());
    }
}
