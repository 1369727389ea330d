pub mod step_1_corpus_loader;
pub mod step_2_padded_dataset;
pub mod step_3_tensor_preparation;
pub mod step_4_lstm_model_arch;
pub mod step_5_train_model;
