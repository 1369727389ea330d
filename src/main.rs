// External crates
use anyhow::{Context, Result};
use burn::tensor::backend::Backend as BurnBackendTrait;
use burn_autodiff::Autodiff;
use burn_ndarray::NdArray;
use std::path::Path;

// Local modules
use dynrnn::constants;
use dynrnn::lstm::{step_1_corpus_loader, step_2_padded_dataset, step_5_train_model};
use dynrnn::util::toy_data;

type BurnBackend = Autodiff<NdArray<f32>>;

fn main() -> Result<()> {
    let data_dir = Path::new(constants::DATA_DIR);
    if !data_dir.exists() {
        println!("No data directory found, generating toy sequence data...");
        toy_data::generate_toy_corpus(
            data_dir,
            constants::TOY_CORPUS_SIZE,
            constants::TOY_MIN_LEN,
            constants::TOY_MAX_LEN,
        )?;
    }

    println!("Loading data...");
    let corpus = step_1_corpus_loader::load_corpus(data_dir)
        .with_context(|| format!("failed to load corpus from {}", data_dir.display()))?;
    println!("Finished!");
    println!(
        "Corpus: {} sequences, max length {}, {} classes",
        corpus.len(),
        corpus.max_length(),
        corpus.num_classes()
    );

    // Prefix/suffix split over the stored order; padding length stays the
    // full-corpus maximum for both partitions.
    let train_size = (corpus.len() as f64 * constants::TRAIN_SPLIT_RATIO) as usize;
    let (train_items, test_items) = corpus.split_at(train_size);
    println!("Training dataset size: {} sequences", train_items.len());
    println!("Testing dataset size: {} sequences", test_items.len());

    let mut trainset = step_2_padded_dataset::PaddedDataset::new(train_items, corpus.max_length())?;
    let testset = step_2_padded_dataset::PaddedDataset::new(test_items, corpus.max_length())?;

    let device = <BurnBackend as BurnBackendTrait>::Device::default();
    let config = step_5_train_model::TrainingConfig::default();

    let model =
        step_5_train_model::train_model(&mut trainset, corpus.num_classes(), &config, &device)?;

    let accuracy = step_5_train_model::evaluate_model(&model, &testset, &device)?;
    println!("Testing Accuracy: {:.5}", accuracy);

    Ok(())
}
