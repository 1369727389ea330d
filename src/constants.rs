// Training parameters (fixed; there is no CLI flag surface)
pub const LEARNING_RATE: f64 = 0.01;
pub const TRAINING_ITERS: usize = 1_000_000; // counted in samples, not steps
pub const BATCH_SIZE: usize = 10;
pub const DISPLAY_STEP: usize = 10;

// Network parameters
pub const N_HIDDEN: usize = 64; // hidden layer num of features
pub const N_INPUT: usize = 1; // one symbol per timestep

// Data preprocessing
pub const PAD_SYMBOL: u8 = b' '; // neutral filler appended up to max_length
pub const TRAIN_SPLIT_RATIO: f64 = 0.8; // prefix of the corpus used for training

// Toy data generation
pub const DATA_DIR: &str = "data";
pub const TOY_CORPUS_SIZE: usize = 120;
pub const TOY_MIN_LEN: usize = 3;
pub const TOY_MAX_LEN: usize = 20;
