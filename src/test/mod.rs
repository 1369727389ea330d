/// Test modules for the dynamic-length sequence classification package
///
/// * `corpus_tests` - Tests for corpus loading from disk: label parsing
///   through the filename convention, derived scalars, and the error
///   taxonomy for malformed inputs
/// * `batching_tests` - Tests for padding and the sequential wrap-around
///   batch walk
pub mod batching_tests;
