mod normalize_test;
mod sample_test;
