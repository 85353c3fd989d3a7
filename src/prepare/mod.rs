pub mod anonymize;
pub mod labels;
pub mod normalize;
pub mod sample;
pub mod select;
