pub mod errors;
pub mod villa;
