pub mod classification;
pub mod persistence;
