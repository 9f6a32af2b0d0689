//! Implementation of the DataFrame extension trait

mod entropy;

pub use entropy::column_entropy;
