// Reply parsers for the generation pipeline

pub mod latex_output;

pub use latex_output::{extract_fenced_blocks, extract_latex, looks_like_document};
