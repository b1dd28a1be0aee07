// src/utils/mod.rs

pub mod lenient;
pub mod pagination;
