// src/models/mod.rs

pub mod module;
pub mod quiz;
