// src/handlers/mod.rs
pub mod data;
pub mod drivers;
pub mod ocr;
pub mod records;
pub mod worksheets;
