// src/middleware/mod.rs
pub mod security;
