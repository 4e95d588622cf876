// src/handlers/mod.rs
pub mod web;
