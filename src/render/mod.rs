// src/render/mod.rs
pub mod bands;
pub mod binder;
pub mod chart;
pub mod gauge;
