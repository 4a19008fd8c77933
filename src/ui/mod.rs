// src/ui/mod.rs
pub mod resume;
pub mod sentiment;
pub mod widgets;
