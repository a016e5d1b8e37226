//! file: lib.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:02:17 Tuesday
//! brief:

pub mod app;
pub mod assets;
pub mod game;
