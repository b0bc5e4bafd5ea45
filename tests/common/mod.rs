#![allow(dead_code)]

pub mod grid;
pub mod setup;
pub mod templates;
pub mod tree;
