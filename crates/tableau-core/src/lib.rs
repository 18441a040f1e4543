//! Tableau Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Tableau diagram
//! builder. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Draw**: Strokes, fills, primitives and scene composition ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
