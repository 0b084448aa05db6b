#![cfg_attr(not(test), no_std)]

//! Frame segmentation, adaptive pacing and navigation for rapid serial
//! presentation of a text.

extern crate alloc;

pub mod app;
pub mod content;
pub mod focus;
pub mod frame;
pub mod input;
pub mod render;
pub mod settings;
pub mod timer;
pub mod timing;
