//! Palette Converter
//!
//! Replaces the colours in a 24-bit bitmap image with the nearest entries of
//! a colour palette. The image and palette handling lives in the
//! `palette-remap` crate; this library exposes the application modules for
//! integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod services;
