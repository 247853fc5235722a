//! A decorative background of drifting, rotating squares.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod platform;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod render;

pub mod animation;
pub mod color;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod scheduler;
pub mod surface;
pub mod viewport;
