//! Clipmark YouTube
//!
//! YouTube Data API v3 client: video search, trending lists, and
//! per-video details, mapped into display-ready summaries. Without an
//! API key the convenience methods serve a static sample set instead
//! of failing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod samples;
mod types;

pub use client::YouTubeClient;
pub use config::YouTubeConfig;
pub use error::{Result, YouTubeError};
pub use format::{format_duration, format_views};
pub use samples::sample_videos;
