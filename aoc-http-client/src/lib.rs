//! AOC HTTP Client Library
//!
//! A small blocking client for the Advent of Code website. It fetches the
//! personalized puzzle input for a year and day, authenticated with the
//! `session` cookie of a logged-in browser.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - The raw HTTP status is always reported, success or not
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Session cookie headers are marked sensitive and the temporary copy zeroized
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let response = client.fetch_input(2024, 1, session)?;
//! match response.body {
//!     Some(input) => println!("{} bytes of input", input.len()),
//!     None => println!("download failed with status {}", response.status),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder, InputResponse};
pub use error::AocError;
pub use reqwest::StatusCode;
