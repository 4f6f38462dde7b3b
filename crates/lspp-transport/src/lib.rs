//! LSP transport layer for lspp.
//!
//! This crate implements message framing according to the LSP Base Protocol:
//! a block of `\r\n`-terminated header lines, a blank line, then a body of
//! exactly `Content-Length` bytes.
//!
//! # Overview
//!
//! - [`read_frame`] - Read one framed message body from a buffered reader
//! - [`write_frame`] - Write a framed message body with proper framing
//! - [`ReadOutcome`] - What a read produced: a frame, end of input, or a
//!   malformed frame that should be skipped
//!
//! The transport deals in raw bytes only; JSON parsing happens above it so a
//! body that is not valid JSON never aborts the read loop.
//!
//! # Example
//!
//! ```no_run
//! use std::io::{BufReader, stdin, stdout};
//! use lspp_transport::{ReadOutcome, read_frame, write_frame};
//!
//! let mut reader = BufReader::new(stdin());
//! let mut writer = stdout();
//!
//! if let Ok(ReadOutcome::Frame(body)) = read_frame(&mut reader) {
//!     // Echo the payload back with fresh framing
//!     write_frame(&mut writer, &body, true).unwrap();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod framing;

pub use framing::{MAX_FRAME_SIZE, ReadOutcome, read_frame, write_frame};
