//! Conversion glue between a converter and the transport.
//!
//! - [`Converter`] - The seam a conversion engine plugs into
//! - [`render`] - Runs a converter into a fresh buffer and prepares the body
//! - [`RenderedBody`] - Converted output with its length, encoding and ETag
//!
//! # Example
//!
//! ```
//! use chunkbuf::{BufferConfig, ContentEncoding, Passthrough, render};
//!
//! let mut input: &[u8] = b"<html><body>hi</body></html>";
//! let body = render(&Passthrough, &mut input, BufferConfig::default(), ContentEncoding::Identity)?;
//!
//! assert_eq!(body.content_length(), 28);
//! let mut response = Vec::new();
//! body.write_to(&mut response)?;
//! assert_eq!(response, b"<html><body>hi</body></html>");
//! # Ok::<(), chunkbuf::BufferError>(())
//! ```

mod body;
mod converters;

pub use body::{ContentEncoding, RenderedBody, render};
pub use converters::{Converter, Passthrough, Pong};
