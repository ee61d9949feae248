//! Renderers for Strata space-time fields.
//!
//! A [`Field`](strata_core::Field) is drawn as a grid with time running
//! down the rows and lattice cells across the columns.
//!
//! - [`GrayscaleRenderer`] maps symbols onto a white-to-black ramp and
//!   produces an [`image::GrayImage`]; [`PngSink`] writes it to disk.
//! - [`TextSink`] writes one line of glyphs per tick to any
//!   [`std::io::Write`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grayscale;
pub mod text;

pub use grayscale::{shade, GrayscaleRenderer, PngSink};
pub use text::{render_text, Glyphs, TextSink};
