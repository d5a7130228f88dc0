//! # code128b
//!
//! A Rust library for generating Code128 Subset B linear barcodes and rendering them as raster
//! images.
//!
//! ## Features
//!
//! - **Subset B Encoding**: Printable ASCII (codes 32 to 126) mapped onto the 107 entry Code128
//!   pattern table, with start, modulo 103 checksum and stop characters
//! - **Density Control**: A single density factor scales both module width and bar thickness
//! - **Pluggable Surfaces**: Render onto an `image::RgbImage`, or any type implementing
//!   [`DrawingSurface`]
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = code128b::generate("Hello, World!", 2)?;
//! assert_eq!(img.width(), (11 * 13 + 35) * 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting the symbol
//!
//! ```rust
//! use code128b::Code128Builder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let barcode = Code128Builder::new("A").build()?;
//!
//! // START_B, 'A', checksum, STOP
//! assert_eq!(barcode.symbol().indices(), &[103, 33, 33, 106]);
//! println!("{}", barcode.to_str()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Dimensions
//!
//! Each data character is 11 modules wide and start, checksum & stop add 35 more. The width in
//! pixels is `modules * density`, and the height is 15% of the width in inches at 72 DPI, never
//! less than 0.7 inch. No quiet zone is added around the bars.

pub mod builder;
pub(crate) mod common;
pub mod render;

pub use builder::{generate, Barcode, Code128Builder, DEFAULT_DENSITY};
pub use common::codec::{encode, Symbol};
pub use common::metadata::Dimensions;
pub use common::table::{lookup, Pattern, START_B, STOP, TABLE_LEN};
pub use common::utils::{BarcodeError, BarcodeResult};
pub use render::{DrawingSurface, ImageSurface};
