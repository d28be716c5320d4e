//! deoparse: reader and inspector for DEO binary object containers.
//!
//! A DEO file is a fixed-shape header followed by a flat directory of
//! named, typed, GUID-identified object descriptors. The layout was
//! recovered by inspection, so most header fields are kept as opaque
//! values; the decoder's job is to validate every structural sentinel and
//! hand back either a complete file or a precise error.
//!
//! The crate provides:
//! - The format decoders (`deo`)
//! - Text and JSON dumps (`dump`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let (file, stats) = deoparse::io::parse_file(Path::new("level.deo")).unwrap();
//! println!("{} entries, directory ends at {}", stats.entries, stats.directory_end);
//! for entry in &file.directory {
//!     println!("{} {} @ {}", entry.name, entry.type_name, entry.data_position);
//! }
//! ```

pub mod deo;
pub mod dump;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;
