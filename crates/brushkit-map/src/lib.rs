#![warn(missing_docs)]

//! Valve220 (Half-Life `.map`) face records and brush blocks.
//!
//! Reads and writes the brush portion of the format: the face record
//!
//! ```text
//! ( x y z ) ( x y z ) ( x y z ) NAME [ ux uy uz uoff ] [ vx vy vz voff ] rot uscale vscale
//! ```
//!
//! and the `{ ... }` block that groups face records into one brush.
//! Entities, key/value properties and whole-file handling live elsewhere.
//!
//! # Example
//!
//! ```
//! use brushkit_map::{parse_face, write_face};
//!
//! let line = "( 0 0 64 ) ( 0 64 64 ) ( 64 64 64 ) CRATE01 [ 1 0 0 0 ] [ 0 -1 0 0 ] 0 1 1";
//! let face = parse_face(line).unwrap();
//! assert_eq!(write_face(&face), line);
//! ```

mod error;
mod lexer;
mod parser;
mod writer;

pub use error::{MapError, Result};
pub use parser::{parse_brush, parse_face};
pub use writer::{write_brush, write_face, BrushBlock, FaceRecord};
