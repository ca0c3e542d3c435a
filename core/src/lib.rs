//! # bitcodec
//!
//! Bit-level encoding of native values for engines that compute one bit at a
//! time (boolean-circuit evaluators, gate-level homomorphic or garbled-circuit
//! engines). Such engines consume and produce flat bit sequences; this crate
//! converts scalars, fixed-length arrays and strings to and from that layout.
//!
//! ## Layout
//!
//! A scalar `T` occupies `W = 8 * size_of::<T>()` bits (`W = 1` for `bool`).
//! Bit `j` is bit `j` of the value's unsigned reinterpretation, least
//! significant first. Signed values round-trip with their exact bit pattern.
//!
//! An array of `length` scalars is the concatenation of their encodings:
//! element `i` owns the window `[i * W, (i + 1) * W)`. Engines address one
//! element at a time through the views returned by [EncodedArray::at] and
//! [EncodedArray::at_mut].
//!
//! - [EncodedValue] -- one scalar, owned or viewed.
//! - [EncodedArray] -- `length` scalars in disjoint windows.
//! - [EncodedBasicString] -- a text stored as an [EncodedArray] of code units.
//!
//! All layouts are generic over a data container `D` (owned `Vec<u8>`,
//! borrowed `&[u8]` / `&mut [u8]`) holding one bit per byte.
//!
//! ## Non-Goals
//!
//! No encryption, no circuit evaluation and no randomness: this is a pure
//! data transformation layer.

pub mod array;
pub mod bits;
pub mod error;
pub mod layouts;
pub mod scalar;
pub mod string;
pub mod value;

pub use array::*;
pub use bits::{decode_from, encode, encode_into};
pub use error::*;
pub use layouts::*;
pub use scalar::*;
pub use string::*;
pub use value::*;
