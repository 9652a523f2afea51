#![warn(deprecated_in_future)]
#![warn(future_incompatible)]
#![warn(missing_copy_implementations)]
#![warn(missing_docs)]
#![warn(nonstandard_style)]
#![warn(rust_2018_compatibility)]
#![warn(rust_2018_idioms)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused)]

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::redundant_else)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::wildcard_imports)]

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(unsafe_code)]


//! The dns-wire crate decodes DNS messages from their byte structure: one
//! opaque buffer in, one structured message out. It handles name
//! compression, per-type record payloads, and strict length accounting,
//! and rejects anything malformed.


mod types;
pub use self::types::*;

mod cursor;
pub use self::cursor::Cursor;

mod registry;
pub use self::registry::LabelRegistry;

mod strings;
pub use self::strings::Labels;

mod wire;
pub use self::wire::{Decoder, SectionCounts, Wire, WireError, find_qtype_number};

pub mod record;
