//! Recursive text splitter for document chunking
//!
//! Splits documents into size-bounded chunks, preferring coarse separators
//! (paragraphs) over fine ones (lines, words, characters). Adjacent chunks can
//! share an overlap so that context survives the cut.
//!
//! # Example
//!
//! ```rust
//! use recsplit_core::{Config, Document, KeepType};
//!
//! let splitter = Config::builder()
//!     .chunk_size(5)
//!     .overlap_size(2)
//!     .separators(["a", "b", "c"])
//!     .keep_type(KeepType::None)
//!     .build_splitter()
//!     .unwrap();
//!
//! let chunks = splitter.split_documents(&[Document::from_content("1a23a45a67890c1a234b5678a90")]);
//! let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
//! assert_eq!(texts, ["1a23", "23a45", "67890", "1", "234", "5678", "90"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod splitter;
pub mod transformer;

pub use config::{Config, ConfigBuilder, IdGenerator, KeepType, LenFn};
pub use document::{Document, Metadata};
pub use error::{ConfigError, Error, Result};
pub use splitter::RecursiveSplitter;
pub use transformer::Transformer;
