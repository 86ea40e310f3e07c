#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `cel-rs` parses Aseprite sprite sheet descriptions and plays back their animations.
//!
//! See [`cel_types`] for the model, the parser and the animator.

pub use cel_types::*;
