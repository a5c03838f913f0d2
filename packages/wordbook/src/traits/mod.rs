//! Core trait abstractions for the wordbook library.

pub mod ai;
