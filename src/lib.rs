//! A growable buffer of `f32` values with exact-fit capacity management.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
struct _ReadmeDoctests;

#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod capacity;

pub(crate) mod error;

pub mod index;

pub(crate) mod storage;

pub mod vec;

pub use {
    self::capacity::Growth,
    self::error::{StorageError, VecError},
    self::index::Index,
    self::vec::FloatVec,
};
