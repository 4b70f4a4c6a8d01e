//! Storage backends for per-level planes.
//!
//! A wavelet matrix keeps one prefix array per bit level (and, optionally,
//! one prefix-sum array per level). Every array has the same length `N + 1`,
//! so the planes can live either in separate vectors or in one flat buffer
//! addressed as `plane * stride + pos`.
//!
//! Queries only see [`PlaneStore`]; the layout is picked with a [`Backend`].

use crate::error::{Error, Result};

/// Read-only storage for a fixed number of equally sized integer planes.
pub trait PlaneStore: Sized {
    /// Take ownership of fully built planes. All planes must have equal length.
    fn from_planes(planes: Vec<Vec<u64>>) -> Result<Self>;

    /// Entry `pos` of plane `plane`.
    fn get(&self, plane: usize, pos: usize) -> u64;

    /// Number of planes.
    fn planes(&self) -> usize;

    /// Approximate heap memory usage in bytes.
    fn heap_bytes(&self) -> usize;
}

/// One growable vector per plane.
#[derive(Clone, Debug, Default)]
pub struct NestedPlanes {
    planes: Vec<Vec<u64>>,
}

impl PlaneStore for NestedPlanes {
    fn from_planes(planes: Vec<Vec<u64>>) -> Result<Self> {
        Ok(Self { planes })
    }

    #[inline]
    fn get(&self, plane: usize, pos: usize) -> u64 {
        self.planes[plane][pos]
    }

    fn planes(&self) -> usize {
        self.planes.len()
    }

    fn heap_bytes(&self) -> usize {
        self.planes.capacity() * std::mem::size_of::<Vec<u64>>()
            + self.planes.iter().map(|p| p.capacity() * 8).sum::<usize>()
    }
}

/// Unsigned word that a [`FlatPlanes`] buffer can hold.
pub trait Word: Copy + Into<u64> + TryFrom<u64> {
    /// Width in bits.
    const BITS: u32;
}

impl Word for u32 {
    const BITS: u32 = u32::BITS;
}

impl Word for u64 {
    const BITS: u32 = u64::BITS;
}

/// All planes packed row-major into a single fixed buffer of `W` words.
#[derive(Clone, Debug)]
pub struct FlatPlanes<W> {
    words: Box<[W]>,
    stride: usize,
}

impl<W: Word> PlaneStore for FlatPlanes<W> {
    fn from_planes(planes: Vec<Vec<u64>>) -> Result<Self> {
        let stride = planes.first().map_or(0, Vec::len);
        let mut words = Vec::with_capacity(planes.len() * stride);
        for plane in &planes {
            debug_assert_eq!(plane.len(), stride);
            for &value in plane {
                let word = W::try_from(value).map_err(|_| Error::StorageOverflow {
                    value,
                    bits: W::BITS,
                })?;
                words.push(word);
            }
        }
        Ok(Self {
            words: words.into_boxed_slice(),
            stride,
        })
    }

    #[inline]
    fn get(&self, plane: usize, pos: usize) -> u64 {
        self.words[plane * self.stride + pos].into()
    }

    fn planes(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.words.len() / self.stride
        }
    }

    fn heap_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<W>()
    }
}

/// Chooses the stores used for one-count planes and for range-sum planes.
pub trait Backend {
    /// Store for the cumulative one-counts (entries never exceed `N`).
    type Counts: PlaneStore;
    /// Store for the cumulative value sums.
    type Sums: PlaneStore;
}

/// Default backend: one `Vec<u64>` per plane.
#[derive(Debug)]
pub enum Nested {}

impl Backend for Nested {
    type Counts = NestedPlanes;
    type Sums = NestedPlanes;
}

/// Memory-compact backend: flat buffers with 32-bit counts and 64-bit sums.
///
/// Construction fails with [`Error::StorageOverflow`] for sequences longer
/// than `u32::MAX`.
#[derive(Debug)]
pub enum Compact {}

impl Backend for Compact {
    type Counts = FlatPlanes<u32>;
    type Sums = FlatPlanes<u64>;
}
