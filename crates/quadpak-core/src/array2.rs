/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Generic 2D containers
//!
//! Image stages in this family of crates never care how their
//! elements are laid out in memory, only that every `(col, row)` cell
//! can be addressed and traversed. This module provides that
//! capability as a trait with two interchangeable implementations
//!
//! - [`FlatArray2`]: one row-major allocation, the obvious layout
//! - [`BlockedArray2`]: square tiles, sized so a tile stays cache sized,
//!    useful when access patterns are block local
//!
//! Code written against [`Array2`] must behave identically over both.

use alloc::vec;
use alloc::vec::Vec;

/// How many bytes a single tile of a [`BlockedArray2`] should
/// occupy by default
const BLOCK_BUDGET: usize = 64 * 1024;

/// A two dimensional container addressed by `(col, row)`
///
/// # Panics
/// `at` and `at_mut` panic when `col >= width()` or `row >= height()`,
/// an out of bounds access is a caller bug and not a recoverable
/// condition.
pub trait Array2<T> {
    /// Create a `width * height` container with every cell set to `value`
    fn new(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
        Self: Sized;

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Borrow the element at `(col, row)`
    fn at(&self, col: usize, row: usize) -> &T;

    /// Mutably borrow the element at `(col, row)`
    fn at_mut(&mut self, col: usize, row: usize) -> &mut T;

    /// Visit every cell exactly once in row-major order
    fn for_each<F>(&self, mut func: F)
    where
        F: FnMut(usize, usize, &T)
    {
        for row in 0..self.height() {
            for col in 0..self.width() {
                func(col, row, self.at(col, row));
            }
        }
    }

    /// Visit every cell exactly once in row-major order with
    /// mutable access
    fn for_each_mut<F>(&mut self, mut func: F)
    where
        F: FnMut(usize, usize, &mut T)
    {
        for row in 0..self.height() {
            for col in 0..self.width() {
                func(col, row, self.at_mut(col, row));
            }
        }
    }
}

/// A 2D container backed by a single row-major allocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatArray2<T> {
    width:  usize,
    height: usize,
    data:   Vec<T>
}

impl<T> FlatArray2<T> {
    /// Build a container from an existing row-major vector
    ///
    /// # Panics
    /// If `data.len() != width * height`
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> FlatArray2<T> {
        assert_eq!(width * height, data.len(), "vector length does not match dimensions");

        FlatArray2 { width, height, data }
    }

    /// Expose the backing row-major storage
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Array2<T> for FlatArray2<T> {
    fn new(width: usize, height: usize, value: T) -> FlatArray2<T>
    where
        T: Clone
    {
        FlatArray2 { width, height, data: vec![value; width * height] }
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn at(&self, col: usize, row: usize) -> &T {
        assert!(col < self.width && row < self.height, "({col},{row}) out of bounds");

        &self.data[row * self.width + col]
    }

    fn at_mut(&mut self, col: usize, row: usize) -> &mut T {
        assert!(col < self.width && row < self.height, "({col},{row}) out of bounds");

        &mut self.data[row * self.width + col]
    }
}

/// A 2D container backed by square tiles laid out tile after tile
///
/// Cells inside one tile are contiguous in memory, so neighborhoods
/// that stay within a tile stay within a cache friendly span. The
/// container presents the exact same `(col, row)` addressing as
/// [`FlatArray2`], the tiling is invisible to callers.
#[derive(Clone, Debug)]
pub struct BlockedArray2<T> {
    width:     usize,
    height:    usize,
    blocksize: usize,
    /// tiles per row, including the partial one at the right edge
    blocks_w:  usize,
    data:      Vec<T>
}

impl<T> BlockedArray2<T> {
    /// Create a container with an explicit tile edge length
    ///
    /// # Panics
    /// If `blocksize` is zero
    pub fn new_with_blocksize(width: usize, height: usize, blocksize: usize, value: T) -> Self
    where
        T: Clone
    {
        assert!(blocksize > 0, "blocksize cannot be zero");

        let blocks_w = width.div_ceil(blocksize);
        let blocks_h = height.div_ceil(blocksize);
        // padding cells at the right/bottom edges also hold `value`,
        // they are never visible through `at`
        let cells = blocks_w * blocks_h * blocksize * blocksize;

        BlockedArray2 { width, height, blocksize, blocks_w, data: vec![value; cells] }
    }

    /// Edge length of one tile
    pub const fn blocksize(&self) -> usize {
        self.blocksize
    }

    /// Pick the tile edge so one tile occupies roughly [`BLOCK_BUDGET`]
    /// bytes, never exceeding the larger image dimension
    fn default_blocksize(width: usize, height: usize) -> usize {
        let per_elem = core::mem::size_of::<T>().max(1);
        let edge = ((BLOCK_BUDGET / per_elem) as f64).sqrt() as usize;

        edge.clamp(1, width.max(height).max(1))
    }

    fn index_of(&self, col: usize, row: usize) -> usize {
        let size = self.blocksize;
        let block = (row / size) * self.blocks_w + (col / size);

        block * size * size + (row % size) * size + (col % size)
    }
}

impl<T> Array2<T> for BlockedArray2<T> {
    fn new(width: usize, height: usize, value: T) -> BlockedArray2<T>
    where
        T: Clone
    {
        let blocksize = Self::default_blocksize(width, height);

        Self::new_with_blocksize(width, height, blocksize, value)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn at(&self, col: usize, row: usize) -> &T {
        assert!(col < self.width && row < self.height, "({col},{row}) out of bounds");

        &self.data[self.index_of(col, row)]
    }

    fn at_mut(&mut self, col: usize, row: usize) -> &mut T {
        assert!(col < self.width && row < self.height, "({col},{row}) out of bounds");

        let index = self.index_of(col, row);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2, BlockedArray2, FlatArray2};

    #[test]
    fn flat_addressing_is_row_major() {
        let array = FlatArray2::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(*array.at(0, 0), 0);
        assert_eq!(*array.at(2, 0), 2);
        assert_eq!(*array.at(0, 1), 3);
        assert_eq!(*array.at(2, 1), 5);
    }

    #[test]
    fn blocked_matches_flat_at_every_cell() {
        let (width, height) = (13, 7);
        let mut flat: FlatArray2<u32> = FlatArray2::new(width, height, 0);
        let mut blocked = BlockedArray2::new_with_blocksize(width, height, 3, 0);

        for row in 0..height {
            for col in 0..width {
                let value = (row * 100 + col) as u32;
                *flat.at_mut(col, row) = value;
                *blocked.at_mut(col, row) = value;
            }
        }

        flat.for_each(|col, row, value| {
            assert_eq!(value, blocked.at(col, row));
        });
    }

    #[test]
    fn traversal_is_row_major_and_complete() {
        let blocked = BlockedArray2::new_with_blocksize(5, 4, 2, 0u8);
        let mut visited = Vec::new();

        blocked.for_each(|col, row, _| visited.push((col, row)));

        assert_eq!(visited.len(), 20);
        assert_eq!(visited[0], (0, 0));
        assert_eq!(visited[1], (1, 0));
        assert_eq!(visited[5], (0, 1));
        assert_eq!(visited[19], (4, 3));
    }

    #[test]
    fn default_blocksize_shrinks_to_image() {
        // 64KiB of u64 cells is a 90x90 tile, far larger than the image
        let blocked: BlockedArray2<u64> = BlockedArray2::new(4, 2, 0);

        assert_eq!(blocked.blocksize(), 4);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        let array: FlatArray2<u8> = FlatArray2::new(2, 2, 0);
        array.at(2, 0);
    }
}
