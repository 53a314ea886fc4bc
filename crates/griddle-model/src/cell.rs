// Copyright (c) 2025 The griddle developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{PrimInt, Unsigned};

/// A table cell holding either nothing or a path cost, in one unsigned word.
///
/// Instead of `Option<T>`, this type uses an offset-by-one sentinel encoding:
/// zero means "vacant" and any other raw value `v` means "cost `v − 1`".
/// This packs three states (vacant, zero cost, positive cost) into a single
/// byte for dense tables, at the price of giving up the largest
/// representable cost.
///
/// The encoding is part of the binary contract: generated tables keep cells
/// in this in-memory form, the writer removes the offset from every occupied
/// cell, and the reader re-applies it.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::cell::CellValue;
///
/// let vacant: CellValue<u8> = CellValue::vacant();
/// assert!(vacant.is_vacant());
/// assert_eq!(vacant.cost(), None);
///
/// let cell = CellValue::with_cost(0u8);
/// assert_eq!(cell.raw(), 1);
/// assert_eq!(cell.cost(), Some(0));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellValue<T>(T)
where
    T: PrimInt + Unsigned;

impl<T> CellValue<T>
where
    T: PrimInt + Unsigned,
{
    /// Creates a vacant cell.
    #[inline]
    pub fn vacant() -> Self {
        CellValue(T::zero())
    }

    /// Creates an occupied cell holding the given true cost.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is the maximum value of `T`; that raw value is
    /// unreachable under the offset-by-one encoding.
    #[inline]
    pub fn with_cost(cost: T) -> Self {
        assert!(
            cost < T::max_value(),
            "called `CellValue::with_cost` with the maximum value of the cell type"
        );

        CellValue(cost + T::one())
    }

    /// Reinterprets a raw stored value as a cell.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        CellValue(raw)
    }

    /// Returns the raw stored value, offset included.
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Returns `true` if the cell holds no cost.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.0 == T::zero()
    }

    /// Returns `true` if the cell holds a cost.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        !self.is_vacant()
    }

    /// Returns the true cost, or `None` for a vacant cell.
    #[inline]
    pub fn cost(&self) -> Option<T> {
        if self.is_vacant() {
            None
        } else {
            Some(self.0 - T::one())
        }
    }

    /// Returns the byte written to disk for this cell: the true cost for an
    /// occupied cell, zero for a vacant one.
    #[inline]
    pub fn to_disk(&self) -> T {
        self.cost().unwrap_or_else(T::zero)
    }

    /// Reconstructs the in-memory cell from a byte read from disk.
    ///
    /// The disk form cannot distinguish a vacant cell from a zero-cost one;
    /// every byte is read back as an occupied cell, which is exact for
    /// tables whose generation left no vacant cell.
    #[inline]
    pub fn from_disk(disk: T) -> Self {
        CellValue(disk.saturating_add(T::one()))
    }
}

impl<T> std::fmt::Debug for CellValue<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cost() {
            Some(cost) => write!(f, "CellValue(cost: {})", cost),
            None => write!(f, "CellValue(vacant)"),
        }
    }
}
