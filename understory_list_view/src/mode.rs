// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection capability flags.

use core::fmt;

bitflags::bitflags! {
    /// Capabilities controlling which selection changes a list view accepts.
    ///
    /// The empty set ([`SelectionMode::DISABLED`]) makes the list view-only.
    /// Without [`SelectionMode::MULTI_SELECT`], ctrl and shift are ignored and every
    /// click behaves like a plain click.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SelectionMode: u32 {
        /// At most one item can be selected.
        const SINGLE_SELECT = 1 << 0;
        /// Ctrl-click toggles and shift-click selects ranges.
        const MULTI_SELECT = 1 << 1;
        /// A selected item can be deselected.
        ///
        /// Currently not consulted by click interpretation.
        const DESELECTABLE = 1 << 2;
    }
}

impl SelectionMode {
    /// No item can ever be selected.
    pub const DISABLED: Self = Self::empty();

    /// Builds a mode from raw bits, keeping unknown bits.
    ///
    /// Unknown bits are inert; they only matter in that a mode made purely of
    /// unknown bits is not [disabled](Self::is_disabled).
    #[must_use]
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Builds a mode from raw bits, rejecting any bit without a named flag.
    pub fn try_from_raw(bits: u32) -> Result<Self, UnknownModeBits> {
        Self::from_bits(bits).ok_or(UnknownModeBits {
            bits: bits & !Self::all().bits(),
        })
    }

    /// Returns `true` if no bit at all is set.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        self.bits() == 0
    }

    /// Returns `true` if ctrl/shift combinators are honored.
    #[must_use]
    pub const fn allows_multi(self) -> bool {
        self.contains(Self::MULTI_SELECT)
    }

    /// Returns `true` if the deselectable bit is set.
    #[must_use]
    pub const fn is_deselectable(self) -> bool {
        self.contains(Self::DESELECTABLE)
    }
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::SINGLE_SELECT
    }
}

/// Error returned by [`SelectionMode::try_from_raw`] for bits without a named flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownModeBits {
    bits: u32,
}

impl UnknownModeBits {
    /// The offending bits, with all known flags masked out.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }
}

impl fmt::Display for UnknownModeBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown selection mode bits: {:#x}", self.bits)
    }
}

impl core::error::Error for UnknownModeBits {}
