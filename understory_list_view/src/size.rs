// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout hints for a list view.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil` and `floor`
use kurbo::{Size, Vec2};

/// Text metrics supplied by the rendering backend.
pub trait TextMeasure {
    /// Width of `text` at `font_size`, wrapped at `wrap_width`.
    fn text_width(&self, text: &str, font_size: f64, wrap_width: f64) -> f64;

    /// Padding around the content of a framed widget.
    ///
    /// Only `x` is used for list views.
    fn frame_padding(&self) -> Vec2;
}

/// A size along one axis: either fixed, or growing to fill what is available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dim {
    /// A fixed extent in logical pixels.
    Fixed(f64),
    /// Take up all available space.
    Grow,
}

/// Preferred size of a list view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreferredSize {
    /// Width in logical pixels.
    pub width: f64,
    /// Height policy. List views always grow vertically.
    pub height: Dim,
}

/// Computes the preferred size for `labels`.
///
/// The width is the widest label (measured with `available_width` as wrap
/// constraint) plus horizontal frame padding on both sides, rounded up.
pub fn preferred_size<'a, I, M>(
    labels: I,
    measure: &M,
    font_size: f64,
    available_width: f64,
) -> PreferredSize
where
    I: IntoIterator<Item = &'a str>,
    M: TextMeasure + ?Sized,
{
    let widest = labels
        .into_iter()
        .map(|label| measure.text_width(label, font_size, available_width))
        .fold(0.0_f64, f64::max);
    let padding = measure.frame_padding();

    PreferredSize {
        width: (widest + 2.0 * padding.x).ceil(),
        height: Dim::Grow,
    }
}

/// Minimum size of a list view: three font heights tall, independent of item count.
#[must_use]
pub fn minimum_size(font_size: f64) -> Size {
    Size::new(0.0, 3.0 * font_size)
}

/// Number of whole rows of `row_height` that fit in `height`.
///
/// Returns `0` for non-positive or non-finite inputs.
#[must_use]
pub fn rows_in_height(height: f64, row_height: f64) -> usize {
    if !height.is_finite() || !row_height.is_finite() || row_height <= 0.0 {
        return 0;
    }
    let rows = (height / row_height).floor();
    if rows <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Row counts are small; the float is floored and non-negative"
    )]
    {
        rows as usize
    }
}
