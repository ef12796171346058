// Copyright 2025 the Fieldplace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Per-page rendering metadata supplied by the document renderer.
///
/// A `ViewportContext` describes exactly one rendered page at one zoom level.
/// It must be refreshed by the caller whenever the page or the zoom changes and
/// is passed explicitly into every geometry computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportContext {
    page_number: u32,
    scale: f64,
    page_height: f64,
}

impl ViewportContext {
    /// Creates a context for `page_number` rendered at `scale` pixels per point,
    /// where the page is `page_height` points tall.
    #[must_use]
    pub const fn new(page_number: u32, scale: f64, page_height: f64) -> Self {
        Self {
            page_number,
            scale,
            page_height,
        }
    }

    /// Creates a context from the page's coordinate box `[x0, y0, x1, y1]`.
    ///
    /// The page height is `y1 - y0`.
    #[must_use]
    pub fn from_page_box(page_number: u32, scale: f64, page_box: [f64; 4]) -> Self {
        Self::new(page_number, scale, page_box[3] - page_box[1])
    }

    /// One-based number of the rendered page.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Pixels per document point.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Page height in document points.
    #[must_use]
    pub const fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Returns `true` when the context can be used for geometry.
    ///
    /// A renderer that has not finished laying out a page may report a zero
    /// scale; such contexts must not drive hit-testing or gestures.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.page_height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportContext;

    #[test]
    fn page_box_height_is_derived_from_y_extent() {
        let vp = ViewportContext::from_page_box(3, 1.25, [0.0, 12.0, 612.0, 804.0]);
        assert_eq!(vp.page_number(), 3);
        assert_eq!(vp.scale(), 1.25);
        assert_eq!(vp.page_height(), 792.0);
        assert!(vp.is_usable());
    }

    #[test]
    fn zero_or_nan_scale_is_unusable() {
        assert!(!ViewportContext::new(1, 0.0, 792.0).is_usable());
        assert!(!ViewportContext::new(1, -1.0, 792.0).is_usable());
        assert!(!ViewportContext::new(1, f64::NAN, 792.0).is_usable());
    }
}
