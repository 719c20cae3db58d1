//! Conversion between document offsets and location units.
//!
//! A location unit is a fixed number of UTF-8 bytes ([`BYTES_PER_LOCATION`]).
//! The location of a cursor is the byte length of the text before it divided
//! by that unit size, so it tracks the encoded size of the document rather
//! than its character count.
//!
//! Going the other way ([`PositionTranslator::resolve_offset`]) starts from a
//! linear interpolation over the offset range and then walks the estimate in
//! fixed steps until its location is within [`TOLERANCE`] of the request.
//!
//! # Example
//!
//! ```
//! use kindleloc::document::buffer::TextBuffer;
//! use kindleloc::location::translator::PositionTranslator;
//!
//! let buffer = TextBuffer::new("a".repeat(1500));
//! let translator = PositionTranslator::new(&buffer);
//! assert_eq!(translator.max_location_units(), 10.0);
//!
//! let offset = translator.resolve_offset("5").unwrap();
//! assert!((translator.location_units_at(offset) - 5.0).abs() <= 2.0);
//! ```

use super::error::LocationError;
use crate::host::{Position, Range, TextDocument};

/// UTF-8 bytes per location unit.
pub const BYTES_PER_LOCATION: usize = 150;

/// Largest accepted distance, in location units, between a resolved offset
/// and the requested location.
pub const TOLERANCE: f64 = 2.0;

/// Minimum refinement step budget in [`PositionTranslator::resolve_offset`].
/// Larger documents get one step per [`BYTES_PER_LOCATION`] offsets.
pub const MAX_REFINEMENT_STEPS: usize = 10_000;

/// Translates between offsets and location units for one document.
pub struct PositionTranslator<'a, D: TextDocument> {
    document: &'a D,
}

impl<'a, D: TextDocument> PositionTranslator<'a, D> {
    pub fn new(document: &'a D) -> Self {
        Self { document }
    }

    /// The largest addressable offset, found by letting the document clamp
    /// an out-of-range position.
    pub fn max_offset(&self) -> usize {
        self.document.offset_at(Position::MAX)
    }

    /// Location units spanned by the whole document. Zero only when empty.
    pub fn max_location_units(&self) -> f64 {
        self.document.text().len() as f64 / BYTES_PER_LOCATION as f64
    }

    /// Location units of the text before `offset`.
    pub fn location_units_at(&self, offset: usize) -> f64 {
        let end = self.document.position_at(offset.min(self.max_offset()));
        let prefix = self.document.text_range(Range::new(Position::default(), end));
        prefix.len() as f64 / BYTES_PER_LOCATION as f64
    }

    /// Steps allowed before refinement gives up. A walk across the whole
    /// offset range always fits.
    pub fn refinement_budget(&self) -> usize {
        MAX_REFINEMENT_STEPS.max(self.max_offset() / BYTES_PER_LOCATION + 2)
    }

    /// Parses and range-checks a location request.
    ///
    /// Accepts only ASCII digits (surrounding whitespace is ignored), and
    /// values from 1 up to [`PositionTranslator::max_location_units`].
    pub fn parse_location(&self, input: &str) -> Result<u64, LocationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LocationError::InvalidInput {
                input: input.to_string(),
            });
        }

        let max = self.max_location_units();
        let out_of_range = || LocationError::OutOfRange {
            requested: trimmed.to_string(),
            max,
        };

        // all digits, so the only parse failure left is overflow
        let requested: u64 = trimmed.parse().map_err(|_| out_of_range())?;
        if requested == 0 || requested as f64 > max {
            return Err(out_of_range());
        }

        Ok(requested)
    }

    /// Finds an offset whose location is within [`TOLERANCE`] of `input`.
    ///
    /// # Errors
    ///
    /// - [`LocationError::InvalidInput`] if `input` is not a whole number
    /// - [`LocationError::OutOfRange`] if it is zero or past the end
    /// - [`LocationError::NoConvergence`] if refinement hits a document bound
    ///   or exhausts [`PositionTranslator::refinement_budget`]; `steps` is
    ///   the number of steps actually taken
    pub fn resolve_offset(&self, input: &str) -> Result<usize, LocationError> {
        let requested = self.parse_location(input)?;
        let target = requested as f64;
        let max_offset = self.max_offset();

        let estimate = (target / self.max_location_units()) * max_offset as f64;
        let mut offset = (estimate.round() as usize).min(max_offset);

        let budget = self.refinement_budget();
        let mut steps = 0;
        loop {
            let diff = target - self.location_units_at(offset);
            if diff.abs() <= TOLERANCE {
                return Ok(offset);
            }
            if steps == budget {
                break;
            }

            let next = if diff > 0.0 {
                offset.saturating_add(BYTES_PER_LOCATION).min(max_offset)
            } else {
                offset.saturating_sub(BYTES_PER_LOCATION)
            };
            if next == offset {
                break;
            }
            offset = next;
            steps += 1;
        }

        Err(LocationError::NoConvergence { requested, steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::buffer::TextBuffer;

    #[test]
    fn test_empty_document_has_no_locations() {
        let buffer = TextBuffer::default();
        let translator = PositionTranslator::new(&buffer);
        assert_eq!(translator.max_location_units(), 0.0);
        assert_eq!(translator.max_offset(), 0);
        assert!(matches!(
            translator.resolve_offset("1"),
            Err(LocationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_location_at_start_is_zero() {
        let buffer = TextBuffer::new("some text\nmore text");
        let translator = PositionTranslator::new(&buffer);
        assert_eq!(translator.location_units_at(0), 0.0);
    }

    #[test]
    fn test_location_counts_prefix_bytes() {
        // 150 two-byte characters then ASCII
        let text = format!("{}{}", "é".repeat(150), "a".repeat(300));
        let buffer = TextBuffer::new(text);
        let translator = PositionTranslator::new(&buffer);
        assert_eq!(translator.location_units_at(150), 2.0);
        assert_eq!(translator.location_units_at(450), 4.0);
    }

    #[test]
    fn test_location_clamps_offset() {
        let buffer = TextBuffer::new("a".repeat(300));
        let translator = PositionTranslator::new(&buffer);
        assert_eq!(translator.location_units_at(10_000), 2.0);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let buffer = TextBuffer::new("a".repeat(1500));
        let translator = PositionTranslator::new(&buffer);
        for input in ["", "abc", "-3", "4.5", "1e3", "+2"] {
            assert!(
                matches!(
                    translator.resolve_offset(input),
                    Err(LocationError::InvalidInput { .. })
                ),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_input() {
        let buffer = TextBuffer::new("a".repeat(1500));
        let translator = PositionTranslator::new(&buffer);
        for input in ["0", "11", "99999999999999999999999"] {
            assert!(matches!(
                translator.resolve_offset(input),
                Err(LocationError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_accepts_surrounding_whitespace() {
        let buffer = TextBuffer::new("a".repeat(1500));
        let translator = PositionTranslator::new(&buffer);
        assert!(translator.resolve_offset(" 5 ").is_ok());
    }

    #[test]
    fn test_resolves_last_location() {
        let buffer = TextBuffer::new("a".repeat(1500));
        let translator = PositionTranslator::new(&buffer);
        let offset = translator.resolve_offset("10").unwrap();
        assert!((translator.location_units_at(offset) - 10.0).abs() <= TOLERANCE);
    }

    /// Reports a shorter offset range than its text, so refinement runs
    /// into the end of the document before reaching the target.
    struct TruncatedDocument {
        inner: TextBuffer,
        limit: usize,
    }

    impl TextDocument for TruncatedDocument {
        fn offset_at(&self, position: Position) -> usize {
            self.inner.offset_at(position).min(self.limit)
        }

        fn position_at(&self, offset: usize) -> Position {
            self.inner.position_at(offset.min(self.limit))
        }

        fn text(&self) -> std::borrow::Cow<'_, str> {
            self.inner.text()
        }

        fn text_range(&self, range: Range) -> std::borrow::Cow<'_, str> {
            self.inner.text_range(range)
        }

        fn line_count(&self) -> usize {
            self.inner.line_count()
        }
    }

    #[test]
    fn test_saturation_reports_steps_taken() {
        let document = TruncatedDocument {
            inner: TextBuffer::new("a".repeat(1500)),
            limit: 300,
        };
        let translator = PositionTranslator::new(&document);
        assert_eq!(translator.max_location_units(), 10.0);

        // starts at 270, steps once to the 300 bound, then cannot move
        assert_eq!(
            translator.resolve_offset("9"),
            Err(LocationError::NoConvergence {
                requested: 9,
                steps: 1
            })
        );
    }

    #[test]
    fn test_budget_grows_with_document() {
        let small = TextBuffer::new("a".repeat(1500));
        assert_eq!(
            PositionTranslator::new(&small).refinement_budget(),
            MAX_REFINEMENT_STEPS
        );

        let large = TextBuffer::new("a".repeat(3_000_000));
        assert_eq!(
            PositionTranslator::new(&large).refinement_budget(),
            20_002
        );
    }

    #[test]
    fn test_refines_skewed_multibyte_document() {
        // dense 4-byte characters up front, ASCII afterwards
        let text = format!("{}{}", "😀".repeat(1500), "a".repeat(6000));
        let buffer = TextBuffer::new(text);
        let translator = PositionTranslator::new(&buffer);
        let max = translator.max_location_units() as u64;

        for requested in 1..=max {
            let offset = translator.resolve_offset(&requested.to_string()).unwrap();
            let units = translator.location_units_at(offset);
            assert!(
                (units - requested as f64).abs() <= TOLERANCE,
                "location {} resolved to {} ({} units)",
                requested,
                offset,
                units
            );
        }
    }
}
