use kindleloc::document::buffer::TextBuffer;
use kindleloc::host::TextDocument;
use kindleloc::location::translator::{PositionTranslator, BYTES_PER_LOCATION, TOLERANCE};
use kindleloc::location::LocationError;

/// A document mixing ASCII paragraphs with unevenly spread multi-byte text.
fn mixed_document() -> TextBuffer {
    let mut text = String::new();
    for i in 0..120 {
        match i % 4 {
            0 => text.push_str("Plain ASCII paragraph with nothing special in it at all.\n"),
            1 => text.push_str("Ünïcödé sprinkled through a sentence, naïve café.\n"),
            2 => text.push_str("日本語のテキストがここにあります。長い行です。\n"),
            _ => text.push_str("🙂🙂🙂 emoji heavy 🚀🚀🚀🚀 line 🎉🎉\n"),
        }
    }
    TextBuffer::new(text)
}

#[test]
fn test_empty_document_rejects_every_request() {
    let buffer = TextBuffer::new("");
    let translator = PositionTranslator::new(&buffer);

    assert_eq!(translator.max_location_units(), 0.0);
    for input in ["1", "5", "100"] {
        assert!(matches!(
            translator.resolve_offset(input),
            Err(LocationError::OutOfRange { .. })
        ));
    }
}

#[test]
fn test_1500_byte_document_has_ten_locations() {
    let buffer = TextBuffer::new("a".repeat(1500));
    let translator = PositionTranslator::new(&buffer);

    assert_eq!(BYTES_PER_LOCATION, 150);
    assert_eq!(translator.max_location_units(), 10.0);

    let offset = translator.resolve_offset("5").unwrap();
    let prefix_bytes = translator.location_units_at(offset) * BYTES_PER_LOCATION as f64;
    assert!(
        (450.0..=750.0).contains(&prefix_bytes),
        "prefix was {} bytes",
        prefix_bytes
    );
}

#[test]
fn test_every_valid_location_resolves_within_tolerance() {
    let buffer = mixed_document();
    let translator = PositionTranslator::new(&buffer);
    let max = translator.max_location_units().floor() as u64;
    assert!(max > 20);

    for requested in 1..=max {
        let offset = translator.resolve_offset(&requested.to_string()).unwrap();
        assert!(offset <= translator.max_offset());
        let units = translator.location_units_at(offset);
        assert!(
            (units - requested as f64).abs() <= TOLERANCE,
            "location {} resolved to {} units",
            requested,
            units
        );
    }
}

#[test]
fn test_invalid_and_out_of_range_requests() {
    let buffer = mixed_document();
    let translator = PositionTranslator::new(&buffer);
    let past_end = (translator.max_location_units().floor() as u64 + 1).to_string();

    for input in ["abc", "-3", "", "  ", "3.5", "٣"] {
        assert!(
            matches!(
                translator.resolve_offset(input),
                Err(LocationError::InvalidInput { .. })
            ),
            "'{}' should be invalid",
            input
        );
    }
    for input in ["0", "000", past_end.as_str()] {
        assert!(
            matches!(
                translator.resolve_offset(input),
                Err(LocationError::OutOfRange { .. })
            ),
            "'{}' should be out of range",
            input
        );
    }
}

#[test]
fn test_location_at_start_is_zero_for_non_empty_documents() {
    for text in ["x", "é", "🙂 and more", "line\nline"] {
        let buffer = TextBuffer::new(text);
        assert_eq!(PositionTranslator::new(&buffer).location_units_at(0), 0.0);
    }
}

#[test]
fn test_location_counts_bytes_not_characters() {
    // 150 characters of 4 bytes each: four locations in 150 offsets
    let buffer = TextBuffer::new("🙂".repeat(300));
    let translator = PositionTranslator::new(&buffer);
    assert_eq!(translator.location_units_at(150), 4.0);
    assert_eq!(translator.max_offset(), 300);
}

#[test]
fn test_resolving_current_location_lands_nearby() {
    let buffer = mixed_document();
    let translator = PositionTranslator::new(&buffer);

    for cursor in (0..translator.max_offset()).step_by(397) {
        let current = translator.location_units_at(cursor).floor() as u64;
        if current == 0 {
            continue;
        }
        let offset = translator.resolve_offset(&current.to_string()).unwrap();
        let again = translator.location_units_at(offset);
        assert!(
            (again - current as f64).abs() <= TOLERANCE,
            "cursor {} at location {} came back as {}",
            cursor,
            current,
            again
        );
    }
}

#[test]
fn test_max_offset_matches_document_end() {
    let buffer = mixed_document();
    let translator = PositionTranslator::new(&buffer);
    assert_eq!(translator.max_offset(), buffer.char_count());
    assert_eq!(
        buffer.position_at(translator.max_offset()),
        buffer.position_at(usize::MAX)
    );
}

#[test]
fn test_large_skewed_document_resolves_far_from_estimate() {
    // 4-byte characters packed into the first sixth of the offsets, so the
    // interpolated estimate lands thousands of locations past the target
    let mut text = String::new();
    for _ in 0..10_000 {
        text.push_str(&"😀".repeat(99));
        text.push('\n');
    }
    for _ in 0..50_000 {
        text.push_str(&"a".repeat(99));
        text.push('\n');
    }
    let buffer = TextBuffer::new(text);
    let translator = PositionTranslator::new(&buffer);
    assert!(translator.refinement_budget() > 10_000);

    for requested in [26_000u64, 30_000, 45_000] {
        let offset = translator
            .resolve_offset(&requested.to_string())
            .unwrap_or_else(|err| panic!("location {}: {}", requested, err));
        let units = translator.location_units_at(offset);
        assert!(
            (units - requested as f64).abs() <= TOLERANCE,
            "location {} resolved to {} units",
            requested,
            units
        );
    }
}
