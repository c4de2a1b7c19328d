//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use ecotrack::core::models::{Icon, MediaKind, Metrics, Theme, guess_media_type, rank_icon};
use ecotrack::core::services::score;
use test_case::test_case;

// =============================================================================
// Scoring Policy
// =============================================================================

#[test_case(100, 1, 100 ; "first upload adds")]
#[test_case(100, 2, 100 ; "second upload adds")]
#[test_case(75, 3, -75 ; "third upload deducts")]
#[test_case(75, 4, -75 ; "fourth upload deducts")]
#[test_case(50, 5, 0 ; "fifth upload is neutral")]
#[test_case(50, 99, 0 ; "late upload is neutral")]
#[test_case(50, 0, 0 ; "no upload scores nothing")]
#[test_case(0, 1, 0 ; "zero point task")]
fn test_score(base: u32, ordinal: u32, expected: i64) {
    assert_eq!(score(base, ordinal), expected);
}

// =============================================================================
// Media Types
// =============================================================================

#[test_case("bin.jpg", Some(MediaKind::Image) ; "jpg is image")]
#[test_case("bin.JPEG", Some(MediaKind::Image) ; "uppercase jpeg is image")]
#[test_case("bus.webp", Some(MediaKind::Image) ; "webp is image")]
#[test_case("ride.mp4", Some(MediaKind::Video) ; "mp4 is video")]
#[test_case("ride.mov", Some(MediaKind::Video) ; "mov is video")]
#[test_case("notes.txt", None ; "text is unsupported")]
#[test_case("no_extension", None ; "missing extension")]
fn test_media_kind_from_file_name(file_name: &str, expected: Option<MediaKind>) {
    let kind = guess_media_type(file_name).and_then(MediaKind::of);
    assert_eq!(kind, expected);
}

// =============================================================================
// Icons and Ranks
// =============================================================================

#[test_case("trash", Icon::Trash ; "lowercase")]
#[test_case("Train", Icon::Train ; "capitalized")]
#[test_case(" crown ", Icon::Crown ; "padded")]
fn test_icon_parse(input: &str, expected: Icon) {
    assert_eq!(input.parse::<Icon>().unwrap(), expected);
}

#[test_case(1, Icon::Crown ; "first place")]
#[test_case(2, Icon::Medal ; "second place")]
#[test_case(3, Icon::Award ; "third place")]
#[test_case(4, Icon::Trophy ; "everyone else")]
fn test_rank_icon(rank: u32, expected: Icon) {
    assert_eq!(rank_icon(rank), expected);
}

#[test_case(1, Theme::Spring ; "rank one")]
#[test_case(5, Theme::Spring ; "rank five")]
#[test_case(6, Theme::Thunderstorm ; "rank six")]
fn test_theme_by_rank(rank: u32, expected: Theme) {
    let metrics = Metrics {
        rank,
        ..Metrics::default()
    };
    assert_eq!(metrics.theme(), expected);
}
