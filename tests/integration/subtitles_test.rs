//! Integration tests for subtitle loading and lookup

use std::fs;
use tempfile::TempDir;

use vplay::subtitles::{lines_at, parse_srt, LoadError, SubtitleTrack};

use crate::helpers::fixture;

#[test]
fn fixture_loads_with_name_and_cues() {
    let track = SubtitleTrack::load(fixture("two_cues.srt")).unwrap();

    assert_eq!(track.name.as_deref(), Some("two_cues.srt"));
    assert_eq!(track.len(), 2);
    assert_eq!(track.cues[1].lines, vec!["Second cue", "on two lines."]);
    assert_eq!(track.last_end(), Some(8.5));
}

#[test]
fn corrupt_block_is_skipped_and_neighbors_survive() {
    let track = SubtitleTrack::load(fixture("corrupt.srt")).unwrap();

    let indexes: Vec<&str> = track.cues.iter().map(|c| c.index.as_str()).collect();
    assert_eq!(indexes, vec!["1", "3"]);
    assert_eq!(track.cues[0].lines, vec!["First"]);
}

#[test]
fn lookup_at_boundaries_is_inclusive() {
    let track = SubtitleTrack::load(fixture("two_cues.srt")).unwrap();

    assert_eq!(track.lines_at(1.0, 0.0), ["Hello, world."]);
    assert_eq!(track.lines_at(4.0, 0.0), ["Hello, world."]);
    assert!(track.lines_at(4.5, 0.0).is_empty());
    assert!(track.lines_at(0.5, 0.0).is_empty());
}

#[test]
fn delay_shifts_every_cue() {
    let track = SubtitleTrack::load(fixture("two_cues.srt")).unwrap();

    assert!(track.lines_at(1.5, 1.0).is_empty());
    assert_eq!(track.lines_at(2.5, 1.0), ["Hello, world."]);
}

#[test]
fn overlapping_cues_first_wins() {
    let cues = parse_srt(
        "1\n00:00:00,000 --> 00:00:10,000\nOuter\n\n2\n00:00:02,000 --> 00:00:03,000\nInner\n",
    );
    assert_eq!(lines_at(&cues, 2.5, 0.0), ["Outer"]);
}

#[test]
fn wrong_extension_is_rejected_before_reading() {
    let err = SubtitleTrack::load("/definitely/missing/subs.vtt").unwrap_err();
    assert!(matches!(err, LoadError::WrongExtension { .. }));
}

#[test]
fn unreadable_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.srt");

    let err = SubtitleTrack::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("missing.srt"));
}

#[test]
fn bom_and_trailing_whitespace_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.srt");
    fs::write(&path, "\u{feff}1\n00:00:01,000 --> 00:00:02,000\nHi\n\n\n  \n").unwrap();

    let track = SubtitleTrack::load(&path).unwrap();
    assert_eq!(track.len(), 1);
    assert_eq!(track.cues[0].index, "1");
}
