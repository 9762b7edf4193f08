//! Integration tests for vplay.

mod cli_test;
mod helpers;
mod player_test;
mod subtitles_test;
