//! Test module organization for queue disciplines
