//! Tests for the shared fixed-width decoder
