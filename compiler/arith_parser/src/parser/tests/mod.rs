//! Tests for the parser module
