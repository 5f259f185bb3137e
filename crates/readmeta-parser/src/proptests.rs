//! Property-based tests for the parser.
