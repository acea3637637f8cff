//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Category, Token, Number, and Error.

mod numbers;
