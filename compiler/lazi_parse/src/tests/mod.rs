//! Parser-level tests: token primitives and the public entry point.
