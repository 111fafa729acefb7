//! End-to-end tests driving the seqgen binary.

mod common;

mod stream;
