//! Test utilities for checking what emitted code does at run time.
//!
//! Execution is not part of the code generator, so this reference tape
//! machine only exists for tests: it runs a [`Program`] and exposes the final
//! tape, pointer and output so tests can compare them with the emitter's
//! tracked state.
