//! Fuzz target for path expressions resolved against arbitrary documents.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_path_query
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    document: String,
    path: String,
}

fuzz_target!(|input: Input| {
    let _ = confguard_repo::fuzz::query(&input.document, &input.path);
});
