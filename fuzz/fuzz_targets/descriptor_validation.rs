#![no_main]

use jvm_descriptors::types::{classify, is_valid_descriptor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|descriptor: &str| {
    assert_eq!(is_valid_descriptor(descriptor), classify(descriptor).is_ok());
});
