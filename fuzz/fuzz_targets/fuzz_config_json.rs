#![no_main]

use libfuzzer_sys::fuzz_target;
use morphvec_core::VectorizeConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = VectorizeConfig::from_json(text) {
        assert!(config.validate().is_ok());
    }
});
