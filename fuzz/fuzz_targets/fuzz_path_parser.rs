#![no_main]

use libfuzzer_sys::fuzz_target;
use waystone_atlas::data::parse_paths;
use waystone_atlas::PathSegment;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(records) = parse_paths(json) {
        for record in &records {
            let segment = PathSegment::from_record(record);
            let _ = segment.plot_endpoints();
        }
    }
});
