#![no_main]

use libfuzzer_sys::fuzz_target;
use waystone_atlas::data::parse_pois;
use waystone_atlas::Poi;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(records) = parse_pois(json) {
        // Normalisierung darf für keinen geparsten Datensatz panicken
        for record in &records {
            let poi = Poi::from_record(record);
            let _ = poi.plot_point();
            let _ = poi.category.heading();
        }
    }
});
