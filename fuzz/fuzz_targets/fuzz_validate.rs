#![no_main]

use libfuzzer_sys::fuzz_target;
use vatcheck::{Jurisdiction, VatNumber};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for jurisdiction in Jurisdiction::ALL {
            let vat = VatNumber::new(jurisdiction, s);
            let valid = vat.validate();
            assert_eq!(vat.validate(), valid);
            assert_eq!(vat.number(), s);
            let _ = vat.format("a c n");
        }
    }
});
