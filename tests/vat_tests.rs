use vatcheck::*;

fn assert_valid(jurisdiction: Jurisdiction, number: &str) {
    let vat = VatNumber::new(jurisdiction, number);
    assert!(
        vat.validate(),
        "{number} should be valid for {jurisdiction}"
    );
}

fn assert_invalid(jurisdiction: Jurisdiction, number: &str) {
    let vat = VatNumber::new(jurisdiction, number);
    assert!(
        !vat.validate(),
        "{number} should be invalid for {jurisdiction}"
    );
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

#[test]
fn accessors_for_every_jurisdiction() {
    let expected = [
        (Jurisdiction::Austria, "AT", "UID"),
        (Jurisdiction::Australia, "AU", "ABN"),
        (Jurisdiction::Canada, "CA", "BN"),
        (Jurisdiction::Germany, "DE", "USt-IdNr."),
        (Jurisdiction::Spain, "ES", "NIF"),
        (Jurisdiction::Italy, "IT", "P.IVA"),
        (Jurisdiction::Luxembourg, "LU", "TVA"),
        (Jurisdiction::Malta, "MT", "Vat No."),
        (Jurisdiction::Netherlands, "NL", "Btw-nr."),
        (Jurisdiction::Norway, "NO", "Orgnr"),
        (Jurisdiction::Poland, "PL", "NIP"),
        (Jurisdiction::Portugal, "PT", "NIF"),
        (Jurisdiction::Romania, "RO", "CIF"),
        (Jurisdiction::Sweden, "SE", "Momsnr."),
        (Jurisdiction::Slovenia, "SI", "ID za DDV"),
    ];
    assert_eq!(expected.len(), Jurisdiction::ALL.len());
    for (jurisdiction, country, abbreviation) in expected {
        let vat = VatNumber::new(jurisdiction, " raw-input ");
        assert_eq!(vat.country(), country);
        assert_eq!(vat.abbreviation(), abbreviation);
        assert_eq!(vat.number(), " raw-input ");
        assert_eq!(vat.jurisdiction(), jurisdiction);
    }
}

#[test]
fn number_is_returned_unchanged() {
    let raw = "  atu 1234-5675 ";
    let vat = VatNumber::new(Jurisdiction::Austria, raw);
    assert_eq!(vat.number(), raw);
    assert_eq!(vat.clean_number(), "U12345675");
}

// ---------------------------------------------------------------------------
// Per-jurisdiction reference numbers
// ---------------------------------------------------------------------------

#[test]
fn poland() {
    assert_valid(Jurisdiction::Poland, "1234563218");
    assert_valid(Jurisdiction::Poland, "PL 392-862-19-31");
    // Remainder 10: no check digit can satisfy the modulus.
    assert_invalid(Jurisdiction::Poland, "1234567890");
}

#[test]
fn austria() {
    assert_valid(Jurisdiction::Austria, "U12345675");
    assert_valid(Jurisdiction::Austria, "ATU12345675");
    for check in (0..=9).filter(|&c| c != 5) {
        assert_invalid(Jurisdiction::Austria, &format!("U1234567{check}"));
    }
}

#[test]
fn germany() {
    assert_valid(Jurisdiction::Germany, "136695976");
    assert_valid(Jurisdiction::Germany, "DE136695976");
    assert_invalid(Jurisdiction::Germany, "DE136695977");
    assert_invalid(Jurisdiction::Germany, "DE036695976");
}

#[test]
fn canada() {
    assert_valid(Jurisdiction::Canada, "046 454 286");
    assert_invalid(Jurisdiction::Canada, "000000000");
}

#[test]
fn netherlands() {
    assert_valid(Jurisdiction::Netherlands, "NL123456782B01");
    // Leading zero dropped by the user is restored by padding.
    assert_valid(Jurisdiction::Netherlands, "10000446B01");
    assert_invalid(Jurisdiction::Netherlands, "NL123456783B01");
}

#[test]
fn spain() {
    assert_valid(Jurisdiction::Spain, "ESA58818501");
    assert_valid(Jurisdiction::Spain, "P1234567D");
    assert_valid(Jurisdiction::Spain, "12345678-Z");
    assert_valid(Jurisdiction::Spain, "X1234567L");
    assert_invalid(Jurisdiction::Spain, "12345678A");
    assert_invalid(Jurisdiction::Spain, "I12345678");
}

#[test]
fn italy() {
    assert_valid(Jurisdiction::Italy, "IT00743110157");
    assert_invalid(Jurisdiction::Italy, "00000010215");
    assert_invalid(Jurisdiction::Italy, "00743115553");
}

#[test]
fn norway() {
    assert_valid(Jurisdiction::Norway, "974760673");
    assert_valid(Jurisdiction::Norway, "NO 974 760 673 MVA");
    assert_invalid(Jurisdiction::Norway, "974760674");
}

#[test]
fn portugal() {
    assert_valid(Jurisdiction::Portugal, "PT 501 964 843");
    assert_invalid(Jurisdiction::Portugal, "301964843");
}

#[test]
fn australia() {
    assert_valid(Jurisdiction::Australia, "51 824 753 556");
    assert_valid(Jurisdiction::Australia, "123 456 782");
    assert_invalid(Jurisdiction::Australia, "51824753557");
}

#[test]
fn sweden() {
    assert_valid(Jurisdiction::Sweden, "SE556188840401");
    assert_invalid(Jurisdiction::Sweden, "SE556188840402");
}

#[test]
fn luxembourg() {
    assert_valid(Jurisdiction::Luxembourg, "LU15027442");
    assert_invalid(Jurisdiction::Luxembourg, "LU15027443");
}

#[test]
fn romania() {
    assert_valid(Jurisdiction::Romania, "RO18547290");
    assert_valid(Jurisdiction::Romania, "7203");
    assert_invalid(Jurisdiction::Romania, "RO18547291");
}

#[test]
fn slovenia() {
    assert_valid(Jurisdiction::Slovenia, "SI50223054");
    assert_invalid(Jurisdiction::Slovenia, "SI50223055");
}

#[test]
fn malta() {
    assert_valid(Jurisdiction::Malta, "MT11679112");
    assert_invalid(Jurisdiction::Malta, "MT11679113");
}

// ---------------------------------------------------------------------------
// Prefixed parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_every_jurisdiction() {
    let samples = [
        "ATU12345675",
        "AU51824753556",
        "CA046454286",
        "DE136695976",
        "ESX1234567L",
        "IT00743110157",
        "LU15027442",
        "MT11679112",
        "NL123456782B01",
        "NO974760673MVA",
        "PL1234563218",
        "PT501964843",
        "RO18547290",
        "SE556188840401",
        "SI50223054",
    ];
    for sample in samples {
        let vat = VatNumber::parse(sample).unwrap();
        assert_eq!(vat.country(), &sample[..2]);
        assert_eq!(vat.number(), sample);
        assert!(vat.validate(), "{sample} should be valid");
    }
}

#[test]
fn parse_whitespace_and_case() {
    let vat = VatNumber::parse("  se 5561888404 01 ").unwrap();
    assert_eq!(vat.jurisdiction(), Jurisdiction::Sweden);
    assert!(vat.validate());
}

#[test]
fn parse_unknown_country() {
    let err = VatNumber::parse("GB123456789").unwrap_err();
    assert_eq!(err, VatError::UnknownCountry("GB".into()));
    assert_eq!(err.to_string(), "unknown country code 'GB'");
}

#[test]
fn parse_too_short() {
    assert!(matches!(VatNumber::parse(""), Err(VatError::TooShort(_))));
    assert!(matches!(VatNumber::parse("DE"), Err(VatError::TooShort(_))));
}

#[test]
fn is_valid_shortcut() {
    assert!(is_valid(Jurisdiction::Poland, "1234563218"));
    assert!(!is_valid(Jurisdiction::Poland, "1234567890"));
}

// ---------------------------------------------------------------------------
// Schemes used directly
// ---------------------------------------------------------------------------

#[test]
fn schemes_validate_clean_numbers() {
    use vatcheck::jurisdictions::{Germany, Netherlands, Spain};

    assert!(Germany.is_valid("136695976"));
    // No normalization: a prefixed number is not clean.
    assert!(!Germany.is_valid("DE136695976"));
    assert!(Netherlands.is_valid("010000446B01"));
    assert!(!Netherlands.is_valid("10000446B01"));
    assert_eq!(Spain.abbreviation(), "NIF");
}
