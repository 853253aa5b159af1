use holidayschedule::utility::ordinal::{to_ordinal_string, NumberFormat};

#[test]
fn suffixes() {
    let cases = [
        (0, "0th"),
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (101, "101st"),
        (111, "111th"),
        (112, "112th"),
        (1002, "1002nd"),
    ];
    for (n, expected) in cases {
        assert_eq!(to_ordinal_string(n, None), expected, "{n}");
    }
}

#[test]
fn negative_numbers_have_no_suffix() {
    assert_eq!(to_ordinal_string(-5, None), "-5");
    assert_eq!(to_ordinal_string(-1, None), "-1");
    assert_eq!(to_ordinal_string(-11, None), "-11");
}

#[test]
fn zero_padded() {
    assert_eq!(to_ordinal_string(1, Some(NumberFormat::ZeroPadded(3))), "001st");
    assert_eq!(to_ordinal_string(12, Some(NumberFormat::ZeroPadded(3))), "012th");
    assert_eq!(to_ordinal_string(1234, Some(NumberFormat::ZeroPadded(2))), "1234th");
    assert_eq!(to_ordinal_string(-5, Some(NumberFormat::ZeroPadded(3))), "-05");
}

#[test]
fn grouped() {
    assert_eq!(to_ordinal_string(1001, Some(NumberFormat::Grouped)), "1,001st");
    assert_eq!(to_ordinal_string(1_000_013, Some(NumberFormat::Grouped)), "1,000,013th");
    assert_eq!(to_ordinal_string(-1234, Some(NumberFormat::Grouped)), "-1,234");
}
