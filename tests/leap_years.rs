use civil_time::{is_leap_year, Date, Year};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap_year() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2021() {
    assert!(!is_leap_year(2021));
}

#[test]
fn year_2024() {
    assert!(is_leap_year(2024));
}

#[test]
fn year_2038() {
    assert!(Year(2038).is_leap_year() == false);
}

#[test]
fn rule_holds_for_every_year() {
    for year in 1 .. 4000 {
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(is_leap_year(year), expected, "year {}", year);
        assert_eq!(Date::from_ymd(year, 2, 29).is_ok(), expected, "year {}", year);
    }
}
