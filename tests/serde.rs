#![cfg(feature="serde")]

use civil_time::{Date, DateTime, Time};


#[test]
fn date_as_string() {
    let date = Date::from_ymd(2021, 8, 25).unwrap();
    assert_eq!(serde_json::to_string(&date).unwrap(), "\"2021-08-25\"");
    assert_eq!(serde_json::from_str::<Date>("\"20210825\"").unwrap(), date);
}

#[test]
fn time_as_string() {
    let time: Time = "23:59:10.250-03".parse().unwrap();
    let json = serde_json::to_string(&time).unwrap();
    assert_eq!(json, "\"23:59:10.250-03\"");

    let back: Time = serde_json::from_str(&json).unwrap();
    assert_eq!(back, time);
    assert_eq!(back.offset(), time.offset());
}

#[test]
fn datetime_in_a_list() {
    let datetimes: Vec<DateTime> = serde_json::from_str(r#"["2021-01-01T23:59", "20210102T00:00:05+02"]"#).unwrap();
    assert_eq!(datetimes.len(), 2);
    assert_eq!(serde_json::to_string(&datetimes).unwrap(), r#"["2021-01-01T23:59+00","2021-01-02T00:00:05+02"]"#);
}

#[test]
fn bad_text_is_an_error() {
    let error = serde_json::from_str::<Date>("\"2021-8-25\"").unwrap_err();
    assert!(error.to_string().contains("invalid format"));

    assert!(serde_json::from_str::<Time>("1234").is_err());
}
