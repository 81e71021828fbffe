use civil_time::{Date, DatePiece, DateSpan, Month};


fn ymd(year: i64, month: i8, day: i8) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}


mod days {
    use super::*;

    #[test]
    fn forwards_over_a_month() {
        assert_eq!(ymd(2021, 8, 25).add_days(7), ymd(2021, 9, 1));
    }

    #[test]
    fn backwards_over_a_year() {
        assert_eq!(ymd(2021, 1, 1).subtract_days(1), ymd(2020, 12, 31));
    }

    #[test]
    fn a_whole_leap_year() {
        assert_eq!(ymd(2024, 1, 1).add_days(366), ymd(2025, 1, 1));
    }

    #[test]
    fn a_whole_era() {
        assert_eq!(ymd(1600, 3, 1).add_days(146_097), ymd(2000, 3, 1));
    }

    #[test]
    fn there_and_back() {
        let date = ymd(1999, 12, 31);
        assert_eq!(date.add_days(12_345).subtract_days(12_345), date);
    }

    #[test]
    fn the_largest_counts() {
        let date = ymd(2021, 1, 1);
        assert_eq!(date.add_days(i64::MAX).subtract_days(i64::MAX), date);
        assert_eq!(date.subtract_days(i64::MIN), date.add_days(i64::MAX).add_days(1));
        assert_eq!(date - DateSpan::Days(i64::MIN), date.subtract_days(i64::MIN));
    }

    #[test]
    fn day_count_saturates() {
        let date = Date::from_days_since_epoch(i64::MAX).add_days(i64::MAX);
        assert_eq!(date.days_since_epoch(), i64::MAX);
        assert_eq!(date.subtract_days(i64::MAX), Date::from_days_since_epoch(i64::MAX));
    }
}


mod months {
    use super::*;

    #[test]
    fn leap_year_clamp() {
        assert_eq!(ymd(2024, 1, 31).add_months(1), ymd(2024, 2, 29));
    }

    #[test]
    fn non_leap_year_clamp() {
        assert_eq!(ymd(2023, 1, 31).add_months(1), ymd(2023, 2, 28));
    }

    #[test]
    fn thirty_day_month_clamp() {
        assert_eq!(ymd(2021, 3, 31).add_months(1), ymd(2021, 4, 30));
        assert_eq!(ymd(2021, 5, 31).subtract_months(1), ymd(2021, 4, 30));
    }

    #[test]
    fn chained_shifts_clamp_each_time() {
        let date = ymd(2021, 1, 31).add_months(1).add_months(1);
        assert_eq!(date, ymd(2021, 3, 28));
    }

    #[test]
    fn into_next_year() {
        assert_eq!(ymd(2021, 11, 15).add_months(3), ymd(2022, 2, 15));
    }

    #[test]
    fn into_previous_year() {
        assert_eq!(ymd(2021, 2, 15).subtract_months(3), ymd(2020, 11, 15));
    }

    #[test]
    fn many_years() {
        assert_eq!(ymd(2021, 8, 25).add_months(12 * 100 + 5), ymd(2122, 1, 25));
        assert_eq!(ymd(2021, 8, 25).subtract_months(12 * 100 + 8), ymd(1920, 12, 25));
    }

    #[test]
    fn december() {
        assert_eq!(ymd(2021, 1, 10).add_months(11), ymd(2021, 12, 10));
        assert_eq!(ymd(2021, 12, 10).subtract_months(12), ymd(2020, 12, 10));
    }
}


mod years {
    use super::*;

    #[test]
    fn leap_day_to_non_leap_year() {
        assert_eq!(ymd(2024, 2, 29).add_years(1), ymd(2025, 2, 28));
    }

    #[test]
    fn leap_day_to_leap_year() {
        assert_eq!(ymd(2024, 2, 29).subtract_years(4), ymd(2020, 2, 29));
    }

    #[test]
    fn leap_day_to_century() {
        assert_eq!(ymd(2000, 2, 29).add_years(100), ymd(2100, 2, 28));
    }

    #[test]
    fn ordinary_day() {
        assert_eq!(ymd(2021, 8, 25).subtract_years(21), ymd(2000, 8, 25));
    }
}


mod limits {
    use super::*;

    #[test]
    fn years_stop_at_the_last_date() {
        let date = ymd(2021, 8, 25).add_years(i64::MAX);
        assert_eq!(date.year(), i64::MAX);
        assert_eq!(date.month(), Month::December);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn years_stop_at_the_first_date() {
        let date = ymd(2021, 8, 25).subtract_years(i64::MAX).subtract_years(i64::MAX);
        assert_eq!(date.year(), i64::MIN);
        assert_eq!(date.month(), Month::January);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn months_from_the_smallest_count() {
        let date = ymd(2021, 8, 25);
        assert_eq!(date.subtract_months(i64::MIN), date.add_months(i64::MAX).add_months(1));
        assert_eq!(date.subtract_years(i64::MIN), date.add_years(i64::MAX));
    }

    #[test]
    fn weekday_far_away() {
        let date = ymd(2021, 8, 25);
        let later = date.add_days(i64::MAX - i64::MAX % 7);
        assert_eq!(later.weekday(), date.weekday());
    }
}


mod operators {
    use super::*;

    #[test]
    fn addition() {
        assert_eq!(ymd(2024, 1, 31) + DateSpan::Months(1), ymd(2024, 2, 29));
        assert_eq!(ymd(2024, 2, 29) + DateSpan::Years(1), ymd(2025, 2, 28));
        assert_eq!(ymd(2024, 2, 28) + DateSpan::Days(2), ymd(2024, 3, 1));
    }

    #[test]
    fn subtraction() {
        assert_eq!(ymd(2024, 3, 1) - DateSpan::Days(1), ymd(2024, 2, 29));
        assert_eq!(ymd(2024, 3, 31) - DateSpan::Months(1), ymd(2024, 2, 29));
    }

    #[test]
    fn assignment() {
        let mut date = ymd(2021, 12, 31);
        date += DateSpan::Days(1);
        assert_eq!(date, ymd(2022, 1, 1));
        date -= DateSpan::Years(2);
        assert_eq!(date, ymd(2020, 1, 1));
    }
}


mod ordering {
    use super::*;

    #[test]
    fn by_day_count() {
        assert!(ymd(2021, 8, 25) < ymd(2021, 8, 26));
        assert!(ymd(2021, 12, 31) < ymd(2022, 1, 1));
        assert!(ymd(1999, 1, 1) > ymd(998, 12, 31));
        assert!(ymd(2021, 8, 25) <= ymd(2021, 8, 25));
    }

    #[test]
    fn agrees_with_day_count() {
        let a = ymd(1989, 11, 10);
        let b = ymd(1990, 7, 8);
        assert_eq!(a.cmp(&b), a.days_since_epoch().cmp(&b.days_since_epoch()));
    }
}
