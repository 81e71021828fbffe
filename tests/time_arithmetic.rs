use civil_time::{Offset, Precision, Time, TimePiece, TimeSpan};


mod wrapping {
    use super::*;

    #[test]
    fn hours_past_midnight() {
        let time = Time::hm(23, 23).unwrap().add_hours(2);
        assert_eq!(time.hour(), 1);
        assert_eq!(time, Time::hm(1, 23).unwrap());
    }

    #[test]
    fn twenty_five_hours_is_one() {
        let time = Time::hm(10, 0).unwrap();
        assert_eq!(time.add_hours(25), time.add_hours(1));
    }

    #[test]
    fn seconds_at_the_minute_boundary() {
        let time = Time::hms(23, 59, 10).unwrap().add_seconds(55);
        assert_eq!(time, Time::hms(0, 0, 5).unwrap());
    }

    #[test]
    fn borrow_before_midnight() {
        let time = Time::hms(0, 0, 5).unwrap().subtract_seconds(10);
        assert_eq!(time, Time::hms(23, 59, 55).unwrap());
    }

    #[test]
    fn many_days_backwards() {
        let time = Time::hm(6, 0).unwrap().subtract_hours(24 * 365 + 7);
        assert_eq!(time, Time::hm(23, 0).unwrap());
    }

    #[test]
    fn huge_spans() {
        let time = Time::hm(0, 0).unwrap().add_hours(i64::MAX);
        assert_eq!(time.hour(), (i64::MAX % 24) as i8);

        let time = Time::hms_ns(0, 0, 0, 0, 0, 0).unwrap().subtract_nanoseconds(i64::MAX);
        assert!(time.hour() >= 0 && time.hour() < 24);
    }

    #[test]
    fn subtracting_the_smallest_count() {
        let time = Time::hms(10, 0, 0).unwrap();
        assert_eq!(time.subtract_seconds(i64::MIN), time.add_seconds(i64::MAX).add_seconds(1));
        assert_eq!(time - TimeSpan::Hours(i64::MIN), time.add_hours(i64::MAX).add_hours(1));

        let time = Time::hms_ns(10, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(time.subtract_nanoseconds(i64::MIN), time.add_nanoseconds(i64::MAX).add_nanoseconds(1));
    }

    #[test]
    fn every_unit() {
        let time = Time::hms_ns(12, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(time.add_minutes(90).to_string(),          "13:30:00.000.000.000+00");
        assert_eq!(time.add_milliseconds(1500).to_string(),   "12:00:01.500.000.000+00");
        assert_eq!(time.add_microseconds(2).to_string(),      "12:00:00.000.002.000+00");
        assert_eq!(time.add_nanoseconds(-1).to_string(),      "11:59:59.999.999.999+00");
        assert_eq!(time.subtract_minutes(721).to_string(),    "23:59:00.000.000.000+00");
        assert_eq!(time.subtract_milliseconds(1).to_string(), "11:59:59.999.000.000+00");
        assert_eq!(time.subtract_microseconds(1).to_string(), "11:59:59.999.999.000+00");
    }
}


mod below_precision {
    use super::*;

    #[test]
    fn half_a_second_has_no_effect() {
        let time = Time::hms(10, 20, 30).unwrap();
        assert_eq!(time.add_milliseconds(500), time);
        assert_eq!(time.add_milliseconds(500).to_string(), "10:20:30+00");
    }

    #[test]
    fn two_halves_make_a_second() {
        let time = Time::hms(10, 20, 30).unwrap();
        let twice = time.add_milliseconds(500).add_milliseconds(500);
        assert_eq!(twice, time.add_seconds(1));
    }

    #[test]
    fn seconds_on_a_minutes_time() {
        let time = Time::hm(10, 20).unwrap();
        assert_eq!(time.add_seconds(59), time);
        assert_eq!(time.add_seconds(59).add_seconds(1), Time::hm(10, 21).unwrap());
    }

    #[test]
    fn remainder_carries_past_midnight() {
        let time = Time::hms(23, 59, 59).unwrap().add_milliseconds(999);
        assert_eq!(time, Time::hms(23, 59, 59).unwrap());
        assert_eq!(time.add_milliseconds(1), Time::hms(0, 0, 0).unwrap());
    }

    #[test]
    fn subtracting_borrows_a_whole_unit() {
        let time = Time::hms(10, 20, 30).unwrap().subtract_milliseconds(1);
        assert_eq!(time, Time::hms(10, 20, 29).unwrap());
    }
}


mod comparison {
    use super::*;

    #[test]
    fn same_precision() {
        assert!(Time::hms(10, 0, 0).unwrap() < Time::hms(10, 0, 1).unwrap());
        assert!(Time::hms(10, 0, 1).unwrap() > Time::hms(10, 0, 0).unwrap());
        assert_eq!(Time::hms(10, 0, 0).unwrap(), Time::hms(10, 0, 0).unwrap());
    }

    #[test]
    fn different_precision() {
        let minutes = Time::hm(10, 0).unwrap();
        let nanos = Time::hms_ns(10, 0, 0, 0, 0, 0).unwrap();
        let later = Time::hms(11, 0, 0).unwrap();

        assert!(minutes != nanos);
        assert!(!(minutes < later));
        assert!(!(minutes > later));
        assert!(!(minutes <= later));
    }

    #[test]
    fn offsets_do_not_count() {
        let time = Time::hm(10, 0).unwrap();
        assert_eq!(time, time.with_offset(Offset::of_hours(-8).unwrap()));
    }
}


mod precision {
    use super::*;

    #[test]
    fn coarser_truncates() {
        let time = Time::hms_ms(10, 20, 30, 999).unwrap();
        assert_eq!(time.with_precision(Precision::Seconds), Time::hms(10, 20, 30).unwrap());
        assert_eq!(time.with_precision(Precision::Minutes), Time::hm(10, 20).unwrap());
    }

    #[test]
    fn finer_shows_zeros() {
        let time = Time::hm(10, 20).unwrap();
        assert_eq!(time.with_precision(Precision::Nanoseconds).to_string(), "10:20:00.000.000.000+00");
    }

    #[test]
    fn hidden_remainder_is_dropped() {
        let time = Time::hms(10, 20, 30).unwrap().add_milliseconds(700);
        assert_eq!(time.with_precision(Precision::Milliseconds).millisecond(), 0);
    }

    #[test]
    fn ordered_coarse_to_fine() {
        assert!(Precision::Minutes < Precision::Seconds);
        assert!(Precision::Microseconds < Precision::Nanoseconds);
    }
}


mod since_midnight {
    use super::*;

    #[test]
    fn precision_from_the_unit() {
        assert_eq!(Time::since_midnight(TimeSpan::Hours(3)).precision(), Precision::Minutes);
        assert_eq!(Time::since_midnight(TimeSpan::Seconds(3)).precision(), Precision::Seconds);
        assert_eq!(Time::since_midnight(TimeSpan::Nanoseconds(3)).precision(), Precision::Nanoseconds);
    }

    #[test]
    fn wraps_around() {
        assert_eq!(Time::since_midnight(TimeSpan::Seconds(-1)), Time::hms(23, 59, 59).unwrap());
        assert_eq!(Time::since_midnight(TimeSpan::Hours(49)), Time::hm(1, 0).unwrap());
    }
}


mod operators {
    use super::*;

    #[test]
    fn spans() {
        let mut time = Time::hms(22, 0, 0).unwrap();
        assert_eq!(time + TimeSpan::Hours(3), Time::hms(1, 0, 0).unwrap());
        assert_eq!(time - TimeSpan::Minutes(1), Time::hms(21, 59, 0).unwrap());

        time += TimeSpan::Seconds(3601);
        assert_eq!(time, Time::hms(23, 0, 1).unwrap());
        time -= TimeSpan::Hours(24);
        assert_eq!(time, Time::hms(23, 0, 1).unwrap());
    }

    #[test]
    fn times_take_the_finer_precision() {
        let a = Time::hm(23, 0).unwrap();
        let b = Time::hms_ms(1, 30, 15, 250).unwrap();

        let sum = a + b;
        assert_eq!(sum.precision(), Precision::Milliseconds);
        assert_eq!(sum, Time::hms_ms(0, 30, 15, 250).unwrap());

        let difference = a - b;
        assert_eq!(difference, Time::hms_ms(21, 29, 44, 750).unwrap());
    }

    #[test]
    fn carry_out_of_the_day() {
        let (time, days) = Time::hms(12, 0, 0).unwrap().add_with_carry(TimeSpan::Hours(-36));
        assert_eq!(time, Time::hms(0, 0, 0).unwrap());
        assert_eq!(days, -1);

        let (time, days) = Time::hms(12, 0, 0).unwrap().add_with_carry(TimeSpan::Hours(-37));
        assert_eq!(time, Time::hms(23, 0, 0).unwrap());
        assert_eq!(days, -2);
    }
}
