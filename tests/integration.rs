use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Utc, Weekday};
use tempora::{
    dates_between, day_finish, day_start, list_seasons, month_finish, month_start, next_date,
    quarter, quarter_finish, quarter_start, tick, time_of_day, time_of_week, week_finish,
    week_start, year_finish, year_start, CalendarDate, SeasonCache, SeasonName, TimeOfDay,
    TimeOfWeek,
};

/// A spread of timestamps across years, months, weekdays and hours.
fn samples() -> Vec<DateTime<FixedOffset>> {
    let zones = [0, 5 * 3600 + 1800, -8 * 3600];
    let mut out = Vec::new();
    for offset in zones {
        let tz = FixedOffset::east_opt(offset).unwrap();
        let mut t = tz.with_ymd_and_hms(2023, 12, 29, 7, 13, 0).unwrap();
        for _ in 0..120 {
            out.push(t);
            t = t + Duration::hours(37) + Duration::minutes(11);
        }
    }
    out
}

#[test]
fn day_bounds_enclose_and_tile() {
    for t in samples() {
        let start = day_start(&t);
        let finish = day_finish(&t);
        assert!(start <= t && t <= finish, "{t}");
        let following = next_date(&t);
        let next_midnight = t
            .timezone()
            .with_ymd_and_hms(following.year(), following.month_number(), following.day(), 0, 0, 0)
            .unwrap();
        assert_eq!(finish + tick(), next_midnight, "{t}");
    }
}

#[test]
fn week_bounds_start_sunday_and_span_seven_days() {
    for t in samples() {
        let start = week_start(&t);
        assert_eq!(start.weekday(), Weekday::Sun, "{t}");
        assert_eq!(week_finish(&t) + tick(), start + Duration::days(7), "{t}");
        assert!(start <= t && t <= week_finish(&t));
    }
}

#[test]
fn month_quarter_year_finish_meets_next_start() {
    for t in samples() {
        let next_month = month_finish(&t) + tick();
        assert_eq!(next_month.day(), 1);
        assert_eq!(month_start(&next_month), next_month);

        let next_quarter = quarter_finish(&t) + tick();
        assert_eq!(quarter_start(&next_quarter), next_quarter);
        assert!(quarter_start(&t) <= t);

        let next_year = year_finish(&t) + tick();
        assert_eq!(next_year.year(), t.year() + 1);
        assert_eq!(year_start(&next_year), next_year);
    }
}

#[test]
fn quarter_constant_across_its_months() {
    for t in samples() {
        assert_eq!(quarter(&month_start(&t)), quarter(&t));
        assert_eq!(quarter(&month_finish(&t)), quarter(&t));
    }
}

#[test]
fn dates_between_includes_partial_final_day() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
    let dates: Vec<String> = dates_between(&start, &end)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[test]
fn dates_between_same_instant_is_single_date() {
    let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        dates_between(&t, &t),
        vec![CalendarDate::new(2024, 1, 1).unwrap()]
    );
}

#[test]
fn seasons_cover_year_without_gaps() {
    let table = list_seasons(&Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    let seasons = table.seasons();
    assert_eq!(seasons.len(), 5);
    assert_eq!(seasons[0].start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(
        seasons[4].end + tick(),
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    );
    for pair in seasons.windows(2) {
        assert_eq!(pair[0].end + tick(), pair[1].start);
    }
}

#[test]
fn independence_day_is_summer() {
    let t = Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap();
    let table = list_seasons(&t);
    assert_eq!(table.get_season(&t).map(|s| s.name), Some(SeasonName::Summer));
}

#[test]
fn season_cache_is_stable_within_a_year() {
    let mut cache = SeasonCache::new();
    let first = cache.get_season(&Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    let second = cache.get_season(&Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    assert_eq!(first, second);
    assert_eq!(first.map(|s| s.name), Some(SeasonName::Winter));
    cache.get_season(&Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap());
    assert_eq!(cache.len(), 1);
}

#[test]
fn classification_examples() {
    let at = |h| Utc.with_ymd_and_hms(2024, 6, 12, h, 0, 0).unwrap();
    assert_eq!(time_of_day(&at(6)), TimeOfDay::Morning);
    assert_eq!(time_of_day(&at(12)), TimeOfDay::Afternoon);
    assert_eq!(time_of_day(&at(18)), TimeOfDay::Evening);
    assert_eq!(time_of_day(&at(0)), TimeOfDay::LateNight);

    let saturday = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let wednesday = Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap();
    assert_eq!(time_of_week(&saturday), TimeOfWeek::WeekEnd);
    assert_eq!(time_of_week(&wednesday), TimeOfWeek::WeekDay);
}

#[test]
fn bounds_in_named_zone_across_dst() {
    let tz = chrono_tz::America::New_York;
    // 2024-03-10 springs forward at 02:00 local; the day is 23 hours long.
    let t = tz.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let start = day_start(&t);
    let finish = day_finish(&t);
    assert_eq!(finish + tick() - start, Duration::hours(23));
    assert_eq!(month_start(&t), tz.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
}

#[cfg(feature = "serde")]
#[test]
fn serde_calendar_date_uses_numeric_month() {
    let date = CalendarDate::new(2024, 2, 29).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":2,"day":29}"#);
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_invalid_calendar_date() {
    let err = serde_json::from_str::<CalendarDate>(r#"{"year":2023,"month":2,"day":29}"#);
    assert!(err.is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_season_name_is_lowercase() {
    assert_eq!(serde_json::to_string(&SeasonName::Fall).unwrap(), r#""fall""#);
}
