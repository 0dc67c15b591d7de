use chrono::{Duration, Local};
use tempora::{dates_between, CalendarExt, SeasonCache, Unit};

fn main() {
    let now = Local::now();

    for unit in [Unit::Hour, Unit::Day, Unit::Week, Unit::Month, Unit::Quarter, Unit::Year] {
        println!("{unit:>8}: {}", unit.period(&now));
    }

    println!("Quarter: Q{}", now.quarter_number());
    println!("Time of day: {:?}", now.time_of_day());
    println!("Time of week: {:?}", now.time_of_week());

    let mut seasons = SeasonCache::new();
    match seasons.get_season(&now) {
        Some(season) => println!("Season: {} ({} to {})", season.name, season.start, season.end),
        None => println!("Season: on a boundary"),
    }

    let dates = dates_between(&now, &(now + Duration::days(3)));
    let listed: Vec<String> = dates.iter().map(ToString::to_string).collect();
    println!("Next days: {}", listed.join(", "));
}
