//! Property tests for past windows over every model configuration.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use quotemine_model::{bin_span, TemporalModel};
use quotemine_types::{
    Cluster, ClusterId, ModelConfig, OccurrenceRef, Past, Quote, QuoteId, Time, UrlType,
};

// ----------------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------------

fn origin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 8, 1, 0, 0, 0).unwrap()
}

/// A cluster starting `start` minutes after midnight, with one later
/// occurrence `delay` minutes after the start.
fn two_occurrence_cluster(start: i64, delay: i64) -> Cluster {
    let words = |s: &str| -> Vec<String> { s.split(' ').map(str::to_string).collect() };
    let first = origin() + Duration::minutes(start);
    let source = Quote::new(QuoteId(1), ClusterId(1), 1, words("a b c"), words("a b c"))
        .unwrap()
        .with_occurrence(first, 1, UrlType::News, "http://a");
    let destination = Quote::new(QuoteId(2), ClusterId(1), 2, words("a x c"), words("a x c"))
        .unwrap()
        .with_occurrence(first + Duration::minutes(delay), 1, UrlType::Blog, "http://b");
    Cluster::new(ClusterId(1), 1, "test")
        .with_quote(source)
        .unwrap()
        .with_quote(destination)
        .unwrap()
}

fn is_midnight(t: DateTime<Utc>) -> bool {
    t.time() == NaiveTime::MIN
}

// ----------------------------------------------------------------------------
// Properties
// ----------------------------------------------------------------------------

proptest! {
    #[test]
    fn past_window_is_bounded_for_every_config(
        start in 0i64..1440,
        delay in 0i64..(10 * 1440),
    ) {
        let cluster = two_occurrence_cluster(start, delay);
        let cluster_start = cluster.start().unwrap();
        let durl = cluster.occurrence(OccurrenceRef::new(QuoteId(2), 0)).unwrap();

        for config in ModelConfig::all() {
            let mut model = TemporalModel::new(config);
            let past = model.past_interval(&cluster, durl).unwrap();

            prop_assert!(past.start() >= cluster_start);
            prop_assert!(past.start() <= past.end());
            prop_assert!(past.end() <= durl.timestamp);

            match config.time {
                Time::Continuous => prop_assert_eq!(past.end(), durl.timestamp),
                Time::Discrete => {
                    prop_assert!(past.end() == cluster_start || is_midnight(past.end()));
                    prop_assert!(durl.timestamp - past.end() < bin_span());
                }
            }
            if config.past == Past::LastBin {
                prop_assert!(past.duration() <= bin_span());
            }
        }
    }

    #[test]
    fn source_validates_once_inside_the_window(
        start in 0i64..1440,
        delay in 0i64..(10 * 1440),
    ) {
        let cluster = two_occurrence_cluster(start, delay);
        let source = cluster.quote(QuoteId(1)).unwrap();
        let durl = cluster.occurrence(OccurrenceRef::new(QuoteId(2), 0)).unwrap();
        let since_midnight = start + delay;

        for config in ModelConfig::all() {
            let mut model = TemporalModel::new(config);
            let valid = model.validate(&cluster, source, durl).unwrap();
            let expected = match (config.time, config.past) {
                (Time::Continuous, Past::All) => delay > 0,
                (Time::Continuous, Past::LastBin) => delay > 0 && delay <= 1440,
                (Time::Discrete, Past::All) => since_midnight >= 1440,
                (Time::Discrete, Past::LastBin) => (1440..2880).contains(&since_midnight),
            };
            prop_assert_eq!(valid, expected, "{}", config);
        }
    }
}
