use civil_date::{Date, DateError, days_in_month, days_in_year, is_leap_year};
use proptest::prelude::*;

/// Any valid `(day, month, year)` triple.
fn valid_parts() -> impl Strategy<Value = (u8, u8, u32)> {
    (1u8..=12, 1u32..=9999).prop_flat_map(|(month, year)| {
        (1..=days_in_month(month, year), Just(month), Just(year))
    })
}

fn valid_date() -> impl Strategy<Value = Date> {
    valid_parts().prop_map(|(d, m, y)| Date::new(d, m, y).unwrap())
}

proptest! {
    #[test]
    fn valid_triples_construct_and_round_trip((d, m, y) in valid_parts()) {
        let date = Date::new(d, m, y).unwrap();
        prop_assert_eq!(date.to_parts(), (d, m, y));
        prop_assert_eq!(date.to_string(), format!("{d}.{m}.{y}"));
    }

    #[test]
    fn days_past_month_end_are_rejected(m in 1u8..=12, y in 1u32..=9999, extra in 1u8..=200) {
        let d = days_in_month(m, y).saturating_add(extra);
        let rejected = matches!(Date::new(d, m, y), Err(DateError::InvalidDay { .. }));
        prop_assert!(rejected, "{d}.{m}.{y} was accepted");
    }

    #[test]
    fn leap_rule_matches_definition(y in any::<u32>()) {
        let expected = (y % 4 == 0 && y % 100 != 0) || y % 400 == 0;
        prop_assert_eq!(is_leap_year(y), expected);
        prop_assert_eq!(days_in_month(2, y) == 29, expected);
    }

    #[test]
    fn ordering_matches_year_month_day_tuple(a in valid_date(), b in valid_date()) {
        let key = |date: &Date| (date.year(), date.month(), date.day());
        prop_assert_eq!(a.cmp(&b), key(&a).cmp(&key(&b)));
        prop_assert_eq!(a < b, b > a);
        prop_assert_eq!(a == b, a.to_parts() == b.to_parts());
    }

    #[test]
    fn ordinal_is_within_year(date in valid_date()) {
        let ordinal = date.to_ordinal();
        prop_assert!(ordinal >= 1);
        prop_assert!(ordinal <= days_in_year(date.year()));
    }

    #[test]
    fn add_days_is_additive(date in valid_date(), a in 0u32..5000, b in 0u32..5000) {
        let stepwise = date.add_days(a).unwrap().add_days(b).unwrap();
        prop_assert_eq!(date.add_days(a + b).unwrap(), stepwise);
    }

    #[test]
    fn add_days_moves_forward(date in valid_date(), n in 1u32..5000) {
        prop_assert!(date.add_days(n).unwrap() > date);
    }

    #[test]
    fn next_day_advances_ordinal_within_year(date in valid_date()) {
        let next = date.next_day().unwrap();
        if next.year() == date.year() {
            prop_assert_eq!(next.to_ordinal(), date.to_ordinal() + 1);
        } else {
            prop_assert_eq!((next.day(), next.month()), (1, 1));
            prop_assert_eq!(date.to_ordinal(), days_in_year(date.year()));
        }
    }
}
