use std::cmp::Ordering;

use onbajet_catalog::MenuItem;

use crate::coupons::{best_coupon, BestCoupon};
use crate::filters::{matches_cuisine, matches_fulfillment, DealPreferences};
use crate::models::EvaluatedItem;
use crate::DealResult;

/// Price a single item against the viewer's budget.
pub fn evaluate_item(item: &MenuItem, prefs: &DealPreferences) -> DealResult<EvaluatedItem> {
    item.validate()?;

    let subtotal = item.subtotal();
    let best = if prefs.include_coupons {
        best_coupon(subtotal, &item.coupons)?
    } else {
        BestCoupon::none()
    };
    let adjusted = (subtotal - best.discount).max(0.0);

    Ok(EvaluatedItem {
        item: item.clone(),
        subtotal,
        coupon: best.coupon,
        discount: best.discount,
        adjusted,
        fits_budget: adjusted <= prefs.budget,
    })
}

/// Filter, price and rank the catalog, cheapest adjusted total first.
///
/// Ties keep catalog order. An empty catalog or no matches gives an empty list.
pub fn evaluate_catalog(items: &[MenuItem], prefs: &DealPreferences) -> DealResult<Vec<EvaluatedItem>> {
    prefs.validate()?;
    let keywords = prefs.keywords();

    let mut results = Vec::new();
    for item in items
        .iter()
        .filter(|i| matches_cuisine(i, &keywords))
        .filter(|i| matches_fulfillment(i, prefs.pickup_only))
    {
        let evaluated = evaluate_item(item, prefs)?;
        if prefs.show_above_budget || evaluated.fits_budget {
            results.push(evaluated);
        }
    }

    results.sort_by(|a, b| a.adjusted.partial_cmp(&b.adjusted).unwrap_or(Ordering::Equal));

    tracing::debug!(
        "Evaluated {} of {} catalog items against budget {:.2}",
        results.len(),
        items.len(),
        prefs.budget
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DealError;
    use onbajet_catalog::{mock_catalog, Coupon};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn item(id: &str, cuisine: &[&str], base: f64, fees: f64, pickup: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            vendor: "Test Vendor".to_string(),
            cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
            base_price: base,
            est_fees_tax: fees,
            pickup_available: pickup,
            coupons: Vec::new(),
            url: None,
            distance_mi: None,
            location: None,
        }
    }

    #[test]
    fn test_min_spend_scenario() {
        let mut burger = item("1", &["American"], 6.99, 1.2, true);
        burger.coupons = vec![Coupon::flat("c1", "$3 off $10+", 3.0, "App").with_min_spend(10.0)];

        let evaluated = evaluate_item(&burger, &DealPreferences::default()).unwrap();
        assert!(approx(evaluated.subtotal, 8.19));
        assert_eq!(evaluated.coupon, None);
        assert_eq!(evaluated.discount, 0.0);
        assert!(approx(evaluated.adjusted, 8.19));
        assert!(!evaluated.fits_budget);
    }

    #[test]
    fn test_percent_scenario() {
        let mut burger = item("1", &["American"], 6.99, 1.2, true);
        burger.coupons = vec![Coupon::percent("c2", "15% off up to $4", 15.0, "Promo").with_cap(4.0)];

        let evaluated = evaluate_item(&burger, &DealPreferences::default()).unwrap();
        assert!(approx(evaluated.discount, 1.2285));
        assert!((evaluated.adjusted - 6.96).abs() < 0.005);
    }

    #[test]
    fn test_coupons_off() {
        let prefs = DealPreferences { include_coupons: false, ..Default::default() };
        let evaluated = evaluate_item(&mock_catalog()[0], &prefs).unwrap();
        assert_eq!(evaluated.coupon, None);
        assert!(approx(evaluated.adjusted, evaluated.subtotal));
    }

    #[test]
    fn test_adjusted_is_floored_at_zero() {
        let mut cheap = item("z", &["Snacks"], 1.0, 0.0, true);
        cheap.coupons = vec![Coupon::percent("x", "150%", 150.0, "Typo")];
        // evaluate_item validates, so a 150% coupon is refused outright.
        assert!(matches!(
            evaluate_item(&cheap, &DealPreferences::default()),
            Err(DealError::InvalidInput(_))
        ));

        cheap.coupons = vec![Coupon::flat("x", "$5 off", 5.0, "Promo")];
        let evaluated = evaluate_item(&cheap, &DealPreferences::default()).unwrap();
        assert_eq!(evaluated.adjusted, 0.0);
        assert!(evaluated.fits_budget);
    }

    #[test]
    fn test_total_equal_to_budget_fits() {
        let exact = item("e", &["American"], 4.5, 0.5, true);
        let prefs = DealPreferences { show_above_budget: false, ..Default::default() };

        let evaluated = evaluate_item(&exact, &prefs).unwrap();
        assert_eq!(evaluated.adjusted, 5.0);
        assert!(evaluated.fits_budget);
        assert_eq!(evaluated.over_budget_by(prefs.budget), 0.0);
        assert_eq!(evaluate_catalog(&[exact], &prefs).unwrap().len(), 1);
    }

    #[test]
    fn test_mock_catalog_ranking() {
        let results = evaluate_catalog(&mock_catalog(), &DealPreferences::default()).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);

        assert!(approx(results[0].adjusted, 4.5));
        assert!(results[0].fits_budget);
        assert_eq!(results[0].coupon.as_ref().unwrap().id, "c3");

        assert!(approx(results[1].adjusted, 6.9615));
        assert!(!results[1].fits_budget);
    }

    #[test]
    fn test_within_budget_only() {
        let prefs = DealPreferences { show_above_budget: false, ..Default::default() };
        let results = evaluate_catalog(&mock_catalog(), &prefs).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id, "2");
        assert!(results.iter().all(|r| r.fits_budget));
    }

    #[test]
    fn test_cuisine_and_pickup_filters() {
        let catalog = vec![
            item("a", &["Thai"], 5.0, 0.5, false),
            item("b", &["American", "Burgers"], 4.0, 0.5, true),
            item("c", &["Thai", "Noodles"], 3.0, 0.5, true),
        ];

        let prefs = DealPreferences { cuisine_query: "thai".to_string(), ..Default::default() };
        let ids: Vec<String> = evaluate_catalog(&catalog, &prefs).unwrap().into_iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec!["c", "a"]);

        let prefs = DealPreferences { cuisine_query: "thai".to_string(), pickup_only: true, ..Default::default() };
        let ids: Vec<String> = evaluate_catalog(&catalog, &prefs).unwrap().into_iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec!["c"]);

        let prefs = DealPreferences { cuisine_query: String::new(), ..Default::default() };
        assert_eq!(evaluate_catalog(&catalog, &prefs).unwrap().len(), 3);

        let prefs = DealPreferences { cuisine_query: "sushi".to_string(), ..Default::default() };
        assert!(evaluate_catalog(&catalog, &prefs).unwrap().is_empty());
    }

    #[test]
    fn test_sort_is_stable_and_non_decreasing() {
        let catalog = vec![
            item("first", &["Diner"], 4.0, 1.0, true),
            item("cheap", &["Diner"], 2.0, 0.0, true),
            item("second", &["Diner"], 3.0, 2.0, true),
            item("third", &["Diner"], 5.0, 0.0, true),
        ];
        let prefs = DealPreferences { cuisine_query: String::new(), budget: 10.0, ..Default::default() };
        let results = evaluate_catalog(&catalog, &prefs).unwrap();

        let ids: Vec<&str> = results.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["cheap", "first", "second", "third"]);
        assert!(results.windows(2).all(|w| w[0].adjusted <= w[1].adjusted));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let prefs = DealPreferences { show_above_budget: false, budget: 7.0, ..Default::default() };
        let once = evaluate_catalog(&mock_catalog(), &prefs).unwrap();
        let survivors: Vec<MenuItem> = once.iter().map(|r| r.item.clone()).collect();
        let twice = evaluate_catalog(&survivors, &prefs).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_catalog_and_bad_input() {
        assert!(evaluate_catalog(&[], &DealPreferences::default()).unwrap().is_empty());

        let prefs = DealPreferences { budget: 0.0, ..Default::default() };
        assert!(matches!(evaluate_catalog(&mock_catalog(), &prefs), Err(DealError::InvalidInput(_))));

        let mut bad = mock_catalog();
        bad[0].base_price = -3.0;
        assert!(matches!(evaluate_catalog(&bad, &DealPreferences::default()), Err(DealError::InvalidInput(_))));
    }
}
