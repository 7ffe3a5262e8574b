use crate::coupon::Coupon;
use crate::item::MenuItem;

/// The seed catalog used until a real catalog source is wired in.
pub fn mock_catalog() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".to_string(),
            name: "Classic Cheeseburger".to_string(),
            vendor: "Patty Palace".to_string(),
            cuisine: vec!["American".to_string(), "Burgers".to_string()],
            base_price: 6.99,
            est_fees_tax: 1.2,
            pickup_available: true,
            coupons: vec![
                Coupon::flat("c1", "$3 off $10+", 3.0, "Restaurant app").with_min_spend(10.0),
                Coupon::percent("c2", "15% off up to $4", 15.0, "Promo").with_cap(4.0),
            ],
            url: Some("#".to_string()),
            distance_mi: Some(1.2),
            location: None,
        },
        MenuItem {
            id: "2".to_string(),
            name: "Grilled Chicken Club Sandwich".to_string(),
            vendor: "Toasty Town".to_string(),
            cuisine: vec!["American".to_string(), "Sandwiches".to_string()],
            base_price: 4.75,
            est_fees_tax: 0.75,
            pickup_available: true,
            coupons: vec![Coupon::flat("c3", "$1 off any sandwich", 1.0, "In-store")],
            url: Some("#".to_string()),
            distance_mi: Some(0.6),
            location: None,
        },
    ]
}
