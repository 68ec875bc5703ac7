//! Built-in sample catalog used when the remote endpoint is unavailable.

use elite_store_core::{Product, ProductId};
use rust_decimal::Decimal;

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// The 8 sample products substituted on catalog-fetch failure.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Premium Wireless Headphones".to_string(),
            price: Decimal::from(299),
            original_price: Some(Decimal::from(399)),
            image: "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "electronics".to_string(),
            rating: 4.8,
            reviews: 247,
            description: "Experience crystal-clear audio with our premium wireless headphones featuring active noise cancellation, 30-hour battery life, and premium comfort.".to_string(),
            features: features(&[
                "Active Noise Cancellation",
                "30-hour Battery",
                "Premium Comfort",
                "Hi-Res Audio",
            ]),
            in_stock: true,
            badge: Some("Best Seller".to_string()),
        },
        Product {
            id: ProductId::new("2"),
            name: "Smart Fitness Watch".to_string(),
            price: Decimal::from(249),
            original_price: None,
            image: "https://images.pexels.com/photos/393047/pexels-photo-393047.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "electronics".to_string(),
            rating: 4.6,
            reviews: 189,
            description: "Track your fitness goals with advanced health monitoring, GPS tracking, and smart notifications in a sleek, waterproof design.".to_string(),
            features: features(&[
                "Health Monitoring",
                "GPS Tracking",
                "Waterproof",
                "Smart Notifications",
            ]),
            in_stock: true,
            badge: Some("New".to_string()),
        },
        Product {
            id: ProductId::new("3"),
            name: "Luxury Leather Handbag".to_string(),
            price: Decimal::from(449),
            original_price: Some(Decimal::from(599)),
            image: "https://images.pexels.com/photos/1152077/pexels-photo-1152077.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "fashion".to_string(),
            rating: 4.9,
            reviews: 156,
            description: "Handcrafted from premium Italian leather, this elegant handbag combines timeless style with modern functionality.".to_string(),
            features: features(&[
                "Premium Italian Leather",
                "Handcrafted",
                "Multiple Compartments",
                "Dust Bag Included",
            ]),
            in_stock: true,
            badge: None,
        },
        Product {
            id: ProductId::new("4"),
            name: "Professional Camera Lens".to_string(),
            price: Decimal::from(899),
            original_price: None,
            image: "https://images.pexels.com/photos/90946/pexels-photo-90946.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "electronics".to_string(),
            rating: 4.7,
            reviews: 98,
            description: "Capture stunning professional-quality photos with this premium telephoto lens featuring advanced optical stabilization.".to_string(),
            features: features(&[
                "Optical Stabilization",
                "Weather Sealed",
                "Premium Glass",
                "Professional Quality",
            ]),
            in_stock: true,
            badge: None,
        },
        Product {
            id: ProductId::new("5"),
            name: "Minimalist Desk Setup".to_string(),
            price: Decimal::from(599),
            original_price: None,
            image: "https://images.pexels.com/photos/1029757/pexels-photo-1029757.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "home".to_string(),
            rating: 4.5,
            reviews: 234,
            description: "Create the perfect workspace with this minimalist desk featuring sustainable bamboo construction and built-in cable management.".to_string(),
            features: features(&[
                "Sustainable Bamboo",
                "Cable Management",
                "Minimalist Design",
                "Easy Assembly",
            ]),
            in_stock: true,
            badge: None,
        },
        Product {
            id: ProductId::new("6"),
            name: "Premium Coffee Maker".to_string(),
            price: Decimal::from(399),
            original_price: Some(Decimal::from(499)),
            image: "https://images.pexels.com/photos/324028/pexels-photo-324028.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "kitchen".to_string(),
            rating: 4.8,
            reviews: 312,
            description: "Brew the perfect cup every time with this premium coffee maker featuring precision temperature control and programmable settings.".to_string(),
            features: features(&[
                "Precision Temperature",
                "Programmable",
                "Premium Materials",
                "Easy Maintenance",
            ]),
            in_stock: true,
            badge: Some("Staff Pick".to_string()),
        },
        Product {
            id: ProductId::new("7"),
            name: "Designer Sunglasses".to_string(),
            price: Decimal::from(199),
            original_price: None,
            image: "https://images.pexels.com/photos/701877/pexels-photo-701877.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "fashion".to_string(),
            rating: 4.4,
            reviews: 167,
            description: "Protect your eyes in style with these designer sunglasses featuring polarized lenses and titanium frames.".to_string(),
            features: features(&[
                "Polarized Lenses",
                "Titanium Frame",
                "UV Protection",
                "Luxury Case",
            ]),
            in_stock: true,
            badge: None,
        },
        Product {
            id: ProductId::new("8"),
            name: "Wireless Charging Station".to_string(),
            price: Decimal::from(79),
            original_price: None,
            image: "https://images.pexels.com/photos/4316/smartphone-phone-cell-phone-mobile-phone.jpg?auto=compress&cs=tinysrgb&w=500".to_string(),
            category: "electronics".to_string(),
            rating: 4.3,
            reviews: 445,
            description: "Charge all your devices wirelessly with this sleek 3-in-1 charging station compatible with all Qi-enabled devices.".to_string(),
            features: features(&[
                "3-in-1 Charging",
                "Qi Compatible",
                "LED Indicators",
                "Non-slip Base",
            ]),
            in_stock: true,
            badge: None,
        },
    ]
}
