//! Bundled demo catalog, shown when the remote catalog cannot be loaded.

use storefront_core::Price;

use crate::product::{Catalog, Product};

/// The demo products, in display order.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Fjallraven Foldsack No. 1 Backpack",
            "men's clothing",
            Price::from_cents(10995),
        )
        .with_description("Your perfect pack for everyday use and walks in the forest.")
        .with_image("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg")
        .with_rating(3.9, 120),
        Product::new(2, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing", Price::from_cents(2230))
            .with_description("Slim-fitting style, contrast raglan long sleeve, three-button henley placket.")
            .with_image("https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg")
            .with_rating(4.1, 259),
        Product::new(3, "Mens Cotton Jacket", "men's clothing", Price::from_cents(5599))
            .with_description("Great outerwear jacket for spring, autumn and winter.")
            .with_image("https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg")
            .with_rating(4.7, 500),
        Product::new(
            4,
            "John Hardy Women's Legends Naga Bracelet",
            "jewelery",
            Price::from_cents(69500),
        )
        .with_description("Inspired by the mythical water dragon that protects the ocean's pearl.")
        .with_image("https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg")
        .with_rating(4.6, 400),
        Product::new(5, "Solid Gold Petite Micropave", "jewelery", Price::from_cents(16800))
            .with_description("Satisfaction guaranteed. Return or exchange any order within 30 days.")
            .with_image("https://fakestoreapi.com/img/61sbMiUnoGL._AC_UL640_QL65_ML3_.jpg")
            .with_rating(3.9, 70),
        Product::new(6, "WD 2TB Elements Portable External Hard Drive", "electronics", Price::from_cents(6400))
            .with_description("USB 3.0 and USB 2.0 compatibility, fast data transfers.")
            .with_image("https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg")
            .with_rating(3.3, 203),
        Product::new(7, "SanDisk SSD PLUS 1TB Internal SSD", "electronics", Price::from_cents(10900))
            .with_description("Easy upgrade for faster boot up, shutdown, application load and response.")
            .with_image("https://fakestoreapi.com/img/61U7T1koQqL._AC_SX679_.jpg")
            .with_rating(2.9, 470),
        Product::new(
            8,
            "BIYLACLESEN Women's 3-in-1 Snowboard Jacket",
            "women's clothing",
            Price::from_cents(5699),
        )
        .with_description("Detachable liner, adjustable hood and multiple pockets.")
        .with_image("https://fakestoreapi.com/img/51Y5NI-I5jL._AC_UX679_.jpg")
        .with_rating(2.6, 235),
        Product::new(9, "Womens Short Sleeve Moisture Tee", "women's clothing", Price::from_cents(795))
            .with_description("Lightweight, breathable fabric with a relaxed fit.")
            .with_image("https://fakestoreapi.com/img/51eg55uWmdL._AC_UX679_.jpg")
            .with_rating(4.5, 146),
    ]
}

/// The demo products as a catalog.
pub fn fallback_catalog() -> Catalog {
    // Ids above are hand-assigned and unique; see `fallback_ids_are_unique`.
    Catalog::new(fallback_products()).unwrap_or_default()
}
