use rand::Rng;
use rand::seq::IndexedRandom;

use wishlist_types::api::{CreateItemRequest, RegisterRequest, WishlistRequest};

const PRODUCTS: &[&str] = &["iPhone", "MacBook", "Watch", "iPad", "AirPods"];

const WORDS: &[&str] = &[
    "amber", "bright", "cedar", "delta", "ember", "falcon", "garnet", "harbor", "indigo",
    "juniper", "kestrel", "lumen", "maple", "nimbus", "onyx", "pepper", "quartz", "river",
    "saffron", "timber", "umber", "velvet", "willow", "zephyr",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("item")
}

fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let mut text = (0..words).map(|_| word(rng)).collect::<Vec<_>>().join(" ");
    if let Some(first) = text.get(..1).map(str::to_uppercase) {
        text.replace_range(..1, &first);
    }
    text.push('.');
    text
}

pub fn user<R: Rng + ?Sized>(rng: &mut R) -> RegisterRequest {
    let suffix: u32 = rng.random_range(1000..100_000);
    let username = format!("{}_{}{}", word(rng), word(rng), suffix);
    let domain = DOMAINS.choose(rng).copied().unwrap_or("example.com");
    let password: String = (0..12)
        .map(|_| char::from(rng.sample(rand::distr::Alphanumeric)))
        .collect();

    RegisterRequest {
        email: format!("{username}@{domain}"),
        username,
        password,
    }
}

pub fn wishlist<R: Rng + ?Sized>(rng: &mut R) -> WishlistRequest {
    let title_len = rng.random_range(3..7);
    let description = (0..3)
        .map(|_| {
            let len = rng.random_range(5..10);
            sentence(rng, len)
        })
        .collect::<Vec<_>>()
        .join(" ");

    WishlistRequest {
        title: sentence(rng, title_len),
        description,
    }
}

pub fn item<R: Rng + ?Sized>(rng: &mut R) -> CreateItemRequest {
    let product = PRODUCTS.choose(rng).copied().unwrap_or("iPhone");
    let price: f64 = rng.random_range(100.0..1100.0);
    let description_len = rng.random_range(4..9);

    CreateItemRequest {
        name: format!("{} {}", product, word(rng)),
        description: sentence(rng, description_len),
        price: format!("{price:.2}"),
        link: format!("https://shop.example.com/{}/{}", product.to_lowercase(), word(rng)),
    }
}
