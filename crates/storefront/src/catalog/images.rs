//! Image registry for product and vase photos.
//!
//! Maps catalog ids to the image files that actually exist under `/assets`.
//! Lookups never fail: products without registered photos fall back to a few
//! standalone images, and unknown vases fall back to the stone vase.

/// Shown wherever no image at all is available.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.jpg";

/// Number of standalone images used for a product without its own photos.
const FALLBACK_IMAGE_COUNT: usize = 3;

const PRODUCT_IMAGES: &[(&str, &[&str])] = &[
    (
        "solene",
        &[
            "/assets/products/solene/ikebana.jpg",
            "/assets/products/solene/dragon.jpg",
            "/assets/products/solene/ikebana-flat.jpg",
        ],
    ),
    ("amea", &["/assets/products/amea/bouquet.jpg"]),
    (
        "liora",
        &[
            "/assets/products/liora/sunet-front.jpg",
            "/assets/products/liora/sunset-side.jpg",
            "/assets/products/liora/sunset-back.jpeg",
            "/assets/products/liora/sunset-closeup.jpeg",
            "/assets/products/liora/sunset-dining.jpg",
        ],
    ),
    (
        "celestine",
        &[
            "/assets/products/celestine/celestine-1.jpg",
            "/assets/products/celestine/celestine-2.jpg",
            "/assets/products/celestine/celestine-3.jpg",
        ],
    ),
    ("seraphine", &["/assets/products/seraphine/blush.jpg"]),
    ("aurelia", &["/assets/products/aurelia/tulip-gradient.jpg"]),
    (
        "zia",
        &[
            "/assets/products/zia/zia-1.jpg",
            "/assets/products/zia/zia-2.jpg",
        ],
    ),
];

const VASE_IMAGES: &[(&str, &str)] = &[
    ("forest", "/assets/vases/forest.jpg"),
    ("ball", "/assets/vases/ball.jpg"),
    ("stone", "/assets/vases/stone.jpg"),
];

const DEFAULT_VASE_IMAGE: &str = "/assets/vases/stone.jpg";

const STANDALONE_IMAGES: &[&str] = &[
    "/assets/fire.jpg",
    "/assets/peony.jpg",
    "/assets/mama.jpg",
    "/assets/rags.jpg",
    "/assets/bianca.jpeg",
    "/assets/graduation.jpg",
];

/// Photos for a product, falling back to standalone images.
#[must_use]
pub fn product_images(product_id: &str) -> Vec<String> {
    let registered = PRODUCT_IMAGES
        .iter()
        .find(|(id, _)| *id == product_id)
        .map(|(_, images)| *images)
        .filter(|images| !images.is_empty());

    match registered {
        Some(images) => images.iter().map(|path| (*path).to_string()).collect(),
        None => {
            tracing::warn!(product_id, "No images registered for product, using fallback images");
            STANDALONE_IMAGES
                .iter()
                .take(FALLBACK_IMAGE_COUNT)
                .map(|path| (*path).to_string())
                .collect()
        }
    }
}

/// Whether a product has its own registered photos.
#[must_use]
pub fn has_product_images(product_id: &str) -> bool {
    PRODUCT_IMAGES
        .iter()
        .any(|(id, images)| *id == product_id && !images.is_empty())
}

/// Photo of a vase, defaulting to the stone vase.
#[must_use]
pub fn vase_image(vase_id: &str) -> &'static str {
    VASE_IMAGES
        .iter()
        .find(|(id, _)| *id == vase_id)
        .map_or(DEFAULT_VASE_IMAGE, |(_, path)| *path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_product_images() {
        let images = product_images("liora");
        assert_eq!(images.len(), 5);
        assert_eq!(images.first().map(String::as_str), Some("/assets/products/liora/sunet-front.jpg"));
        assert!(has_product_images("liora"));
    }

    #[test]
    fn test_unknown_product_uses_first_three_standalone_images() {
        let images = product_images("thalia-unknown");
        assert_eq!(
            images,
            ["/assets/fire.jpg", "/assets/peony.jpg", "/assets/mama.jpg"]
        );
        assert!(!has_product_images("thalia-unknown"));
    }

    #[test]
    fn test_vase_image_lookup_and_default() {
        assert_eq!(vase_image("ball"), "/assets/vases/ball.jpg");
        assert_eq!(vase_image("crystal"), "/assets/vases/stone.jpg");
    }
}
