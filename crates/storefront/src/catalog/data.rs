//! Built-in catalog contents.

use naia_core::{ProductId, VariantId};
use rust_decimal::Decimal;

use super::images::{product_images, vase_image};
use super::{Category, Occasion, Product, Vase};

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    price: i64,
    featured: bool,
    description: &'static str,
    details: &'static str,
    care: &'static str,
    footnote: &'static str,
    category: Category,
    tags: &'static [&'static str],
    suggested: &'static [&'static str],
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: "solene",
        name: "Solène",
        price: 185,
        featured: true,
        description: "A minimalist arrangement inspired by Japanese ikebana principles, featuring carefully selected eternal roses and eucalyptus in perfect harmony.",
        details: "Handcrafted with preserved Ecuadorian roses, natural eucalyptus, and delicate baby's breath. Each stem is individually selected and treated with our proprietary preservation process.",
        care: "Keep away from direct sunlight and humid areas. Dust gently with a soft brush monthly. With proper care, your arrangement will maintain its beauty for 2-3 years.",
        footnote: "eternal roses, eucalyptus, baby's breath",
        category: Category::Minimalist,
        tags: &["roses", "eucalyptus", "minimalist"],
        suggested: &["amea", "liora", "celestine"],
    },
    ProductSeed {
        id: "amea",
        name: "Améa",
        price: 225,
        featured: true,
        description: "A lush, romantic bouquet featuring deep burgundy roses, soft blush peonies, and trailing eucalyptus for a timeless elegance.",
        details: "Composed of premium preserved roses in burgundy and blush tones, eternal peonies, eucalyptus, and accenting foliage. Each bloom retains its natural texture and beauty.",
        care: "Display in a cool, dry environment away from direct sunlight. Handle gently and dust with a clean, dry brush as needed. Expected lifespan: 2-4 years.",
        footnote: "burgundy roses, blush peonies, eucalyptus",
        category: Category::Romantic,
        tags: &["roses", "peonies", "burgundy", "romantic"],
        suggested: &["solene", "liora", "seraphine"],
    },
    ProductSeed {
        id: "liora",
        name: "Liora",
        price: 165,
        featured: true,
        description: "Warm sunset hues capture the golden hour in this arrangement of preserved sunflowers, orange roses, and dried wheat grass.",
        details: "Features preserved sunflowers, eternal roses in warm amber and orange tones, natural wheat grass, and dried oak leaves. Sourced from sustainable farms.",
        care: "Best displayed in moderate lighting, away from humidity. The natural elements may gently fade over time, adding to the rustic charm. Lifespan: 2-3 years.",
        footnote: "sunflowers, orange roses, wheat grass",
        category: Category::Warm,
        tags: &["sunflowers", "roses", "wheat", "rustic"],
        suggested: &["amea", "solene", "aurelia"],
    },
    ProductSeed {
        id: "celestine",
        name: "Célestine",
        price: 145,
        featured: false,
        description: "Ethereal whites and soft blues create a cloud-like arrangement with preserved hydrangeas, white roses, and silvery dusty miller.",
        details: "Delicate preserved hydrangeas, eternal white roses, dusty miller, and blue delphinium. Each element chosen for its serene beauty and lasting quality.",
        care: "Keep in a stable environment with minimal temperature fluctuations. Dust delicately with a soft brush. Avoid touching the hydrangea petals directly.",
        footnote: "white roses, hydrangeas, dusty miller",
        category: Category::Ethereal,
        tags: &["white", "blue", "hydrangeas", "ethereal"],
        suggested: &["seraphine", "solene", "aurelia"],
    },
    ProductSeed {
        id: "seraphine",
        name: "Séraphine",
        price: 195,
        featured: false,
        description: "Rich jewel tones come together in this dramatic arrangement featuring deep purple roses, burgundy dahlias, and dark foliage.",
        details: "Premium preserved roses in deep purple, eternal burgundy dahlias, dark eucalyptus, and black berries for dramatic contrast and depth.",
        care: "Display away from bright lights to preserve the rich color intensity. Handle with care as dark preserved flowers can be more delicate.",
        footnote: "purple roses, burgundy dahlias, dark eucalyptus",
        category: Category::Dramatic,
        tags: &["purple", "burgundy", "dramatic", "dahlias"],
        suggested: &["amea", "aurelia", "celestine"],
    },
    ProductSeed {
        id: "aurelia",
        name: "Aurélia",
        price: 175,
        featured: false,
        description: "Golden warmth radiates from this arrangement of preserved yellow roses, cream peonies, and natural branch accents.",
        details: "Luminous yellow eternal roses, cream preserved peonies, golden solidago, and natural birch branches create warmth and texture.",
        care: "Position in moderate light to maintain the golden tones. The natural branches may develop character over time, enhancing the organic appeal.",
        footnote: "yellow roses, cream peonies, birch branches",
        category: Category::Warm,
        tags: &["yellow", "cream", "warm", "branches"],
        suggested: &["liora", "celestine", "solene"],
    },
    ProductSeed {
        id: "zia",
        name: "Zia",
        price: 195,
        featured: true,
        description: "A vibrant celebration of spring's most cherished blooms, combining exotic orchids with classic garden favorites in soft pinks and pristine whites.",
        details: "Mauve cymbidium orchids, white preserved ranunculus, coral-striped tulips, soft pink peonies, and fresh eucalyptus leaves create a luxurious garden-inspired arrangement.",
        care: "Keep away from direct sunlight to preserve the delicate pink tones. Gently dust orchid petals monthly. The natural leaves will develop character over time.",
        footnote: "orchids, ranunculus, tulips, peonies",
        category: Category::Luxury,
        tags: &["orchids", "pink", "white", "spring", "premium"],
        suggested: &["aurelia", "celestine", "liora"],
    },
];

/// (id, name, price)
const VASES: &[(&str, &str, i64)] = &[
    ("forest", "Forest Green", 35),
    ("ball", "Ceramic Ball", 40),
    ("stone", "Stone Grey", 38),
];

/// (id, name, description, product id, image)
const OCCASIONS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "wedding",
        "Weddings",
        "Eternal beauty for your most precious moments",
        "amea",
        "/assets/products/amea/bouquet.jpg",
    ),
    (
        "anniversary",
        "Anniversaries",
        "Celebrate enduring love with timeless arrangements",
        "seraphine",
        "/assets/products/seraphine/blush.jpg",
    ),
    (
        "housewarming",
        "Housewarmings",
        "Welcome home with lasting natural beauty",
        "solene",
        "/assets/products/solene/ikebana.jpg",
    ),
    (
        "birthday",
        "Birthdays",
        "Bright celebrations that last beyond the day",
        "liora",
        "/assets/products/liora/sunet-front.jpg",
    ),
    (
        "sympathy",
        "Sympathy",
        "Gentle comfort in times of remembrance",
        "celestine",
        "/assets/products/celestine/celestine-2.jpg",
    ),
    (
        "graduation",
        "Graduations",
        "Honor achievements with golden moments",
        "aurelia",
        "/assets/products/aurelia/tulip-gradient.jpg",
    ),
    (
        "new-baby",
        "New Baby",
        "Welcome new life with delicate blossoms",
        "zia",
        "/assets/products/zia/zia-1.jpg",
    ),
];

/// Vases every arrangement can be paired with.
#[must_use]
pub fn vases() -> Vec<Vase> {
    VASES
        .iter()
        .map(|&(id, name, price)| Vase {
            id: VariantId::new(id),
            name: name.to_string(),
            image: vase_image(id).to_string(),
            price: Decimal::from(price),
            product_image: None,
        })
        .collect()
}

/// The arrangements, each offered with `vases`.
#[must_use]
pub fn products(vases: &[Vase]) -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_string(),
            price: Decimal::from(seed.price),
            featured: seed.featured,
            images: product_images(seed.id),
            description: seed.description.to_string(),
            details: seed.details.to_string(),
            care: seed.care.to_string(),
            footnote: seed.footnote.to_string(),
            available_vases: vases.to_vec(),
            category: seed.category,
            tags: seed.tags.iter().map(|tag| (*tag).to_string()).collect(),
            suggested_products: seed.suggested.iter().copied().map(ProductId::new).collect(),
        })
        .collect()
}

#[must_use]
pub fn occasions() -> Vec<Occasion> {
    OCCASIONS
        .iter()
        .map(|&(id, name, description, product_id, image)| Occasion {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            product_id: ProductId::new(product_id),
            image: image.to_string(),
        })
        .collect()
}
