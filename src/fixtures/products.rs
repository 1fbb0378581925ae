// fixtures/products.rs
//
// The eight-item Neo Design Group sample set. Prices are whole Toman,
// ratings are given in tenths.

use rust_decimal::Decimal;

use super::CatalogFixture;
use crate::storefront::model::{Category, Product, Tag};

pub struct NeoDesignProducts;

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    title: &str,
    price: u64,
    rating_tenths: i64,
    category: Category,
    tags: &[Tag],
    in_stock: bool,
    image: &str,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        rating: Decimal::new(rating_tenths, 1),
        category,
        tags: tags.to_vec(),
        in_stock,
        image: image.to_string(),
    }
}

impl CatalogFixture for NeoDesignProducts {
    fn products() -> Vec<Product> {
        vec![
            product(
                1,
                "لوستر مدرن ۸ شاخه",
                9_800_000,
                46,
                Category::Lighting,
                &[Tag::Modern, Tag::Lux],
                true,
                "https://images.unsplash.com/photo-1505692794403-34d4982f88aa?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                2,
                "فرش دست‌بافت ۳x۲",
                16_500_000,
                49,
                Category::Textile,
                &[Tag::Classic, Tag::Lux],
                true,
                "https://images.unsplash.com/photo-1591446474644-6c8f17b59d83?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                3,
                "کاغذ دیواری طرح سنگ",
                1_850_000,
                42,
                Category::Wall,
                &[Tag::Modern],
                true,
                "https://images.unsplash.com/photo-1540518614846-7eded433c457?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                4,
                "مبل دونفره چوبی",
                12_500_000,
                44,
                Category::Furniture,
                &[Tag::Classic, Tag::Eco],
                false,
                "https://images.unsplash.com/photo-1549187774-b4e9b0445b06?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                5,
                "کفپوش لمینت آنتیک",
                5_200_000,
                41,
                Category::Floor,
                &[Tag::Modern, Tag::Eco],
                true,
                "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                6,
                "ست کوسن مخمل",
                890_000,
                40,
                Category::Textile,
                &[Tag::Modern],
                true,
                "https://images.unsplash.com/photo-1540574163026-643ea20ade25?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                7,
                "آینه دکوراتیو طلایی",
                3_700_000,
                47,
                Category::Decor,
                &[Tag::Lux, Tag::Modern],
                true,
                "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?w=800&q=80&auto=format&fit=crop",
            ),
            product(
                8,
                "چراغ مطالعه سبز",
                1_450_000,
                43,
                Category::Lighting,
                &[Tag::Modern, Tag::Eco],
                true,
                "https://images.unsplash.com/photo-1505691723518-36a5ac3b2d25?w=800&q=80&auto=format&fit=crop",
            ),
        ]
    }
}
