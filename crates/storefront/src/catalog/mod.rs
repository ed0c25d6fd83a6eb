//! Catalog filtering, sorting, and pagination.
//!
//! The catalog is a static, ordered product list loaded once at session
//! start. [`Catalog::evaluate`] is the single query operation: it applies
//! the optional filters, a stable sort, and the page window, and returns
//! exactly the slice the product grid should render plus the pagination
//! metadata for the page strip. It never mutates anything.

pub mod pagination;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use techstore_core::{Category, Product, ProductId};

pub use pagination::{PageInfo, PageStripEntry};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The static, ordered product list for a session.
///
/// Natural order is the merchandising ("featured") order; the `featured`
/// sort preserves it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in natural order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Evaluate a query: filter, sort, and paginate.
    ///
    /// Filters are AND-combined and each is skipped when unset. The sort is
    /// stable, so ties keep their filtered order and `featured` keeps the
    /// catalog's natural order. The returned products are exactly the
    /// visible page slice.
    #[must_use]
    pub fn evaluate(&self, query: &CatalogQuery) -> QueryResult {
        let search = query.search.as_ref().map(|s| s.to_lowercase());

        let mut filtered: Vec<Product> = self
            .products
            .iter()
            .filter(|product| {
                if let Some(category) = query.category
                    && product.category != category
                {
                    return false;
                }
                if let Some(band) = query.price_band
                    && !band.contains(product.price)
                {
                    return false;
                }
                if let Some(needle) = &search
                    && !product.name.to_lowercase().contains(needle)
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        query.sort.apply(&mut filtered);

        let page = PageInfo::compute(filtered.len(), query.page, query.page_size);
        let start = (page.current.saturating_sub(1) as usize).saturating_mul(query.page_size);
        let visible = filtered
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .collect();

        QueryResult {
            products: visible,
            page,
        }
    }
}

/// The result of evaluating a [`CatalogQuery`]: the visible page slice plus
/// the pagination metadata the page strip renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub products: Vec<Product>,
    pub page: PageInfo,
}

/// A product-grid query: optional filters plus sort and page selection.
///
/// Deserializes from the URL query parameters the renderer forwards; every
/// field is optional there, with `featured` sort, page 1, and the default
/// page size filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Exact category match, or no category filter.
    pub category: Option<Category>,
    /// Price range filter, or no price filter.
    pub price_band: Option<PriceBand>,
    /// Case-insensitive substring match on the product name only.
    pub search: Option<String>,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: u32,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: None,
            price_band: None,
            search: None,
            sort: SortKey::Featured,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Fixed price bands for filtering.
///
/// Bands partition the price axis: every boundary value belongs to exactly
/// one band (the upper bound is inclusive, the lower exclusive), so $100
/// falls in `0-100` and $500 falls in `100-500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    #[serde(rename = "0-100")]
    UpTo100,
    #[serde(rename = "100-500")]
    From100To500,
    #[serde(rename = "500-1000")]
    From500To1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl PriceBand {
    /// Whether a price falls inside this band.
    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        let low_100 = Decimal::from(100u32);
        let low_500 = Decimal::from(500u32);
        let low_1000 = Decimal::from(1000u32);
        match self {
            Self::UpTo100 => price <= low_100,
            Self::From100To500 => price > low_100 && price <= low_500,
            Self::From500To1000 => price > low_500 && price <= low_1000,
            Self::Over1000 => price > low_1000,
        }
    }

    /// The code used in serialized queries and URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpTo100 => "0-100",
            Self::From100To500 => "100-500",
            Self::From500To1000 => "500-1000",
            Self::Over1000 => "1000+",
        }
    }
}

/// Error parsing a [`PriceBand`] from a query string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown price band: {0}")]
pub struct PriceBandError(pub String);

impl FromStr for PriceBand {
    type Err = PriceBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-100" => Ok(Self::UpTo100),
            "100-500" => Ok(Self::From100To500),
            "500-1000" => Ok(Self::From500To1000),
            "1000+" => Ok(Self::Over1000),
            other => Err(PriceBandError(other.to_owned())),
        }
    }
}

/// Sort orders for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog natural order; no reordering.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    /// Descending id; higher id = newer product.
    Newest,
}

impl SortKey {
    /// Stable-sort `products` in place.
    fn apply(self, products: &mut [Product]) {
        match self {
            Self::Featured => {}
            Self::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    fn product(id: i32, name: &str, price: i64, category: Category, rating: f32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Decimal::new(price, 0),
            category,
            rating,
            reviews: 10,
            description: String::new(),
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    /// The demo store's eight products, in merchandising order.
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "MacBook Pro 14-inch", 1999, Category::Electronics, 4.8),
            product(2, "iPhone 15 Pro", 999, Category::Electronics, 4.9),
            product(3, "Sony WH-1000XM5", 399, Category::Accessories, 4.7),
            product(4, "PlayStation 5", 499, Category::Gaming, 4.6),
            product(5, "Apple Watch Series 9", 399, Category::Electronics, 4.5),
            product(6, "Dell XPS 13", 1299, Category::Electronics, 4.4),
            product(7, "AirPods Pro", 249, Category::Accessories, 4.6),
            product(8, "Nintendo Switch", 299, Category::Gaming, 4.7),
        ])
    }

    fn ids(result: &QueryResult) -> Vec<i32> {
        result.products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_default_query_returns_natural_order() {
        let catalog = sample_catalog();
        let result = catalog.evaluate(&CatalogQuery::default());

        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(result.page.total_pages, 1);
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            category: Some(Category::Gaming),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&catalog.evaluate(&query)), vec![4, 8]);
    }

    #[test]
    fn test_price_band_boundaries_belong_to_one_band() {
        let hundred = Decimal::from(100u32);
        let five_hundred = Decimal::from(500u32);
        let thousand = Decimal::from(1000u32);

        assert!(PriceBand::UpTo100.contains(hundred));
        assert!(!PriceBand::From100To500.contains(hundred));

        assert!(PriceBand::From100To500.contains(five_hundred));
        assert!(!PriceBand::From500To1000.contains(five_hundred));

        assert!(PriceBand::From500To1000.contains(thousand));
        assert!(!PriceBand::Over1000.contains(thousand));
        assert!(PriceBand::Over1000.contains(Decimal::new(100_001, 2)));
    }

    #[test]
    fn test_price_band_filter() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            price_band: Some(PriceBand::From100To500),
            ..CatalogQuery::default()
        };

        // 399, 499, 399, 249, 299 fall in (100, 500]
        assert_eq!(ids(&catalog.evaluate(&query)), vec![3, 4, 5, 7, 8]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_name_only() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            search: Some("MACBOOK".to_owned()),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&catalog.evaluate(&query)), vec![1]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            category: Some(Category::Electronics),
            price_band: Some(PriceBand::From100To500),
            ..CatalogQuery::default()
        };

        // Electronics AND (100, 500]: only the Apple Watch.
        assert_eq!(ids(&catalog.evaluate(&query)), vec![5]);
    }

    #[test]
    fn test_sort_price_desc() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            sort: SortKey::PriceDesc,
            ..CatalogQuery::default()
        };

        let prices: Vec<i64> = catalog
            .evaluate(&query)
            .products
            .iter()
            .map(|p| p.price.try_into().unwrap())
            .collect();
        assert_eq!(prices, vec![1999, 1299, 999, 499, 399, 399, 299, 249]);
    }

    #[test]
    fn test_sort_price_asc_is_stable_on_ties() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };

        // Products 3 and 5 are both $399; the tie keeps catalog order (3
        // before 5).
        assert_eq!(ids(&catalog.evaluate(&query)), vec![7, 8, 3, 5, 4, 2, 6, 1]);
    }

    #[test]
    fn test_sort_rating_desc() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            sort: SortKey::RatingDesc,
            ..CatalogQuery::default()
        };

        // 4.6 tie (4 before 7) and 4.7 tie (3 before 8) keep catalog order.
        assert_eq!(ids(&catalog.evaluate(&query)), vec![2, 1, 3, 8, 4, 7, 5, 6]);
    }

    #[test]
    fn test_sort_newest_is_descending_id() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            sort: SortKey::Newest,
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&catalog.evaluate(&query)), vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_pagination_slices_visible_window() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            page: 2,
            page_size: 3,
            ..CatalogQuery::default()
        };

        let result = catalog.evaluate(&query);
        assert_eq!(ids(&result), vec![4, 5, 6]);
        assert_eq!(result.page.total_pages, 3);
        assert!(result.page.has_prev);
        assert!(result.page.has_next);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            page: 9,
            page_size: 3,
            ..CatalogQuery::default()
        };

        let result = catalog.evaluate(&query);
        assert!(result.products.is_empty());
        assert_eq!(result.page.total_pages, 3);
    }

    #[test]
    fn test_no_matches_reports_empty_page() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            search: Some("zzz".to_owned()),
            ..CatalogQuery::default()
        };

        let result = catalog.evaluate(&query);
        assert!(result.products.is_empty());
        assert_eq!(result.page.total_pages, 0);
        assert!(!result.page.has_prev);
        assert!(!result.page.has_next);
    }

    #[test]
    fn test_price_band_codes() {
        assert_eq!("100-500".parse::<PriceBand>().unwrap(), PriceBand::From100To500);
        assert_eq!("1000+".parse::<PriceBand>().unwrap(), PriceBand::Over1000);
        assert!("50-75".parse::<PriceBand>().is_err());
        assert_eq!(PriceBand::From500To1000.as_str(), "500-1000");
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: CatalogQuery =
            serde_json::from_str(r#"{"category":"gaming","sort":"price-desc"}"#).unwrap();

        assert_eq!(query.category, Some(Category::Gaming));
        assert_eq!(query.sort, SortKey::PriceDesc);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_sort_key_codes() {
        let sort: SortKey = serde_json::from_str("\"rating-desc\"").unwrap();
        assert_eq!(sort, SortKey::RatingDesc);
        assert_eq!(serde_json::to_string(&SortKey::Newest).unwrap(), "\"newest\"");
    }
}
