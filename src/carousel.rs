use crate::catalog::CatalogSnapshot;
use crate::dtos::{DotResponse, SlideResponse, StorefrontResponse};
use crate::errors::StorefrontError;

/// The only state the carousel carries: the zero-based index of the
/// currently visible slide.
#[derive(Debug)]
pub struct Carousel {
    current: usize,
}

impl Carousel {
    pub fn new() -> Carousel {
        Carousel { current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances one slide. A click on the last slide is a no-op, same as the
    /// disabled state the view reports for it.
    pub fn advance(&mut self, slide_count: usize) {
        if self.current + 1 < slide_count {
            self.current += 1;
        }
    }

    /// Retreats one slide. A click on the first slide is a no-op.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jumps straight to the slide behind a dot indicator. Out-of-range
    /// indexes are rejected, not clamped.
    pub fn jump_to(&mut self, index: usize, slide_count: usize) -> Result<(), StorefrontError> {
        if index >= slide_count {
            return Err(StorefrontError::SlideOutOfRange { index, slide_count });
        }
        self.current = index;
        Ok(())
    }

    /// Pulls the index back in range after a revalidation shrank the
    /// product list underneath it.
    pub fn clamp_to(&mut self, slide_count: usize) {
        if self.current >= slide_count {
            self.current = slide_count.saturating_sub(1);
        }
    }
}

/// Renders the carousel over the current snapshot: one slide and one dot
/// indicator per product, the visible index, and the directional controls'
/// disabled flags.
pub fn build_storefront_view(
    snapshot: &CatalogSnapshot,
    carousel: &Carousel,
) -> Result<StorefrontResponse, StorefrontError> {
    let slide_count = snapshot.products.len();
    let current_slide = carousel.current();

    let mut slides = Vec::with_capacity(slide_count);
    for product in &snapshot.products {
        slides.push(SlideResponse {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            display_price: product.formatted_price()?,
            detail_url: format!("/products/{}", product.id),
        });
    }

    let dots = (0..slide_count)
        .map(|index| DotResponse {
            index,
            active: index == current_slide,
        })
        .collect();

    Ok(StorefrontResponse {
        current_slide,
        prev_disabled: current_slide == 0,
        next_disabled: slide_count == 0 || current_slide == slide_count - 1,
        slides,
        dots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use chrono::Utc;

    fn product(id: &str, unit_amount: i64) -> Product {
        Product {
            id: String::from(id),
            name: format!("Product {}", id),
            image_url: format!("https://files.example.com/{}.png", id),
            default_price_id: format!("price_{}", id),
            currency: String::from("usd"),
            unit_amount,
            price: unit_amount as f64 / 100.0,
        }
    }

    fn snapshot(products: Vec<Product>) -> CatalogSnapshot {
        CatalogSnapshot {
            products,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn advance_moves_one_slide_and_stops_at_the_last() {
        let mut carousel = Carousel::new();

        carousel.advance(3);
        assert_eq!(carousel.current(), 1);
        carousel.advance(3);
        assert_eq!(carousel.current(), 2);
        carousel.advance(3);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn retreat_moves_one_slide_and_stops_at_the_first() {
        let mut carousel = Carousel::new();
        carousel.advance(3);
        carousel.advance(3);

        carousel.retreat();
        assert_eq!(carousel.current(), 1);
        carousel.retreat();
        assert_eq!(carousel.current(), 0);
        carousel.retreat();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn advance_on_an_empty_catalog_is_a_no_op() {
        let mut carousel = Carousel::new();
        carousel.advance(0);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn jump_reaches_every_valid_dot_and_rejects_the_rest() {
        let mut carousel = Carousel::new();

        for index in 0..4 {
            carousel.jump_to(index, 4).unwrap();
            assert_eq!(carousel.current(), index);
        }

        let error = carousel.jump_to(4, 4).unwrap_err();
        assert!(matches!(
            error,
            StorefrontError::SlideOutOfRange { index: 4, slide_count: 4 }
        ));
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn clamp_pulls_the_index_back_after_the_catalog_shrank() {
        let mut carousel = Carousel::new();
        carousel.jump_to(4, 5).unwrap();

        carousel.clamp_to(2);
        assert_eq!(carousel.current(), 1);

        carousel.clamp_to(0);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn view_renders_a_slide_and_a_dot_per_product() {
        let snapshot = snapshot(vec![product("shirt", 9990), product("mug", 15000)]);
        let carousel = Carousel::new();

        let view = build_storefront_view(&snapshot, &carousel).unwrap();

        assert_eq!(view.slides.len(), 2);
        assert_eq!(view.dots.len(), 2);
        assert_eq!(view.current_slide, 0);
        assert_eq!(view.slides[0].display_price, "$99.90");
        assert_eq!(view.slides[1].display_price, "$150.00");
        assert_eq!(view.slides[0].detail_url, "/products/shirt");
        assert!(view.dots[0].active);
        assert!(!view.dots[1].active);
    }

    #[test]
    fn view_disables_the_controls_at_their_boundaries() {
        let snapshot = snapshot(vec![product("shirt", 9990), product("mug", 15000)]);
        let mut carousel = Carousel::new();

        let view = build_storefront_view(&snapshot, &carousel).unwrap();
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);

        carousel.advance(2);
        let view = build_storefront_view(&snapshot, &carousel).unwrap();
        assert!(!view.prev_disabled);
        assert!(view.next_disabled);
    }

    #[test]
    fn view_over_an_empty_catalog_disables_everything() {
        let view = build_storefront_view(&snapshot(vec![]), &Carousel::new()).unwrap();

        assert!(view.slides.is_empty());
        assert!(view.dots.is_empty());
        assert_eq!(view.current_slide, 0);
        assert!(view.prev_disabled);
        assert!(view.next_disabled);
    }
}
