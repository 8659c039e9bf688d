//! Validated input of a single batch generation.

use super::{Category, Color};

/// Smallest number of codes a batch may contain.
pub const MIN_CODE_COUNT: usize = 1;

/// Largest number of codes a batch may contain. Bounds the work done per request.
pub const MAX_CODE_COUNT: usize = 100;

/// A batch generation request whose fields are known to be valid.
///
/// Instances are created by the request validator
/// ([`crate::api::dto::generate::GenerateQrForm`]) or [`GenerationRequest::new`];
/// the fields cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    category: Category,
    count: usize,
    color: Color,
}

impl GenerationRequest {
    /// Creates a request, returning `None` when `count` is outside
    /// [`MIN_CODE_COUNT`]..=[`MAX_CODE_COUNT`].
    pub fn new(category: Category, count: usize, color: Color) -> Option<Self> {
        (MIN_CODE_COUNT..=MAX_CODE_COUNT)
            .contains(&count)
            .then_some(Self {
                category,
                count,
                color,
            })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(GenerationRequest::new(Category::Sms, MIN_CODE_COUNT, Color::BLACK).is_some());
        assert!(GenerationRequest::new(Category::Sms, MAX_CODE_COUNT, Color::BLACK).is_some());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(GenerationRequest::new(Category::Sms, 0, Color::BLACK).is_none());
        assert!(GenerationRequest::new(Category::Sms, 101, Color::BLACK).is_none());
    }

    #[test]
    fn test_accessors() {
        let color = Color::new(1, 2, 3);
        let request = GenerationRequest::new(Category::Email, 7, color).unwrap();

        assert_eq!(request.category(), Category::Email);
        assert_eq!(request.count(), 7);
        assert_eq!(request.color(), color);
    }
}
