//! Cart error types

use thiserror::Error;

/// Errors returned by cart mutations that validate their input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    /// Price is negative, NaN or infinite
    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },

    /// Item name is empty or whitespace
    #[error("Item name must not be empty")]
    EmptyName,
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartError::InvalidPrice {
            name: "Latte".to_string(),
            price: -5.0,
        };
        assert_eq!(err.to_string(), "Invalid price for Latte: -5");
        assert_eq!(CartError::EmptyName.to_string(), "Item name must not be empty");
    }
}
