//! # Validation Module
//!
//! Input validation rules for Shopdesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Admin SPA (TypeScript)                                       │
//! │  └── Form-level checks, immediate user feedback                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP DTOs (apps/api)                                         │
//! │  ├── Type validation (deserialization → MalformedBody)                 │
//! │  └── Display price → cents                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Services                                                     │
//! │  └── THIS MODULE: business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Database (SQLite)                                            │
//! │  └── NOT NULL and CHECK (available_quantity >= 0) constraints          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopdesk_core::validation::{validate_product_name, validate_order_quantity};
//!
//! validate_product_name("Walnut Desk Organizer").unwrap();
//! validate_order_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ORDER_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum product description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2_000;

/// Maximum length of an entity identifier.
pub const MAX_ID_LEN: usize = 64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use shopdesk_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Walnut Desk Organizer").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// Empty is allowed; the field itself is required by the DTO layer.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates an entity identifier supplied by a caller.
///
/// Identifiers are opaque: only emptiness and length are checked, so ids
/// minted by older backends keep working. Returns the trimmed id, which is
/// what every lookup uses.
///
/// ## Example
/// ```rust
/// use shopdesk_core::validation::validate_id;
///
/// assert_eq!(validate_id("productId", " p-1 ").unwrap(), "p-1");
/// assert!(validate_id("productId", "   ").is_err());
/// ```
pub fn validate_id<'a>(field: &str, id: &'a str) -> ValidationResult<&'a str> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(id)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the quantity of an order.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ORDER_QUANTITY (9999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order Form: Submit                                                     │
/// │                                                                         │
/// │  Admin enters quantity: 5                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_order_quantity(5) ← THIS FUNCTION                            │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 9999? → Error: "quantity must be between 1 and 9999"   │
/// │       │                                                                 │
/// │       └── OK → Proceed with stock check                                │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_order_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ORDER_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a stock level set on a product.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (sold out)
pub fn validate_available_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "availableQuantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_PRICE_CENTS`](crate::MAX_PRICE_CENTS)
///
/// ## Example
/// ```rust
/// use shopdesk_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
