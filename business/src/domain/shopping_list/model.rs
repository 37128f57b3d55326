use super::errors::ShoppingListError;

/// Smallest amount a recipe may require of one ingredient.
pub const MIN_INGREDIENT_AMOUNT: i32 = 1;
/// Largest amount a recipe may require of one ingredient.
pub const MAX_INGREDIENT_AMOUNT: i32 = 32000;

/// One ingredient-amount record reachable through "recipe is in the user's
/// shopping cart". Amounts are always expressed in the ingredient's
/// canonical unit; no unit conversion is ever performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub ingredient_name: String,
    pub unit: String,
    pub amount: i32,
}

impl CartLine {
    pub fn new(
        ingredient_name: String,
        unit: String,
        amount: i32,
    ) -> Result<Self, ShoppingListError> {
        if !(MIN_INGREDIENT_AMOUNT..=MAX_INGREDIENT_AMOUNT).contains(&amount) {
            return Err(ShoppingListError::AmountOutOfRange);
        }

        Ok(Self {
            ingredient_name,
            unit,
            amount,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(ingredient_name: String, unit: String, amount: i32) -> Self {
        Self {
            ingredient_name,
            unit,
            amount,
        }
    }
}

/// Consolidated total for one distinct `(ingredient name, unit)` pair.
/// The total is widened to i64 so summing a whole cart cannot truncate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ingredient_name: String,
    pub unit: String,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_cart_line_when_amount_in_range() {
        let result = CartLine::new("Salt".to_string(), "g".to_string(), 10);

        assert!(result.is_ok());
        let line = result.unwrap();
        assert_eq!(line.ingredient_name, "Salt");
        assert_eq!(line.unit, "g");
        assert_eq!(line.amount, 10);
    }

    #[test]
    fn should_reject_when_amount_zero() {
        let result = CartLine::new("Salt".to_string(), "g".to_string(), 0);

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::AmountOutOfRange
        ));
    }

    #[test]
    fn should_reject_when_amount_negative() {
        let result = CartLine::new("Salt".to_string(), "g".to_string(), -5);

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::AmountOutOfRange
        ));
    }

    #[test]
    fn should_reject_when_amount_above_maximum() {
        let result = CartLine::new("Flour".to_string(), "g".to_string(), 32001);

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::AmountOutOfRange
        ));
    }

    #[test]
    fn should_accept_boundary_amounts() {
        assert!(CartLine::new("Salt".to_string(), "g".to_string(), 1).is_ok());
        assert!(CartLine::new("Flour".to_string(), "g".to_string(), 32000).is_ok());
    }
}
