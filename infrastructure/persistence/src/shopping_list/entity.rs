use sqlx::FromRow;

use business::domain::shopping_list::model::CartLine;

#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine::from_repository(self.ingredient_name, self.measurement_unit, self.amount)
    }
}
