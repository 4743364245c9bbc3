//! Cart repository.
//!
//! Generic over the connection so order placement can read and clear the cart inside its
//! transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::cart::CreateCartItemParams;

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every cart row owned by a user, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::cart::Model>, DbErr> {
        entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether the user already has a row for the menu item.
    pub async fn exists(&self, user_id: i32, menuitem_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .filter(entity::cart::Column::MenuitemId.eq(menuitem_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a priced cart row.
    ///
    /// # Arguments
    /// - `params` - Owner, menu item, quantity and the prices computed by the service
    ///
    /// # Returns
    /// - `Ok(Model)` - Created row
    /// - `Err(DbErr)` - Database error, including a unique violation on (user, menu item)
    pub async fn create(&self, params: CreateCartItemParams) -> Result<entity::cart::Model, DbErr> {
        entity::cart::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            menuitem_id: ActiveValue::Set(params.menuitem_id),
            quantity: ActiveValue::Set(params.quantity),
            unit_price: ActiveValue::Set(params.unit_price),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes every cart row owned by a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Cart::delete_many()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
