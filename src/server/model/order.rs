//! Order domain models, the order listing query and update requests.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    model::order::{OrderDto, OrderItemDto, OrderQueryDto, PaginatedOrdersDto, UpdateOrderDto},
    server::{
        error::AppError,
        model::{
            menu_item::MenuItem,
            query::{PageRequest, Paginated, Sort, SortField},
            user::{Role, User},
        },
        util::{
            money,
            parse::{parse_bool, parse_date, parse_optional},
        },
    },
};

/// Format of the `date` field in order responses.
pub const ORDER_DATE_FORMAT: &str = "%d/%m/%Y - %H:%M:%S";

/// Snapshot of a cart line attached to a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub menuitem: MenuItem,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub price: Decimal,
}

impl OrderItem {
    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            menuitem: self.menuitem.into_dto(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            price: self.price,
        }
    }

    pub fn from_entity(entity: entity::order_item::Model, menuitem: MenuItem) -> Self {
        Self {
            id: entity.id,
            menuitem,
            quantity: entity.quantity,
            unit_price: money::normalize(entity.unit_price),
            price: money::normalize(entity.price),
        }
    }
}

/// Delivery crew member assigned to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryCrew {
    pub id: i32,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub delivery_crew: Option<DeliveryCrew>,
    /// `false` while pending, `true` once delivered
    pub status: bool,
    pub total: Decimal,
    pub date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        let (delivery_crew_id, delivery_crew) = match self.delivery_crew {
            Some(crew) => (Some(crew.id), Some(crew.username)),
            None => (None, None),
        };

        OrderDto {
            id: self.id,
            user_id: self.user_id,
            delivery_crew,
            delivery_crew_id,
            status: self.status,
            total: self.total,
            date: self.date.format(ORDER_DATE_FORMAT).to_string(),
            order_items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }

    /// Converts an order row and its loaded relations at the repository boundary.
    pub fn from_with_relations(result: OrderWithRelations) -> Self {
        let entity = result.order;

        Self {
            id: entity.id,
            user_id: entity.user_id,
            delivery_crew: result.delivery_crew.map(|crew| DeliveryCrew {
                id: crew.id,
                username: crew.username,
            }),
            status: entity.status,
            total: money::normalize(entity.total),
            date: entity.date,
            items: result
                .items
                .into_iter()
                .map(|(item, menu_item, category)| {
                    OrderItem::from_entity(item, MenuItem::from_entity(menu_item, category))
                })
                .collect(),
        }
    }
}

/// Order row with everything needed to build an [`Order`].
#[derive(Debug, Clone)]
pub struct OrderWithRelations {
    pub order: entity::order::Model,
    pub delivery_crew: Option<entity::user::Model>,
    pub items: Vec<(
        entity::order_item::Model,
        entity::menu_item::Model,
        entity::category::Model,
    )>,
}

impl Paginated<Order> {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            results: self.items.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Which orders a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    /// Managers see every order
    All,
    /// Delivery crew see the orders assigned to them
    AssignedTo(i32),
    /// Customers see the orders they placed
    PlacedBy(i32),
}

impl OrderScope {
    /// Scope of `user`. Manager membership takes precedence over delivery crew.
    pub fn for_user(user: &User) -> Self {
        if user.has_role(Role::Manager) {
            Self::All
        } else if user.has_role(Role::DeliveryCrew) {
            Self::AssignedTo(user.id)
        } else {
            Self::PlacedBy(user.id)
        }
    }

    pub fn includes(&self, order: &entity::order::Model) -> bool {
        match *self {
            Self::All => true,
            Self::AssignedTo(crew_id) => order.delivery_crew_id == Some(crew_id),
            Self::PlacedBy(user_id) => order.user_id == user_id,
        }
    }
}

/// Columns `GET /api/orders` may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    Id,
    Date,
    Total,
    Status,
}

impl SortField for OrderSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "date" => Some(Self::Date),
            "total" => Some(Self::Total),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<bool>,
    /// UTC calendar day the order was placed on
    pub date: Option<NaiveDate>,
}

/// Everything an order listing request asks for.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub filter: OrderFilter,
    pub sort: Sort<OrderSort>,
    pub page: PageRequest,
}

impl OrderQuery {
    /// Parses the raw query string of the listing endpoint.
    ///
    /// # Returns
    /// - `Ok(OrderQuery)` - All present parameters were valid
    /// - `Err(AppError::BadRequest)` - `status`, `date`, paging or ordering was malformed
    pub fn from_dto(dto: OrderQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            filter: OrderFilter {
                status: parse_optional("status", dto.status.as_deref(), parse_bool)?,
                date: parse_optional("date", dto.date.as_deref(), parse_date)?,
            },
            sort: Sort::from_query(dto.ordering.as_deref())?,
            page: PageRequest::from_query(dto.page.as_deref(), dto.perpage.as_deref())?,
        })
    }
}

/// Partial update of an order.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderParams {
    /// New delivery status, delivery crew only
    pub status: Option<bool>,
    /// `Some(None)` unassigns, `Some(Some(id))` assigns; managers only
    pub delivery_crew: Option<Option<i32>>,
}

impl UpdateOrderParams {
    pub fn from_dto(dto: UpdateOrderDto) -> Self {
        Self {
            status: dto.status,
            delivery_crew: dto.delivery_crew,
        }
    }
}

/// Result of applying an [`UpdateOrderParams`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderUpdate {
    Updated(Order),
    /// Delivery was requested for an order that is already delivered.
    AlreadyDelivered,
}
