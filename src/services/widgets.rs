use crate::{
    db::DbPool,
    dto::WidgetDto,
    entities::widget,
    errors::ServiceError,
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Candidate widget for creation. Carries no identity; the store assigns one.
#[derive(Clone, Debug)]
pub struct NewWidget {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// Mutable fields applied on update. The name is never part of an update.
#[derive(Clone, Debug)]
pub struct WidgetUpdate {
    pub description: String,
    pub price: Decimal,
}

/// Service for managing widgets
#[derive(Clone)]
pub struct WidgetService {
    db: Arc<DbPool>,
}

impl WidgetService {
    /// Creates a new widget service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Returns all widgets projected to DTOs, in store iteration order.
    #[instrument(skip(self))]
    pub async fn get_all_widgets(&self) -> Result<Vec<WidgetDto>, ServiceError> {
        let widgets = widget::Entity::find().all(self.db.as_ref()).await?;
        Ok(widgets.into_iter().map(WidgetDto::from).collect())
    }

    /// Creates a new widget, rejecting names that already exist.
    ///
    /// The pre-check produces a friendly error on the common path; the unique
    /// index on `widgets.name` closes the race against concurrent creates, and
    /// a constraint violation surfaced by the insert is reported the same way.
    #[instrument(skip(self), fields(name = %new_widget.name))]
    pub async fn create_widget(&self, new_widget: NewWidget) -> Result<WidgetDto, ServiceError> {
        if self.find_by_name(&new_widget.name).await?.is_some() {
            return Err(ServiceError::DuplicateName(new_widget.name));
        }

        let model = widget::ActiveModel {
            name: Set(new_widget.name.clone()),
            description: Set(new_widget.description),
            price: Set(new_widget.price),
            ..Default::default()
        };

        let saved = match model.insert(self.db.as_ref()).await {
            Ok(saved) => saved,
            Err(err) => {
                return Err(match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        ServiceError::DuplicateName(new_widget.name)
                    }
                    _ => ServiceError::DatabaseError(err),
                });
            }
        };

        info!("Widget created: {}", saved.name);
        Ok(WidgetDto::from(saved))
    }

    /// Returns the widget with the given name, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_widget_by_name(&self, name: &str) -> Result<WidgetDto, ServiceError> {
        self.find_by_name(name)
            .await?
            .map(WidgetDto::from)
            .ok_or_else(|| ServiceError::NotFound(name.to_string()))
    }

    /// Applies description/price to the widget with the given name.
    /// The stored name is left untouched.
    #[instrument(skip(self, update))]
    pub async fn update_widget(
        &self,
        name: &str,
        update: WidgetUpdate,
    ) -> Result<WidgetDto, ServiceError> {
        let existing = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::NotFound(name.to_string()))?;

        let mut model: widget::ActiveModel = existing.into();
        model.description = Set(update.description);
        model.price = Set(update.price);

        let saved = model.update(self.db.as_ref()).await?;
        info!("Widget updated: {}", saved.name);
        Ok(WidgetDto::from(saved))
    }

    /// Removes the widget with the given name, or fails with `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete_widget(&self, name: &str) -> Result<(), ServiceError> {
        let existing = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::NotFound(name.to_string()))?;

        widget::Entity::delete_by_id(existing.id)
            .exec(self.db.as_ref())
            .await?;
        info!("Widget deleted: {}", name);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<widget::Model>, ServiceError> {
        widget::Entity::find()
            .filter(widget::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}
