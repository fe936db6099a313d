use super::{CustomerCode, Database};
use anyhow::Result;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_code: i64,
    pub segment: String,
}

/// Ranked best and worst sellers for one item category.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct CategorySales {
    pub item_category: String,
    pub most_sold: String,
    pub second_most_sold: String,
    pub third_most_sold: String,
    pub least_sold: String,
    pub second_least_sold: String,
    pub third_least_sold: String,
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct DailyBought {
    pub customer_code: i64,
    pub day_of_week: String,
    pub most_bought_item_category: String,
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct SegmentBought {
    pub customer_code: i64,
    pub segment: String,
    pub most_bought: String,
    pub second_most_bought: String,
    pub third_most_bought: String,
    pub fourth_most_bought: String,
}

impl SegmentBought {
    /// The four items in rank order.
    pub fn ranked(&self) -> [&str; 4] {
        [
            &self.most_bought,
            &self.second_most_bought,
            &self.third_most_bought,
            &self.fourth_most_bought,
        ]
    }
}

impl Database {
    pub async fn find_customer(&self, code: CustomerCode) -> Result<Option<Customer>> {
        tracing::trace!(customer_code = code.0, "Looking up customer");
        sqlx::query_as(
            "SELECT customer_code, segment FROM customer_category WHERE customer_code = ?",
        )
        .bind(code.0)
        .fetch_optional(self.pool())
        .await
        .map_err(Into::into)
    }

    pub async fn category_sales(&self, category: &str) -> Result<Option<CategorySales>> {
        tracing::trace!(category, "Looking up category sales");
        sqlx::query_as(
            "SELECT item_category, most_sold, second_most_sold, third_most_sold, \
                    least_sold, second_least_sold, third_least_sold \
             FROM item_category_product_sales WHERE item_category = ?",
        )
        .bind(category)
        .fetch_optional(self.pool())
        .await
        .map_err(Into::into)
    }

    pub async fn daily_bought(
        &self,
        code: CustomerCode,
        day_of_week: &str,
    ) -> Result<Option<DailyBought>> {
        tracing::trace!(
            customer_code = code.0,
            day_of_week,
            "Looking up daily purchases"
        );
        sqlx::query_as(
            "SELECT customer_code, day_of_week, most_bought_item_category \
             FROM most_bought_items WHERE customer_code = ? AND day_of_week = ?",
        )
        .bind(code.0)
        .bind(day_of_week)
        .fetch_optional(self.pool())
        .await
        .map_err(Into::into)
    }

    pub async fn segment_bought(
        &self,
        code: CustomerCode,
        segment: &str,
    ) -> Result<Option<SegmentBought>> {
        tracing::trace!(
            customer_code = code.0,
            segment,
            "Looking up segment purchases"
        );
        sqlx::query_as(
            "SELECT customer_code, segment, most_bought, second_most_bought, \
                    third_most_bought, fourth_most_bought \
             FROM each_customer_segmentwise_most_bought \
             WHERE customer_code = ? AND segment = ?",
        )
        .bind(code.0)
        .bind(segment)
        .fetch_optional(self.pool())
        .await
        .map_err(Into::into)
    }
}
