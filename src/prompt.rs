//! Builds the user prompt for a customer from the sales tables.
//!
//! All customer-specific text is taken from the database and laid out in a
//! fixed order, so the same inputs on the same weekday always produce the same
//! prompt. Only the trailing instruction varies by function.

use crate::ai::prompts::{
    shopping_list_instruction, PROMOTION_INSTRUCTION, PROMPT_PREAMBLE, RECOMMEND_INSTRUCTION,
};
use crate::catalog::preferred_categories;
use crate::clock::{day_name, Clock};
use crate::db::{CategorySales, CustomerCode, Database};
use crate::error::AdvisorError;
use crate::messages;
use crate::text_utils::category_title;

/// What the customer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Recommend,
    ShoppingList,
    Promotion,
}

impl TryFrom<i64> for Function {
    type Error = AdvisorError;

    fn try_from(selector: i64) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(Self::Recommend),
            2 => Ok(Self::ShoppingList),
            3 => Ok(Self::Promotion),
            other => Err(AdvisorError::InvalidSelector(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Prompt ready to send to the model.
    Prompt(String),
    /// The customer's segment has no preferred categories; this text is the
    /// final answer.
    NoPreferences(String),
}

pub async fn build_prompt(
    db: &Database,
    clock: &dyn Clock,
    code: CustomerCode,
    selector: i64,
) -> Result<PromptOutcome, AdvisorError> {
    let customer = db
        .find_customer(code)
        .await?
        .ok_or(AdvisorError::UnknownCustomer(code))?;
    let segment = customer.segment.as_str();

    let categories = preferred_categories(segment);
    if categories.is_empty() {
        tracing::debug!(customer_code = code.0, segment, "No preferred categories");
        return Ok(PromptOutcome::NoPreferences(messages::no_preferences(code)));
    }

    let function = Function::try_from(selector)?;

    let mut prompt = PROMPT_PREAMBLE.to_string();
    for category in categories {
        let sales = db.category_sales(category).await?;
        if sales.is_none() {
            tracing::debug!(
                customer_code = code.0,
                category,
                "No sales record for category"
            );
        }
        prompt.push_str(&category_stanza(category, sales.as_ref()));
    }

    match function {
        Function::Recommend => prompt.push_str(RECOMMEND_INSTRUCTION),
        Function::Promotion => prompt.push_str(PROMOTION_INSTRUCTION),
        Function::ShoppingList => {
            let day = day_name(clock.today());
            let daily = db
                .daily_bought(code, day)
                .await?
                .ok_or_else(|| AdvisorError::NotFound(messages::no_daily_purchases(code, day)))?;
            let bought = db.segment_bought(code, segment).await?.ok_or_else(|| {
                AdvisorError::NotFound(messages::no_segment_purchases(code, segment))
            })?;
            prompt.push_str(&shopping_list_instruction(
                segment,
                &daily.most_bought_item_category,
                bought.ranked(),
            ));
        }
    }

    tracing::debug!(
        customer_code = code.0,
        segment,
        ?function,
        prompt_len = prompt.len(),
        "Built prompt"
    );
    Ok(PromptOutcome::Prompt(prompt))
}

/// One block of ranked sales figures for a category.
pub fn category_stanza(category: &str, sales: Option<&CategorySales>) -> String {
    let title = category_title(category);
    match sales {
        Some(s) => format!(
            "\nFor {title}:\n\
             Most Sold: {}\n\
             Second Most Sold: {}\n\
             Third Most Sold: {}\n\
             Least Sold: {}\n\
             Second Least Sold: {}\n\
             Third Least Sold: {}\n",
            s.most_sold,
            s.second_most_sold,
            s.third_most_sold,
            s.least_sold,
            s.second_least_sold,
            s.third_least_sold,
        ),
        None => format!("\nFor {title}:\n{}\n", messages::NO_ITEMS_FOUND),
    }
}
