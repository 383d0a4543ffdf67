//! Prompt sequencer
//!
//! Asks the operator one question at a time and keeps asking until the answer
//! validates. Validation failures are shown to the operator and never leave
//! this module.

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::app::menu::MenuAction;
use crate::domain::entities::ProductId;
use crate::domain::ports::Console;
use crate::error::{ConsoleError, ValidationError};
use crate::render::render_menu;

/// Parse a whole number, also accepting decimal spellings like `4.0`
fn parse_whole(input: &str) -> Option<i64> {
    let input = input.trim();
    input.parse::<i64>().ok().or_else(|| {
        input
            .parse::<Decimal>()
            .ok()
            .filter(|d| d.fract().is_zero())
            .and_then(|d| d.to_i64())
    })
}

/// Validate a product id in `1..=max`
pub fn parse_product_id(input: &str, max: i32) -> Result<ProductId, ValidationError> {
    let id = parse_whole(input).ok_or(ValidationError::NotAnId { max })?;
    if id < 1 || id > i64::from(max) {
        return Err(ValidationError::IdOutOfRange { max });
    }
    // In range of 1..=max, so it fits in an i32
    Ok(ProductId(id as i32))
}

/// Validate a positive whole quantity
pub fn parse_quantity(input: &str) -> Result<i32, ValidationError> {
    let quantity = parse_whole(input).ok_or(ValidationError::NotAQuantity)?;
    if quantity < 1 {
        return Err(ValidationError::QuantityNotPositive);
    }
    i32::try_from(quantity).map_err(|_| ValidationError::NotAQuantity)
}

/// Largest value of a `DECIMAL(10, 2)` price column, in cents
const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// Largest value of a `DECIMAL(12, 2)` cost column, in cents
const MAX_AMOUNT_CENTS: i64 = 999_999_999_999;

/// Parse money that fits a two-place decimal column holding at most `max_cents`
fn parse_money(input: &str, max_cents: i64) -> Option<Decimal> {
    input
        .trim()
        .parse::<Decimal>()
        .ok()
        .filter(|value| value.normalize().scale() <= 2)
        .filter(|value| *value <= Decimal::new(max_cents, 2))
}

/// Validate a price greater than zero with at most two decimal places
pub fn parse_price(input: &str) -> Result<Decimal, ValidationError> {
    parse_money(input, MAX_PRICE_CENTS)
        .filter(|price| *price > Decimal::ZERO)
        .ok_or(ValidationError::InvalidPrice)
}

/// Validate a money amount of zero or more with at most two decimal places
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    parse_money(input, MAX_AMOUNT_CENTS)
        .filter(|amount| !amount.is_sign_negative())
        .ok_or(ValidationError::InvalidAmount)
}

/// Validate free text that must not be blank
pub fn parse_text(input: &str) -> Result<String, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(text.to_string())
}

/// Validate a yes/no answer. A blank answer means yes.
pub fn parse_yes_no(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(ValidationError::NotYesNo),
    }
}

/// Validate a menu choice, given by its number or its name
pub fn parse_choice<A: MenuAction>(input: &str) -> Result<A, ValidationError> {
    let input = input.trim();

    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| A::ALL.get(i))
            .copied()
            .ok_or(ValidationError::UnknownChoice);
    }

    A::ALL
        .iter()
        .find(|action| action.label().eq_ignore_ascii_case(input))
        .copied()
        .or_else(|| input.parse::<A>().ok())
        .ok_or(ValidationError::UnknownChoice)
}

/// Asks validated questions over a console
pub struct Prompter<C>
where
    C: Console,
{
    console: Arc<C>,
}

impl<C> Prompter<C>
where
    C: Console,
{
    pub fn new(console: Arc<C>) -> Self {
        Self { console }
    }

    /// Print text to the operator
    pub async fn say(&self, text: &str) -> Result<(), ConsoleError> {
        self.console.write_line(text).await
    }

    /// Ask `question` until `validate` accepts the answer
    async fn ask<T, F>(&self, question: &str, validate: F) -> Result<T, ConsoleError>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            let answer = self.console.read_line(question).await?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(answer = %answer, "Rejected input: {}", e);
                    self.console.write_line(&format!("\n{}", e)).await?;
                }
            }
        }
    }

    pub async fn product_id(&self, question: &str, max: i32) -> Result<ProductId, ConsoleError> {
        self.ask(question, |answer| parse_product_id(answer, max))
            .await
    }

    pub async fn quantity(&self, question: &str) -> Result<i32, ConsoleError> {
        self.ask(question, parse_quantity).await
    }

    pub async fn price(&self, question: &str) -> Result<Decimal, ConsoleError> {
        self.ask(question, parse_price).await
    }

    pub async fn amount(&self, question: &str) -> Result<Decimal, ConsoleError> {
        self.ask(question, parse_amount).await
    }

    pub async fn text(&self, question: &str) -> Result<String, ConsoleError> {
        self.ask(question, parse_text).await
    }

    pub async fn confirm(&self, question: &str) -> Result<bool, ConsoleError> {
        self.ask(&format!("{} (Y/n)", question), parse_yes_no)
            .await
    }

    /// Show a numbered menu and ask for one of its actions
    pub async fn choose<A: MenuAction>(&self, title: &str) -> Result<A, ConsoleError> {
        self.say(&render_menu(title, A::ALL)).await?;
        self.ask("Action:", parse_choice::<A>).await
    }
}
