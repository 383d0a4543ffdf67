//! Console renderer
//!
//! Renders domain data to the text printed on the operator console.

use crate::app::menu::MenuAction;
use crate::domain::entities::{CatalogItem, DepartmentSales, OrderOutcome, Product};

/// Render the customer catalog (id, name, price)
pub fn render_catalog(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return "\nNo products are available right now.".to_string();
    }

    let mut buf = String::new();
    for item in items {
        buf.push_str(&format!(
            "\nProduct ID: {}\nProduct Name: {}\nPrice: {}\n",
            item.id, item.name, item.unit_price
        ));
    }
    buf
}

/// Render products with their stock, as the manager sees them
pub fn render_inventory(products: &[Product]) -> String {
    if products.is_empty() {
        return "\nNo products found.".to_string();
    }

    let mut buf = String::new();
    for product in products {
        buf.push_str(&format!(
            "\nProduct ID: {}\nProduct Name: {}\nPrice: {}\nStock Quantity: {}\n",
            product.id, product.name, product.unit_price, product.stock_quantity
        ));
    }
    buf
}

/// Render the message for a decided order
pub fn render_order_outcome(outcome: &OrderOutcome) -> String {
    match outcome {
        OrderOutcome::Accepted { total_cost, .. } => {
            format!("\nThe cost of your order is: ${}", total_cost)
        }
        OrderOutcome::Declined => "\nInsufficient quantity!".to_string(),
    }
}

/// Render a numbered menu
pub fn render_menu<A: MenuAction>(title: &str, actions: &[A]) -> String {
    let mut buf = format!("\n{}\n\n", title);
    for (i, action) in actions.iter().enumerate() {
        buf.push_str(&format!("  {}) {}\n", i + 1, action.label()));
    }
    buf
}

/// Render the supervisor's sales-by-department table
pub fn render_department_sales(rows: &[DepartmentSales]) -> String {
    if rows.is_empty() {
        return "\nNo departments found.".to_string();
    }

    let headers = [
        "department_id",
        "department_name",
        "over_head_costs",
        "product_sales",
        "total_profit",
    ];
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.department_id.to_string(),
                row.department_name.clone(),
                format!("{:.2}", row.overhead_costs),
                format!("{:.2}", row.product_sales),
                format!("{:.2}", row.total_profit),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let line = |values: &[&str]| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!(" {:<width$} ", value, width = *width))
            .collect::<Vec<_>>()
            .join("|")
    };

    let mut buf = String::from("\n");
    buf.push_str(&line(&headers));
    buf.push('\n');
    buf.push_str(&separator);
    buf.push('\n');
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        buf.push_str(&line(&values));
        buf.push('\n');
    }
    buf
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::app::menu::SupervisorAction;
    use crate::domain::entities::{DepartmentId, ProductId};

    #[test]
    fn catalog_lists_id_name_price() {
        let text = render_catalog(&[CatalogItem {
            id: ProductId(3),
            name: "Desk Lamp".to_string(),
            unit_price: Decimal::new(2500, 2),
        }]);

        assert!(text.contains("Product ID: 3"));
        assert!(text.contains("Product Name: Desk Lamp"));
        assert!(text.contains("Price: 25.00"));
        assert!(!text.contains("Stock"));
    }

    #[test]
    fn outcome_messages() {
        let accepted = OrderOutcome::Accepted {
            total_cost: Decimal::new(12500, 2),
            remaining_stock: 3,
        };
        assert_eq!(
            render_order_outcome(&accepted),
            "\nThe cost of your order is: $125.00"
        );
        assert_eq!(
            render_order_outcome(&OrderOutcome::Declined),
            "\nInsufficient quantity!"
        );
    }

    #[test]
    fn menu_is_numbered() {
        let text = render_menu("Supervisor Portal", SupervisorAction::ALL);
        assert!(text.contains("  1) View Product Sales by Department"));
        assert!(text.contains("  3) Exit App"));
    }

    #[test]
    fn sales_table_has_header_and_rows() {
        let text = render_department_sales(&[DepartmentSales {
            department_id: DepartmentId(1),
            department_name: "Electronics".to_string(),
            overhead_costs: Decimal::from(1000),
            product_sales: Decimal::from(1500),
            total_profit: Decimal::from(500),
        }]);

        let lines: Vec<&str> = text.trim().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("department_name"));
        assert!(lines[2].contains("Electronics"));
        assert!(lines[2].contains("1500.00"));
        assert!(lines[2].contains("500.00"));
    }
}
