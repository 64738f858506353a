use super::aggregate::{Order, OrderPayload};
use crate::enums::order_status::OrderStatus;
use crate::shared::form::{optional, parse_date, EntityForm, FieldErrors, DATE_FORMAT};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub orderdate: String,
    pub requireddate: String,
    pub shippeddate: String,
    pub status: String,
    pub comments: String,
    pub customernumber: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            orderdate: String::new(),
            requireddate: String::new(),
            shippeddate: String::new(),
            status: OrderStatus::default().label().to_string(),
            comments: String::new(),
            customernumber: String::new(),
        }
    }
}

fn required_date(errors: &mut FieldErrors, field: &str, value: &str, label: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }
    let date = parse_date(value);
    if date.is_none() {
        errors.add(field, format!("{} is not a valid date", label));
    }
    date
}

impl EntityForm for OrderForm {
    type Entity = Order;

    fn from_entity(order: &Order) -> Self {
        Self {
            orderdate: order.orderdate.format(DATE_FORMAT).to_string(),
            requireddate: order.requireddate.format(DATE_FORMAT).to_string(),
            shippeddate: order
                .shippeddate
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            status: order.status.label().to_string(),
            comments: order.comments.clone().unwrap_or_default(),
            customernumber: order.customernumber.to_string(),
        }
    }

    /// New orders are dated today
    fn for_add(today: NaiveDate) -> Self {
        Self {
            orderdate: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<OrderPayload, FieldErrors> {
        let mut e = FieldErrors::new();

        let orderdate = required_date(&mut e, "orderdate", &self.orderdate, "Order date");
        let requireddate = required_date(&mut e, "requireddate", &self.requireddate, "Required date");

        let status = OrderStatus::from_label(&self.status);
        if status.is_none() {
            e.add("status", "Status is required");
        }

        let customernumber = self.customernumber.trim().parse::<i64>().ok();
        if customernumber.is_none() {
            e.add("customernumber", "Customer is required");
        }

        let shippeddate = if self.shippeddate.trim().is_empty() {
            None
        } else {
            let date = parse_date(&self.shippeddate);
            if date.is_none() {
                e.add("shippeddate", "Shipped date is not a valid date");
            }
            date
        };

        if let (Some(ordered), Some(required)) = (orderdate, requireddate) {
            if required < ordered {
                e.add("requireddate", "Required date must be after order date");
            }
        }
        if let (Some(ordered), Some(shipped)) = (orderdate, shippeddate) {
            if shipped < ordered {
                e.add("shippeddate", "Shipped date must be after order date");
            }
        }

        match (orderdate, requireddate, status, customernumber) {
            (Some(orderdate), Some(requireddate), Some(status), Some(customernumber)) if e.is_empty() => {
                Ok(OrderPayload {
                    orderdate,
                    requireddate,
                    shippeddate,
                    status,
                    comments: optional(&self.comments),
                    customernumber,
                })
            }
            _ => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_defaults_to_today() {
        let state = FormState::<OrderForm>::for_add(date(2024, 3, 15));
        assert_eq!(state.data.orderdate, "2024-03-15");
        assert_eq!(state.data.status, "In Process");
        assert!(!state.mode.is_edit());
    }

    #[test]
    fn test_required_date_before_order_date() {
        let form = OrderForm {
            orderdate: "2024-01-10".into(),
            requireddate: "2024-01-05".into(),
            customernumber: "103".into(),
            ..OrderForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("requireddate"), Some("Required date must be after order date"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_same_day_is_accepted_and_shipped_checked() {
        let mut form = OrderForm {
            orderdate: "2024-01-10".into(),
            requireddate: "2024-01-10".into(),
            customernumber: "103".into(),
            comments: "  ".into(),
            ..OrderForm::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.shippeddate, None);
        assert_eq!(payload.comments, None);
        assert_eq!(payload.status, OrderStatus::InProcess);

        form.shippeddate = "2024-01-09".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("shippeddate"), Some("Shipped date must be after order date"));
    }

    #[test]
    fn test_missing_fields() {
        let form = OrderForm {
            status: String::new(),
            ..OrderForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("orderdate"), Some("Order date is required"));
        assert_eq!(errors.get("requireddate"), Some("Required date is required"));
        assert_eq!(errors.get("status"), Some("Status is required"));
        assert_eq!(errors.get("customernumber"), Some("Customer is required"));
    }
}
