use super::aggregate::{Customer, CustomerPayload};
use crate::shared::form::{
    non_negative_decimal, optional, optional_id, required, text_of, EntityForm, FieldErrors,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub customer_name: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub sales_rep_employee_number: String,
    pub credit_limit: String,
}

impl EntityForm for CustomerForm {
    type Entity = Customer;

    fn from_entity(c: &Customer) -> Self {
        Self {
            customer_name: c.customer_name.clone(),
            contact_first_name: c.contact_first_name.clone(),
            contact_last_name: c.contact_last_name.clone(),
            phone: c.phone.clone(),
            address_line1: c.address_line1.clone(),
            address_line2: text_of(&c.address_line2),
            city: c.city.clone(),
            state: text_of(&c.state),
            postal_code: text_of(&c.postal_code),
            country: c.country.clone(),
            sales_rep_employee_number: text_of(&c.sales_rep_employee_number),
            credit_limit: text_of(&c.credit_limit),
        }
    }

    fn validate(&self) -> Result<CustomerPayload, FieldErrors> {
        let mut e = FieldErrors::new();

        let customer_name = required(&mut e, "customerName", &self.customer_name, "Customer name is required");
        let contact_last_name = required(
            &mut e,
            "contactLastName",
            &self.contact_last_name,
            "Contact last name is required",
        );
        let contact_first_name = required(
            &mut e,
            "contactFirstName",
            &self.contact_first_name,
            "Contact first name is required",
        );
        let phone = required(&mut e, "phone", &self.phone, "Phone is required");
        let address_line1 = required(&mut e, "addressLine1", &self.address_line1, "Address is required");
        let city = required(&mut e, "city", &self.city, "City is required");
        let country = required(&mut e, "country", &self.country, "Country is required");
        let sales_rep_employee_number = optional_id(
            &mut e,
            "salesRepEmployeeNumber",
            &self.sales_rep_employee_number,
            "Unknown sales representative",
        );
        let credit_limit = non_negative_decimal(&mut e, "creditLimit", &self.credit_limit, "Credit Limit", None);

        e.into_result(|| CustomerPayload {
            customer_name,
            contact_first_name,
            contact_last_name,
            phone,
            address_line1,
            address_line2: optional(&self.address_line2),
            city,
            state: optional(&self.state),
            postal_code: optional(&self.postal_code),
            country,
            sales_rep_employee_number,
            credit_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn filled() -> CustomerForm {
        CustomerForm {
            customer_name: "Mini Gifts".into(),
            contact_first_name: "Susan".into(),
            contact_last_name: "Nelson".into(),
            phone: "4155551450".into(),
            address_line1: "5677 Strong St.".into(),
            city: "San Rafael".into(),
            country: "USA".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let mut form = filled();
        form.address_line2 = "   ".into();
        form.credit_limit = "210500".into();
        form.sales_rep_employee_number = "1165".into();

        let payload = form.validate().unwrap();
        assert_eq!(payload.address_line2, None);
        assert_eq!(payload.state, None);
        assert_eq!(payload.credit_limit, Some(Decimal::new(210500, 0)));
        assert_eq!(payload.sales_rep_employee_number, Some(1165));

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["addressLine2"].is_null());
        assert_eq!(json["salesRepEmployeeNumber"], serde_json::json!(1165));
    }

    #[test]
    fn test_required_fields_and_credit_limit() {
        let mut form = filled();
        form.city = "".into();
        form.credit_limit = "-100".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("city"), Some("City is required"));
        assert_eq!(errors.get("creditLimit"), Some("Credit Limit must be 0 or greater"));
        assert_eq!(errors.len(), 2);
    }
}
