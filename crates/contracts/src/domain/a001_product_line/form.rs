use super::aggregate::{ProductLine, ProductLinePayload};
use crate::shared::form::{required, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductLineForm {
    pub product_line: String,
    pub text_description: String,
}

impl EntityForm for ProductLineForm {
    type Entity = ProductLine;

    fn from_entity(entity: &ProductLine) -> Self {
        Self {
            product_line: entity.product_line.clone(),
            text_description: entity.text_description.clone(),
        }
    }

    fn validate(&self) -> Result<ProductLinePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let product_line = required(
            &mut errors,
            "productLine",
            &self.product_line,
            "Product line name is required",
        );
        let text_description = required(
            &mut errors,
            "textDescription",
            &self.text_description,
            "Description is required",
        );

        errors.into_result(|| ProductLinePayload {
            product_line,
            text_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use chrono::NaiveDate;

    #[test]
    fn test_submit_trims_and_reports_missing_fields() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut state = FormState::<ProductLineForm>::for_add(today);

        assert_eq!(state.submit(), None);
        assert_eq!(state.error("productLine").as_deref(), Some("Product line name is required"));
        assert_eq!(state.error("textDescription").as_deref(), Some("Description is required"));

        state.update_field("productLine", |f| f.product_line = "  Boats ".into());
        assert_eq!(state.error("productLine"), None);
        assert!(state.errors.has("textDescription"));

        state.update_field("textDescription", |f| f.text_description = "Sail away".into());
        let payload = state.submit().unwrap();
        assert_eq!(payload.product_line, "Boats");
        assert!(state.errors.is_empty());
    }
}
