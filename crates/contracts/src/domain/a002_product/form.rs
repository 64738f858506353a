use super::aggregate::{Product, ProductPayload};
use crate::shared::form::{
    non_negative_decimal, non_negative_integer, required, EntityForm, FieldErrors,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub product_code: String,
    pub product_name: String,
    pub product_line: String,
    pub product_vendor: String,
    pub product_scale: String,
    pub product_description: String,
    pub quantity_in_stock: String,
    pub buy_price: String,
    pub msrp: String,
}

impl EntityForm for ProductForm {
    type Entity = Product;

    fn from_entity(entity: &Product) -> Self {
        Self {
            product_code: entity.product_code.clone(),
            product_name: entity.product_name.clone(),
            product_line: entity.product_line.clone(),
            product_vendor: entity.product_vendor.clone(),
            product_scale: entity.product_scale.clone(),
            product_description: entity.product_description.clone(),
            quantity_in_stock: entity.quantity_in_stock.to_string(),
            buy_price: entity.buy_price.to_string(),
            msrp: entity.msrp.to_string(),
        }
    }

    fn validate(&self) -> Result<ProductPayload, FieldErrors> {
        let mut e = FieldErrors::new();

        let product_code = required(&mut e, "productCode", &self.product_code, "Product code is required");
        let product_name = required(&mut e, "productName", &self.product_name, "Product name is required");
        let product_line = required(&mut e, "productLine", &self.product_line, "Product line is required");
        let product_vendor = required(&mut e, "productVendor", &self.product_vendor, "Vendor is required");
        let product_scale = required(&mut e, "productScale", &self.product_scale, "Scale is required");
        let product_description = required(
            &mut e,
            "productDescription",
            &self.product_description,
            "Description is required",
        );
        let quantity = non_negative_integer(&mut e, "quantityInStock", &self.quantity_in_stock, "Quantity in stock");
        let buy_price = non_negative_decimal(
            &mut e,
            "buyPrice",
            &self.buy_price,
            "Buy price",
            Some("Buy price is required"),
        );
        let msrp = non_negative_decimal(&mut e, "msrp", &self.msrp, "MSRP", Some("MSRP is required"));

        match (quantity, buy_price, msrp) {
            (Some(quantity_in_stock), Some(buy_price), Some(msrp)) if e.is_empty() => Ok(ProductPayload {
                product_code,
                product_name,
                product_line,
                product_vendor,
                product_scale,
                product_description,
                quantity_in_stock,
                buy_price,
                msrp,
            }),
            _ => Err(e),
        }
    }
}
