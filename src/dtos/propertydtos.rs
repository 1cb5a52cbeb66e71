use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{error::ErrorMessage, service::error::ServiceError};

pub const DEFAULT_CITY: &str = "Tarlac City";
pub const DEFAULT_PROVINCE: &str = "Tarlac";
pub const DEFAULT_STATUS: &str = "New Lead";

// properties.price is NUMERIC(15, 2), floor_area and lot_area NUMERIC(12, 2).
const PRICE_INTEGER_DIGITS: i64 = 13;
const AREA_INTEGER_DIGITS: i64 = 10;

/// Raw add-property submission. Nothing is trusted or typed yet.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AddPropertyForm {
    pub description: Option<String>,
    pub barangay: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub price: Option<String>,
    pub property_type: Option<String>,
    pub class: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub floor_area: Option<String>,
    pub lot_area: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

/// A property lead that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub description: String,
    pub barangay: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub price: BigDecimal,
    pub property_type: String,
    pub class: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floor_area: Option<BigDecimal>,
    pub lot_area: Option<BigDecimal>,
    pub owner_name: String,
    pub contact_number: String,
    pub email: String,
    pub status: String,
}

fn trimmed(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn trimmed_or(field: &Option<String>, default: &str) -> String {
    match field {
        Some(value) => value.trim().to_string(),
        None => default.to_string(),
    }
}

fn optional_number<T: FromStr>(field: &Option<String>, label: &str) -> Result<Option<T>, ServiceError> {
    match field.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ServiceError::validation(format!("{} must be a valid number", label))),
    }
}

/// Whether `value` fits a `NUMERIC(p, 2)` column with `integer_digits`
/// digits before the decimal point.
fn fits_numeric(value: &BigDecimal, integer_digits: i64) -> bool {
    let normalized = value.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    scale <= 2 && normalized.digits() as i64 - scale <= integer_digits
}

fn positive_price(field: &Option<String>) -> Option<BigDecimal> {
    let raw = field.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    BigDecimal::from_str(raw)
        .ok()
        .filter(|price| fits_numeric(price, PRICE_INTEGER_DIGITS))
        .filter(|price| *price > BigDecimal::zero())
}

fn optional_area(field: &Option<String>, label: &str) -> Result<Option<BigDecimal>, ServiceError> {
    match optional_number::<BigDecimal>(field, label)? {
        Some(area) if !fits_numeric(&area, AREA_INTEGER_DIGITS) => {
            Err(ServiceError::validation(format!("{} must be a valid number", label)))
        }
        area => Ok(area),
    }
}

/// Syntax checks on top of `validate_email`: no leading, trailing or
/// doubled dot in the local part, and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if !validator::validate_email(email) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && domain.contains('.')
}

impl TryFrom<AddPropertyForm> for NewProperty {
    type Error = ServiceError;

    fn try_from(form: AddPropertyForm) -> Result<Self, Self::Error> {
        let description = trimmed(&form.description);
        let barangay = trimmed(&form.barangay);
        let street = trimmed(&form.street);
        let city = trimmed_or(&form.city, DEFAULT_CITY);
        let province = trimmed_or(&form.province, DEFAULT_PROVINCE);
        let price = positive_price(&form.price);
        let property_type = trimmed(&form.property_type);
        let class = trimmed(&form.class);
        let first_name = trimmed(&form.first_name);
        let last_name = trimmed(&form.last_name);
        let contact_number = trimmed(&form.contact_number);
        let email = trimmed(&form.email);

        let mut status = trimmed(&form.status);
        if status.is_empty() {
            status = DEFAULT_STATUS.to_string();
        }

        let mut errors: Vec<&str> = Vec::new();
        let required = [
            (&barangay, "Barangay is required"),
            (&street, "Street is required"),
            (&city, "City is required"),
            (&province, "Province is required"),
        ];
        for (value, message) in required {
            if value.is_empty() {
                errors.push(message);
            }
        }
        if price.is_none() {
            errors.push("Valid price is required");
        }
        let required = [
            (&property_type, "Property type is required"),
            (&class, "Property class is required"),
            (&first_name, "First name is required"),
            (&last_name, "Last name is required"),
            (&contact_number, "Contact number is required"),
            (&email, "Email is required"),
        ];
        for (value, message) in required {
            if value.is_empty() {
                errors.push(message);
            }
        }

        let price = match price {
            Some(price) if errors.is_empty() => price,
            _ => return Err(ServiceError::validation(errors.join(", "))),
        };

        if !is_valid_email(&email) {
            return Err(ServiceError::validation(ErrorMessage::InvalidEmailFormat.to_string()));
        }

        let bedrooms = optional_number::<i32>(&form.bedrooms, "Bedrooms")?;
        let bathrooms = optional_number::<i32>(&form.bathrooms, "Bathrooms")?;
        let floor_area = optional_area(&form.floor_area, "Floor area")?;
        let lot_area = optional_area(&form.lot_area, "Lot area")?;

        let owner_name = format!("{} {}", first_name, last_name);

        Ok(NewProperty {
            description,
            barangay,
            street,
            city,
            province,
            price,
            property_type,
            class,
            bedrooms,
            bathrooms,
            floor_area,
            lot_area,
            owner_name,
            contact_number,
            email,
            status,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddPropertyResponse {
    pub success: bool,
    pub message: String,
    pub property_id: i64,
}
