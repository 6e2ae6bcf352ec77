use crate::attributes::{Attributes, FieldValue};
use crate::error::FieldError;
use crate::field_type::{FieldType, ReadKind};
use crate::schema::Schema;
use chrono::DateTime;
use chrono_tz::Tz;
use serde_json::Value;

/// An attribute-backed record bound to its kind's schema.
///
/// The `read_*` methods are the lenient attribute-store readers. The `get_*`
/// getters additionally check the field's registered type and refuse to read,
/// say, a currency field as a date. Field names the schema does not know are
/// always read leniently.
pub trait Entity {
    fn attributes(&self) -> &Attributes;
    fn schema(&self) -> &Schema;

    fn field_type(&self, name: &str) -> Option<FieldType> {
        self.schema().field_type(name)
    }

    /// Read a field through its registered type; unknown fields come back raw.
    fn field(&self, name: &str) -> Result<FieldValue<'_>, FieldError> {
        let kind = self.schema().read_kind(name).unwrap_or(ReadKind::Raw);
        self.attributes().read(name, kind)
    }

    fn read_raw(&self, name: &str) -> Option<&Value> {
        self.attributes().read_raw(name)
    }

    fn read_string(&self, name: &str) -> Option<&str> {
        self.attributes().read_string(name)
    }

    fn read_duration(&self, name: &str) -> f64 {
        self.attributes().read_duration(name)
    }

    fn read_float(&self, name: &str) -> f64 {
        self.attributes().read_float(name)
    }

    fn read_integer(&self, name: &str) -> i64 {
        self.attributes().read_integer(name)
    }

    fn read_boolean(&self, name: &str) -> bool {
        self.attributes().read_boolean(name)
    }

    fn read_date(&self, name: &str) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes().read_date(name)
    }

    fn get_date(&self, name: &str) -> Result<Option<DateTime<Tz>>, FieldError> {
        expect_kind(self.schema(), name, ReadKind::Date)?;
        self.read_date(name)
    }

    fn get_duration(&self, name: &str) -> Result<f64, FieldError> {
        expect_kind(self.schema(), name, ReadKind::Duration)?;
        Ok(self.read_duration(name))
    }

    fn get_float(&self, name: &str) -> Result<f64, FieldError> {
        expect_kind(self.schema(), name, ReadKind::Float)?;
        Ok(self.read_float(name))
    }

    fn get_integer(&self, name: &str) -> Result<i64, FieldError> {
        expect_kind(self.schema(), name, ReadKind::Integer)?;
        Ok(self.read_integer(name))
    }

    fn get_boolean(&self, name: &str) -> Result<bool, FieldError> {
        expect_kind(self.schema(), name, ReadKind::Boolean)?;
        Ok(self.read_boolean(name))
    }

    /// Names of the present fields whose registered type decodes as a date.
    fn date_field_names(&self) -> Vec<&str> {
        self.attributes()
            .names()
            .filter(|name| self.schema().read_kind(name) == Some(ReadKind::Date))
            .collect()
    }

    /// Decode every date-typed field, keeping only the failures.
    fn date_errors(&self) -> Vec<FieldError> {
        self.date_field_names()
            .into_iter()
            .filter_map(|name| self.read_date(name).err())
            .collect()
    }
}

fn expect_kind(schema: &Schema, name: &str, expected: ReadKind) -> Result<(), FieldError> {
    match schema.read_kind(name) {
        Some(actual) if actual != expected => Err(FieldError::TypeMismatch {
            field: name.to_string(),
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}

macro_rules! impl_entity {
    ($ty:ty) => {
        impl $crate::entity::Entity for $ty {
            fn attributes(&self) -> &$crate::attributes::Attributes {
                &self.attributes
            }

            fn schema(&self) -> &$crate::schema::Schema {
                &self.schema
            }
        }
    };
}

pub(crate) use impl_entity;
