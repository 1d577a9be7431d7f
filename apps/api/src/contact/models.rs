use serde::{Deserialize, Serialize};

use crate::validation::{FieldFormat, FieldSet, Schema};

/// The single contact record. Written wholesale; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

impl Contact {
    pub const SCHEMA: Schema = Schema {
        fields: &["name", "email", "phone", "linkedin", "github"],
        formats: &[("email", FieldFormat::Email), ("phone", FieldFormat::Phone)],
    };

    pub fn from_fields(mut fields: FieldSet) -> Self {
        Contact {
            name: fields.take("name"),
            email: fields.take("email"),
            phone: fields.take("phone"),
            linkedin: fields.take("linkedin"),
            github: fields.take("github"),
        }
    }
}
