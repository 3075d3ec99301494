//! Customer resource types.

use serde::{Deserialize, Serialize};

/// A stored customer. `id` is assigned by the database on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Request body for create and update. Missing fields decode as empty strings;
/// a client-supplied `id` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub status: String,
}

impl CustomerInput {
    pub fn with_id(self, id: i32) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
        }
    }
}

/// Row shape as read from `customer`; text columns are nullable.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CustomerRow {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
        }
    }
}
