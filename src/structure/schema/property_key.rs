//! Property key schema element.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::driver::SchemaManager;
use crate::error::AppError;
use crate::structure::constant::{Cardinality, DataType};
use crate::structure::schema::{check_name, default_check_exist, SchemaElement, UserData};

/// A named, typed property that vertex and edge labels can use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub cardinality: Cardinality,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub user_data: UserData,
    #[serde(default = "default_check_exist")]
    pub check_exist: bool,
}

impl PropertyKey {
    /// A TEXT/SINGLE property key.
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            data_type: DataType::default(),
            cardinality: Cardinality::default(),
            properties: Vec::new(),
            user_data: UserData::new(),
            check_exist: true,
        }
    }
}

impl SchemaElement for PropertyKey {
    const PATH: &'static str = "propertykeys";
    const KIND: &'static str = "property key";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fluent builder for [`PropertyKey`].
pub struct PropertyKeyBuilder<'a> {
    manager: &'a SchemaManager,
    key: PropertyKey,
}

impl<'a> PropertyKeyBuilder<'a> {
    pub(crate) fn new(manager: &'a SchemaManager, name: &str) -> Self {
        Self {
            manager,
            key: PropertyKey::new(name),
        }
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.key.data_type = data_type;
        self
    }

    pub fn as_text(self) -> Self {
        self.data_type(DataType::Text)
    }

    pub fn as_int(self) -> Self {
        self.data_type(DataType::Int)
    }

    pub fn as_long(self) -> Self {
        self.data_type(DataType::Long)
    }

    pub fn as_float(self) -> Self {
        self.data_type(DataType::Float)
    }

    pub fn as_double(self) -> Self {
        self.data_type(DataType::Double)
    }

    pub fn as_boolean(self) -> Self {
        self.data_type(DataType::Boolean)
    }

    pub fn as_byte(self) -> Self {
        self.data_type(DataType::Byte)
    }

    pub fn as_date(self) -> Self {
        self.data_type(DataType::Date)
    }

    pub fn as_uuid(self) -> Self {
        self.data_type(DataType::Uuid)
    }

    pub fn as_blob(self) -> Self {
        self.data_type(DataType::Blob)
    }

    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.key.cardinality = cardinality;
        self
    }

    pub fn value_single(self) -> Self {
        self.cardinality(Cardinality::Single)
    }

    pub fn value_list(self) -> Self {
        self.cardinality(Cardinality::List)
    }

    pub fn value_set(self) -> Self {
        self.cardinality(Cardinality::Set)
    }

    pub fn user_data(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.key.user_data.insert(key.to_string(), value.into());
        self
    }

    /// Return the existing key instead of failing when the name is taken.
    pub fn if_not_exist(mut self) -> Self {
        self.key.check_exist = false;
        self
    }

    /// Validates and returns the element without sending it.
    pub fn build(self) -> Result<PropertyKey, AppError> {
        check_name(PropertyKey::KIND, &self.key.name)?;
        Ok(self.key)
    }

    pub async fn create(self) -> Result<PropertyKey, AppError> {
        let manager = self.manager;
        manager.add_property_key(&self.build()?).await
    }

    /// Adds the builder's user data to an existing key.
    pub async fn append(self) -> Result<PropertyKey, AppError> {
        let manager = self.manager;
        manager.append_property_key(&self.build()?).await
    }

    /// Removes the builder's user data from an existing key.
    pub async fn eliminate(self) -> Result<PropertyKey, AppError> {
        let manager = self.manager;
        manager.eliminate_property_key(&self.build()?).await
    }

    pub async fn remove(self) -> Result<(), AppError> {
        check_name(PropertyKey::KIND, &self.key.name)?;
        self.manager.remove_property_key(&self.key.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let mut key = PropertyKey::new("age");
        key.data_type = DataType::Int;
        key.check_exist = false;
        assert_eq!(
            serde_json::to_value(&key).unwrap(),
            json!({
                "name": "age",
                "data_type": "INT",
                "cardinality": "SINGLE",
                "properties": [],
                "user_data": {},
                "check_exist": false
            })
        );
    }

    #[test]
    fn test_server_response_defaults_check_exist() {
        let key: PropertyKey = serde_json::from_value(json!({
            "id": 1,
            "name": "name",
            "data_type": "TEXT",
            "cardinality": "SINGLE",
            "properties": [],
            "user_data": {}
        }))
        .unwrap();
        assert_eq!(key.id, Some(1));
        assert!(key.check_exist);
    }
}
