//! Generic REST API for schema elements.

use std::marker::PhantomData;

use crate::context::{AppRest, Context, GraphName};
use crate::di::FromRef;
use crate::error::AppError;
use crate::rest::RestExt;
use crate::structure::schema::SchemaElement;
use crate::structure::UpdateAction;

/// CRUD calls on `graphs/{graph}/schema/{T::PATH}`.
pub struct SchemaApi<T> {
    rest: AppRest,
    graph: GraphName,
    _element: PhantomData<fn() -> T>,
}

// Written by hand: the marker field has no context counterpart.
impl<T: SchemaElement> FromRef<Context> for SchemaApi<T> {
    fn from_ref(ctx: &Context) -> Self {
        Self {
            rest: AppRest::from_ref(ctx),
            graph: GraphName::from_ref(ctx),
            _element: PhantomData,
        }
    }
}

impl<T> Clone for SchemaApi<T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            graph: self.graph.clone(),
            _element: PhantomData,
        }
    }
}

impl<T: SchemaElement> SchemaApi<T> {
    fn path(&self, name: Option<&str>) -> Vec<String> {
        let mut path = self.graph.path(&["schema", T::PATH]);
        if let Some(name) = name {
            path.push(name.to_string());
        }
        path
    }

    pub async fn create(&self, element: &T) -> Result<T, AppError> {
        let result = self.rest.post(self.path(None)).body(element).send().await?;
        T::from_create_response(result)
    }

    pub async fn get(&self, name: &str) -> Result<T, AppError> {
        self.rest.get(self.path(Some(name))).fetch().await
    }

    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        self.rest.get(self.path(None)).fetch_list(T::list_key()).await
    }

    pub async fn update(&self, element: &T, action: UpdateAction) -> Result<T, AppError> {
        self.rest
            .put(self.path(Some(element.name())))
            .param("action", action.as_str())
            .body(element)
            .fetch()
            .await
    }

    /// Deletes by name. Label removal runs as a server task whose id is returned.
    pub async fn delete(&self, name: &str) -> Result<Option<i64>, AppError> {
        let result = self.rest.delete(self.path(Some(name))).send().await?;
        result.get_opt("task_id")
    }
}
