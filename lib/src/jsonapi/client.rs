use super::document::{resource_body, Document};
use super::query::Query;
use crate::error::{FirehoseError, Result};
use crate::http::{Body, Request, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// CRUD calls for one JSON:API resource type (`bookmarks`, `tags`, ...)
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    name: String,
    transport: T,
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            transport,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /{name}/{id}`
    pub fn find<D: DeserializeOwned>(&self, id: &str) -> Result<Document<D>> {
        let request = Request::get(format!("{}/{}", self.name, id));
        self.fetch(&request)
    }

    /// `GET /{name}`
    pub fn all<D: DeserializeOwned>(&self) -> Result<Document<D>> {
        self.fetch(&Request::get(self.name.clone()))
    }

    /// `GET /{name}?filter[..]=..&..`, the JSON:API "where"
    pub fn list<D: DeserializeOwned>(&self, query: &Query) -> Result<Document<D>> {
        self.fetch(&Request::get(query.apply_to(&self.name)))
    }

    /// `POST /{name}` with the given attributes
    pub fn create<A: Serialize, D: DeserializeOwned>(&self, attributes: &A) -> Result<Document<D>> {
        let body = resource_body(&self.name, None, attributes)?;
        self.fetch(&Request::post(self.name.clone(), Body::JsonApi(body)))
    }

    /// `PATCH /{name}/{id}` with a (possibly partial) attribute set
    ///
    /// Servers may answer with an empty body, hence the `Option`.
    pub fn update<A: Serialize, D: DeserializeOwned>(
        &self,
        id: &str,
        attributes: &A,
    ) -> Result<Option<Document<D>>> {
        let body = resource_body(&self.name, Some(id), attributes)?;
        let request = Request::patch(format!("{}/{}", self.name, id), Body::JsonApi(body));
        self.transport
            .execute(&request)?
            .map(Document::from_value)
            .transpose()
    }

    /// `DELETE /{name}/{id}`
    pub fn delete(&self, id: &str) -> Result<()> {
        self.transport
            .execute(&Request::delete(format!("{}/{}", self.name, id)))?;
        Ok(())
    }

    fn fetch<D: DeserializeOwned>(&self, request: &Request) -> Result<Document<D>> {
        let value = self.transport.execute(request)?.ok_or_else(|| {
            FirehoseError::Json(format!("empty response body for {}", request.path))
        })?;
        Document::from_value(value)
    }
}
