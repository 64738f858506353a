use super::{ApiError, HttpTransport, Method, TransportError};
use crate::domain::common::{Entity, EntityId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

/// Method and optional JSON body of a request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            body: None,
        }
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
        }
    }

    pub fn put(body: Value) -> Self {
        Self {
            method: Method::Put,
            body: Some(body),
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::Delete,
            body: None,
        }
    }
}

/// Generic JSON-over-HTTP client bound to one backend base URL.
///
/// No retry, no caching: every call goes to the network.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport + Clone> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// Responses without a body (204, `content-length: 0`) resolve to `None`.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.url(path);
        log::debug!("{} {}", options.method, url);

        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = self
            .transport
            .send(options.method, &url, body)
            .await
            .map_err(|e| match e {
                TransportError::Unreachable(cause) => {
                    log::warn!("backend unreachable at {}: {}", self.base_url, cause);
                    ApiError::Connectivity {
                        backend: self.base_url.clone(),
                    }
                }
                TransportError::Other(cause) => ApiError::Request(cause),
            })?;

        if !response.is_success() {
            let body = if response.body.trim().is_empty() {
                response.status_text.clone()
            } else {
                response.body.clone()
            };
            return Err(ApiError::Server {
                status: response.status,
                body,
            });
        }

        if response.has_no_body() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Entity-client factory: the five standard operations under `E::BASE_PATH`
    pub fn entity<E: Entity>(&self) -> EntityClient<E, T> {
        EntityClient {
            api: self.clone(),
            _entity: PhantomData,
        }
    }
}

/// Standard CRUD map of one entity. All entity maps are structurally
/// identical; only the base path differs.
#[derive(Debug, Clone)]
pub struct EntityClient<E, T> {
    api: ApiClient<T>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, T: HttpTransport + Clone> EntityClient<E, T> {
    pub fn base_path(&self) -> &'static str {
        E::BASE_PATH
    }

    fn item_path(id: EntityId) -> String {
        format!("{}/{}", E::BASE_PATH, id)
    }

    /// GET {base}
    pub async fn get_all(&self) -> Result<Vec<E>, ApiError> {
        let value = self.api.request(E::BASE_PATH, RequestOptions::get()).await?;
        match value {
            Some(v) => decode(v),
            None => Ok(Vec::new()),
        }
    }

    /// GET {base}/{id}
    pub async fn get_by_id(&self, id: EntityId) -> Result<E, ApiError> {
        let path = Self::item_path(id);
        let value = self.api.request(&path, RequestOptions::get()).await?;
        self.expect_record(&path, value)
    }

    /// POST {base}/add
    pub async fn create(&self, payload: &E::Payload) -> Result<E, ApiError> {
        let path = format!("{}/add", E::BASE_PATH);
        let body = encode(payload)?;
        let value = self.api.request(&path, RequestOptions::post(body)).await?;
        self.expect_record(&path, value)
    }

    /// PUT {base}/{id}, with the id merged into the body
    pub async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<E, ApiError> {
        let path = Self::item_path(id);
        let mut body = encode(payload)?;
        if let Value::Object(map) = &mut body {
            map.insert("id".to_string(), Value::from(id));
        }
        let value = self.api.request(&path, RequestOptions::put(body)).await?;
        self.expect_record(&path, value)
    }

    /// DELETE {base}/{id}
    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let path = Self::item_path(id);
        self.api.request(&path, RequestOptions::delete()).await?;
        Ok(())
    }

    fn expect_record(&self, path: &str, value: Option<Value>) -> Result<E, ApiError> {
        match value {
            Some(v) => decode(v),
            None => Err(ApiError::EmptyResponse(self.api.url(path))),
        }
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product_line::aggregate::{ProductLine, ProductLinePayload};
        use crate::shared::api::testing::MockTransport;
    use crate::shared::api::RawResponse;
    use serde_json::json;

    fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(mock.clone(), "http://localhost:8080/api/")
    }

    #[tokio::test]
    async fn test_request_traces_and_parses_json() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!([{"id": 1}]));

        let value = client(&mock)
            .request("/productlines", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(value, Some(json!([{"id": 1}])));
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "http://localhost:8080/api/productlines");
    }

    #[tokio::test]
    async fn test_empty_responses_resolve_to_none() {
        let mock = MockTransport::new();
        mock.respond_empty(204);
        mock.respond(RawResponse {
            status: 200,
            status_text: "OK".into(),
            content_length: Some(0),
            body: String::new(),
        });
        let api = client(&mock);

        assert_eq!(api.request("/a", RequestOptions::delete()).await, Ok(None));
        assert_eq!(api.request("/b", RequestOptions::get()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_error_classification() {
        let mock = MockTransport::new();
        mock.fail_network();
        mock.respond(RawResponse {
            status: 500,
            status_text: "Internal Server Error".into(),
            content_length: None,
            body: "boom".into(),
        });
        mock.respond(RawResponse {
            status: 404,
            status_text: "Not Found".into(),
            content_length: None,
            body: String::new(),
        });
        mock.respond_text(200, "not json");
        let api = client(&mock);

        let err = api.request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Connectivity {
                backend: "http://localhost:8080/api".into()
            }
        );

        let err = api.request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                body: "boom".into()
            }
        );

        let err = api.request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                body: "Not Found".into()
            }
        );

        let err = api.request("/x", RequestOptions::get()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_entity_paths_and_bodies() {
        let mock = MockTransport::new();
        let lines = client(&mock).entity::<ProductLine>();
        let payload = ProductLinePayload {
            product_line: "Boats".into(),
            text_description: "desc".into(),
        };

        mock.respond_json(
            200,
            json!({"id": 8, "productLine": "Boats", "textDescription": "desc"}),
        );
        let created = lines.create(&payload).await.unwrap();
        assert_eq!(created.id, 8);

        mock.respond_json(
            200,
            json!({"id": 8, "productLine": "Boats", "textDescription": "desc"}),
        );
        lines.update(8, &payload).await.unwrap();

        mock.respond_empty(204);
        lines.delete(8).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://localhost:8080/api/productlines/add");
        assert_eq!(
            requests[0].json(),
            Some(json!({"productLine": "Boats", "textDescription": "desc"}))
        );

        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url, "http://localhost:8080/api/productlines/8");
        assert_eq!(requests[1].json().unwrap()["id"], json!(8));

        assert_eq!(requests[2].method, Method::Delete);
        assert_eq!(requests[2].url, "http://localhost:8080/api/productlines/8");
        assert_eq!(requests[2].body, None);
    }

    #[tokio::test]
    async fn test_get_by_id_decodes_record_or_reports_missing() {
        let mock = MockTransport::new();
        let lines = client(&mock).entity::<ProductLine>();

        mock.respond_json(
            200,
            json!({"id": 3, "productLine": "Planes", "textDescription": "Wings"}),
        );
        let line = lines.get_by_id(3).await.unwrap();
        assert_eq!(line.id, 3);
        assert_eq!(line.product_line, "Planes");

        mock.respond_text(404, "Product line not found");
        let err = lines.get_by_id(99).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                body: "Product line not found".into()
            }
        );

        mock.respond_empty(204);
        let err = lines.get_by_id(4).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::EmptyResponse("http://localhost:8080/api/productlines/4".into())
        );

        let requests = mock.requests();
        assert!(requests.iter().all(|r| r.method == Method::Get && r.body.is_none()));
        assert_eq!(requests[0].url, "http://localhost:8080/api/productlines/3");
        assert_eq!(requests[1].url, "http://localhost:8080/api/productlines/99");
    }

    #[tokio::test]
    async fn test_create_without_body_is_an_error() {
        let mock = MockTransport::new();
        mock.respond_empty(204);
        let payload = ProductLinePayload {
            product_line: "Boats".into(),
            text_description: "desc".into(),
        };

        let err = client(&mock)
            .entity::<ProductLine>()
            .create(&payload)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyResponse(_)));
    }
}
