//! Main client implementation

use crate::{types::*, ClientError, Config, Result};
use bytes::Bytes;
use reqwest::{header, Client, RequestBuilder};
use tracing::{debug, instrument};
use uuid::Uuid;

const APP_ID_HEADER: &str = "x-parse-application-id";
const MASTER_KEY_HEADER: &str = "x-parse-master-key";

/// Parse Server client
///
/// Holds the configuration and a pooled HTTP client. The credential headers
/// live in the HTTP client's default header set, which is read-only after
/// construction; call-specific headers like `Content-Type` are added on the
/// per-request builder, so concurrent calls never observe each other's
/// headers.
pub struct ParseClient {
    config: Config,
    http: Client,
}

impl ParseClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            APP_ID_HEADER,
            config
                .app_id
                .parse()
                .map_err(|_| ClientError::Config("application id is not a valid header value".into()))?,
        );
        headers.insert(
            MASTER_KEY_HEADER,
            config
                .master_key
                .parse()
                .map_err(|_| ClientError::Config("master key is not a valid header value".into()))?,
        );
        headers.insert(
            header::USER_AGENT,
            config
                .user_agent
                .parse()
                .map_err(|_| ClientError::Config("user agent is not a valid header value".into()))?,
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Create with server URL and credentials, default timeout
    pub fn with_server(
        server_url: impl Into<String>,
        app_id: impl Into<String>,
        master_key: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Config::new(server_url, app_id, master_key))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a reference to an uploaded file for embedding in object fields
    ///
    /// Pure local construction, no I/O.
    pub fn file_reference(name: impl Into<String>, url: impl Into<String>) -> FileRef {
        FileRef::new(name, url)
    }

    // ==================== File Operations ====================

    /// Upload a file
    ///
    /// If no MIME type is given it is sniffed from the first 2048 bytes of
    /// the content; if no name is given one is generated from a fresh UUID
    /// and the MIME subtype. Returns the server's mapping with the stored
    /// file's `name` and `url`.
    #[instrument(skip(self, data, options))]
    pub async fn upload_file(
        &self,
        data: impl Into<Bytes>,
        options: Option<UploadOptions>,
    ) -> Result<Object> {
        let content = data.into();
        let opts = options.unwrap_or_default();

        let content_type = opts
            .content_type
            .unwrap_or_else(|| sniff_mime(&content).to_string());
        let name = opts
            .file_name
            .unwrap_or_else(|| generated_file_name(&content_type));

        let req = self
            .http
            .post(self.file_url(&name))
            .header(header::CONTENT_TYPE, &content_type)
            .body(content);
        self.execute(req).await
    }

    /// Delete a previously uploaded file by name
    #[instrument(skip(self))]
    pub async fn delete_file(&self, name: &str) -> Result<Object> {
        let req = self.http.delete(self.file_url(name));
        self.execute(req).await
    }

    // ==================== Class Operations ====================

    /// Fetch a single object by class and id
    #[instrument(skip(self))]
    pub async fn get_object(&self, class: &str, object_id: &str) -> Result<Object> {
        let req = self
            .http
            .get(self.object_url(class, object_id))
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(req).await
    }

    /// Create a new object in a class
    ///
    /// The returned mapping carries the server-assigned `objectId` and
    /// `createdAt` fields.
    #[instrument(skip(self, fields))]
    pub async fn create_object(&self, class: &str, fields: &Object) -> Result<Object> {
        let req = self.http.post(self.class_url(class)).json(fields);
        self.execute(req).await
    }

    /// Update an existing object's fields
    ///
    /// The returned mapping carries the server's `updatedAt` field.
    #[instrument(skip(self, fields))]
    pub async fn update_object(
        &self,
        class: &str,
        object_id: &str,
        fields: &Object,
    ) -> Result<Object> {
        let req = self.http.put(self.object_url(class, object_id)).json(fields);
        self.execute(req).await
    }

    /// Query objects in a class by a filter mapping
    ///
    /// The filter (empty when `None`) is serialized verbatim as the JSON
    /// request body; the client is agnostic to the server's filter syntax.
    /// The returned mapping carries a `results` list.
    #[instrument(skip(self, filter))]
    pub async fn query_objects(&self, class: &str, filter: Option<&Object>) -> Result<Object> {
        let empty = Object::new();
        let filter = filter.unwrap_or(&empty);
        let req = self.http.get(self.class_url(class)).json(filter);
        self.execute(req).await
    }

    /// Delete an object by class and id
    ///
    /// The returned mapping is empty on success.
    #[instrument(skip(self))]
    pub async fn delete_object(&self, class: &str, object_id: &str) -> Result<Object> {
        let req = self
            .http
            .delete(self.object_url(class, object_id))
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(req).await
    }

    // ==================== Helper Methods ====================

    /// Send a request and unwrap the response shared by every operation:
    /// 2xx parses as a JSON object, anything else is an error carrying the
    /// raw response body.
    async fn execute(&self, req: RequestBuilder) -> Result<Object> {
        let req = req.build()?;
        debug!("Sending {} request to {}", req.method(), req.url());
        let response = self.http.execute(req).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        match value {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(ClientError::InvalidResponse(format!(
                "expected a JSON object, got: {}",
                other
            ))),
        }
    }

    fn class_url(&self, class: &str) -> String {
        format!("{}/parse/classes/{}", self.config.base_url(), class)
    }

    fn object_url(&self, class: &str, object_id: &str) -> String {
        format!(
            "{}/parse/classes/{}/{}",
            self.config.base_url(),
            class,
            object_id
        )
    }

    fn file_url(&self, name: &str) -> String {
        format!("{}/parse/files/{}", self.config.base_url(), name)
    }
}

// ==================== MIME Helpers ====================

/// Bytes inspected when sniffing a MIME type.
const SNIFF_WINDOW: usize = 2048;

/// Best-guess MIME type for the given content, from its leading bytes.
fn sniff_mime(content: &[u8]) -> &'static str {
    let sample = &content[..content.len().min(SNIFF_WINDOW)];
    infer::get(sample)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream")
}

/// Unique file name with the MIME subtype as extension, e.g. `{uuid}.png`
fn generated_file_name(content_type: &str) -> String {
    let subtype = content_type.split('/').nth(1).unwrap_or("bin");
    format!("{}.{}", Uuid::new_v4(), subtype)
}
