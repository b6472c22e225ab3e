use axum::extract::Multipart;

use pagetext_core::DocumentInput;

use crate::error::ApiError;

/// Parsed multipart form fields, a superset of what the four extraction
/// endpoints accept. Handlers validate the presence of what they need.
#[derive(Default)]
pub struct ExtractForm {
    pub file: Option<DocumentInput>,
    pub files: Vec<DocumentInput>,
    pub method: Option<String>,
    pub include_metadata: Option<bool>,
    pub page_range: Option<String>,
    pub max_files: Option<usize>,
}

/// Parse a multipart upload into structured form fields.
pub async fn parse_form(mut multipart: Multipart) -> Result<ExtractForm, ApiError> {
    let mut form = ExtractForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read file data: {e}")))?
                    .to_vec();
                form.file = Some(DocumentInput { filename, data });
            }
            "files" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read file data: {e}")))?
                    .to_vec();
                form.files.push(DocumentInput { filename, data });
            }
            "method" => {
                let value = read_text(field, "method").await?;
                if !value.is_empty() {
                    form.method = Some(value);
                }
            }
            "include_metadata" => {
                let value = read_text(field, "include_metadata").await?;
                form.include_metadata = Some(parse_bool(&value)?);
            }
            "page_range" => {
                let value = read_text(field, "page_range").await?;
                if !value.is_empty() {
                    form.page_range = Some(value);
                }
            }
            "max_files" => {
                let value = read_text(field, "max_files").await?;
                form.max_files = Some(
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ApiError::bad_request("Invalid max_files value"))?,
                );
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(form)
}

async fn read_text(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read {name}: {e}")))
}

fn parse_bool(value: &str) -> Result<bool, ApiError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ApiError::bad_request("Invalid include_metadata value")),
    }
}
