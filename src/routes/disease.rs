//! POST /predict-disease
//!
//! Multipart upload of a leaf photo. The image is consumed entirely in
//! memory; nothing is written to disk.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;
use crate::tables::{disease_info, DISEASE_CLASSES};

const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Both outcomes share one tagged shape so the client can always branch on
/// `status`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiseaseResponse {
    Recognized {
        crop: String,
        disease: String,
        cause: &'static str,
        cure: &'static str,
    },
    Unrecognized,
}

fn allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub async fn predict_disease(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> ApiResult<Json<DiseaseResponse>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MalformedUpload)?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|_| ApiError::MalformedUpload)?;
            upload = Some((filename, bytes));
            break;
        }
    }

    let (filename, bytes) = upload.ok_or(ApiError::MissingFile)?;
    if filename.is_empty() {
        return Err(ApiError::EmptyFilename);
    }
    if !allowed_extension(&filename) {
        return Err(ApiError::UnsupportedFileType);
    }

    let image = image::load_from_memory(&bytes).map_err(|_| ApiError::InvalidImage)?;
    let class_index = state.disease.predict_class(&image)?;

    let label = match DISEASE_CLASSES.get(class_index) {
        Some(label) => *label,
        None => return Ok(Json(DiseaseResponse::Unrecognized)),
    };

    let response = match disease_info(label) {
        Some(info) => {
            let crop = label.split("___").next().unwrap_or(label).to_string();
            let disease = if label.contains("healthy") {
                "Healthy".to_string()
            } else {
                label.split("___").nth(1).unwrap_or("").to_string()
            };
            info!(label, "disease prediction served");
            DiseaseResponse::Recognized {
                crop,
                disease,
                cause: info.cause,
                cure: info.cure,
            }
        }
        None => DiseaseResponse::Unrecognized,
    };

    Ok(Json(response))
}
