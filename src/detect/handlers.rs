use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};

use crate::{
    detect::{
        dto::{CropReport, DetectRequest, DiseaseReport, ErrorResponse, Verdict},
        services::{classify_crop, classify_disease},
    },
    state::AppState,
};

type UploadError = (StatusCode, Json<ErrorResponse>);

pub fn detect_routes() -> Router<AppState> {
    Router::new()
        .route("/detect", post(detect))
        .route("/detect-crop", post(detect_crop))
        .route("/detect-disease", post(detect_disease))
}

/// Accepts any body; unparseable input is treated as "no image".
#[instrument(skip(state, body), fields(len = body.len()))]
pub async fn detect(State(state): State<AppState>, body: Bytes) -> Json<Verdict> {
    let req: DetectRequest = serde_json::from_slice(&body).unwrap_or_default();
    info!(has_image = req.image.is_some(), "image received for detection");
    Json(state.detector.detect(req.image.as_ref()).await)
}

#[instrument(skip(multipart))]
pub async fn detect_crop(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CropReport>, UploadError> {
    let image = read_image(multipart).await?;
    let report = classify_crop(&mut rand::thread_rng());
    info!(bytes = image.len(), crop = %report.crop, "crop classified");
    Ok(Json(report))
}

#[instrument(skip(multipart))]
pub async fn detect_disease(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DiseaseReport>, UploadError> {
    let image = read_image(multipart).await?;
    let report = classify_disease(&mut rand::thread_rng());
    info!(bytes = image.len(), disease = %report.disease, "disease classified");
    Ok(Json(report))
}

/// Pulls the `file` part out of a multipart upload. The bytes are only held
/// for the duration of the request.
async fn read_image(multipart: Result<Multipart, MultipartRejection>) -> Result<Bytes, UploadError> {
    let mut mp = multipart.map_err(|e| {
        warn!(error = %e, "not a multipart upload");
        no_image()
    })?;

    loop {
        let field = match mp.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "malformed multipart body");
                return Err(bad_request(e.body_text()));
            }
        };
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read upload");
            bad_request(e.body_text())
        })?;
        info!(%filename, bytes = data.len(), "image received");
        return Ok(data);
    }

    Err(no_image())
}

fn no_image() -> UploadError {
    bad_request("No image uploaded".into())
}

fn bad_request(error: String) -> UploadError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}
