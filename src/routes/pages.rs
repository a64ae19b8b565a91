use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;

use crate::error::{generic_message, PredictError};
use crate::models::{species_label, PageContext, PredictForm, PredictionRecord};
use crate::routes::render::render_page;
use crate::services::{ModelStore, PredictionHistory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelStore>,
    pub history: Arc<PredictionHistory>,
}

impl AppState {
    pub fn new(model: ModelStore, history: PredictionHistory) -> Self {
        Self {
            model: Arc::new(model),
            history: Arc::new(history),
        }
    }
}

/// Configure the page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/predict", web::post().to(predict));
}

fn html(status: StatusCode, ctx: &PageContext) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render_page(ctx))
}

/// Index page
///
/// GET /
async fn index(state: web::Data<AppState>) -> impl Responder {
    html(StatusCode::OK, &PageContext::with_history(state.history.snapshot()))
}

/// Predict a species from the submitted form
///
/// POST /predict
///
/// Form fields: `bill_length`, `bill_depth`, `flipper_length`, `body_mass`,
/// `island`, `sex`, `year`. Repeated keys keep their first value.
async fn predict(state: web::Data<AppState>, form: web::Form<Vec<(String, String)>>) -> impl Responder {
    let form = PredictForm::from_pairs(form.into_inner());
    // Every outcome is a rendered page with 200, errors included
    let ctx = match run_prediction(&state, form) {
        Ok(record) => {
            tracing::info!("Predicted species: {}", record.species);
            let text = record.text.clone();
            let history = state.history.record(record);
            PageContext::prediction(text, history)
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::info!("Rejected prediction input: {}", e);
            } else {
                tracing::error!("Prediction failed: {}", e);
            }
            PageContext::error(e.user_message(), state.history.snapshot())
        }
    };
    html(StatusCode::OK, &ctx)
}

fn run_prediction(state: &AppState, form: PredictForm) -> Result<PredictionRecord, PredictError> {
    let measurements = form.into_measurements()?;
    let code = state.model.predict(&measurements)?;
    Ok(PredictionRecord::new(species_label(code)))
}

/// Page-rendering error for bodies that cannot be decoded as a form
#[derive(Debug)]
pub struct FormError {
    message: String,
    history: Vec<PredictionRecord>,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FormError {}

impl error::ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        html(self.status_code(), &PageContext::error(self.message.clone(), self.history.clone()))
    }
}

/// Handle form payload errors
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    let history = req
        .app_data::<web::Data<AppState>>()
        .map(|state| state.history.snapshot())
        .unwrap_or_default();
    FormError {
        message: generic_message(&err),
        history,
    }
    .into()
}
