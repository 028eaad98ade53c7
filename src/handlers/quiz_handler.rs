use std::num::NonZeroUsize;

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::quiz::SESSION_HEADER,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuizRequest, SubmitAttemptRequest},
        response::{GenerateQuizResponse, SubjectsResponse},
    },
    services::QuizAttemptService,
};

fn session_id(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Generates a quiz. Dropping this future (client disconnect) cancels the
/// pipeline and releases the session's in-flight slot.
#[post("/api/quizzes")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let mut request = request.into_inner();
    request.subject = request.subject.trim().to_string();
    request.validate()?;

    let count = NonZeroUsize::new(request.number_of_questions).ok_or_else(|| {
        AppError::ValidationError("numberOfQuestions must be positive".to_string())
    })?;

    let _guard = match session_id(&req) {
        Some(session) => Some(state.in_flight.acquire(&session)?),
        None => None,
    };

    log::info!(
        "Quiz requested for '{}' [{}]",
        request.subject,
        get_request_id(&req).unwrap_or_default()
    );

    let quiz = state
        .quiz_orchestrator
        .generate_quiz(&request.subject, request.difficulty, count)
        .await;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse::from(quiz)))
}

#[post("/api/quizzes/attempts")]
pub async fn submit_attempt(
    request: web::Json<SubmitAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let attempt = QuizAttemptService::grade_attempt(&request.quiz, &request.answers)?;
    Ok(HttpResponse::Created().json(attempt))
}

#[get("/api/subjects")]
pub async fn list_subjects(state: web::Data<AppState>) -> HttpResponse {
    let subjects = state.quiz_orchestrator.bank().subjects();
    HttpResponse::Ok().json(SubjectsResponse::new(subjects))
}
