//! Single binary web server: tournament API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, TIEBREAK_MAX_ROUNDS.

use actix_web::{
    error::InternalError,
    get, post,
    web::{Data, Json, JsonConfig, Path, PathConfig, ServiceConfig},
    App, HttpResponse, HttpServer, Responder,
};
use round_robin_tournament::{
    ErrorKind, MatchId, ServerConfig, TournamentError, TournamentId, TournamentStore,
};
use serde::Deserialize;

type AppState = Data<TournamentStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct CreatedResponse {
    tournament_id: TournamentId,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    participants_count: usize,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct AddPlayersBody {
    nicknames: Vec<String>,
}

/// Scores are unsigned, so negative values are rejected by the JSON extractor.
#[derive(Deserialize)]
struct FinishMatchBody {
    score_player1: u32,
    score_player2: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: match id (e.g. /api/matches/{match_id})
#[derive(Deserialize)]
struct MatchPath {
    match_id: MatchId,
}

/// Structured failure response; status depends on the error kind.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e.kind() {
        ErrorKind::Validation => HttpResponse::BadRequest().json(body),
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::AlreadyComplete => HttpResponse::Conflict().json(body),
        ErrorKind::Internal => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Malformed bodies and path segments get the same `{"error": ..}` shape as the other errors.
fn extractor_error<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

fn respond<T: serde::Serialize>(result: Result<T, TournamentError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "round-robin-tournament",
    })
}

/// Create an empty tournament for 3..=8 participants.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    respond(
        state
            .create_tournament(body.participants_count, body.name.as_deref())
            .map(|tournament_id| CreatedResponse { tournament_id }),
    )
}

/// Register all players at once; schedules the round-robin.
#[post("/api/tournaments/{id}/players")]
async fn api_add_players(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayersBody>) -> HttpResponse {
    respond(state.register_players(path.id, &body.nicknames))
}

/// Tournament view: status, standings, matches, winner(s).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.view(path.id))
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.standings_csv(path.id) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(&e),
    }
}

/// Pairing for a match that has not been played yet.
#[post("/api/matches/{match_id}/start")]
async fn api_start_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    respond(state.start_match(path.match_id))
}

/// Submit the final score (once per match).
#[post("/api/matches/{match_id}/finish")]
async fn api_finish_match(state: AppState, path: Path<MatchPath>, body: Json<FinishMatchBody>) -> HttpResponse {
    respond(state.submit_match_result(path.match_id, body.score_player1, body.score_player2))
}

#[get("/api/matches/{match_id}")]
async fn api_match_details(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    respond(state.match_details(path.match_id))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.as_str(), config.port);
    log::info!(
        "Starting server at http://{}:{} (tie-break rounds: {})",
        bind.0,
        bind.1,
        config.resolver.max_tiebreak_rounds
    );

    let state = Data::new(TournamentStore::new(config.resolver));

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(bind)?
        .run()
        .await
}

/// Routes and extractor settings; the store is registered by the caller.
fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(|err, _req| extractor_error(err)))
        .app_data(PathConfig::default().error_handler(|err, _req| extractor_error(err)))
        .service(api_health)
        .service(api_create_tournament)
        .service(api_add_players)
        .service(api_standings_csv)
        .service(api_get_tournament)
        .service(api_start_match)
        .service(api_finish_match)
        .service(api_match_details);
}
