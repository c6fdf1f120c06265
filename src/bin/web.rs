//! Single binary web server: JSON stats API over a static dataset, avatars from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, DATA_DIR (games.json + players.json), STATIC_DIR.

use actix_files::Files;
use actix_web::{
    get,
    web::{Data, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use poker_stats_web::{
    deposit_series, global_stats, player_stats, player_summaries, session_summaries,
    session_view, top_results, Dataset, DatasetError, Player, PlayerStats, SessionId,
};
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};

/// Loaded once at startup, never mutated.
type AppState = Data<Dataset>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    sessions: usize,
    players: usize,
}

/// Player page payload: the player plus career stats.
#[derive(Serialize)]
struct PlayerPage<'a> {
    player: &'a Player,
    stats: PlayerStats,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: String,
}

#[derive(Deserialize)]
struct TopResultsQuery {
    #[serde(default = "default_top_limit")]
    limit: usize,
}

fn default_top_limit() -> usize {
    3
}

#[get("/api/health")]
async fn api_health(state: AppState) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "poker-stats-web",
        sessions: state.sessions().len(),
        players: state.players().len(),
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// All sessions in storage order, with participant count and total buy-in.
#[get("/api/sessions")]
async fn api_list_sessions(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(session_summaries(&state))
}

/// One session with per-player rows (404 if not found).
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    log::debug!("Session detail requested: {}", path.id);
    match state.session(path.id) {
        Some(session) => HttpResponse::Ok().json(session_view(&state, session)),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

/// Players page: every player with session count and totals.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(player_summaries(&state))
}

/// One player with career stats (404 if not found).
#[get("/api/players/{id}")]
async fn api_get_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    log::debug!("Player detail requested: {}", path.id);
    match state.player(&path.id) {
        Some(player) => HttpResponse::Ok().json(PlayerPage {
            player,
            stats: player_stats(&state, &player.id),
        }),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No player" })),
    }
}

/// Awards and dataset totals for the home page.
#[get("/api/stats/global")]
async fn api_global_stats(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(global_stats(&state))
}

/// Players ranked by summed result (top 3 unless `?limit=` says otherwise).
#[get("/api/stats/top-results")]
async fn api_top_results(state: AppState, query: Query<TopResultsQuery>) -> HttpResponse {
    HttpResponse::Ok().json(top_results(&state, query.limit))
}

/// Total buy-ins per financial session (deposit chart).
#[get("/api/stats/deposits")]
async fn api_deposits(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(deposit_series(&state))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

async fn read_data_file(path: &FsPath) -> Result<String, DatasetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Read `games.json` and `players.json` from `data_dir` into a snapshot.
async fn load_dataset(data_dir: &str) -> Result<Dataset, DatasetError> {
    let dir = PathBuf::from(data_dir);
    let games = read_data_file(&dir.join("games.json")).await?;
    let players = read_data_file(&dir.join("players.json")).await?;
    Dataset::from_json_strs(&games, &players)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir());

    let dataset = match load_dataset(&data_dir).await {
        Ok(d) => d,
        Err(e) => {
            log::error!("Failed to load dataset from {}: {}", data_dir, e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };
    log::info!(
        "Loaded {} session(s) and {} player(s) from {}",
        dataset.sessions().len(),
        dataset.players().len(),
        data_dir
    );

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(dataset);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_list_sessions)
            .service(api_get_session)
            .service(api_list_players)
            .service(api_get_player)
            .service(api_global_stats)
            .service(api_top_results)
            .service(api_deposits)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
