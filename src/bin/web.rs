//! Admin web server: JSON API over the registry and pairing engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `swiss_tournament::config` for the
//! environment variables (HOST, PORT, TOURNAMENT_DATA_DIR, INACTIVITY_TIMEOUT_SECS).

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;
use swiss_tournament::{
    config::Config, count_players, delete_matches, delete_players, get_players, player_standings,
    register_player, report_match, reset_tournament, swiss_pairings, write_pairings_csv,
    write_standings_csv, JsonFileStore, MemoryStore, PlayerId, Storage, StorageError,
    TournamentError,
};
use uuid::Uuid;

type TournamentId = Uuid;

type BoxedStore = Box<dyn Storage + Send + Sync>;

/// Per-tournament entry: its store + last activity time (for auto-cleanup).
struct TournamentEntry {
    store: BoxedStore,
    last_activity: Instant,
}

impl TournamentEntry {
    fn new(store: BoxedStore) -> Self {
        Self {
            store,
            last_activity: Instant::now(),
        }
    }
}

/// Many tournaments by id. Idle entries are dropped after the configured timeout.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct CreatedTournament {
    id: TournamentId,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Serialize)]
struct RegisteredPlayer {
    id: PlayerId,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

#[derive(Serialize)]
struct Deleted {
    deleted: usize,
}

#[derive(Serialize)]
struct Count {
    count: usize,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn open_store(config: &Config, id: TournamentId) -> BoxedStore {
    match &config.data_dir {
        Some(dir) => Box::new(JsonFileStore::new(dir.join(format!("{id}.json")))),
        None => Box::new(MemoryStore::new()),
    }
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::Storage(StorageError::Io(_) | StorageError::Json(_)) => {
            log::error!("Storage failure: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Run `op` against a tournament's store, refreshing its last activity.
///
/// With a data dir configured, a tournament evicted from memory (or left by
/// a previous run) is reattached from its file.
fn with_store<T>(
    state: &AppState,
    config: &Config,
    id: TournamentId,
    op: impl FnOnce(&mut dyn Storage) -> Result<T, TournamentError>,
) -> Result<T, HttpResponse> {
    let mut g = state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    if !g.contains_key(&id) {
        let on_disk = config
            .data_dir
            .as_ref()
            .is_some_and(|dir| dir.join(format!("{id}.json")).exists());
        if !on_disk {
            return Err(HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })));
        }
        log::info!("Reattached tournament {} from disk", id);
        g.insert(id, TournamentEntry::new(open_store(config, id)));
    }
    let entry = g
        .get_mut(&id)
        .ok_or_else(|| HttpResponse::InternalServerError().body("tournament vanished"))?;
    entry.last_activity = Instant::now();
    op(&mut *entry.store).map_err(|e| error_response(&e))
}

fn json_or_error<T: Serialize>(result: Result<T, HttpResponse>) -> HttpResponse {
    match result {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(resp) => resp,
    }
}

fn csv_or_error(result: Result<Vec<u8>, HttpResponse>) -> HttpResponse {
    match result {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(bytes),
        Err(resp) => resp,
    }
}

fn csv_failure(e: csv::Error) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Create a new, empty tournament (client stores the id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, config: Data<Config>) -> HttpResponse {
    let id = Uuid::new_v4();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(id, TournamentEntry::new(open_store(&config, id)));
    log::info!("Created tournament {}", id);
    HttpResponse::Ok().json(CreatedTournament { id })
}

/// List registered players.
#[get("/api/tournaments/{id}/players")]
async fn api_get_players(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| get_players(&*s)))
}

#[get("/api/tournaments/{id}/players/count")]
async fn api_count_players(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| {
        count_players(&*s).map(|count| Count { count })
    }))
}

/// Register a player; responds with the assigned id.
#[post("/api/tournaments/{id}/players")]
async fn api_register_player(
    state: AppState,
    config: Data<Config>,
    path: Path<TournamentPath>,
    body: Json<RegisterPlayerBody>,
) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| {
        register_player(s, &body.name).map(|id| RegisteredPlayer { id })
    }))
}

/// Delete all players (fails while matches exist).
#[delete("/api/tournaments/{id}/players")]
async fn api_delete_players(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| {
        delete_players(s).map(|deleted| Deleted { deleted })
    }))
}

/// Report a match result; responds with the updated standings.
#[post("/api/tournaments/{id}/matches")]
async fn api_report_match(
    state: AppState,
    config: Data<Config>,
    path: Path<TournamentPath>,
    body: Json<ReportMatchBody>,
) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| {
        report_match(s, body.winner, body.loser)?;
        player_standings(&*s)
    }))
}

#[delete("/api/tournaments/{id}/matches")]
async fn api_delete_matches(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| {
        delete_matches(s).map(|deleted| Deleted { deleted })
    }))
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| player_standings(&*s)))
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    let standings = match with_store(&state, &config, path.id, |s| player_standings(&*s)) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let mut out = Vec::new();
    csv_or_error(write_standings_csv(&standings, &mut out).map(|()| out).map_err(csv_failure))
}

/// Next-round pairings (400 on an odd player count).
#[get("/api/tournaments/{id}/pairings")]
async fn api_pairings(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| swiss_pairings(&*s)))
}

#[get("/api/tournaments/{id}/pairings.csv")]
async fn api_pairings_csv(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    let pairings = match with_store(&state, &config, path.id, |s| swiss_pairings(&*s)) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let mut out = Vec::new();
    csv_or_error(write_pairings_csv(&pairings, &mut out).map(|()| out).map_err(csv_failure))
}

/// Reset: delete all matches, then all players.
#[post("/api/tournaments/{id}/reset")]
async fn api_reset(state: AppState, config: Data<Config>, path: Path<TournamentPath>) -> HttpResponse {
    json_or_error(with_store(&state, &config, path.id, |s| {
        reset_tournament(s)?;
        player_standings(&*s)
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.host.clone(), config.port);
    match &config.data_dir {
        Some(dir) => log::info!("Persisting tournaments under {:?}", dir),
        None => log::info!("Tournaments are kept in memory only"),
    }
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state: AppState = Data::new(RwLock::new(HashMap::new()));
    let config = Data::new(config);

    // Background task: every 30 minutes (or sooner for short timeouts), drop idle tournaments
    let state_cleanup = state.clone();
    let timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let period = timeout.min(std::time::Duration::from_secs(30 * 60));
        let mut interval = actix_web::rt::time::interval(period.max(std::time::Duration::from_secs(1)));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_count_players)
            .service(api_get_players)
            .service(api_register_player)
            .service(api_delete_players)
            .service(api_report_match)
            .service(api_delete_matches)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_pairings_csv)
            .service(api_pairings)
            .service(api_reset)
    })
    .bind(bind)?
    .run()
    .await
}
