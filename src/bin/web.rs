//! Single binary web server: ranking page from templates/, API via REST.
//! Run with: cargo run --bin web
//! Configuration comes from the environment (see `padel_ranking::config`).
//! All requests go through one lock, so tournament submissions are applied one at a time.

use actix_web::{
    get, post, put,
    http::header,
    web::{self, Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use padel_ranking::{
    apply_tournament, draw_fixtures, load_table, read_table, save_table, write_table, Config,
    PlayerStats, ScoringRules, StatsTable, StorageError, TournamentResult,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

/// The statistics table plus where it lives on disk.
struct RankingState {
    table: StatsTable,
    data_file: PathBuf,
    rules: ScoringRules,
}

impl RankingState {
    /// Persist `table` and make it current. On a write error the current table is kept.
    fn commit(&mut self, table: StatsTable) -> Result<(), StorageError> {
        save_table(&table, &self.data_file)?;
        self.table = table;
        Ok(())
    }
}

type AppState = Data<RwLock<RankingState>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// One row of the ranking snapshot.
#[derive(Serialize)]
struct RankingRow<'a> {
    position: usize,
    player: &'a str,
    #[serde(flatten)]
    stats: &'a PlayerStats,
    points_per_tournament: f64,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
}

/// Path segment: player name (e.g. /api/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

fn rankings(table: &StatsTable) -> Vec<RankingRow<'_>> {
    table
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(i, p)| RankingRow {
            position: i + 1,
            player: &p.name,
            stats: &p.stats,
            points_per_tournament: p.stats.points_per_tournament(),
        })
        .collect()
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn storage_failure(e: StorageError) -> HttpResponse {
    log::error!("Could not save the statistics table: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-ranking",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current ranking, highest points first.
#[get("/api/rankings")]
async fn api_rankings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(rankings(&g.table))
}

/// Add a player with zeroed stats.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut table = g.table.clone();
    if let Err(e) = table.register_player(&body.name) {
        return bad_request(e);
    }
    if let Err(e) = g.commit(table) {
        return storage_failure(e);
    }
    log::info!("Added player {}", body.name.trim());
    HttpResponse::Ok().json(rankings(&g.table))
}

/// Rename a player; their stats move with the new name.
#[put("/api/players/{name}")]
async fn api_rename_player(state: AppState, path: Path<PlayerPath>, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut table = g.table.clone();
    if let Err(e) = table.rename_player(&path.name, &body.name) {
        return bad_request(e);
    }
    if let Err(e) = g.commit(table) {
        return storage_failure(e);
    }
    log::info!("Renamed player {} to {}", path.name, body.name.trim());
    HttpResponse::Ok().json(rankings(&g.table))
}

/// Draw four players from the roster and schedule their round robin.
#[get("/api/fixtures")]
async fn api_fixtures(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match draw_fixtures(&g.table, &mut rand::thread_rng()) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => bad_request(e),
    }
}

/// Score a finished tournament and save the updated table. Rejected submissions change nothing.
#[post("/api/tournaments")]
async fn api_submit_tournament(state: AppState, body: Json<TournamentResult>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let (table, report) = match apply_tournament(&g.table, &body, &g.rules) {
        Ok(applied) => applied,
        Err(e) => {
            log::warn!("Rejected tournament: {}", e);
            return bad_request(e);
        }
    };
    if let Err(e) = g.commit(table) {
        return storage_failure(e);
    }
    HttpResponse::Ok().json(serde_json::json!({
        "report": report,
        "rankings": rankings(&g.table),
    }))
}

/// Download the table as CSV.
#[get("/api/export")]
async fn api_export(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut csv = Vec::new();
    if let Err(e) = write_table(&g.table, &mut csv) {
        return storage_failure(e);
    }
    let filename = format!(
        "tournament_data_export_{}.csv",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(csv)
}

/// Replace the whole table with an uploaded CSV file.
#[post("/api/import")]
async fn api_import(state: AppState, body: Bytes) -> HttpResponse {
    let table = match read_table(&body[..]) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Rejected import: {}", e);
            return bad_request(e);
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if let Err(e) = g.commit(table) {
        return storage_failure(e);
    }
    log::info!("Imported {} player(s)", g.table.len());
    HttpResponse::Ok().json(rankings(&g.table))
}

/// Zero every player's stats, keeping the roster.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut table = g.table.clone();
    table.reset_all();
    if let Err(e) = g.commit(table) {
        return storage_failure(e);
    }
    log::info!("Reset all statistics");
    HttpResponse::Ok().json(rankings(&g.table))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let table = load_table(&config.data_file)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    log::info!(
        "Scoring rules: equal scores {:?}, roster {:?}, max score {:?}",
        config.rules.equal_scores,
        config.rules.roster,
        config.rules.max_score
    );

    let state = Data::new(RwLock::new(RankingState {
        table,
        data_file: config.data_file.clone(),
        rules: config.rules,
    }));

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_rankings)
            .service(api_add_player)
            .service(api_rename_player)
            .service(api_fixtures)
            .service(api_submit_tournament)
            .service(api_export)
            .service(api_import)
            .service(api_reset)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
