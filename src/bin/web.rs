//! Single binary web server: in-memory teams and tournaments behind a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).
//!
//! Nothing is persisted; all state lives in this process and is lost on restart.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use league_cup_web::{
    add_match, build_knockout_stage, clear_result, create_tournament, record_result, remove_match,
    team_display_name, tournament_standings, Match, MatchId, ScheduleMode, StandingsRow, Team,
    TeamId, Tournament, TournamentError, TournamentFormat, TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Everything the server knows: the team registry and all tournaments.
/// The write lock serializes every change to a tournament.
#[derive(Default)]
struct Store {
    teams: Vec<Team>,
    tournaments: HashMap<TournamentId, Tournament>,
}

type AppState = Data<RwLock<Store>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTeamBody {
    name: String,
    #[serde(default)]
    short_name: Option<String>,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    format: TournamentFormat,
    team_ids: Vec<TeamId>,
    #[serde(default)]
    schedule: ScheduleMode,
}

#[derive(Deserialize)]
struct AddMatchBody {
    #[serde(default)]
    round: Option<u32>,
    home: TeamId,
    away: TeamId,
}

#[derive(Deserialize)]
struct ScoreBody {
    home_goals: u32,
    away_goals: u32,
}

/// Path segment: team id (e.g. /api/teams/{id})
#[derive(Deserialize)]
struct TeamPath {
    id: TeamId,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id})
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

/// Match with team names resolved for display.
#[derive(Serialize)]
struct MatchView<'a> {
    #[serde(flatten)]
    game: &'a Match,
    home_name: &'a str,
    away_name: &'a str,
}

#[derive(Serialize)]
struct StandingsLine<'a> {
    position: usize,
    team_name: &'a str,
    goal_difference: i64,
    #[serde(flatten)]
    row: &'a StandingsRow,
}

#[derive(Serialize)]
struct StandingsTable<'a> {
    /// Group label; absent for a league table.
    group: Option<&'a str>,
    rows: Vec<StandingsLine<'a>>,
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Apply `action` to a tournament under the write lock and answer with the updated tournament.
fn update_tournament<F>(state: &AppState, id: TournamentId, action: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.tournaments.get_mut(&id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    match action(&mut *t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-cup-web",
    })
}

#[get("/api/teams")]
async fn api_list_teams(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(&g.teams),
        Err(_) => lock_error(),
    }
}

#[post("/api/teams")]
async fn api_create_team(state: AppState, body: Json<CreateTeamBody>) -> HttpResponse {
    let body = body.into_inner();
    if body.name.trim().is_empty() {
        return bad_request("Team name must not be empty");
    }
    let team = Team::new(body.name, body.short_name);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    log::info!("Added team {} ({})", team.name, team.id);
    let response = HttpResponse::Ok().json(&team);
    g.teams.push(team);
    response
}

/// Delete a team. Tournaments keep its id; it is shown as deleted from then on.
#[delete("/api/teams/{id}")]
async fn api_delete_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let before = g.teams.len();
    g.teams.retain(|t| t.id != path.id);
    if g.teams.len() == before {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No team" }));
    }
    HttpResponse::Ok().json(&g.teams)
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.tournaments.values().collect::<Vec<_>>()),
        Err(_) => lock_error(),
    }
}

/// Create a league or cup. All selected teams must exist.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Some(unknown) = body
        .team_ids
        .iter()
        .find(|id| !g.teams.iter().any(|t| t.id == **id))
    {
        return bad_request(format!("Unknown team {}", unknown));
    }
    match create_tournament(&body.name, body.format, body.team_ids, body.schedule) {
        Ok(t) => {
            let response = HttpResponse::Ok().json(&t);
            g.tournaments.insert(t.id, t);
            response
        }
        Err(e) => bad_request(e),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.tournaments.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => no_tournament(),
    }
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.tournaments.remove(&path.id) {
        Some(t) => {
            log::info!("Deleted tournament {} ({})", t.name, t.id);
            HttpResponse::NoContent().finish()
        }
        None => no_tournament(),
    }
}

/// Matches ordered by round, with team names (or the deleted placeholder).
#[get("/api/tournaments/{id}/matches")]
async fn api_list_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.tournaments.get(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    let views: Vec<MatchView<'_>> = t
        .matches_by_round()
        .into_iter()
        .map(|m| MatchView {
            game: m,
            home_name: team_display_name(&g.teams, m.home),
            away_name: team_display_name(&g.teams, m.away),
        })
        .collect();
    HttpResponse::Ok().json(views)
}

#[post("/api/tournaments/{id}/matches")]
async fn api_add_match(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddMatchBody>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        add_match(t, body.round, body.home, body.away).map(|_| ())
    })
}

#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_record_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        record_result(t, path.match_id, body.home_goals, body.away_goals)
    })
}

#[delete("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_clear_score(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    update_tournament(&state, path.id, |t| clear_result(t, path.match_id))
}

#[delete("/api/tournaments/{id}/matches/{match_id}")]
async fn api_remove_match(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    update_tournament(&state, path.id, |t| remove_match(t, path.match_id))
}

/// Standings: one table for a league, one per group for a cup.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.tournaments.get(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    let tables = tournament_standings(t);
    let body: Vec<StandingsTable<'_>> = tables
        .iter()
        .map(|(group, rows)| StandingsTable {
            group: group.as_deref(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, row)| StandingsLine {
                    position: i + 1,
                    team_name: team_display_name(&g.teams, row.team_id),
                    goal_difference: row.goal_difference(),
                    row,
                })
                .collect(),
        })
        .collect();
    HttpResponse::Ok().json(body)
}

/// Regenerate the knockout stage from the current group tables.
/// Existing knockout matches are replaced; they are kept if the cup is not eligible.
#[post("/api/tournaments/{id}/knockout")]
async fn api_build_knockout(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    update_tournament(&state, path.id, build_knockout_stage)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Store::default()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_teams)
            .service(api_create_team)
            .service(api_delete_team)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_list_matches)
            .service(api_add_match)
            .service(api_record_score)
            .service(api_clear_score)
            .service(api_remove_match)
            .service(api_standings)
            .service(api_build_knockout)
    })
    .bind(bind)?
    .run()
    .await
}
