//! HTTP integration tests: the full router served on an ephemeral port and
//! driven with reqwest.

use football_api::{
    config::AppConfig,
    dao::store::IdPolicy,
    dto::{
        health::HealthResponse,
        player::{PlayerList, PlayerSummary},
        team::{TeamList, TeamSummary},
    },
    routes,
    state::AppState,
};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::net::TcpListener;

struct TestServer {
    base: String,
    client: Client,
}

impl TestServer {
    async fn start() -> Self {
        Self::start_with(AppConfig::default()).await
    }

    async fn start_with(config: AppConfig) -> Self {
        let app = routes::router(AppState::with_config(config));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn put(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    async fn create_player(&self, name: &str, position: &str) -> PlayerSummary {
        let resp = self
            .post("/players", json!({ "name": name, "position": position }))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    }
}

// ============================================================================
// Players
// ============================================================================

#[tokio::test]
async fn create_player_without_team_returns_null_team_id() {
    let server = TestServer::start().await;

    let resp = server
        .post(
            "/players",
            json!({ "name": "Lionel Messi", "position": "Forward" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Lionel Messi", "position": "Forward", "team_id": null })
    );
}

#[tokio::test]
async fn create_player_without_name_is_rejected() {
    let server = TestServer::start().await;

    let resp = server.post("/players", json!({ "position": "Forward" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Player name is required"), "{message}");

    let list: PlayerList = server.get("/players").await.json().await.unwrap();
    assert!(list.players.is_empty());
}

#[tokio::test]
async fn create_player_with_wrong_types_is_rejected() {
    let server = TestServer::start().await;

    let resp = server
        .post("/players", json!({ "name": 10, "position": "Forward" }))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = server
        .post(
            "/players",
            json!({ "name": "Lionel Messi", "position": "Forward", "team_id": "one" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_players_wraps_records_in_creation_order() {
    let server = TestServer::start().await;
    server.create_player("Lionel Messi", "Forward").await;
    server.create_player("Xavi", "Midfielder").await;
    server.create_player("Carles Puyol", "Defender").await;

    let body: Value = server.get("/players").await.json().await.unwrap();
    let ids: Vec<u64> = body["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn get_player_is_idempotent() {
    let server = TestServer::start().await;
    let created = server.create_player("Lionel Messi", "Forward").await;

    let first: PlayerSummary = server.get("/players/1").await.json().await.unwrap();
    let second: PlayerSummary = server.get("/players/1").await.json().await.unwrap();
    assert_eq!(first, created);
    assert_eq!(first, second);
}

#[tokio::test]
async fn update_player_changes_only_present_fields() {
    let server = TestServer::start().await;
    server
        .post(
            "/players",
            json!({ "name": "Lionel Messi", "position": "Forward", "team_id": 1 }),
        )
        .await;

    let resp = server
        .put("/players/1", json!({ "position": "Winger" }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: PlayerSummary = resp.json().await.unwrap();
    assert_eq!(updated.name, "Lionel Messi");
    assert_eq!(updated.position, "Winger");
    assert_eq!(updated.team_id, Some(1));

    let fetched: PlayerSummary = server.get("/players/1").await.json().await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_player_team_id_uses_explicit_presence() {
    let server = TestServer::start().await;
    server
        .post(
            "/players",
            json!({ "name": "Lionel Messi", "position": "Forward", "team_id": 3 }),
        )
        .await;

    let zero: PlayerSummary = server
        .put("/players/1", json!({ "team_id": 0 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(zero.team_id, Some(0));

    let cleared: PlayerSummary = server
        .put("/players/1", json!({ "team_id": null }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(cleared.team_id, None);
}

#[tokio::test]
async fn update_player_strings_overwrite_when_empty_and_ignore_null() {
    let server = TestServer::start().await;
    server.create_player("Lionel Messi", "Forward").await;

    let resp = server.put("/players/1", json!({ "name": "" })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let emptied: PlayerSummary = resp.json().await.unwrap();
    assert_eq!(emptied.name, "");
    assert_eq!(emptied.position, "Forward");

    let resp = server
        .put("/players/1", json!({ "name": null, "position": null }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let unchanged: PlayerSummary = resp.json().await.unwrap();
    assert_eq!(unchanged, emptied);

    let fetched: PlayerSummary = server.get("/players/1").await.json().await.unwrap();
    assert_eq!(fetched, emptied);
}

#[tokio::test]
async fn delete_player_removes_exactly_one_record() {
    let server = TestServer::start().await;
    server.create_player("Lionel Messi", "Forward").await;
    server.create_player("Xavi", "Midfielder").await;

    let resp = server.delete("/players/1").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.bytes().await.unwrap().is_empty());

    assert_eq!(server.get("/players/1").await.status(), StatusCode::NOT_FOUND);
    let list: PlayerList = server.get("/players").await.json().await.unwrap();
    assert_eq!(list.players.len(), 1);
    assert_eq!(list.players[0].name, "Xavi");
}

#[tokio::test]
async fn unknown_player_yields_not_found() {
    let server = TestServer::start().await;

    let resp = server.delete("/players/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("player `999` not found"));

    assert_eq!(server.get("/players/999").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        server
            .put("/players/999", json!({ "name": "Nobody" }))
            .await
            .status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn non_integer_player_id_is_rejected() {
    let server = TestServer::start().await;
    assert_eq!(
        server.get("/players/abc").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn ids_are_reused_after_delete_by_default() {
    let server = TestServer::start().await;
    server.create_player("Lionel Messi", "Forward").await;
    server.create_player("Xavi", "Midfielder").await;
    server.delete("/players/1").await;

    let third = server.create_player("Andrés Iniesta", "Midfielder").await;
    assert_eq!(third.id, 2);

    // Both records now carry id 2; item lookups hit the older one.
    let list: PlayerList = server.get("/players").await.json().await.unwrap();
    let ids: Vec<u64> = list.players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 2]);
    let fetched: PlayerSummary = server.get("/players/2").await.json().await.unwrap();
    assert_eq!(fetched.name, "Xavi");
}

#[tokio::test]
async fn monotonic_ids_are_never_reused() {
    let server = TestServer::start_with(AppConfig::with_id_policy(IdPolicy::Monotonic)).await;
    server.create_player("Lionel Messi", "Forward").await;
    server.create_player("Xavi", "Midfielder").await;
    server.delete("/players/1").await;

    let third = server.create_player("Andrés Iniesta", "Midfielder").await;
    assert_eq!(third.id, 3);
}

// ============================================================================
// Teams
// ============================================================================

#[tokio::test]
async fn created_team_can_be_fetched() {
    let server = TestServer::start().await;

    let resp = server
        .post("/teams", json!({ "name": "FC Barcelona", "city": "Barcelona" }))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TeamSummary = resp.json().await.unwrap();
    assert_eq!(created.id, 1);

    let resp = server.get("/teams/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: TeamSummary = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_team_without_city_is_rejected() {
    let server = TestServer::start().await;
    let resp = server.post("/teams", json!({ "name": "FC Barcelona" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Team city is required"));
}

#[tokio::test]
async fn team_lifecycle() {
    let server = TestServer::start().await;
    server
        .post("/teams", json!({ "name": "FC Barcelona", "city": "Barcelona" }))
        .await;
    server
        .post("/teams", json!({ "name": "Real Madrid", "city": "Madrid" }))
        .await;

    let updated: TeamSummary = server
        .put("/teams/2", json!({ "city": "Madrid (Chamartín)" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated.name, "Real Madrid");
    assert_eq!(updated.city, "Madrid (Chamartín)");

    assert_eq!(server.delete("/teams/1").await.status(), StatusCode::NO_CONTENT);
    assert_eq!(server.delete("/teams/1").await.status(), StatusCode::NOT_FOUND);

    let list: TeamList = server.get("/teams").await.json().await.unwrap();
    assert_eq!(list.teams, vec![updated]);
}

#[tokio::test]
async fn update_team_strings_overwrite_when_empty_and_ignore_null() {
    let server = TestServer::start().await;
    server
        .post("/teams", json!({ "name": "FC Barcelona", "city": "Barcelona" }))
        .await;

    let resp = server.put("/teams/1", json!({ "city": null })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let unchanged: TeamSummary = resp.json().await.unwrap();
    assert_eq!(unchanged.name, "FC Barcelona");
    assert_eq!(unchanged.city, "Barcelona");

    let emptied: TeamSummary = server
        .put("/teams/1", json!({ "name": "" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(emptied.name, "");
    assert_eq!(emptied.city, "Barcelona");

    let fetched: TeamSummary = server.get("/teams/1").await.json().await.unwrap();
    assert_eq!(fetched, emptied);
}

#[tokio::test]
async fn player_team_reference_is_not_checked() {
    let server = TestServer::start().await;
    let resp = server
        .post(
            "/players",
            json!({ "name": "Lionel Messi", "position": "Forward", "team_id": 42 }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let list: TeamList = server.get("/teams").await.json().await.unwrap();
    assert!(list.teams.is_empty());
}

// ============================================================================
// Ambient routes
// ============================================================================

#[tokio::test]
async fn healthcheck_reports_collection_sizes() {
    let server = TestServer::start().await;
    server.create_player("Lionel Messi", "Forward").await;

    let health: HealthResponse = server.get("/healthcheck").await.json().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.players, 1);
    assert_eq!(health.teams, 0);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = TestServer::start().await;
    let resp = server.get("/api-doc/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: Value = resp.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "Football API");
    assert!(doc["paths"].get("/players/{player_id}").is_some());
}
