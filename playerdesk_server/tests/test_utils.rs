#[cfg(test)]
pub mod tests {
    use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Redirect, Response},
        routing::{delete, get, post},
    };
    use reqwest::Client;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    use playerdesk_app::{app_bus::AppBus, config::Config};
    use playerdesk_remote::HttpPlayerRepository;
    use playerdesk_web::{AppState, WebRouter};

    pub struct FakeRemoteState {
        pub players: Vec<Value>,
        pub malformed_listing: bool,
        pub update_status: u16,
        pub destroy_status: u16,
        /// When set, mutations are redirected to this unreachable address.
        pub dead_end: Option<String>,
        pub updates: Vec<(String, Value)>,
        pub deletions: Vec<String>,
    }

    /// Stand-in for the remote players API, recording every mutation it receives.
    #[derive(Clone)]
    pub struct FakeRemote {
        state: Arc<Mutex<FakeRemoteState>>,
    }

    impl FakeRemote {
        pub fn set_update_status(&self, status: u16) {
            self.state.lock().unwrap().update_status = status;
        }

        pub fn set_destroy_status(&self, status: u16) {
            self.state.lock().unwrap().destroy_status = status;
        }

        /// Makes update and destroy calls fail at the transport level: the fake
        /// answers with a 307 towards a closed port, which the client follows.
        pub async fn drop_mutations(&self) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            self.state.lock().unwrap().dead_end = Some(format!("http://{addr}"));
        }

        pub fn break_listing(&self) {
            self.state.lock().unwrap().malformed_listing = true;
        }

        pub fn updates(&self) -> Vec<(String, Value)> {
            self.state.lock().unwrap().updates.clone()
        }

        pub fn deletions(&self) -> Vec<String> {
            self.state.lock().unwrap().deletions.clone()
        }
    }

    async fn list_players(State(remote): State<FakeRemote>) -> Response {
        let state = remote.state.lock().unwrap();
        if state.malformed_listing {
            return (StatusCode::OK, "<html>maintenance</html>").into_response();
        }
        Json(json!({ "data": state.players })).into_response()
    }

    async fn update_player(
        State(remote): State<FakeRemote>,
        Path(id): Path<String>,
        Json(body): Json<Value>,
    ) -> Response {
        let mut state = remote.state.lock().unwrap();
        if let Some(dead_end) = &state.dead_end {
            return Redirect::temporary(&format!("{dead_end}/api/players/update/{id}"))
                .into_response();
        }
        state.updates.push((id, body));
        StatusCode::from_u16(state.update_status)
            .unwrap()
            .into_response()
    }

    async fn destroy_player(State(remote): State<FakeRemote>, Path(id): Path<String>) -> Response {
        let mut state = remote.state.lock().unwrap();
        if let Some(dead_end) = &state.dead_end {
            return Redirect::temporary(&format!("{dead_end}/api/players/destroy/{id}"))
                .into_response();
        }
        state.deletions.push(id);
        StatusCode::from_u16(state.destroy_status)
            .unwrap()
            .into_response()
    }

    async fn spawn(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Starts the fake remote API and returns it with its base URL.
    pub async fn setup_remote(players: Vec<Value>) -> (FakeRemote, String) {
        let remote = FakeRemote {
            state: Arc::new(Mutex::new(FakeRemoteState {
                players,
                malformed_listing: false,
                update_status: 200,
                destroy_status: 200,
                dead_end: None,
                updates: Vec::new(),
                deletions: Vec::new(),
            })),
        };

        let router = Router::new()
            .route("/api/players", get(list_players))
            .route("/api/players/update/{id}", post(update_player))
            .route("/api/players/destroy/{id}", delete(destroy_player))
            .with_state(remote.clone());

        let base_url = spawn(router).await;
        (remote, base_url)
    }

    /// Starts the web app in front of `api_base_url` and returns its base URL.
    pub async fn setup_web_app(api_base_url: &str) -> String {
        let config = Arc::new(Config {
            api_base_url: api_base_url.to_string(),
            port: 0,
            cookie_secret: "playerdesk-integration-tests-cookie-secret-".repeat(2),
            locale: "en".to_string(),
        });
        let players = Arc::new(HttpPlayerRepository::new(&config.api_base_url).unwrap());
        let app_bus = Arc::new(AppBus::new(config.clone(), players));
        let state = AppState::new(app_bus, &config).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            WebRouter::serve_with_listener(state, listener)
                .await
                .unwrap();
        });
        format!("http://{addr}")
    }

    /// Remote API with the given players and the web app in front of it.
    pub async fn setup(players: Vec<Value>) -> (FakeRemote, String) {
        let (remote, api_url) = setup_remote(players).await;
        let web_url = setup_web_app(&api_url).await;
        (remote, web_url)
    }

    /// Browser-like client: keeps cookies, does not follow redirects.
    pub fn setup_http_client() -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap()
    }

    /// Loads a page and extracts the CSRF token from its hidden field.
    pub async fn fetch_csrf_token(client: &Client, url: &str) -> String {
        let body = client.get(url).send().await.unwrap().text().await.unwrap();
        let marker = "name=\"csrf_token\" value=\"";
        let start = body
            .find(marker)
            .unwrap_or_else(|| panic!("no csrf field in {url}"))
            + marker.len();
        let end = body[start..].find('"').unwrap() + start;
        body[start..end].to_string()
    }

    pub fn players_fixture() -> Vec<Value> {
        vec![
            json!({"id": 3, "name": "Zidane", "active": 1, "goals": 31}),
            json!({"id": 1, "name": "Platini", "active": 0, "goals": 41}),
            json!({"id": 2, "name": "Henry", "active": 1, "goals": 51}),
        ]
    }
}
