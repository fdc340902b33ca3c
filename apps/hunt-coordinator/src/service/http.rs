//! `GameService` over the service's HTTP/JSON API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::domain::state::{AllianceName, GameOverStatus, GameSession, PlayerId, RoundOutcome, Weapon};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::service::dto::{
    ErrorBody, GameOverDto, MoveRequest, RedistributeRequest, ResolveRoundDto, StartGameRequest,
    StatusDto, WeaponDto,
};
use crate::service::GameService;

pub struct HttpGameService {
    client: Client,
    base: Url,
}

impl HttpGameService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, route: &str) -> Result<Url, AppError> {
        self.base
            .join(route)
            .map_err(|e| AppError::internal(format!("bad route {route}: {e}")))
    }

    async fn send(&self, route: &str, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await.map_err(|e| {
            warn!(route, error = %e, "Game service request failed");
            AppError::from(e)
        })?;
        let status = response.status();
        debug!(route, status = status.as_u16(), "Game service responded");
        if status.is_success() {
            return Ok(response);
        }
        let detail = error_detail(response).await;
        Err(map_status(route, status, detail))
    }

    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T, AppError> {
        let request = self.client.get(self.url(route)?);
        Ok(self.send(route, request).await?.json::<T>().await?)
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        route: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let request = self.client.post(self.url(route)?).json(body);
        self.send(route, request).await?;
        Ok(())
    }
}

async fn error_detail(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.detail)
            .unwrap_or(text),
        Err(_) => status.to_string(),
    }
}

/// A missing session shows up as 400 or 404 on `status`; elsewhere the plain mapping applies.
fn map_status(route: &str, status: StatusCode, detail: String) -> AppError {
    if route == "status" && matches!(status.as_u16(), 400 | 404) {
        return AppError::not_found(ErrorCode::SessionNotFound, detail);
    }
    AppError::from_service_status(status.as_u16(), detail)
}

#[async_trait]
impl GameService for HttpGameService {
    async fn create_session(
        &self,
        player_names: &[PlayerId],
        alliances: &[Vec<PlayerId>],
    ) -> Result<(), AppError> {
        self.post_json(
            "start_game",
            &StartGameRequest {
                player_names,
                alliances,
            },
        )
        .await
    }

    async fn get_status(&self) -> Result<GameSession, AppError> {
        let dto: StatusDto = self.get_json("status").await?;
        GameSession::try_from(dto)
    }

    async fn redistribute(&self, alliance: &AllianceName, new_vps: &[i64]) -> Result<(), AppError> {
        self.post_json(
            "redistribute",
            &RedistributeRequest {
                alliance_name: alliance,
                new_vps,
            },
        )
        .await
    }

    async fn start_round(&self) -> Result<GameSession, AppError> {
        let request = self.client.get(self.url("start_round")?);
        self.send("start_round", request).await?;
        self.get_status().await
    }

    async fn submit_move(
        &self,
        player: &PlayerId,
        position: u32,
        weapon: &str,
    ) -> Result<(), AppError> {
        self.post_json(
            "submit_move",
            &MoveRequest {
                player_name: player,
                position,
                weapon_name: weapon,
            },
        )
        .await
    }

    async fn resolve_round(&self) -> Result<RoundOutcome, AppError> {
        let dto: ResolveRoundDto = self.get_json("resolve_round").await?;
        RoundOutcome::try_from(dto)
    }

    async fn game_over(&self) -> Result<GameOverStatus, AppError> {
        let dto: GameOverDto = self.get_json("game_over").await?;
        Ok(dto.into())
    }

    async fn player_weapons(&self, player: &PlayerId) -> Result<Vec<Weapon>, AppError> {
        let mut url = self.url("player_weapons/")?;
        url.path_segments_mut()
            .map_err(|_| AppError::internal("game service URL cannot hold a path"))?
            .pop_if_empty()
            .push(player);
        let request = self.client.get(url);
        let dtos: Vec<WeaponDto> = self
            .send("player_weapons", request)
            .await?
            .json()
            .await?;
        Ok(dtos.into_iter().map(Weapon::from).collect())
    }

    async fn reset_session(&self) -> Result<(), AppError> {
        let request = self.client.post(self.url("reset_game")?);
        self.send("reset_game", request).await?;
        Ok(())
    }
}
