//! Wire shapes of the game service's JSON API and their domain conversions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::state::{
    Alliance, GameOverStatus, GameSession, KillEvent, Loot, Monster, RoundOutcome, Weapon,
};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Serialize)]
pub struct StartGameRequest<'a> {
    pub player_names: &'a [String],
    pub alliances: &'a [Vec<String>],
}

#[derive(Debug, Serialize)]
pub struct RedistributeRequest<'a> {
    pub alliance_name: &'a str,
    pub new_vps: &'a [i64],
}

#[derive(Debug, Serialize)]
pub struct MoveRequest<'a> {
    pub player_name: &'a str,
    pub position: u32,
    pub weapon_name: &'a str,
}

/// Error body the service sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonsterDto {
    pub position: u32,
    pub name: String,
    pub health: i64,
    /// Absent for reserve monsters, which are always at full health.
    #[serde(default)]
    pub max_health: Option<i64>,
    #[serde(default)]
    pub loot: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllianceDto {
    pub name: String,
    pub members: Vec<String>,
    pub vp_distribution: Vec<i64>,
}

/// A kill as reported by the service.
///
/// Older service builds report pre-rendered lines instead of structured events.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KillEventDto {
    Structured {
        #[serde(default)]
        player: Option<String>,
        slug: String,
    },
    Line(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusDto {
    #[serde(default)]
    pub battlefield: Vec<MonsterDto>,
    #[serde(default)]
    pub reserve: Vec<MonsterDto>,
    #[serde(default)]
    pub turn_order: Vec<String>,
    pub round_started: bool,
    pub alliances: Vec<AllianceDto>,
    #[serde(default)]
    pub submitted_moves: Vec<String>,
    #[serde(default)]
    pub kill_history: Vec<KillEventDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRoundDto {
    #[serde(default)]
    pub kill_announcements: Vec<KillEventDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameOverDto {
    pub over: bool,
    #[serde(default)]
    pub winning_alliance: Option<String>,
    #[serde(default)]
    pub avg_vp: Option<f64>,
}

/// `[name, attack]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponDto(pub String, pub i64);

fn decode_error(detail: impl Into<String>) -> AppError {
    AppError::Internal {
        code: ErrorCode::DecodeError,
        detail: detail.into(),
    }
}

fn parse_loot(raw: &str) -> Option<Loot> {
    match raw {
        "Poison" => Some(Loot::Poison),
        "Ice" => Some(Loot::Ice),
        "Dual Sword" | "DualSword" => Some(Loot::DualSword),
        "Grenade" => Some(Loot::Grenade),
        "Dynamite" => Some(Loot::Dynamite),
        _ => None,
    }
}

impl TryFrom<MonsterDto> for Monster {
    type Error = AppError;

    fn try_from(dto: MonsterDto) -> Result<Self, Self::Error> {
        let health = u32::try_from(dto.health.max(0))
            .map_err(|_| decode_error(format!("health out of range for {}", dto.name)))?;
        let max_health = match dto.max_health {
            Some(max) => u32::try_from(max.max(0))
                .map_err(|_| decode_error(format!("max_health out of range for {}", dto.name)))?,
            None => health,
        };
        let loot = match dto.loot.as_deref() {
            None => None,
            Some(raw) => Some(
                parse_loot(raw).ok_or_else(|| decode_error(format!("unknown loot {raw:?}")))?,
            ),
        };
        Ok(Monster {
            position: dto.position,
            name: dto.name,
            health,
            max_health: max_health.max(health),
            loot,
        })
    }
}

impl From<AllianceDto> for Alliance {
    fn from(dto: AllianceDto) -> Self {
        Alliance {
            name: dto.name,
            members: dto.members,
            vp_distribution: dto.vp_distribution,
        }
    }
}

impl TryFrom<KillEventDto> for KillEvent {
    type Error = AppError;

    fn try_from(dto: KillEventDto) -> Result<Self, Self::Error> {
        match dto {
            KillEventDto::Structured { player, slug } => Ok(KillEvent {
                killer: player,
                monster_slug: slug,
            }),
            KillEventDto::Line(line) => {
                if let Some(slug) = line.strip_suffix(" died from poison") {
                    Ok(KillEvent::poison(slug))
                } else if let Some((killer, slug)) = line.split_once(" killed ") {
                    Ok(KillEvent::by(killer, slug))
                } else {
                    Err(decode_error(format!("unrecognised kill line {line:?}")))
                }
            }
        }
    }
}

fn kill_events(dtos: Vec<KillEventDto>) -> Result<Vec<KillEvent>, AppError> {
    dtos.into_iter().map(KillEvent::try_from).collect()
}

fn monsters(dtos: Vec<MonsterDto>) -> Result<Vec<Monster>, AppError> {
    dtos.into_iter().map(Monster::try_from).collect()
}

impl TryFrom<StatusDto> for GameSession {
    type Error = AppError;

    fn try_from(dto: StatusDto) -> Result<Self, Self::Error> {
        for a in &dto.alliances {
            if a.members.len() != a.vp_distribution.len() {
                return Err(decode_error(format!(
                    "alliance {} has {} members but {} VP values",
                    a.name,
                    a.members.len(),
                    a.vp_distribution.len()
                )));
            }
        }
        // The service records moves before a round starts; keep only those in the order.
        let submitted_moves: BTreeSet<String> = dto
            .submitted_moves
            .into_iter()
            .filter(|p| dto.turn_order.contains(p))
            .collect();
        Ok(GameSession {
            round_started: dto.round_started,
            turn_order: dto.turn_order,
            submitted_moves,
            alliances: dto.alliances.into_iter().map(Alliance::from).collect(),
            kill_history: kill_events(dto.kill_history)?,
            battlefield: monsters(dto.battlefield)?,
            reserve: monsters(dto.reserve)?,
            winning_alliance: None,
        })
    }
}

impl TryFrom<ResolveRoundDto> for RoundOutcome {
    type Error = AppError;

    fn try_from(dto: ResolveRoundDto) -> Result<Self, Self::Error> {
        Ok(RoundOutcome {
            kill_announcements: kill_events(dto.kill_announcements)?,
        })
    }
}

impl From<GameOverDto> for GameOverStatus {
    fn from(dto: GameOverDto) -> Self {
        GameOverStatus {
            over: dto.over,
            winning_alliance: dto.winning_alliance,
            average_vp: dto.avg_vp,
        }
    }
}

impl From<WeaponDto> for Weapon {
    fn from(WeaponDto(name, attack): WeaponDto) -> Self {
        Weapon { name, attack }
    }
}
