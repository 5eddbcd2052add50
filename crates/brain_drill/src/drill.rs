//! Scripted drill: two sides, one player per role, a bouncing ball.
//!
//! 매 틱 모든 컨트롤러를 한 번씩 업데이트하고, 결정된 이동 벡터로 선수를 옮긴다.

use std::collections::BTreeMap;

use of_brain::brain::{BrainDecision, BrainObserver, BrainTrainer, FeedForwardNet, ResetReason, TracingObserver, TrainingTrace};
use of_brain::config::{BrainConfig, FieldConfig};
use of_brain::{Action, BallState, BrainError, Player, Position, Role, SquadBrains, Team, TeamContext};
use serde::Serialize;
use tracing::info;

/// 틱당 선수 최대 이동량 (필드 단위)
const PLAYER_SPEED: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct DrillOptions {
    pub ticks: u32,
    /// 0이면 득점 틱 없음
    pub score_every: u32,
}

/// 리셋 카운트 + tracing 전달
#[derive(Debug, Default)]
pub struct DrillObserver {
    tracing: TracingObserver,
    pub resets: u32,
    pub introspection_failures: u32,
}

impl BrainObserver for DrillObserver {
    fn on_reset(&mut self, player: &Player, reason: ResetReason, cause: &BrainError) {
        self.resets += 1;
        self.tracing.on_reset(player, reason, cause);
    }

    fn on_trained(&mut self, player: &Player, trace: &TrainingTrace<'_>) {
        self.tracing.on_trained(player, trace);
    }

    fn on_introspection_error(&mut self, player: &Player, err: &BrainError) {
        self.introspection_failures += 1;
        self.tracing.on_introspection_error(player, err);
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionCounts {
    pub shoot: u32,
    pub pass: u32,
    pub intercept: u32,
    #[serde(rename = "move")]
    pub movement: u32,
}

impl ActionCounts {
    fn record(&mut self, action: Action) {
        match action {
            Action::Shoot => self.shoot += 1,
            Action::Pass => self.pass += 1,
            Action::Intercept => self.intercept += 1,
            Action::Move => self.movement += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub id: u32,
    pub team: Team,
    pub role: Role,
    pub actions: ActionCounts,
    pub final_position: Position,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrillSummary {
    pub ticks: u32,
    pub scoring_ticks: u32,
    pub resets: u32,
    pub introspection_failures: u32,
    pub players: Vec<PlayerSummary>,
}

fn lineup(field: &FieldConfig) -> Vec<Player> {
    let mid_y = field.height / 2.0;
    let mirror = |x: f32| field.width - x;
    let slots = [(Role::Goalkeeper, 30.0), (Role::Defender, 200.0), (Role::Midfielder, 330.0), (Role::Forward, 380.0)];

    let mut players = Vec::with_capacity(8);
    for (i, (role, x)) in slots.iter().enumerate() {
        players.push(Player::new(i as u32 + 1, Team::Red, *role, Position::new(*x, mid_y)));
        players.push(Player::new(i as u32 + 5, Team::Blue, *role, Position::new(mirror(*x), mid_y)));
    }
    players.sort_by_key(|p| p.id);
    players
}

fn advance_ball(ball: &mut BallState, field: &FieldConfig) {
    let mut next = Position::new(ball.position.x + ball.velocity.x, ball.position.y + ball.velocity.y);
    if next.x < 0.0 || next.x > field.width {
        ball.velocity.x = -ball.velocity.x;
        next.x = next.x.clamp(0.0, field.width);
    }
    if next.y < 0.0 || next.y > field.height {
        ball.velocity.y = -ball.velocity.y;
        next.y = next.y.clamp(0.0, field.height);
    }
    ball.position = next;
}

/// 공이 있는 진영을 공격 중인 팀
fn attacking_team(ball: &BallState, field: &FieldConfig) -> Team {
    if ball.position.x > field.width / 2.0 {
        Team::Red
    } else {
        Team::Blue
    }
}

fn context_for(player: &Player, players: &[Player], field: &FieldConfig) -> TeamContext {
    let (mates, opponents): (Vec<&Player>, Vec<&Player>) =
        players.iter().filter(|p| p.id != player.id).partition(|p| p.team == player.team);
    TeamContext::for_team(player.team, field)
        .with_teammates(mates.iter().map(|p| p.position).collect())
        .with_opponents(opponents.iter().map(|p| p.position).collect())
}

fn apply_movement(player: &mut Player, decision: &BrainDecision, field: &FieldConfig) {
    let step = decision.movement;
    player.position.x = (player.position.x + step.x.clamp(-1.0, 1.0) * PLAYER_SPEED).clamp(0.0, field.width);
    player.position.y = (player.position.y + step.y.clamp(-1.0, 1.0) * PLAYER_SPEED).clamp(0.0, field.height);
}

pub fn run_drill(config: BrainConfig, options: &DrillOptions) -> DrillSummary {
    let field = config.field.clone();
    let mut trainer = BrainTrainer::with_observer(config, DrillObserver::default());
    let mut squad: SquadBrains<FeedForwardNet> = SquadBrains::new();

    let mut players = lineup(&field);
    let mut ball = BallState::new(Position::new(field.width / 2.0, field.height / 2.0), Position::new(7.0, 4.5));
    let mut counts: BTreeMap<u32, ActionCounts> = BTreeMap::new();
    let mut scoring_ticks = 0;

    for tick in 0..options.ticks {
        advance_ball(&mut ball, &field);

        let scoring_team = if options.score_every > 0 && (tick + 1) % options.score_every == 0 {
            scoring_ticks += 1;
            Some(attacking_team(&ball, &field))
        } else {
            None
        };

        let snapshot = players.clone();
        let decisions = squad.tick(&mut trainer, scoring_team, &ball, &snapshot, |p| context_for(p, &snapshot, &field));

        for (id, decision) in decisions {
            counts.entry(id).or_default().record(decision.action);
            if let Some(player) = players.iter_mut().find(|p| p.id == id) {
                apply_movement(player, &decision, &field);
            }
        }
    }

    let observer = trainer.into_observer();
    info!(ticks = options.ticks, scoring_ticks, resets = observer.resets, "drill finished");
    DrillSummary {
        ticks: options.ticks,
        scoring_ticks,
        resets: observer.resets,
        introspection_failures: observer.introspection_failures,
        players: players
            .into_iter()
            .map(|p| PlayerSummary {
                id: p.id,
                team: p.team,
                role: p.role,
                actions: counts.remove(&p.id).unwrap_or_default(),
                final_position: p.position,
            })
            .collect(),
    }
}
